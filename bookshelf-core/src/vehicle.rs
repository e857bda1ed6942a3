//! Vehicle factory demo - closed variant set plus a region-parameterized
//! factory.
//!
//! The factory is configured by a spec label value rather than a subclass
//! per region; the label is suffixed onto the model name at construction
//! time.

use std::fmt;

/// The closed set of vehicle variants. `start_engine` is the single
/// capability; each variant has its own fixed engine-start phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vehicle {
    Car { make: String, model: String },
    Motorcycle { make: String, model: String },
}

impl Vehicle {
    /// The engine-start line for this vehicle. The caller decides where to
    /// emit it (log, stdout, a test buffer).
    pub fn start_engine(&self) -> String {
        match self {
            Vehicle::Car { make, model } => format!("{make} {model}: Vroom! Engine started"),
            Vehicle::Motorcycle { make, model } => {
                format!("{make} {model}: Braap! Motor running")
            }
        }
    }

    pub fn make(&self) -> &str {
        match self {
            Vehicle::Car { make, .. } | Vehicle::Motorcycle { make, .. } => make,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Vehicle::Car { model, .. } | Vehicle::Motorcycle { model, .. } => model,
        }
    }
}

/// Builds vehicles whose model names carry a regional spec label.
#[derive(Debug, Clone, Copy)]
pub struct VehicleFactory {
    spec_label: &'static str,
}

impl VehicleFactory {
    pub const US: VehicleFactory = VehicleFactory::new("US Spec");
    pub const EU: VehicleFactory = VehicleFactory::new("EU Spec");

    pub const fn new(spec_label: &'static str) -> Self {
        VehicleFactory { spec_label }
    }

    pub fn spec_label(&self) -> &'static str {
        self.spec_label
    }

    pub fn create_car(&self, make: impl Into<String>, model: impl fmt::Display) -> Vehicle {
        Vehicle::Car {
            make: make.into(),
            model: self.labeled(model),
        }
    }

    pub fn create_motorcycle(&self, make: impl Into<String>, model: impl fmt::Display) -> Vehicle {
        Vehicle::Motorcycle {
            make: make.into(),
            model: self.labeled(model),
        }
    }

    fn labeled(&self, model: impl fmt::Display) -> String {
        format!("{} ({})", model, self.spec_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factory_suffixes_model_with_spec_label() {
        let car = VehicleFactory::US.create_car("Ford", "Mustang");
        assert_eq!(car.model(), "Mustang (US Spec)");
        assert_eq!(car.make(), "Ford");

        let bike = VehicleFactory::EU.create_motorcycle("Harley-Davidson", "Sportster");
        assert_eq!(bike.model(), "Sportster (EU Spec)");
    }

    #[test]
    fn engine_start_phrase_is_variant_specific() {
        let car = VehicleFactory::US.create_car("Ford", "Mustang");
        assert_eq!(
            car.start_engine(),
            "Ford Mustang (US Spec): Vroom! Engine started"
        );

        let bike = VehicleFactory::EU.create_motorcycle("Harley-Davidson", "Sportster");
        assert_eq!(
            bike.start_engine(),
            "Harley-Davidson Sportster (EU Spec): Braap! Motor running"
        );
    }

    #[test]
    fn custom_spec_label() {
        let factory = VehicleFactory::new("JP Spec");
        let car = factory.create_car("Toyota", "Supra");
        assert_eq!(car.model(), "Supra (JP Spec)");
    }
}
