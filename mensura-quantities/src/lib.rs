//! Mensura Quantities - Standard Quantity-Kind Definitions
//!
//! The static configuration consumed by the `mensura-core` engine: unit
//! tables for the common quantity kinds and the signatures of the common
//! derived kinds, plus a preloaded process-wide default system.
//!
//! Kinds:
//! - Mass (kg, g, mg, t, lb, oz, ...)
//! - Length (m, km, cm, ft, in, mi, ...)
//! - Time (s, ms, min, h, d, ...)
//! - Volume (m^3, l, ml, ft^3, cup, ...)
//! - Temperature (K, °C, °F, °R)
//! - Area (m^2, km^2, ft^2, acre, ...) = length * length
//! - Velocity (m/s, km/h, mph, ...) = length / time
//! - Acceleration (m/s^2, g, ...) = length / time^2
//! - Frequency (Hz, kHz, rpm, ...) = 1 / time
//!
//! Tables are built lazily on first use of each kind.

pub mod acceleration;
pub mod area;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

use std::sync::LazyLock;

pub use mensura_core::{
    DerivedKindDef, FactorSignature, KindId, PhysicalQuantity, QuantityError, QuantityKindDef,
    UnitOfMeasure, UnitSystem,
};

/// The process-wide default unit system, preloaded with the standard kinds
/// and derived signatures
static SYSTEM: LazyLock<UnitSystem> = LazyLock::new(build_default_system);

/// The default unit system
pub fn system() -> &'static UnitSystem {
    &SYSTEM
}

fn build_default_system() -> UnitSystem {
    let system = UnitSystem::new();
    system.register_kind(mass::definition());
    system.register_kind(length::definition());
    system.register_kind(time::definition());
    system.register_kind(volume::definition());
    system.register_kind(temperature::definition());
    system.register_kind(area::definition());
    system.register_kind(velocity::definition());
    system.register_kind(acceleration::definition());
    system.register_kind(frequency::definition());

    for def in [
        area::derived(),
        velocity::derived(),
        acceleration::derived(),
        frequency::derived(),
    ] {
        system
            .register_derived(def)
            .expect("default derived kinds reference registered kinds");
    }
    system
}

/// A mass quantity in the default system
pub fn mass(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(mass::NAME, magnitude, unit)
}

/// A length quantity in the default system
pub fn length(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(length::NAME, magnitude, unit)
}

/// A time quantity in the default system
pub fn time(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(time::NAME, magnitude, unit)
}

/// A volume quantity in the default system
pub fn volume(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(volume::NAME, magnitude, unit)
}

/// A temperature quantity in the default system
pub fn temperature(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(temperature::NAME, magnitude, unit)
}

/// An area quantity in the default system
pub fn area(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(area::NAME, magnitude, unit)
}

/// A velocity quantity in the default system
pub fn velocity(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(velocity::NAME, magnitude, unit)
}

/// An acceleration quantity in the default system
pub fn acceleration(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(acceleration::NAME, magnitude, unit)
}

/// A frequency quantity in the default system
pub fn frequency(magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
    system().quantity(frequency::NAME, magnitude, unit)
}

/// A dimensionless coefficient in the default system
pub fn coefficient(value: f64) -> PhysicalQuantity {
    system().coefficient(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_construction_and_conversion() {
        let weight = mass(2.0, "t").unwrap();
        assert_float_eq!(weight.to_native_unit(), 2000.0, ulps <= 2);
        assert_float_eq!(weight.to_unit("kg").unwrap(), 2000.0, ulps <= 2);
        assert_float_eq!(weight.to_unit("lbs").unwrap(), 2000.0 / 4.535924e-1, rmax <= 1e-12);
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert_eq!(
            mass(1.0, "parsec"),
            Err(QuantityError::UnknownUnitOfMeasure("parsec".to_string()))
        );
    }

    #[test]
    fn test_alias_and_rendering() {
        let q = volume(2.0, "litres").unwrap();
        assert_eq!(q.to_string(), "2 l");
        assert_float_eq!(q.to_unit("ml").unwrap(), 2000.0, rmax <= 1e-12);
    }

    #[test]
    fn test_cross_kind_arithmetic_is_rejected() {
        let w = mass(1.0, "kg").unwrap();
        let d = length(1.0, "m").unwrap();
        assert!(matches!(
            w.add(&d),
            Err(QuantityError::PhysicalQuantityMismatch { .. })
        ));
    }

    #[test]
    fn test_addition_follows_left_operand() {
        let sum = mass(1.0, "t").unwrap().add(&mass(500.0, "kg").unwrap()).unwrap();
        assert_eq!(sum.to_string(), "1.5 t");
    }

    #[test]
    fn test_length_times_length_is_area() {
        let product = length(2.0, "m").unwrap().multiply_by(&length(3.0, "m").unwrap());
        assert_eq!(product.kind(), &KindId::new(area::NAME));
        assert_eq!(product.to_string(), "6 m^2");
        assert_float_eq!(product.to_unit("cm^2").unwrap(), 6e4, rmax <= 1e-12);
    }

    #[test]
    fn test_area_conversion_of_mixed_units() {
        // 1 km * 1 km expressed through different construction units.
        let product = length(1.0, "km").unwrap().multiply_by(&length(1e5, "cm").unwrap());
        assert_eq!(product.kind(), &KindId::new(area::NAME));
        assert_float_eq!(product.to_unit("km^2").unwrap(), 1.0, rmax <= 1e-12);
    }

    #[test]
    fn test_length_over_time_is_velocity() {
        let quotient = length(100.0, "m").unwrap().divide_by(&time(10.0, "s").unwrap());
        assert_eq!(quotient.kind(), &KindId::new(velocity::NAME));
        assert_eq!(quotient.to_string(), "10 m/s");
        assert_float_eq!(quotient.to_unit("km/h").unwrap(), 36.0, rmax <= 1e-12);
    }

    #[test]
    fn test_velocity_over_time_is_acceleration() {
        let v = velocity(27.0, "m/s").unwrap();
        let a = v.divide_by(&time(3.0, "s").unwrap());
        assert_eq!(a.kind(), &KindId::new(acceleration::NAME));
        assert_eq!(a.to_string(), "9 m/s^2");
    }

    #[test]
    fn test_inverse_time_is_frequency() {
        let f = coefficient(1.0).divide_by(&time(0.5, "s").unwrap());
        assert_eq!(f.kind(), &KindId::new(frequency::NAME));
        assert_eq!(f.to_string(), "2 Hz");
    }

    #[test]
    fn test_velocity_times_time_is_length() {
        let d = velocity(15.0, "m/s").unwrap().multiply_by(&time(4.0, "s").unwrap());
        assert_eq!(d.kind(), &KindId::new(length::NAME));
        assert_eq!(d.to_string(), "60 m");
    }

    #[test]
    fn test_area_over_length_is_length() {
        let a = area(12.0, "m^2").unwrap();
        let l = a.divide_by(&length(4.0, "m").unwrap());
        assert_eq!(l.kind(), &KindId::new(length::NAME));
        assert_eq!(l.to_string(), "3 m");
    }

    #[test]
    fn test_unmatched_signature_is_generic() {
        let odd = mass(2.0, "kg").unwrap().multiply_by(&time(3.0, "s").unwrap());
        assert_eq!(odd.to_string(), "6 kg*s");
        let factors = odd.factors().unwrap();
        assert_eq!(factors.numerator().len(), 2);

        // The generic result keeps multiplying.
        let per_volume = odd.divide_by(&volume(2.0, "m^3").unwrap());
        assert_eq!(per_volume.to_string(), "3 kg*s/m^3");
    }

    #[test]
    fn test_mass_ratio_is_dimensionless() {
        let ratio = mass(1.0, "t").unwrap().divide_by(&mass(500.0, "kg").unwrap());
        assert!(ratio.kind().is_coefficient());
        assert_eq!(ratio.to_string(), "2");
    }

    #[test]
    fn test_temperature_to_unit() {
        let boiling = temperature(100.0, "C").unwrap();
        assert_float_eq!(boiling.to_native_unit(), 373.15, abs <= 1e-9);
        assert_float_eq!(boiling.to_unit("°F").unwrap(), 212.0, abs <= 1e-9);
        assert_eq!(boiling.to_string(), "100 °C");
    }

    #[test]
    fn test_round_trip_every_registered_unit() {
        for kind in [
            mass::NAME,
            length::NAME,
            time::NAME,
            volume::NAME,
            temperature::NAME,
            area::NAME,
            velocity::NAME,
            acceleration::NAME,
            frequency::NAME,
        ] {
            let registry = system().registry(kind).unwrap();
            for unit in registry.units() {
                for x in [0.0, 1.0, -1.0, 12345.6789, 1e-6] {
                    assert_float_eq!(
                        unit.from_native(unit.to_native(x)),
                        x,
                        abs <= 1e-9,
                        rmax <= 1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn test_conversion_to_original_unit_is_exact() {
        let q = mass(0.5, "oz").unwrap();
        assert_eq!(q.to_unit("oz").unwrap(), 0.5);
    }

    #[test]
    fn test_default_system_is_shared() {
        let a = mass(1.0, "kg").unwrap();
        let b = mass(1000.0, "g").unwrap();
        assert_eq!(a, b);
    }
}
