//! Velocity units
//!
//! Native unit: meters per second. Velocity is a derived kind: quotients
//! whose cancelled signature is length / time resolve to it.

use mensura_core::{DerivedKindDef, KindId, QuantityKindDef, UnitOfMeasure, UnitRegistry};

use crate::{length, time};

/// Kind name for velocity quantities
pub const NAME: &str = "velocity";

/// The velocity kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

/// The signature that resolves to velocity: length / time
pub fn derived() -> DerivedKindDef {
    DerivedKindDef::new(
        NAME,
        vec![KindId::new(length::NAME)],
        vec![KindId::new(time::NAME)],
    )
}

fn build(registry: &UnitRegistry) {
    // Meter per second
    registry
        .add_unit(
            UnitOfMeasure::native("m/s")
                .with_alias("meter per second")
                .with_alias("meters per second"),
        )
        .expect("velocity unit table");

    // Kilometer per hour
    registry
        .add_unit(
            UnitOfMeasure::linear("km/h", 1e3 / 3.6e3)
                .with_alias("kph")
                .with_alias("kilometers per hour"),
        )
        .expect("velocity unit table");

    // Mile per hour
    registry
        .add_unit(
            UnitOfMeasure::linear("mph", 4.4704e-1)
                .with_alias("miles per hour"),
        )
        .expect("velocity unit table");

    // Foot per second
    registry
        .add_unit(
            UnitOfMeasure::linear("ft/s", 3.048e-1)
                .with_alias("feet per second"),
        )
        .expect("velocity unit table");

    // Knot
    registry
        .add_unit(
            UnitOfMeasure::linear("kn", 1.852e3 / 3.6e3)
                .with_alias("knot")
                .with_alias("knots"),
        )
        .expect("velocity unit table");
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use mensura_core::UnitRegistry;

    fn registry() -> UnitRegistry {
        let registry = UnitRegistry::new(KindId::new(NAME));
        build(&registry);
        registry
    }

    #[test]
    fn test_kph_roundtrip() {
        let kph = registry().resolve("kph").unwrap();
        assert_float_eq!(kph.to_native(3.6), 1.0, rmax <= 1e-12);
        assert_float_eq!(kph.from_native(1.0), 3.6, rmax <= 1e-12);
    }

    #[test]
    fn test_mph_against_mile_and_hour() {
        let mph = registry().resolve("miles per hour").unwrap();
        assert_float_eq!(mph.to_native(1.0), 1.609344e3 / 3.6e3, rmax <= 1e-12);
    }

    #[test]
    fn test_signature_is_length_over_time() {
        let def = derived();
        assert_eq!(def.signature().numerator(), &[KindId::new(length::NAME)]);
        assert_eq!(def.signature().denominator(), &[KindId::new(time::NAME)]);
    }
}
