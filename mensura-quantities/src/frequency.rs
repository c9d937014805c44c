//! Frequency units
//!
//! Native unit: the hertz. Frequency is a derived kind with an
//! empty-numerator signature: 1 / time.

use mensura_core::{DerivedKindDef, KindId, QuantityKindDef, UnitOfMeasure, UnitRegistry};

use crate::time;

/// Kind name for frequency quantities
pub const NAME: &str = "frequency";

/// The frequency kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

/// The signature that resolves to frequency: 1 / time
pub fn derived() -> DerivedKindDef {
    DerivedKindDef::new(NAME, vec![], vec![KindId::new(time::NAME)])
}

fn build(registry: &UnitRegistry) {
    // Hertz
    let hertz = UnitOfMeasure::native("Hz").with_alias("hertz");
    registry.add_unit(hertz.clone()).expect("frequency unit table");

    registry.add_si_prefixed_units(&hertz, 1.0, "%pHz", &["%Phertz"]);

    // Revolution per minute
    registry
        .add_unit(
            UnitOfMeasure::linear("rpm", 1.0 / 60.0)
                .with_alias("revolutions per minute"),
        )
        .expect("frequency unit table");
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
    fn test_prefixed_hertz() {
        let registry = registry();
        assert_float_eq!(registry.resolve("kHz").unwrap().to_native(1.0), 1e3, ulps <= 2);
        assert_float_eq!(registry.resolve("MHz").unwrap().to_native(1.0), 1e6, ulps <= 2);
        assert_eq!(registry.resolve("gigahertz").unwrap().name(), "GHz");
    }

    #[test]
    fn test_rpm() {
        let rpm = registry().resolve("rpm").unwrap();
        assert_float_eq!(rpm.to_native(60.0), 1.0, rmax <= 1e-12);
    }

    #[test]
    fn test_signature_is_inverse_time() {
        let def = derived();
        assert!(def.signature().numerator().is_empty());
        assert_eq!(def.signature().denominator(), &[KindId::new(time::NAME)]);
    }
}
