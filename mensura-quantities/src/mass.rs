//! Mass units
//!
//! Native unit: the kilogram. Gram-based units come from the SI-prefix
//! helper, so the `kg` the helper would generate is skipped in favor of the
//! native unit.

use mensura_core::{QuantityKindDef, UnitOfMeasure, UnitRegistry};

/// Kind name for mass quantities
pub const NAME: &str = "mass";

/// The mass kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

fn build(registry: &UnitRegistry) {
    // Kilogram
    let kilogram = UnitOfMeasure::native("kg")
        .with_alias("kilogram")
        .with_alias("kilograms");
    registry.add_unit(kilogram.clone()).expect("mass unit table");

    registry.add_si_prefixed_units(&kilogram, 1e-3, "%pg", &["%Pgram", "%Pgrams"]);

    // Tonne (metric)
    registry
        .add_unit(
            UnitOfMeasure::linear("t", 1e3)
                .with_alias("ton")
                .with_alias("tons")
                .with_alias("tonne")
                .with_alias("tonnes"),
        )
        .expect("mass unit table");

    // Pound
    registry
        .add_unit(
            UnitOfMeasure::linear("lb", 4.535924e-1)
                .with_alias("lbs")
                .with_alias("pound")
                .with_alias("pounds"),
        )
        .expect("mass unit table");

    // Ounce
    registry
        .add_unit(
            UnitOfMeasure::linear("oz", 2.834952e-2)
                .with_alias("ounce")
                .with_alias("ounces"),
        )
        .expect("mass unit table");
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use mensura_core::{KindId, UnitRegistry};

    fn registry() -> UnitRegistry {
        let registry = UnitRegistry::new(KindId::new(NAME));
        build(&registry);
        registry
    }

    #[test]
    fn test_native_is_kilogram() {
        assert_eq!(registry().native_unit().unwrap().name(), "kg");
    }

    #[test]
    fn test_prefixed_grams() {
        let registry = registry();
        assert_float_eq!(registry.resolve("g").unwrap().to_native(1.0), 1e-3, rmax <= 1e-15);
        assert_float_eq!(registry.resolve("mg").unwrap().to_native(1.0), 1e-6, rmax <= 1e-15);
        assert_float_eq!(registry.resolve("µg").unwrap().to_native(1.0), 1e-9, rmax <= 1e-15);
        assert_eq!(registry.resolve("milligrams").unwrap().name(), "mg");
        // The generated kg was skipped; the native one answers.
        assert_eq!(registry.resolve("kg").unwrap().to_native(2.0), 2.0);
    }

    #[test]
    fn test_imperial_factors() {
        let registry = registry();
        assert_float_eq!(registry.resolve("lbs").unwrap().to_native(1.0), 4.535924e-1, ulps <= 2);
        assert_float_eq!(registry.resolve("ounce").unwrap().to_native(1.0), 2.834952e-2, ulps <= 2);
        assert_float_eq!(registry.resolve("tonnes").unwrap().to_native(1.0), 1e3, ulps <= 2);
    }
}
