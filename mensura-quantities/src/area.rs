//! Area units
//!
//! Native unit: the square meter. Area is a derived kind: products whose
//! cancelled signature is length * length resolve to it.

use mensura_core::{DerivedKindDef, KindId, QuantityKindDef, UnitOfMeasure, UnitRegistry};

use crate::length;

/// Kind name for area quantities
pub const NAME: &str = "area";

/// The area kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

/// The signature that resolves to area: length * length
pub fn derived() -> DerivedKindDef {
    DerivedKindDef::new(NAME, vec![KindId::new(length::NAME), KindId::new(length::NAME)], vec![])
}

fn build(registry: &UnitRegistry) {
    // Square meter
    registry
        .add_unit(
            UnitOfMeasure::native("m^2")
                .with_alias("m²")
                .with_alias("square meter")
                .with_alias("square meters"),
        )
        .expect("area unit table");

    // Square kilometer
    registry
        .add_unit(
            UnitOfMeasure::linear("km^2", 1e6)
                .with_alias("km²")
                .with_alias("square kilometer")
                .with_alias("square kilometers"),
        )
        .expect("area unit table");

    // Square centimeter
    registry
        .add_unit(
            UnitOfMeasure::linear("cm^2", 1e-4)
                .with_alias("cm²")
                .with_alias("square centimeter")
                .with_alias("square centimeters"),
        )
        .expect("area unit table");

    // Square foot
    registry
        .add_unit(
            UnitOfMeasure::linear("ft^2", 9.290304e-2)
                .with_alias("ft²")
                .with_alias("square foot")
                .with_alias("square feet"),
        )
        .expect("area unit table");

    // Hectare
    registry
        .add_unit(
            UnitOfMeasure::linear("ha", 1e4)
                .with_alias("hectare")
                .with_alias("hectares"),
        )
        .expect("area unit table");

    // Acre
    registry
        .add_unit(
            UnitOfMeasure::linear("ac", 4.0468564224e3)
                .with_alias("acre")
                .with_alias("acres"),
        )
        .expect("area unit table");
}
