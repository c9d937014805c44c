//! Acceleration units
//!
//! Native unit: meters per second squared. Acceleration is a derived kind:
//! signatures of length / (time * time) resolve to it, so velocity divided
//! by time lands here after flattening.

use mensura_core::{DerivedKindDef, KindId, QuantityKindDef, UnitOfMeasure, UnitRegistry};

use crate::{length, time};

/// Kind name for acceleration quantities
pub const NAME: &str = "acceleration";

/// The acceleration kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

/// The signature that resolves to acceleration: length / (time * time)
pub fn derived() -> DerivedKindDef {
    DerivedKindDef::new(
        NAME,
        vec![KindId::new(length::NAME)],
        vec![KindId::new(time::NAME), KindId::new(time::NAME)],
    )
}

fn build(registry: &UnitRegistry) {
    // Meter per second squared
    registry
        .add_unit(
            UnitOfMeasure::native("m/s^2")
                .with_alias("m/s²")
                .with_alias("meters per second squared"),
        )
        .expect("acceleration unit table");

    // Standard gravity
    registry
        .add_unit(
            UnitOfMeasure::linear("g", 9.80665)
                .with_alias("standard gravity"),
        )
        .expect("acceleration unit table");

    // Foot per second squared
    registry
        .add_unit(
            UnitOfMeasure::linear("ft/s^2", 3.048e-1)
                .with_alias("ft/s²")
                .with_alias("feet per second squared"),
        )
        .expect("acceleration unit table");
}
