//! Temperature units
//!
//! Native unit: the kelvin. Celsius and Fahrenheit are not scalar multiples
//! of kelvin, so they use the functional conversion pair; Rankine is a pure
//! rescaling and stays linear.

use mensura_core::{QuantityKindDef, UnitOfMeasure, UnitRegistry};

/// Kind name for temperature quantities
pub const NAME: &str = "temperature";

/// The temperature kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

fn build(registry: &UnitRegistry) {
    // Kelvin
    registry
        .add_unit(
            UnitOfMeasure::native("K")
                .with_alias("kelvin"),
        )
        .expect("temperature unit table");

    // Celsius
    registry
        .add_unit(
            UnitOfMeasure::functional("°C", |c| c + 273.15, |k| k - 273.15)
                .with_alias("C")
                .with_alias("celsius"),
        )
        .expect("temperature unit table");

    // Fahrenheit
    registry
        .add_unit(
            UnitOfMeasure::functional(
                "°F",
                |f| (f + 459.67) * 5.0 / 9.0,
                |k| k * 9.0 / 5.0 - 459.67,
            )
            .with_alias("F")
            .with_alias("fahrenheit"),
        )
        .expect("temperature unit table");

    // Rankine
    registry
        .add_unit(
            UnitOfMeasure::linear("°R", 5.0 / 9.0)
                .with_alias("R")
                .with_alias("rankine"),
        )
        .expect("temperature unit table");
}
