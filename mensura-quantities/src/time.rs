//! Time units
//!
//! Native unit: the second.

use mensura_core::{QuantityKindDef, UnitOfMeasure, UnitRegistry};

/// Kind name for time quantities
pub const NAME: &str = "time";

/// The time kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

fn build(registry: &UnitRegistry) {
    // Second
    let second = UnitOfMeasure::native("s")
        .with_alias("sec")
        .with_alias("second")
        .with_alias("seconds");
    registry.add_unit(second.clone()).expect("time unit table");

    registry.add_si_prefixed_units(&second, 1.0, "%ps", &["%Psecond", "%Pseconds"]);

    // Minute
    registry
        .add_unit(
            UnitOfMeasure::linear("min", 60.0)
                .with_alias("minute")
                .with_alias("minutes"),
        )
        .expect("time unit table");

    // Hour
    registry
        .add_unit(
            UnitOfMeasure::linear("h", 3600.0)
                .with_alias("hr")
                .with_alias("hour")
                .with_alias("hours"),
        )
        .expect("time unit table");

    // Day
    registry
        .add_unit(
            UnitOfMeasure::linear("d", 86400.0)
                .with_alias("day")
                .with_alias("days"),
        )
        .expect("time unit table");
}
