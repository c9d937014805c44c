//! Length units
//!
//! Native unit: the meter. The native unit carries its spelled-out aliases
//! itself, since the prefix helper skips the colliding unprefixed `m`.

use mensura_core::{QuantityKindDef, UnitOfMeasure, UnitRegistry};

/// Kind name for length quantities
pub const NAME: &str = "length";

/// The length kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

fn build(registry: &UnitRegistry) {
    // Meter
    let meter = UnitOfMeasure::native("m")
        .with_alias("meter")
        .with_alias("meters")
        .with_alias("metre")
        .with_alias("metres");
    registry.add_unit(meter.clone()).expect("length unit table");

    registry.add_si_prefixed_units(&meter, 1.0, "%pm", &["%Pmeter", "%Pmeters", "%Pmetre", "%Pmetres"]);

    // Foot
    registry
        .add_unit(
            UnitOfMeasure::linear("ft", 3.048e-1)
                .with_alias("foot")
                .with_alias("feet"),
        )
        .expect("length unit table");

    // Inch
    registry
        .add_unit(
            UnitOfMeasure::linear("in", 2.54e-2)
                .with_alias("inch")
                .with_alias("inches"),
        )
        .expect("length unit table");

    // Yard
    registry
        .add_unit(
            UnitOfMeasure::linear("yd", 9.144e-1)
                .with_alias("yard")
                .with_alias("yards"),
        )
        .expect("length unit table");

    // Mile
    registry
        .add_unit(
            UnitOfMeasure::linear("mi", 1.609344e3)
                .with_alias("mile")
                .with_alias("miles"),
        )
        .expect("length unit table");

    // Nautical mile
    registry
        .add_unit(UnitOfMeasure::linear("nmi", 1.852e3).with_alias("nautical mile"))
        .expect("length unit table");
}
