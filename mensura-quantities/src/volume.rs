//! Volume units
//!
//! Native unit: the cubic meter. Cubed lengths and liter-based units with
//! their spelled-out aliases.

use mensura_core::{QuantityKindDef, UnitOfMeasure, UnitRegistry};

/// Kind name for volume quantities
pub const NAME: &str = "volume";

/// The volume kind definition
pub fn definition() -> QuantityKindDef {
    QuantityKindDef::new(NAME, build)
}

fn build(registry: &UnitRegistry) {
    // Cubic meter
    registry
        .add_unit(
            UnitOfMeasure::native("m^3")
                .with_alias("m³")
                .with_alias("cubic meter")
                .with_alias("cubic meters")
                .with_alias("cubic metre")
                .with_alias("cubic metres"),
        )
        .expect("volume unit table");

    // Cubic millimeter
    registry
        .add_unit(
            UnitOfMeasure::linear("mm^3", 1e-9)
                .with_alias("mm³")
                .with_alias("cubic millimeter")
                .with_alias("cubic millimeters")
                .with_alias("cubic millimetre")
                .with_alias("cubic millimetres"),
        )
        .expect("volume unit table");

    // Cubic centimeter
    registry
        .add_unit(
            UnitOfMeasure::linear("cm^3", 1e-6)
                .with_alias("cm³")
                .with_alias("cubic centimeter")
                .with_alias("cubic centimeters")
                .with_alias("cubic centimetre")
                .with_alias("cubic centimetres"),
        )
        .expect("volume unit table");

    // Cubic decimeter
    registry
        .add_unit(
            UnitOfMeasure::linear("dm^3", 1e-3)
                .with_alias("dm³")
                .with_alias("cubic decimeter")
                .with_alias("cubic decimeters")
                .with_alias("cubic decimetre")
                .with_alias("cubic decimetres"),
        )
        .expect("volume unit table");

    // Cubic kilometer
    registry
        .add_unit(
            UnitOfMeasure::linear("km^3", 1e9)
                .with_alias("km³")
                .with_alias("cubic kilometer")
                .with_alias("cubic kilometers")
                .with_alias("cubic kilometre")
                .with_alias("cubic kilometres"),
        )
        .expect("volume unit table");

    // Cubic foot
    registry
        .add_unit(
            UnitOfMeasure::linear("ft^3", 2.831685e-2)
                .with_alias("ft³")
                .with_alias("cubic foot")
                .with_alias("cubic feet"),
        )
        .expect("volume unit table");

    // Cubic inch
    registry
        .add_unit(
            UnitOfMeasure::linear("in^3", 1.638706e-5)
                .with_alias("in³")
                .with_alias("cubic inch")
                .with_alias("cubic inches"),
        )
        .expect("volume unit table");

    // Cubic yard
    registry
        .add_unit(
            UnitOfMeasure::linear("yd^3", 7.645549e-1)
                .with_alias("yd³")
                .with_alias("cubic yard")
                .with_alias("cubic yards"),
        )
        .expect("volume unit table");

    // Milliliter
    registry
        .add_unit(
            UnitOfMeasure::linear("ml", 1e-6)
                .with_alias("milliliter")
                .with_alias("milliliters")
                .with_alias("millilitre")
                .with_alias("millilitres"),
        )
        .expect("volume unit table");

    // Centiliter
    registry
        .add_unit(
            UnitOfMeasure::linear("cl", 1e-5)
                .with_alias("centiliter")
                .with_alias("centiliters")
                .with_alias("centilitre")
                .with_alias("centilitres"),
        )
        .expect("volume unit table");

    // Deciliter
    registry
        .add_unit(
            UnitOfMeasure::linear("dl", 1e-4)
                .with_alias("deciliter")
                .with_alias("deciliters")
                .with_alias("decilitre")
                .with_alias("decilitres"),
        )
        .expect("volume unit table");

    // Liter
    registry
        .add_unit(
            UnitOfMeasure::linear("l", 1e-3)
                .with_alias("liter")
                .with_alias("liters")
                .with_alias("litre")
                .with_alias("litres"),
        )
        .expect("volume unit table");

    // Decaliter
    registry
        .add_unit(
            UnitOfMeasure::linear("dal", 1e-2)
                .with_alias("decaliter")
                .with_alias("decaliters")
                .with_alias("decalitre")
                .with_alias("decalitres"),
        )
        .expect("volume unit table");

    // Hectoliter
    registry
        .add_unit(
            UnitOfMeasure::linear("hl", 1e-1)
                .with_alias("hectoliter")
                .with_alias("hectoliters")
                .with_alias("hectolitre")
                .with_alias("hectolitres"),
        )
        .expect("volume unit table");

    // Cup
    registry
        .add_unit(UnitOfMeasure::linear("cup", 2.365882e-4).with_alias("cups"))
        .expect("volume unit table");
}
