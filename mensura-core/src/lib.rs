//! Mensura Core - Physical Quantities and Unit Conversion
//!
//! Represents measured values tagged with a unit of measure, converts
//! between units, and supports arithmetic that respects physical
//! dimensions.
//!
//! Building blocks:
//! - `UnitOfMeasure`: one named unit with a bidirectional conversion to its
//!   kind's native unit, plus string aliases
//! - `UnitRegistry`: the unit table of one quantity kind, with
//!   collision-checked registration and exact name/alias resolution
//! - `PhysicalQuantity`: an immutable magnitude paired with its unit;
//!   conversion, rendering, and arithmetic
//! - `FactorSignature` / `DerivedKindDef`: the factor algebra that resolves
//!   products and quotients to known derived kinds, with a generic fallback
//! - `UnitSystem`: the context owning registries and derived-kind
//!   definitions, with lazy per-kind initialization
//!
//! Quantity-kind tables are configuration, not engine: they are supplied by
//! definition crates (see `mensura-quantities`) as `QuantityKindDef`s and
//! built lazily on first use.

mod derived;
mod error;
mod kind;
mod quantity;
mod registry;
mod system;
mod unit;

pub use derived::{DerivedKindDef, FactorSignature, SignatureKey};
pub use error::QuantityError;
pub use kind::KindId;
pub use quantity::PhysicalQuantity;
pub use registry::UnitRegistry;
pub use system::{QuantityKindDef, UnitSystem};
pub use unit::{Conversion, ConversionFn, UnitOfMeasure};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        DerivedKindDef, FactorSignature, KindId, PhysicalQuantity, QuantityError, QuantityKindDef,
        UnitOfMeasure, UnitSystem,
    };
}
