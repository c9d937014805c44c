//! Error types for registry administration, conversion, and arithmetic

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::KindId;

/// Error type for quantity and registry operations
///
/// Every failure is synchronous and leaves no partial state behind:
/// registration is all-or-nothing, and a failed construction or conversion
/// produces no value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum QuantityError {
    /// The identifier matched no unit name or alias in the relevant registry
    #[error("unknown unit of measure '{0}'")]
    UnknownUnitOfMeasure(String),

    /// Add/subtract was attempted across two different quantity kinds
    #[error("quantity of kind '{left}' cannot be combined with kind '{right}'")]
    PhysicalQuantityMismatch {
        /// Kind of the left operand
        left: KindId,
        /// Kind of the right operand
        right: KindId,
    },

    /// Registering the unit would collide with an existing name or alias
    #[error("duplicate unit name or alias '{0}'")]
    DuplicateUnitNameOrAlias(String),

    /// No quantity kind with this name is registered in the system
    #[error("unknown quantity kind '{0}'")]
    UnknownQuantityKind(String),
}
