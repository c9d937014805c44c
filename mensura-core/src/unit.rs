//! Unit representation with bidirectional conversion to the native unit

use std::fmt;
use std::sync::Arc;

use crate::error::QuantityError;

/// Shared conversion function between a unit and its kind's native unit
pub type ConversionFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// How a unit converts to and from the native unit of its kind
#[derive(Clone)]
pub enum Conversion {
    /// Identity conversion; the native unit itself
    Native,
    /// `to_native(x) = x * factor`
    Linear {
        /// Scale factor relative to the native unit
        factor: f64,
    },
    /// Arbitrary functional pair, for units that are not pure scalar
    /// multiples of native (temperature-style offsets)
    Functional {
        /// Converts a value in this unit to the native unit
        to_native: ConversionFn,
        /// Converts a native-unit value back to this unit
        from_native: ConversionFn,
    },
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Native => write!(f, "Native"),
            Conversion::Linear { factor } => f.debug_struct("Linear").field("factor", factor).finish(),
            Conversion::Functional { .. } => write!(f, "Functional"),
        }
    }
}

impl PartialEq for Conversion {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Conversion::Native, Conversion::Native) => true,
            (Conversion::Linear { factor: a }, Conversion::Linear { factor: b }) => a == b,
            (
                Conversion::Functional { to_native: at, from_native: af },
                Conversion::Functional { to_native: bt, from_native: bf },
            ) => Arc::ptr_eq(at, bt) && Arc::ptr_eq(af, bf),
            _ => false,
        }
    }
}

/// One named unit of measure within a quantity kind
///
/// Carries a unique name, a set of string aliases, and the conversion pair
/// to the kind's native unit. Immutable once registered; `from_native`
/// inverts `to_native` for all finite values (within float tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOfMeasure {
    name: String,
    aliases: Vec<String>,
    conversion: Conversion,
}

impl UnitOfMeasure {
    /// The identity unit of a registry (conversion factor 1)
    pub fn native(name: &str) -> Self {
        UnitOfMeasure {
            name: name.to_string(),
            aliases: Vec::new(),
            conversion: Conversion::Native,
        }
    }

    /// A unit where `to_native(x) = x * factor`
    pub fn linear(name: &str, factor: f64) -> Self {
        UnitOfMeasure {
            name: name.to_string(),
            aliases: Vec::new(),
            conversion: Conversion::Linear { factor },
        }
    }

    /// A unit defined by an arbitrary conversion pair
    ///
    /// `from_native` must invert `to_native`.
    pub fn functional<T, F>(name: &str, to_native: T, from_native: F) -> Self
    where
        T: Fn(f64) -> f64 + Send + Sync + 'static,
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        UnitOfMeasure {
            name: name.to_string(),
            aliases: Vec::new(),
            conversion: Conversion::Functional {
                to_native: Arc::new(to_native),
                from_native: Arc::new(from_native),
            },
        }
    }

    /// Append an alias
    ///
    /// Fails if the alias repeats the unit's own name or an alias it already
    /// carries. Collisions with other units are checked at registration.
    pub fn add_alias(&mut self, alias: &str) -> Result<(), QuantityError> {
        if alias == self.name || self.aliases.iter().any(|a| a == alias) {
            return Err(QuantityError::DuplicateUnitNameOrAlias(alias.to_string()));
        }
        self.aliases.push(alias.to_string());
        Ok(())
    }

    /// Chainable alias for table-building
    ///
    /// Panics on a self-collision; unit tables are static configuration, so
    /// a collision there is a programming error caught at first use.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.add_alias(alias)
            .unwrap_or_else(|e| panic!("invalid unit table for '{}': {}", self.name, e));
        self
    }

    /// The unit's canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit's aliases in insertion order
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Convert a value in this unit to the native unit
    pub fn to_native(&self, value: f64) -> f64 {
        match &self.conversion {
            Conversion::Native => value,
            Conversion::Linear { factor } => value * factor,
            Conversion::Functional { to_native, .. } => to_native(value),
        }
    }

    /// Convert a native-unit value to this unit
    pub fn from_native(&self, value: f64) -> f64 {
        match &self.conversion {
            Conversion::Native => value,
            Conversion::Linear { factor } => value / factor,
            Conversion::Functional { from_native, .. } => from_native(value),
        }
    }

    /// The unit's name followed by its aliases
    pub(crate) fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// How this unit converts to the native unit
    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
