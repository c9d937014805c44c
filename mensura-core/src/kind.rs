//! Quantity-kind identifiers
//!
//! A kind names one category of physical measurement (mass, length, ...).
//! Kind identity is what decides whether two quantities may be added and
//! what the factor lists of a derived quantity are made of.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Reserved kind for dimensionless coefficients. Coefficient factors scale
/// magnitudes but are invisible to cancellation and signature matching.
const COEFFICIENT: &str = "coefficient";

/// Interned identifier of a quantity kind
///
/// Cheap to clone and ordered, so factor lists can be sorted into canonical
/// multisets for signature comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindId(Arc<str>);

impl KindId {
    /// Create an identifier from a kind name
    pub fn new(name: &str) -> Self {
        KindId(Arc::from(name))
    }

    /// The identifier of the dimensionless-coefficient kind
    pub fn coefficient() -> Self {
        KindId::new(COEFFICIENT)
    }

    /// Whether this is the dimensionless-coefficient kind
    pub fn is_coefficient(&self) -> bool {
        &*self.0 == COEFFICIENT
    }

    /// The kind name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for KindId {
    fn from(name: &str) -> Self {
        KindId::new(name)
    }
}

impl Borrow<str> for KindId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for KindId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for KindId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(KindId::new(&name))
    }
}
