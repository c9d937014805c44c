//! Physical quantities: an immutable magnitude paired with a unit
//!
//! A quantity remembers the unit it was constructed with and the registry
//! of its kind. Arithmetic never mutates operands; add/subtract require the
//! same kind, multiply/divide always succeed and hand off to the derived
//! engine in the owning `UnitSystem`.

use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::derived::{DerivedOp, FactorSignature};
use crate::error::QuantityError;
use crate::kind::KindId;
use crate::registry::UnitRegistry;
use crate::system::UnitSystem;
use crate::unit::UnitOfMeasure;

/// An immutable measured value
///
/// Pairs a magnitude with the unit it was originally expressed in, the
/// registry of its quantity kind, and, for derived quantities, the
/// flattened factor decomposition.
#[derive(Debug, Clone)]
pub struct PhysicalQuantity {
    magnitude: f64,
    unit: UnitOfMeasure,
    registry: Arc<UnitRegistry>,
    system: UnitSystem,
    factors: Option<FactorSignature>,
}

impl PhysicalQuantity {
    pub(crate) fn from_parts(
        magnitude: f64,
        unit: UnitOfMeasure,
        registry: Arc<UnitRegistry>,
        system: UnitSystem,
        factors: Option<FactorSignature>,
    ) -> Self {
        PhysicalQuantity {
            magnitude,
            unit,
            registry,
            system,
            factors,
        }
    }

    /// The magnitude as constructed, in the original unit
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit the quantity was constructed with (canonical, even when an
    /// alias was used)
    pub fn unit(&self) -> &UnitOfMeasure {
        &self.unit
    }

    /// The quantity's kind
    pub fn kind(&self) -> &KindId {
        self.registry.kind()
    }

    /// The factor decomposition, present on derived quantities
    pub fn factors(&self) -> Option<&FactorSignature> {
        self.factors.as_ref()
    }

    /// The measurement in the kind's native unit
    pub fn to_native_unit(&self) -> f64 {
        self.unit.to_native(self.magnitude)
    }

    /// The measurement in the given unit
    ///
    /// Fails with `UnknownUnitOfMeasure` if the identifier resolves to
    /// nothing in this kind's registry.
    pub fn to_unit(&self, identifier: &str) -> Result<f64, QuantityError> {
        let target = self.registry.resolve(identifier)?;
        Ok(target.from_native(self.to_native_unit()))
    }

    /// Whether the other quantity is of the same kind
    ///
    /// Kinds are compared by registry identity, independent of which unit
    /// either quantity was expressed in.
    pub fn is_compatible(&self, other: &PhysicalQuantity) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
    }

    /// Add a quantity of the same kind
    ///
    /// The sum is computed in native units; an elementary result is then
    /// re-expressed in this operand's original unit, a derived result in
    /// the kind's native unit.
    pub fn add(&self, other: &PhysicalQuantity) -> Result<PhysicalQuantity, QuantityError> {
        self.combine_same_kind(other, |a, b| a + b)
    }

    /// Subtract a quantity of the same kind; unit handling as for `add`
    pub fn subtract(&self, other: &PhysicalQuantity) -> Result<PhysicalQuantity, QuantityError> {
        self.combine_same_kind(other, |a, b| a - b)
    }

    /// Multiply by any quantity, producing a derived quantity
    ///
    /// Never fails: the result is either a registered derived kind whose
    /// signature matches the product, or a generic derived quantity.
    pub fn multiply_by(&self, other: &PhysicalQuantity) -> PhysicalQuantity {
        self.system.derive(self, other, DerivedOp::Multiply)
    }

    /// Divide by any quantity, producing a derived quantity; never fails
    pub fn divide_by(&self, other: &PhysicalQuantity) -> PhysicalQuantity {
        self.system.derive(self, other, DerivedOp::Divide)
    }

    fn combine_same_kind(
        &self,
        other: &PhysicalQuantity,
        op: fn(f64, f64) -> f64,
    ) -> Result<PhysicalQuantity, QuantityError> {
        if !self.is_compatible(other) {
            return Err(QuantityError::PhysicalQuantityMismatch {
                left: self.kind().clone(),
                right: other.kind().clone(),
            });
        }
        let native = op(self.to_native_unit(), other.to_native_unit());
        let unit = if self.is_derived() {
            self.registry.native_unit().unwrap_or_else(|| self.unit.clone())
        } else {
            self.unit.clone()
        };
        Ok(PhysicalQuantity {
            magnitude: unit.from_native(native),
            unit,
            registry: Arc::clone(&self.registry),
            system: self.system.clone(),
            factors: self.factors.clone(),
        })
    }

    /// Whether this quantity is a derived one (carries factor lists or
    /// belongs to a registered derived kind)
    fn is_derived(&self) -> bool {
        self.factors.is_some() || self.system.derived_signature_of_kind(self.kind()).is_some()
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.name().is_empty() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.unit.name())
        }
    }
}

impl PartialEq for PhysicalQuantity {
    /// Equal iff of the same kind and equal in native units
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.to_native_unit() == other.to_native_unit()
    }
}

impl Serialize for PhysicalQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PhysicalQuantity", 3)?;
        state.serialize_field("magnitude", &self.magnitude)?;
        state.serialize_field("unit", self.unit.name())?;
        state.serialize_field("kind", self.kind())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::QuantityKindDef;
    use crate::unit::UnitOfMeasure;
    use float_eq::assert_float_eq;

    fn fixture_system() -> UnitSystem {
        let system = UnitSystem::new();
        system.register_kind(QuantityKindDef::new("wuggability", |registry| {
            registry
                .add_unit(UnitOfMeasure::native("u").with_alias("unit").with_alias("units"))
                .expect("wuggability unit table");
            registry
                .add_unit(UnitOfMeasure::linear("ku", 1e3).with_alias("kilounit"))
                .expect("wuggability unit table");
        }));
        system.register_kind(QuantityKindDef::new("zorbness", |registry| {
            registry
                .add_unit(UnitOfMeasure::native("z"))
                .expect("zorbness unit table");
        }));
        system
    }

    #[test]
    fn test_to_native_unit() {
        let system = fixture_system();
        let q = system.quantity("wuggability", 2.0, "ku").unwrap();
        assert_float_eq!(q.to_native_unit(), 2000.0, ulps <= 2);
    }

    #[test]
    fn test_to_unit_round_trips_original() {
        let system = fixture_system();
        let q = system.quantity("wuggability", 3.5, "ku").unwrap();
        assert_eq!(q.to_unit("ku").unwrap(), 3.5);
    }

    #[test]
    fn test_to_unknown_unit_fails() {
        let system = fixture_system();
        let q = system.quantity("wuggability", 3.5, "ku").unwrap();
        assert_eq!(
            q.to_unit("someUnknownUnit"),
            Err(QuantityError::UnknownUnitOfMeasure("someUnknownUnit".to_string()))
        );
    }

    #[test]
    fn test_alias_construction_is_transparent() {
        let system = fixture_system();
        let by_name = system.quantity("wuggability", 2.0, "ku").unwrap();
        let by_alias = system.quantity("wuggability", 2.0, "kilounit").unwrap();
        assert_eq!(by_name.to_native_unit(), by_alias.to_native_unit());
        // Rendering uses the canonical name even when built from an alias.
        assert_eq!(by_alias.to_string(), "2 ku");
    }

    #[test]
    fn test_add_keeps_left_operand_unit() {
        let system = fixture_system();
        let left = system.quantity("wuggability", 2.0, "ku").unwrap();
        let right = system.quantity("wuggability", 500.0, "u").unwrap();
        let sum = left.add(&right).unwrap();
        assert_eq!(sum.to_string(), "2.5 ku");

        // The other way around the result follows the other operand.
        let sum = right.add(&left).unwrap();
        assert_eq!(sum.to_string(), "2500 u");
    }

    #[test]
    fn test_subtract() {
        let system = fixture_system();
        let left = system.quantity("wuggability", 2.0, "ku").unwrap();
        let right = system.quantity("wuggability", 2500.0, "u").unwrap();
        let difference = left.subtract(&right).unwrap();
        assert_eq!(difference.to_string(), "-0.5 ku");
    }

    #[test]
    fn test_operands_are_untouched() {
        let system = fixture_system();
        let left = system.quantity("wuggability", 2.0, "ku").unwrap();
        let right = system.quantity("wuggability", 500.0, "u").unwrap();
        let _ = left.add(&right).unwrap();
        assert_eq!(left.magnitude(), 2.0);
        assert_eq!(right.magnitude(), 500.0);
    }

    #[test]
    fn test_cross_kind_add_fails() {
        let system = fixture_system();
        let left = system.quantity("wuggability", 2.0, "u").unwrap();
        let right = system.quantity("zorbness", 2.0, "z").unwrap();
        assert_eq!(
            left.add(&right),
            Err(QuantityError::PhysicalQuantityMismatch {
                left: KindId::new("wuggability"),
                right: KindId::new("zorbness"),
            })
        );
    }

    #[test]
    fn test_equality_compares_native_values() {
        let system = fixture_system();
        let a = system.quantity("wuggability", 1.0, "ku").unwrap();
        let b = system.quantity("wuggability", 1000.0, "u").unwrap();
        let c = system.quantity("zorbness", 1000.0, "z").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serialize() {
        let system = fixture_system();
        let q = system.quantity("wuggability", 2.5, "kilounit").unwrap();
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"magnitude": 2.5, "unit": "ku", "kind": "wuggability"})
        );
    }
}
