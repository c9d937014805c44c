//! The unit-system context
//!
//! A `UnitSystem` owns every per-kind unit registry, the mapping from
//! factor signatures to registered derived kinds, and a cache of
//! synthesized registries for unmatched signatures. It is a cheap-clone
//! handle; quantities keep a copy so multiply/divide can reach the derived
//! machinery without global state.
//!
//! Kind tables are built lazily: registering a kind stores only its name
//! and builder, and the table is constructed on first use behind a
//! single-initialization guard, so concurrent first uses cannot race into
//! duplicate or half-populated tables.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::derived::{compound_unit_name, DerivedKindDef, DerivedOp, FactorSignature, SignatureKey};
use crate::error::QuantityError;
use crate::kind::KindId;
use crate::quantity::PhysicalQuantity;
use crate::registry::UnitRegistry;
use crate::unit::UnitOfMeasure;

type BuildFn = Box<dyn Fn(&UnitRegistry) + Send + Sync>;

/// A quantity kind: a name plus the builder that populates its unit table
///
/// The builder runs at most once, on the kind's first use. It must register
/// the native unit first.
pub struct QuantityKindDef {
    name: KindId,
    build: BuildFn,
}

impl QuantityKindDef {
    /// Define a kind from its name and table builder
    pub fn new(name: impl Into<KindId>, build: impl Fn(&UnitRegistry) + Send + Sync + 'static) -> Self {
        QuantityKindDef {
            name: name.into(),
            build: Box::new(build),
        }
    }

    /// The kind's name
    pub fn name(&self) -> &KindId {
        &self.name
    }
}

impl fmt::Debug for QuantityKindDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantityKindDef").field("name", &self.name).finish()
    }
}

struct KindSlot {
    def: QuantityKindDef,
    registry: OnceLock<Arc<UnitRegistry>>,
}

impl KindSlot {
    fn registry(&self) -> Arc<UnitRegistry> {
        self.registry
            .get_or_init(|| {
                let registry = UnitRegistry::new(self.def.name.clone());
                (self.def.build)(&registry);
                debug!(
                    kind = %self.def.name,
                    units = registry.units().len(),
                    "initialized unit registry"
                );
                Arc::new(registry)
            })
            .clone()
    }
}

struct SystemInner {
    kinds: RwLock<HashMap<KindId, Arc<KindSlot>>>,
    derived: RwLock<Vec<DerivedKindDef>>,
    synthesized: RwLock<HashMap<SignatureKey, Arc<UnitRegistry>>>,
}

/// Shared context owning registries and derived-kind definitions
///
/// Clones are handles to the same system.
#[derive(Clone)]
pub struct UnitSystem {
    inner: Arc<SystemInner>,
}

impl UnitSystem {
    /// Create an empty system
    ///
    /// The dimensionless-coefficient kind is always present: its single
    /// native unit has an empty name, so coefficients render as a bare
    /// magnitude.
    pub fn new() -> Self {
        let system = UnitSystem {
            inner: Arc::new(SystemInner {
                kinds: RwLock::new(HashMap::new()),
                derived: RwLock::new(Vec::new()),
                synthesized: RwLock::new(HashMap::new()),
            }),
        };
        system.register_kind(QuantityKindDef::new(KindId::coefficient(), |registry| {
            registry
                .add_unit(UnitOfMeasure::native(""))
                .expect("coefficient unit table");
        }));
        system
    }

    /// Register a quantity kind
    ///
    /// The unit table is not built here; it is built on first use. A kind
    /// name that is already registered is left untouched (re-registration
    /// is an idempotent no-op).
    pub fn register_kind(&self, def: QuantityKindDef) {
        let mut kinds = self.inner.kinds.write();
        if kinds.contains_key(def.name.as_str()) {
            debug!(kind = %def.name, "quantity kind already registered; keeping existing table");
            return;
        }
        kinds.insert(
            def.name.clone(),
            Arc::new(KindSlot {
                def,
                registry: OnceLock::new(),
            }),
        );
    }

    /// The unit registry of a kind, building its table on first use
    pub fn registry(&self, kind: &str) -> Result<Arc<UnitRegistry>, QuantityError> {
        let slot = self
            .inner
            .kinds
            .read()
            .get(kind)
            .cloned()
            .ok_or_else(|| QuantityError::UnknownQuantityKind(kind.to_string()))?;
        Ok(slot.registry())
    }

    /// Register a derived kind: a signature that resolves products and
    /// quotients to a concrete kind
    ///
    /// The kind must already be registered with its own unit table.
    /// Definitions append; the earliest matching definition wins, and
    /// previously constructed generic results are not reclassified.
    pub fn register_derived(&self, def: DerivedKindDef) -> Result<(), QuantityError> {
        if !self.inner.kinds.read().contains_key(def.kind().as_str()) {
            return Err(QuantityError::UnknownQuantityKind(def.kind().to_string()));
        }
        self.inner.derived.write().push(def);
        Ok(())
    }

    /// Construct a quantity of a registered kind
    pub fn quantity(&self, kind: &str, magnitude: f64, unit: &str) -> Result<PhysicalQuantity, QuantityError> {
        let registry = self.registry(kind)?;
        let unit = registry.resolve(unit)?;
        Ok(PhysicalQuantity::from_parts(magnitude, unit, registry, self.clone(), None))
    }

    /// Construct a dimensionless coefficient
    ///
    /// Coefficients multiply and divide into any quantity, scaling its
    /// magnitude without touching its dimensional signature.
    pub fn coefficient(&self, value: f64) -> PhysicalQuantity {
        let registry = self
            .registry(KindId::coefficient().as_str())
            .expect("the coefficient kind is always registered");
        let unit = registry.native_unit().expect("coefficient unit table");
        PhysicalQuantity::from_parts(value, unit, registry, self.clone(), None)
    }

    /// The registered signature of a derived kind, if any
    pub(crate) fn derived_signature_of_kind(&self, kind: &KindId) -> Option<FactorSignature> {
        self.inner
            .derived
            .read()
            .iter()
            .find(|d| d.kind() == kind)
            .map(|d| d.signature().clone())
    }

    fn matched_derived_kind(&self, key: &SignatureKey) -> Option<KindId> {
        self.inner
            .derived
            .read()
            .iter()
            .find(|d| d.signature().match_key() == *key)
            .map(|d| d.kind().clone())
    }

    /// The factor decomposition a quantity contributes as an operand
    fn operand_signature(&self, quantity: &PhysicalQuantity) -> FactorSignature {
        if let Some(factors) = quantity.factors() {
            return factors.clone();
        }
        let kind = quantity.kind();
        if kind.is_coefficient() {
            return FactorSignature::coefficient();
        }
        if let Some(signature) = self.derived_signature_of_kind(kind) {
            return signature;
        }
        FactorSignature::elementary(kind.clone())
    }

    /// Multiply or divide two quantities into a derived quantity
    ///
    /// Flattens both operands into factor lists, cancels matching pairs,
    /// computes the magnitude from native-unit values, and resolves the
    /// cancelled signature to the most specific kind available: a
    /// registered derived kind, a lone elementary kind, the coefficient
    /// kind for fully cancelled signatures, or a generic derived quantity.
    /// Never fails.
    pub(crate) fn derive(
        &self,
        lhs: &PhysicalQuantity,
        rhs: &PhysicalQuantity,
        op: DerivedOp,
    ) -> PhysicalQuantity {
        let rhs_signature = match op {
            DerivedOp::Multiply => self.operand_signature(rhs),
            DerivedOp::Divide => self.operand_signature(rhs).invert(),
        };
        let cancelled = self.operand_signature(lhs).combine(&rhs_signature).cancel();
        let native = match op {
            DerivedOp::Multiply => lhs.to_native_unit() * rhs.to_native_unit(),
            DerivedOp::Divide => lhs.to_native_unit() / rhs.to_native_unit(),
        };
        let key = cancelled.match_key();

        if let Some(kind) = self.matched_derived_kind(&key) {
            if let Some((registry, unit)) = self.kind_native(&kind) {
                trace!(kind = %kind, signature = %cancelled, "matched derived quantity signature");
                return PhysicalQuantity::from_parts(
                    unit.from_native(native),
                    unit,
                    registry,
                    self.clone(),
                    Some(cancelled),
                );
            }
        }

        // A signature reduced to one elementary factor collapses back to
        // that kind: (A*B)/A is just B.
        if key.denominator().is_empty() && key.numerator().len() == 1 {
            let kind = key.numerator()[0].clone();
            if self.derived_signature_of_kind(&kind).is_none() {
                if let Some((registry, unit)) = self.kind_native(&kind) {
                    trace!(kind = %kind, "signature collapsed to an elementary kind");
                    return PhysicalQuantity::from_parts(
                        unit.from_native(native),
                        unit,
                        registry,
                        self.clone(),
                        None,
                    );
                }
            }
        }

        if key.is_empty() {
            if let Some((registry, unit)) = self.kind_native(&KindId::coefficient()) {
                trace!("signature cancelled to a dimensionless coefficient");
                return PhysicalQuantity::from_parts(
                    unit.from_native(native),
                    unit,
                    registry,
                    self.clone(),
                    Some(cancelled),
                );
            }
        }

        let registry = self.synthesized_registry(&key);
        let unit = registry
            .native_unit()
            .unwrap_or_else(|| UnitOfMeasure::native(""));
        trace!(signature = %cancelled, "no derived kind matched; produced generic derived quantity");
        PhysicalQuantity::from_parts(unit.from_native(native), unit, registry, self.clone(), Some(cancelled))
    }

    fn kind_native(&self, kind: &KindId) -> Option<(Arc<UnitRegistry>, UnitOfMeasure)> {
        let registry = self.registry(kind.as_str()).ok()?;
        let unit = registry.native_unit()?;
        Some((registry, unit))
    }

    /// The cached registry of an unmatched signature
    ///
    /// One registry per cancelled signature, so equal-signature generic
    /// results share kind identity and stay addable.
    fn synthesized_registry(&self, key: &SignatureKey) -> Arc<UnitRegistry> {
        if let Some(existing) = self.inner.synthesized.read().get(key) {
            return existing.clone();
        }

        let numerator_units: Vec<String> =
            key.numerator().iter().map(|k| self.native_unit_name(k)).collect();
        let denominator_units: Vec<String> =
            key.denominator().iter().map(|k| self.native_unit_name(k)).collect();
        let unit_name = compound_unit_name(&numerator_units, &denominator_units);
        let kind = KindId::new(&format!("derived:{}", key));

        let registry = Arc::new(UnitRegistry::new(kind));
        registry
            .add_unit(UnitOfMeasure::native(&unit_name))
            .expect("fresh synthesized registry cannot collide");

        let mut synthesized = self.inner.synthesized.write();
        synthesized.entry(key.clone()).or_insert(registry).clone()
    }

    fn native_unit_name(&self, kind: &KindId) -> String {
        self.registry(kind.as_str())
            .ok()
            .and_then(|r| r.native_unit())
            .map(|u| u.name().to_string())
            .unwrap_or_else(|| kind.to_string())
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitSystem")
            .field("kinds", &self.inner.kinds.read().len())
            .field("derived", &self.inner.derived.read().len())
            .field("synthesized", &self.inner.synthesized.read().len())
            .finish()
    }
}
