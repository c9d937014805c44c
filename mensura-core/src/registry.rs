//! Per-kind unit registries
//!
//! Each quantity kind owns one registry: an insertion-ordered unit table
//! with collision-checked registration and exact name/alias resolution.
//! Registries stay extensible after their lazy initialization, so the table
//! lives behind a lock.

use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::QuantityError;
use crate::kind::KindId;
use crate::unit::{Conversion, UnitOfMeasure};

/// One standard SI magnitude prefix
struct SiPrefix {
    symbol: &'static str,
    name: &'static str,
    multiplier: f64,
}

/// The standard SI magnitude prefixes, plus the empty prefix so the bulk
/// helper also emits the unprefixed base unit (gram for a `kg` native).
const SI_PREFIXES: [SiPrefix; 21] = [
    SiPrefix { symbol: "Y", name: "yotta", multiplier: 1e24 },
    SiPrefix { symbol: "Z", name: "zetta", multiplier: 1e21 },
    SiPrefix { symbol: "E", name: "exa", multiplier: 1e18 },
    SiPrefix { symbol: "P", name: "peta", multiplier: 1e15 },
    SiPrefix { symbol: "T", name: "tera", multiplier: 1e12 },
    SiPrefix { symbol: "G", name: "giga", multiplier: 1e9 },
    SiPrefix { symbol: "M", name: "mega", multiplier: 1e6 },
    SiPrefix { symbol: "k", name: "kilo", multiplier: 1e3 },
    SiPrefix { symbol: "h", name: "hecto", multiplier: 1e2 },
    SiPrefix { symbol: "da", name: "deca", multiplier: 1e1 },
    SiPrefix { symbol: "", name: "", multiplier: 1e0 },
    SiPrefix { symbol: "d", name: "deci", multiplier: 1e-1 },
    SiPrefix { symbol: "c", name: "centi", multiplier: 1e-2 },
    SiPrefix { symbol: "m", name: "milli", multiplier: 1e-3 },
    SiPrefix { symbol: "µ", name: "micro", multiplier: 1e-6 },
    SiPrefix { symbol: "n", name: "nano", multiplier: 1e-9 },
    SiPrefix { symbol: "p", name: "pico", multiplier: 1e-12 },
    SiPrefix { symbol: "f", name: "femto", multiplier: 1e-15 },
    SiPrefix { symbol: "a", name: "atto", multiplier: 1e-18 },
    SiPrefix { symbol: "z", name: "zepto", multiplier: 1e-21 },
    SiPrefix { symbol: "y", name: "yocto", multiplier: 1e-24 },
];

/// Expand `%p` to the prefix symbol and `%P` to the prefix name
fn expand_pattern(pattern: &str, prefix: &SiPrefix) -> String {
    pattern.replace("%p", prefix.symbol).replace("%P", prefix.name)
}

/// The unit table of one quantity kind
///
/// Units are kept in insertion order; the first unit registered is the
/// kind's native unit and must carry the identity conversion. Shared via
/// `Arc`, and the `Arc`'s identity is the kind identity used by
/// compatibility checks.
pub struct UnitRegistry {
    kind: KindId,
    units: RwLock<Vec<UnitOfMeasure>>,
}

impl UnitRegistry {
    /// Create an empty registry for a kind
    pub fn new(kind: KindId) -> Self {
        UnitRegistry {
            kind,
            units: RwLock::new(Vec::new()),
        }
    }

    /// The kind this registry belongs to
    pub fn kind(&self) -> &KindId {
        &self.kind
    }

    /// Register a unit
    ///
    /// All-or-nothing: fails with `DuplicateUnitNameOrAlias` if the unit's
    /// name or any of its aliases already appears as a name or alias of a
    /// registered unit, and the table is left untouched.
    pub fn add_unit(&self, unit: UnitOfMeasure) -> Result<(), QuantityError> {
        let mut units = self.units.write();
        for identifier in unit.identifiers() {
            if units.iter().any(|u| u.identifiers().any(|i| i == identifier)) {
                return Err(QuantityError::DuplicateUnitNameOrAlias(identifier.to_string()));
            }
        }
        units.push(unit);
        Ok(())
    }

    /// Look up a unit by exact name or exact alias
    ///
    /// Case-sensitive, no fuzzy matching. The returned unit carries its
    /// canonical name even when resolved through an alias.
    pub fn resolve(&self, identifier: &str) -> Result<UnitOfMeasure, QuantityError> {
        self.units
            .read()
            .iter()
            .find(|u| u.identifiers().any(|i| i == identifier))
            .cloned()
            .ok_or_else(|| QuantityError::UnknownUnitOfMeasure(identifier.to_string()))
    }

    /// The kind's native unit, if any unit has been registered
    pub fn native_unit(&self) -> Option<UnitOfMeasure> {
        self.units.read().first().cloned()
    }

    /// Snapshot of the registered units in insertion order
    pub fn units(&self) -> Vec<UnitOfMeasure> {
        self.units.read().clone()
    }

    /// Bulk-register SI-prefixed variants of a base unit
    ///
    /// For every standard prefix (including the empty one), a linear unit is
    /// generated with `%p` in `name_pattern` replaced by the prefix symbol
    /// and `%P` in each of `alias_patterns` replaced by the prefix name; its
    /// factor is `prefix multiplier * factor`, composed with the base unit's
    /// own conversion. A generated unit whose name or any alias collides
    /// with an already-registered unit is silently skipped rather than
    /// rejected, since the helper exists to fill the gaps around an
    /// already-present base unit.
    pub fn add_si_prefixed_units(
        &self,
        base: &UnitOfMeasure,
        factor: f64,
        name_pattern: &str,
        alias_patterns: &[&str],
    ) {
        let mut skipped = 0usize;
        for prefix in &SI_PREFIXES {
            let name = expand_pattern(name_pattern, prefix);
            let scale = prefix.multiplier * factor;

            let mut unit = match base.conversion() {
                Conversion::Native => UnitOfMeasure::linear(&name, scale),
                Conversion::Linear { factor: base_factor } => {
                    UnitOfMeasure::linear(&name, scale * base_factor)
                }
                Conversion::Functional { .. } => {
                    let to_base = base.clone();
                    let from_base = base.clone();
                    UnitOfMeasure::functional(
                        &name,
                        move |x| to_base.to_native(x * scale),
                        move |v| from_base.from_native(v) / scale,
                    )
                }
            };

            let mut self_collision = false;
            for pattern in alias_patterns {
                let alias = expand_pattern(pattern, prefix);
                if unit.add_alias(&alias).is_err() {
                    self_collision = true;
                    break;
                }
            }

            if self_collision || self.add_unit(unit).is_err() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!(
                kind = %self.kind,
                pattern = name_pattern,
                skipped,
                "skipped colliding SI-prefixed units"
            );
        }
    }
}

impl fmt::Debug for UnitRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.units.read().iter().map(|u| u.name().to_string()).collect();
        f.debug_struct("UnitRegistry")
            .field("kind", &self.kind)
            .field("units", &names)
            .finish()
    }
}
