//! Derived-quantity factor algebra
//!
//! A derived quantity carries its dimensional decomposition as two flat
//! lists of elementary kind identifiers: numerator factors and denominator
//! factors. Products concatenate lists, quotients concatenate against the
//! inverted right operand, cancellation removes matching pairs, and the
//! cancelled signature is matched as an order-independent multiset against
//! registered derived kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::KindId;

/// Which operation produced a derived quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DerivedOp {
    Multiply,
    Divide,
}

/// The flattened dimensional decomposition of a derived quantity
///
/// Lists are fully flattened: a derived operand splices its own lists in,
/// never appears as a nested factor. Dimensionless-coefficient entries may
/// appear in the numerator; they scale magnitudes but are invisible to
/// cancellation and matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSignature {
    numerator: Vec<KindId>,
    denominator: Vec<KindId>,
}

impl FactorSignature {
    /// Build a signature from explicit factor lists
    pub fn new(numerator: Vec<KindId>, denominator: Vec<KindId>) -> Self {
        FactorSignature { numerator, denominator }
    }

    /// The signature of an elementary (non-derived) quantity: itself, once,
    /// in the numerator
    pub fn elementary(kind: KindId) -> Self {
        FactorSignature {
            numerator: vec![kind],
            denominator: Vec::new(),
        }
    }

    /// The signature of a dimensionless coefficient
    pub(crate) fn coefficient() -> Self {
        FactorSignature {
            numerator: vec![KindId::coefficient()],
            denominator: Vec::new(),
        }
    }

    /// Numerator factors in order
    pub fn numerator(&self) -> &[KindId] {
        &self.numerator
    }

    /// Denominator factors in order
    pub fn denominator(&self) -> &[KindId] {
        &self.denominator
    }

    /// The signature of the reciprocal: lists swapped
    pub fn invert(&self) -> Self {
        FactorSignature {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
        }
    }

    /// Concatenate two signatures (the flattening step of a product)
    pub fn combine(&self, other: &Self) -> Self {
        let mut numerator = self.numerator.clone();
        numerator.extend(other.numerator.iter().cloned());
        let mut denominator = self.denominator.clone();
        denominator.extend(other.denominator.iter().cloned());
        FactorSignature { numerator, denominator }
    }

    /// Cancel matching numerator/denominator pairs
    ///
    /// Multiset difference: every kind appearing on both sides is removed
    /// once from each until no pair remains. Coefficient entries never
    /// cancel; any present collapse into a single numerator entry.
    pub fn cancel(&self) -> Self {
        let had_coefficient = self
            .numerator
            .iter()
            .chain(self.denominator.iter())
            .any(KindId::is_coefficient);

        let mut numerator: Vec<KindId> = self
            .numerator
            .iter()
            .filter(|k| !k.is_coefficient())
            .cloned()
            .collect();
        let mut denominator = Vec::new();
        for kind in self.denominator.iter().filter(|k| !k.is_coefficient()) {
            if let Some(pos) = numerator.iter().position(|n| n == kind) {
                numerator.remove(pos);
            } else {
                denominator.push(kind.clone());
            }
        }

        if had_coefficient {
            numerator.push(KindId::coefficient());
        }
        FactorSignature { numerator, denominator }
    }

    /// The order-independent, coefficient-free matching key
    pub fn match_key(&self) -> SignatureKey {
        let mut numerator: Vec<KindId> = self
            .numerator
            .iter()
            .filter(|k| !k.is_coefficient())
            .cloned()
            .collect();
        let mut denominator: Vec<KindId> = self
            .denominator
            .iter()
            .filter(|k| !k.is_coefficient())
            .cloned()
            .collect();
        numerator.sort();
        denominator.sort();
        SignatureKey { numerator, denominator }
    }

    /// Whether the signature carries no dimensional factors at all
    pub fn is_scalar(&self) -> bool {
        self.numerator.iter().all(KindId::is_coefficient) && self.denominator.is_empty()
    }
}

impl fmt::Display for FactorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.match_key())
    }
}

/// Canonical form of a cancelled signature: both lists sorted and
/// coefficient-free. Two signatures match iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SignatureKey {
    numerator: Vec<KindId>,
    denominator: Vec<KindId>,
}

impl SignatureKey {
    /// Sorted numerator kinds
    pub fn numerator(&self) -> &[KindId] {
        &self.numerator
    }

    /// Sorted denominator kinds
    pub fn denominator(&self) -> &[KindId] {
        &self.denominator
    }

    /// Whether the key is the empty (purely scalar) signature
    pub fn is_empty(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }
}

impl fmt::Display for SignatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = grouped_name(&self.numerator, KindId::as_str);
        let denominator = grouped_name(&self.denominator, KindId::as_str);
        match (numerator.is_empty(), denominator.is_empty()) {
            (true, true) => write!(f, "1"),
            (false, true) => write!(f, "{}", numerator),
            (true, false) => write!(f, "1/{}", denominator),
            (false, false) => write!(f, "{}/{}", numerator, denominator),
        }
    }
}

/// Associates a concrete derived kind with the signature that resolves to it
///
/// The kind must also be registered as a quantity kind with its own unit
/// table, so matched results can be expressed in its native unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedKindDef {
    kind: KindId,
    signature: FactorSignature,
}

impl DerivedKindDef {
    /// Define a derived kind from its expected factor lists
    pub fn new(kind: impl Into<KindId>, numerator: Vec<KindId>, denominator: Vec<KindId>) -> Self {
        DerivedKindDef {
            kind: kind.into(),
            signature: FactorSignature::new(numerator, denominator),
        }
    }

    /// The derived kind's identifier
    pub fn kind(&self) -> &KindId {
        &self.kind
    }

    /// The signature this kind matches
    pub fn signature(&self) -> &FactorSignature {
        &self.signature
    }
}

/// Render sorted factor names with same-name runs collapsed to `^n`
/// (`["m", "m"]` becomes `"m^2"`, `["kg", "m"]` becomes `"kg*m"`)
pub(crate) fn grouped_name<T, F>(sorted: &[T], name_of: F) -> String
where
    F: Fn(&T) -> &str,
{
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let name = name_of(&sorted[i]);
        let run = sorted[i..].iter().take_while(|t| name_of(t) == name).count();
        if run == 1 {
            parts.push(name.to_string());
        } else {
            parts.push(format!("{}^{}", name, run));
        }
        i += run;
    }
    parts.join("*")
}

/// Synthesize the compound native-unit name of an unmatched signature from
/// its factors' native unit names
pub(crate) fn compound_unit_name(numerator: &[String], denominator: &[String]) -> String {
    let numerator = grouped_name(numerator, String::as_str);
    let denominator = grouped_name(denominator, String::as_str);
    match (numerator.is_empty(), denominator.is_empty()) {
        (true, true) => String::new(),
        (false, true) => numerator,
        (true, false) => format!("1/{}", denominator),
        (false, false) => format!("{}/{}", numerator, denominator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(name: &str) -> KindId {
        KindId::new(name)
    }

    #[test]
    fn test_combine_concatenates_both_lists() {
        let a = FactorSignature::new(vec![kind("a")], vec![kind("t")]);
        let b = FactorSignature::new(vec![kind("b")], vec![kind("u")]);
        let product = a.combine(&b);
        assert_eq!(product.numerator(), &[kind("a"), kind("b")]);
        assert_eq!(product.denominator(), &[kind("t"), kind("u")]);
    }

    #[test]
    fn test_invert_swaps_lists() {
        let sig = FactorSignature::new(vec![kind("a")], vec![kind("t"), kind("t")]);
        let inverse = sig.invert();
        assert_eq!(inverse.numerator(), &[kind("t"), kind("t")]);
        assert_eq!(inverse.denominator(), &[kind("a")]);
    }

    #[test]
    fn test_cancel_removes_pairs_once_each() {
        let sig = FactorSignature::new(
            vec![kind("a"), kind("b"), kind("a")],
            vec![kind("a"), kind("c")],
        );
        let cancelled = sig.cancel();
        assert_eq!(cancelled.numerator(), &[kind("b"), kind("a")]);
        assert_eq!(cancelled.denominator(), &[kind("c")]);
    }

    #[test]
    fn test_cancel_to_empty() {
        let sig = FactorSignature::new(vec![kind("a"), kind("b")], vec![kind("b"), kind("a")]);
        let cancelled = sig.cancel();
        assert!(cancelled.numerator().is_empty());
        assert!(cancelled.denominator().is_empty());
        assert!(cancelled.is_scalar());
    }

    #[test]
    fn test_coefficients_never_cancel() {
        let sig = FactorSignature::new(
            vec![kind("a"), KindId::coefficient()],
            vec![KindId::coefficient(), kind("a")],
        );
        let cancelled = sig.cancel();
        assert_eq!(cancelled.numerator(), &[KindId::coefficient()]);
        assert!(cancelled.denominator().is_empty());
        assert!(cancelled.is_scalar());
    }

    #[test]
    fn test_match_key_is_order_independent() {
        let ab = FactorSignature::new(vec![kind("a"), kind("b")], vec![]);
        let ba = FactorSignature::new(vec![kind("b"), kind("a")], vec![]);
        assert_eq!(ab.match_key(), ba.match_key());
    }

    #[test]
    fn test_match_key_respects_multiplicity() {
        let aab = FactorSignature::new(vec![kind("a"), kind("a"), kind("b")], vec![]);
        let ab = FactorSignature::new(vec![kind("a"), kind("b")], vec![]);
        assert_ne!(aab.match_key(), ab.match_key());
    }

    #[test]
    fn test_match_key_ignores_coefficients() {
        let plain = FactorSignature::new(vec![kind("a")], vec![kind("t")]);
        let with_coefficient = FactorSignature::new(
            vec![kind("a"), KindId::coefficient()],
            vec![kind("t")],
        );
        assert_eq!(plain.match_key(), with_coefficient.match_key());
    }

    #[test]
    fn test_display_groups_repeats() {
        let sig = FactorSignature::new(
            vec![kind("length"), kind("length")],
            vec![kind("time")],
        );
        assert_eq!(sig.to_string(), "length^2/time");
        assert_eq!(FactorSignature::default().to_string(), "1");
    }

    #[test]
    fn test_compound_unit_name_shapes() {
        let m = || "m".to_string();
        let s = || "s".to_string();
        let kg = || "kg".to_string();
        assert_eq!(compound_unit_name(&[m(), m()], &[]), "m^2");
        assert_eq!(compound_unit_name(&[kg(), m()], &[s(), s()]), "kg*m/s^2");
        assert_eq!(compound_unit_name(&[], &[s()]), "1/s");
        assert_eq!(compound_unit_name(&[], &[]), "");
    }
}
