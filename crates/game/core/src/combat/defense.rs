//! Damage defenses (resistance and immunity) and their lookup.

use super::damage::DamageCategory;

/// How a defense alters incoming damage of its category.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DefenseKind {
    /// Halves incoming damage, rounding down.
    Resistance,
    /// Negates incoming damage entirely.
    Immunity,
}

impl DefenseKind {
    /// Damage left after this defense is applied to `amount`.
    ///
    /// ```text
    /// resistance: floor(amount / 2)
    /// immunity:   0
    /// ```
    pub const fn reduce(self, amount: u32) -> u32 {
        match self {
            Self::Resistance => amount / 2,
            Self::Immunity => 0,
        }
    }
}

/// A single defense entry on a player: one damage category, one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defense {
    pub category: DamageCategory,
    pub kind: DefenseKind,
}

impl Defense {
    pub const fn new(category: DamageCategory, kind: DefenseKind) -> Self {
        Self { category, kind }
    }

    pub const fn resistance(category: DamageCategory) -> Self {
        Self::new(category, DefenseKind::Resistance)
    }

    pub const fn immunity(category: DamageCategory) -> Self {
        Self::new(category, DefenseKind::Immunity)
    }
}

/// Look up the defense a player has against `category`.
///
/// Returns the kind of the first matching entry, or `None` when the player has
/// no defense for that category. Duplicate entries after the first are ignored.
pub fn resolve_modifier(defenses: &[Defense], category: DamageCategory) -> Option<DefenseKind> {
    defenses
        .iter()
        .find(|defense| defense.category == category)
        .map(|defense| defense.kind)
}

/// Damage that gets through after resolving `category` against `defenses`.
pub fn effective_amount(defenses: &[Defense], category: DamageCategory, amount: u32) -> u32 {
    match resolve_modifier(defenses, category) {
        Some(kind) => kind.reduce(amount),
        None => amount,
    }
}
