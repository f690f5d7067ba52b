//! Card types.

use serde::{Deserialize, Deserializer, Serialize};

use super::set::{Legal, Set};

/// A full card record, as returned by `/cards/{id}` and `/sets/{set}/{localId}`.
///
/// `id` and `name` are required. Fields that do not apply to a card's
/// category (an energy card has no `hp`, a Pokémon has no `trainer_type`)
/// decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Globally unique identifier, e.g. `swsh3-136`.
    pub id: String,
    /// Identifier within the card's set, e.g. `136`.
    #[serde(default)]
    pub local_id: String,
    /// Card name.
    pub name: String,
    /// `Pokemon`, `Trainer` or `Energy`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub illustrator: Option<String>,
    /// Base image URL (without quality/extension suffix).
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub hp: Option<u32>,
    #[serde(default)]
    pub types: Vec<String>,
    /// Name of the Pokémon this card evolves from.
    #[serde(default)]
    pub evolve_from: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub attacks: Vec<CardAttack>,
    #[serde(default)]
    pub weaknesses: Vec<CardWeakness>,
    #[serde(default)]
    pub resistances: Vec<CardWeakness>,
    /// Retreat cost in energies.
    #[serde(default)]
    pub retreat: Option<u32>,
    #[serde(default)]
    pub regulation_mark: Option<String>,
    #[serde(default)]
    pub legal: Legal,
    /// National Pokédex numbers.
    #[serde(default, alias = "dexIDs")]
    pub dex_id: Vec<u32>,
    /// Pokémon level (`34`, `X`). TCGdex sends a single value.
    #[serde(default, deserialize_with = "one_or_many")]
    pub level: Vec<Level>,
    /// Name suffix (`V`, `EX`). TCGdex sends a single value.
    #[serde(default, deserialize_with = "one_or_many")]
    pub suffix: Vec<String>,
    /// TCGdex sends a single object here; lists are accepted too.
    #[serde(default, rename = "item", deserialize_with = "one_or_many")]
    pub items: Vec<CardItem>,
    #[serde(default)]
    pub abilities: Vec<CardAbility>,
    /// Effect text for Trainer and Energy cards.
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub trainer_type: Option<String>,
    #[serde(default)]
    pub energy_type: Option<String>,
    #[serde(default)]
    pub variants: CardVariants,
    /// The set this card belongs to.
    #[serde(default)]
    pub set: Set,
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

/// An attack printed on a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAttack {
    /// Energy types required to use the attack.
    pub cost: Vec<String>,
    pub name: String,
    pub effect: Option<String>,
    pub damage: Option<Damage>,
}

/// Attack damage.
///
/// Usually a plain number, but modified attacks are printed as text such
/// as `"30+"` or `"20×"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Damage {
    Amount(u32),
    Text(String),
}

/// A Pokémon level: a number on most cards, text such as `X` on LV.X cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(u32),
    Text(String),
}

/// A weakness or resistance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardWeakness {
    #[serde(rename = "type")]
    pub energy_type: String,
    /// Modifier such as `×2` or `-30`.
    pub value: Option<String>,
}

/// Which print variants exist for a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardVariants {
    pub first_edition: bool,
    pub holo: bool,
    pub normal: bool,
    pub reverse: bool,
    pub w_promo: bool,
}

/// A Pokémon Tool or held item printed on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardItem {
    pub name: String,
    pub effect: String,
}

/// An ability (Ability, Poké-Power, Poké-Body...) printed on a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAbility {
    #[serde(rename = "type")]
    pub ability_type: String,
    pub name: String,
    pub effect: String,
}

/// A card summary, as returned by `/cards?...` searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBrief {
    pub id: String,
    pub local_id: String,
    pub name: String,
    /// Some cards have no scan yet.
    #[serde(default)]
    pub image: Option<String>,
}
