//! Set types.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::serie::Serie;

/// A full set record, as returned by `/sets/{id}`.
///
/// Only `id` and `name` are required; a set embedded in a [`Card`] carries
/// little more than that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    /// Set identifier, e.g. `swsh1`.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Release date as printed by TCGdex (`YYYY-MM-DD`).
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub card_count: CardCount,
    #[serde(default)]
    pub legal: Legal,
    /// The serie this set belongs to.
    #[serde(default)]
    pub serie: Serie,
    /// Cards in the set. Only populated when fetching the set itself.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Code used by Pokémon TCG Online, if any.
    #[serde(default)]
    pub tcg_online: Option<String>,
    #[serde(default)]
    pub abbreviation: Abbreviation,
}

/// Card counts for a set, broken down by variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardCount {
    /// All cards, including secret rares.
    pub total: u32,
    /// Cards up to the number printed on the card (`x/202`).
    pub official: u32,
    pub holo: u32,
    pub normal: u32,
    pub reverse: u32,
    pub first_ed: u32,
}

/// Tournament legality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legal {
    pub standard: bool,
    pub expanded: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Abbreviation {
    pub official: Option<String>,
}

/// A set summary, as returned by `/sets?...` searches and inside a [`Serie`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBrief {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub card_count: CardCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_brief_partial_count() {
        let brief: SetBrief = serde_json::from_str(
            r#"{"id": "base2", "name": "Jungle", "cardCount": {"total": 64, "official": 64}}"#,
        )
        .unwrap();

        assert_eq!(brief.card_count.total, 64);
        assert_eq!(brief.card_count.holo, 0);
        assert_eq!(brief.logo, None);
    }

    #[test]
    fn test_set_embeds_serie_and_cards() {
        let set: Set = serde_json::from_str(
            r#"{
                "id": "base2",
                "name": "Jungle",
                "releaseDate": "1999-06-16",
                "serie": {"id": "base", "name": "Base"},
                "cards": [{"id": "base2-1", "localId": "1", "name": "Clefable"}],
                "abbreviation": {"official": "JU"}
            }"#,
        )
        .unwrap();

        assert_eq!(set.serie.id, "base");
        assert_eq!(set.cards.len(), 1);
        assert_eq!(set.cards[0].local_id, "1");
        assert_eq!(set.abbreviation.official.as_deref(), Some("JU"));
        assert!(!set.legal.standard);
    }

    #[test]
    fn test_set_requires_id_and_name() {
        assert!(serde_json::from_str::<Set>(r#"{"cardCount": {"total": 216}}"#).is_err());
        // Embedded serie without a name is a shape error too.
        assert!(
            serde_json::from_str::<Set>(r#"{"id": "swsh1", "name": "Sword & Shield", "serie": {}}"#)
                .is_err()
        );
    }
}
