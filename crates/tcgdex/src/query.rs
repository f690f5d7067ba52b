//! Query options for the search endpoints.
//!
//! Each search endpoint takes an options record whose fields are all
//! optional. Unset fields are left out of the query string entirely,
//! because TCGdex treats an explicit empty or zero parameter differently
//! from an absent one (`pagination:page=0` is not the same as no
//! pagination at all).
//!
//! # Example
//!
//! ```
//! use tcgdex::CardQueryOptions;
//!
//! let options = CardQueryOptions::new()
//!     .name("pikachu")
//!     .page(1)
//!     .items_per_page(2);
//!
//! assert_eq!(
//!     tcgdex::query::encode(&options).unwrap(),
//!     "name=pikachu&pagination%3AitemsPerPage=2&pagination%3Apage=1"
//! );
//!
//! // Nothing set, nothing sent.
//! assert_eq!(tcgdex::query::encode(&CardQueryOptions::default()).unwrap(), "");
//! ```

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::Value;
use url::form_urlencoded;

/// Filters and pagination for [`CardActions::search()`](crate::actions::CardActions::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct CardQueryOptions {
    /// Global card identifier, e.g. `xyp-XY124`.
    pub id: Option<String>,
    /// Identifier relative to the card's set, e.g. `XY124`.
    #[serde(rename = "localId")]
    pub local_id: Option<String>,
    /// Card name (matched by TCGdex, case-insensitive).
    pub name: Option<String>,
    /// 1-based page number.
    #[serde(rename = "pagination:page")]
    pub pagination_page: Option<u32>,
    /// Number of items per page.
    #[serde(rename = "pagination:itemsPerPage")]
    pub pagination_items_per_page: Option<u32>,
}

impl CardQueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by global card identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter by identifier within the set.
    pub fn local_id(mut self, local_id: impl Into<String>) -> Self {
        self.local_id = Some(local_id.into());
        self
    }

    /// Filter by card name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.pagination_page = Some(page);
        self
    }

    /// Set the page size.
    pub fn items_per_page(mut self, items: u32) -> Self {
        self.pagination_items_per_page = Some(items);
        self
    }
}

/// Filters and pagination for [`SetActions::search()`](crate::actions::SetActions::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct SetQueryOptions {
    /// Set identifier, e.g. `base2`.
    pub id: Option<String>,
    /// Set name, e.g. `Jungle`.
    pub name: Option<String>,
    /// 1-based page number.
    #[serde(rename = "pagination:page")]
    pub pagination_page: Option<u32>,
    /// Number of items per page.
    #[serde(rename = "pagination:itemsPerPage")]
    pub pagination_items_per_page: Option<u32>,
}

impl SetQueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by set identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter by set name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.pagination_page = Some(page);
        self
    }

    /// Set the page size.
    pub fn items_per_page(mut self, items: u32) -> Self {
        self.pagination_items_per_page = Some(items);
        self
    }
}

/// Filters and pagination for [`SerieActions::search()`](crate::actions::SerieActions::search).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[must_use]
pub struct SerieQueryOptions {
    /// Serie identifier, e.g. `swsh`.
    pub id: Option<String>,
    /// Serie name.
    pub name: Option<String>,
    /// 1-based page number.
    #[serde(rename = "pagination:page")]
    pub pagination_page: Option<u32>,
    /// Number of items per page.
    #[serde(rename = "pagination:itemsPerPage")]
    pub pagination_items_per_page: Option<u32>,
}

impl SerieQueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by serie identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter by serie name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Request a specific page.
    pub fn page(mut self, page: u32) -> Self {
        self.pagination_page = Some(page);
        self
    }

    /// Set the page size.
    pub fn items_per_page(mut self, items: u32) -> Self {
        self.pagination_items_per_page = Some(items);
        self
    }
}

/// Encode an options record as a form-urlencoded query string.
///
/// `None`, empty strings, `false` and numeric zero are all treated as
/// unset and omitted. Parameters come out sorted by name. The record must
/// serialize to a flat map of scalars.
pub fn encode<T>(options: &T) -> Result<String, serde_json::Error>
where
    T: Serialize,
{
    let Value::Object(map) = serde_json::to_value(options)? else {
        return Err(serde_json::Error::custom(
            "query options must serialize to a map",
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (name, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) if s.is_empty() => continue,
            Value::String(s) => s,
            Value::Bool(false) => continue,
            Value::Bool(true) => "true".to_string(),
            Value::Number(n) if n.as_f64() == Some(0.0) => continue,
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(serde_json::Error::custom(format!(
                    "query parameter `{name}` is not a scalar"
                )));
            }
        };
        pairs.push((name, value));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_encode_to_nothing() {
        assert_eq!(encode(&CardQueryOptions::default()).unwrap(), "");
        assert_eq!(encode(&SetQueryOptions::default()).unwrap(), "");
        assert_eq!(encode(&SerieQueryOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_zero_values_are_unset() {
        let options = CardQueryOptions {
            id: Some(String::new()),
            local_id: Some(String::new()),
            name: Some(String::new()),
            pagination_page: Some(0),
            pagination_items_per_page: Some(0),
        };
        assert_eq!(encode(&options).unwrap(), "");
    }

    #[test]
    fn test_card_parameter_names() {
        let options = CardQueryOptions::new()
            .id("xyp-XY124")
            .local_id("XY124")
            .name("pikachu")
            .page(3)
            .items_per_page(25);

        let encoded = encode(&options).unwrap();
        let pairs: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("id".to_string(), "xyp-XY124".to_string()),
                ("localId".to_string(), "XY124".to_string()),
                ("name".to_string(), "pikachu".to_string()),
                ("pagination:itemsPerPage".to_string(), "25".to_string()),
                ("pagination:page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_each_field_appears_once() {
        let options = SetQueryOptions::new().name("Jungle").page(1);
        let encoded = encode(&options).unwrap();

        assert_eq!(encoded.matches("name=").count(), 1);
        assert_eq!(encoded.matches("pagination%3Apage=").count(), 1);
        assert!(!encoded.contains("itemsPerPage"));
        assert!(!encoded.contains("id="));
    }

    #[test]
    fn test_values_are_escaped() {
        let options = SetQueryOptions::new().name("Sword & Shield");
        assert_eq!(encode(&options).unwrap(), "name=Sword+%26+Shield");
    }

    #[test]
    fn test_serie_options() {
        let options = SerieQueryOptions::new().id("swsh").items_per_page(5);
        assert_eq!(
            encode(&options).unwrap(),
            "id=swsh&pagination%3AitemsPerPage=5"
        );
    }

    #[test]
    fn test_non_map_is_rejected() {
        assert!(encode(&"pikachu").is_err());
    }

    #[test]
    fn test_nested_value_is_rejected() {
        #[derive(Serialize)]
        struct Nested {
            ids: Vec<&'static str>,
        }

        let err = encode(&Nested { ids: vec!["a"] }).unwrap_err();
        assert!(err.to_string().contains("`ids`"));
    }
}
