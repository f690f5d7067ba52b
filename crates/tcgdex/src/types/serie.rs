//! Serie types.
//!
//! A serie groups several sets, e.g. the "Sword & Shield" serie contains
//! every expansion released in that era. The spelling follows TCGdex.

use serde::{Deserialize, Serialize};

use super::set::SetBrief;

/// A full serie record, as returned by `/series/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Serie {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Sets in release order. Empty when the serie is embedded in a [`Set`](super::Set).
    #[serde(default)]
    pub sets: Vec<SetBrief>,
}

/// A serie summary, as returned by `/series?...` searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerieBrief {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}
