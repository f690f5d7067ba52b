//! Value lists.
//!
//! TCGdex exposes the distinct values of several card fields as plain
//! JSON arrays. These are handy for populating filters.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> tcgdex::Result<()> {
//! let client = tcgdex::TcgdexClient::new()?;
//!
//! for rarity in client.lists().rarities().await? {
//!     println!("{rarity}");
//! }
//! # Ok(())
//! # }
//! ```

use crate::client::TcgdexClient;
use crate::error::Result;

/// Provides access to the value-list endpoints.
///
/// Obtained via [`TcgdexClient::lists()`].
#[derive(Debug)]
pub struct ListActions<'a> {
    pub(crate) client: &'a TcgdexClient,
}

impl ListActions<'_> {
    /// Energy types, e.g. `Colorless`, `Lightning` (`/types`).
    pub async fn types(&self) -> Result<Vec<String>> {
        self.client.invoke("list card types", &["types"]).await
    }

    /// Distinct retreat costs (`/retreats`).
    pub async fn retreats(&self) -> Result<Vec<u32>> {
        self.client.invoke("list retreat costs", &["retreats"]).await
    }

    /// Rarities, e.g. `Common`, `Rare Holo` (`/rarities`).
    pub async fn rarities(&self) -> Result<Vec<String>> {
        self.client.invoke("list rarities", &["rarities"]).await
    }

    /// Illustrator names (`/illustrators`).
    pub async fn illustrators(&self) -> Result<Vec<String>> {
        self.client.invoke("list illustrators", &["illustrators"]).await
    }

    /// Card categories: `Pokemon`, `Trainer`, `Energy` (`/categories`).
    pub async fn categories(&self) -> Result<Vec<String>> {
        self.client.invoke("list categories", &["categories"]).await
    }

    /// Pokémon stages, e.g. `Basic`, `Stage1`, `VMAX` (`/stages`).
    pub async fn stages(&self) -> Result<Vec<String>> {
        self.client.invoke("list stages", &["stages"]).await
    }

    /// Name suffixes, e.g. `EX`, `V`, `VMAX` (`/suffixes`).
    pub async fn suffixes(&self) -> Result<Vec<String>> {
        self.client.invoke("list suffixes", &["suffixes"]).await
    }

    /// Print variants, e.g. `holo`, `reverse` (`/variants`).
    pub async fn variants(&self) -> Result<Vec<String>> {
        self.client.invoke("list variants", &["variants"]).await
    }
}
