//! Card operations.
//!
//! # Example
//!
//! ```no_run
//! use tcgdex::{CardQueryOptions, TcgdexClient};
//!
//! # async fn example() -> tcgdex::Result<()> {
//! let client = TcgdexClient::new()?;
//!
//! let card = client.cards().get("swsh3-136").await?;
//! assert_eq!(card.category, "Pokemon");
//!
//! // Second page of Pikachu cards, two per page
//! let options = CardQueryOptions::new().name("pikachu").page(2).items_per_page(2);
//! let briefs = client.cards().search(&options).await?;
//! # Ok(())
//! # }
//! ```

use crate::client::TcgdexClient;
use crate::error::Result;
use crate::query::CardQueryOptions;
use crate::types::{Card, CardBrief};

/// Provides access to card operations.
///
/// Obtained via [`TcgdexClient::cards()`].
#[derive(Debug)]
pub struct CardActions<'a> {
    pub(crate) client: &'a TcgdexClient,
}

impl CardActions<'_> {
    /// Fetch a single card by its global identifier (`/cards/{id}`).
    pub async fn get(&self, card_id: &str) -> Result<Card> {
        self.client
            .invoke("fetch single card", &["cards", card_id])
            .await
    }

    /// Search cards (`/cards?...`).
    ///
    /// No match is not an error; it yields an empty list.
    pub async fn search(&self, options: &CardQueryOptions) -> Result<Vec<CardBrief>> {
        self.client
            .invoke_with_query("search cards", &["cards"], options)
            .await
    }
}
