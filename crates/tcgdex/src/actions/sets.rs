//! Set operations.

use crate::client::TcgdexClient;
use crate::error::Result;
use crate::query::SetQueryOptions;
use crate::types::{Card, Set, SetBrief};

/// Provides access to set operations.
///
/// Obtained via [`TcgdexClient::sets()`].
#[derive(Debug)]
pub struct SetActions<'a> {
    pub(crate) client: &'a TcgdexClient,
}

impl SetActions<'_> {
    /// Fetch a set, including its card list (`/sets/{id}`).
    pub async fn get(&self, set_id: &str) -> Result<Set> {
        self.client.invoke("get set", &["sets", set_id]).await
    }

    /// Search sets (`/sets?...`).
    pub async fn search(&self, options: &SetQueryOptions) -> Result<Vec<SetBrief>> {
        self.client
            .invoke_with_query("search sets", &["sets"], options)
            .await
    }

    /// Fetch a card by its set and its number within that set
    /// (`/sets/{setId}/{localId}`).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> tcgdex::Result<()> {
    /// let client = tcgdex::TcgdexClient::new()?;
    /// let card = client.sets().card("swsh3", "136").await?;
    /// assert_eq!(card.id, "swsh3-136");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn card(&self, set_id: &str, local_id: &str) -> Result<Card> {
        self.client
            .invoke("get card by set and local id", &["sets", set_id, local_id])
            .await
    }
}
