//! The full TCGdex operation set as a trait.
//!
//! Code that only needs to *fetch* card data can be generic over
//! [`Fetcher`] instead of naming [`TcgdexClient`], which lets tests plug in
//! a canned implementation without any network I/O.
//!
//! # Example
//!
//! ```no_run
//! use tcgdex::{Fetcher, TcgdexClient};
//!
//! async fn card_title<F: Fetcher>(fetcher: &F, id: &str) -> tcgdex::Result<String> {
//!     let card = fetcher.fetch_single_card(id).await?;
//!     Ok(format!("{} ({})", card.name, card.set.name))
//! }
//!
//! # async fn example() -> tcgdex::Result<()> {
//! let client = TcgdexClient::new()?;
//! println!("{}", card_title(&client, "swsh3-136").await?);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use crate::client::TcgdexClient;
use crate::error::Result;
use crate::query::{CardQueryOptions, SerieQueryOptions, SetQueryOptions};
use crate::types::{Card, CardBrief, Serie, SerieBrief, Set, SetBrief};

/// Every TCGdex operation, one method per endpoint.
pub trait Fetcher {
    /// `/cards/{id}`
    fn fetch_single_card(&self, card_id: &str) -> impl Future<Output = Result<Card>> + Send;

    /// `/cards?...`
    fn search_cards(
        &self,
        options: &CardQueryOptions,
    ) -> impl Future<Output = Result<Vec<CardBrief>>> + Send;

    /// `/sets/{id}`
    fn get_set(&self, set_id: &str) -> impl Future<Output = Result<Set>> + Send;

    /// `/sets?...`
    fn search_sets(
        &self,
        options: &SetQueryOptions,
    ) -> impl Future<Output = Result<Vec<SetBrief>>> + Send;

    /// `/sets/{setId}/{localId}`
    fn get_card_by_set_and_local_id(
        &self,
        set_id: &str,
        local_id: &str,
    ) -> impl Future<Output = Result<Card>> + Send;

    /// `/series/{id}`
    fn get_serie(&self, serie_id: &str) -> impl Future<Output = Result<Serie>> + Send;

    /// `/series?...`
    fn search_series(
        &self,
        options: &SerieQueryOptions,
    ) -> impl Future<Output = Result<Vec<SerieBrief>>> + Send;

    /// `/types`
    fn list_card_types(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/retreats`
    fn list_retreat_costs(&self) -> impl Future<Output = Result<Vec<u32>>> + Send;

    /// `/rarities`
    fn list_rarities(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/illustrators`
    fn list_illustrators(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/categories`
    fn list_categories(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/stages`
    fn list_stages(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/suffixes`
    fn list_suffixes(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// `/variants`
    fn list_variants(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}

impl Fetcher for TcgdexClient {
    async fn fetch_single_card(&self, card_id: &str) -> Result<Card> {
        self.cards().get(card_id).await
    }

    async fn search_cards(&self, options: &CardQueryOptions) -> Result<Vec<CardBrief>> {
        self.cards().search(options).await
    }

    async fn get_set(&self, set_id: &str) -> Result<Set> {
        self.sets().get(set_id).await
    }

    async fn search_sets(&self, options: &SetQueryOptions) -> Result<Vec<SetBrief>> {
        self.sets().search(options).await
    }

    async fn get_card_by_set_and_local_id(&self, set_id: &str, local_id: &str) -> Result<Card> {
        self.sets().card(set_id, local_id).await
    }

    async fn get_serie(&self, serie_id: &str) -> Result<Serie> {
        self.series().get(serie_id).await
    }

    async fn search_series(&self, options: &SerieQueryOptions) -> Result<Vec<SerieBrief>> {
        self.series().search(options).await
    }

    async fn list_card_types(&self) -> Result<Vec<String>> {
        self.lists().types().await
    }

    async fn list_retreat_costs(&self) -> Result<Vec<u32>> {
        self.lists().retreats().await
    }

    async fn list_rarities(&self) -> Result<Vec<String>> {
        self.lists().rarities().await
    }

    async fn list_illustrators(&self) -> Result<Vec<String>> {
        self.lists().illustrators().await
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        self.lists().categories().await
    }

    async fn list_stages(&self) -> Result<Vec<String>> {
        self.lists().stages().await
    }

    async fn list_suffixes(&self) -> Result<Vec<String>> {
        self.lists().suffixes().await
    }

    async fn list_variants(&self) -> Result<Vec<String>> {
        self.lists().variants().await
    }
}
