//! An async Rust client for the [TCGdex](https://tcgdex.dev) API.
//!
//! TCGdex serves metadata for the Pokémon Trading Card Game: cards, the
//! sets they were printed in and the series grouping those sets. This
//! crate turns typed queries into GET requests and decodes the JSON
//! answers into typed records.
//!
//! # Quick Start
//!
//! ```no_run
//! use tcgdex::TcgdexClient;
//!
//! # async fn example() -> tcgdex::Result<()> {
//! // English API with a 30 second timeout
//! let client = TcgdexClient::new()?;
//!
//! let set = client.sets().get("swsh1").await?;
//! println!("{}: {} cards", set.name, set.card_count.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use std::time::Duration;
//! use tcgdex::{Language, TcgdexClient};
//!
//! # fn example() -> tcgdex::Result<()> {
//! let client = TcgdexClient::builder()
//!     .language(Language::Ja)
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//!
//! // Or bring your own transport
//! let client = TcgdexClient::builder()
//!     .url("https://api.tcgdex.net/v2/en")
//!     .http_client(reqwest::Client::new())
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`TcgdexClient::cards()`] - Fetch and search cards
//! - [`TcgdexClient::sets()`] - Fetch and search sets, fetch a card by set and number
//! - [`TcgdexClient::series()`] - Fetch and search series
//! - [`TcgdexClient::lists()`] - Types, rarities, illustrators and other value lists
//!
//! The same operations are available through the [`Fetcher`] trait.
//!
//! Every call is a single GET. Nothing is cached or retried.

pub mod actions;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod query;
mod response;
pub mod types;

pub use client::{ClientBuilder, Language, TcgdexClient};
pub use error::{BodyKind, Error, Result};
pub use fetcher::Fetcher;
pub use query::{CardQueryOptions, SerieQueryOptions, SetQueryOptions};
pub use response::ApiError;
pub use types::{
    Abbreviation, Card, CardAbility, CardAttack, CardBrief, CardCount, CardItem, CardVariants,
    CardWeakness, Damage, Legal, Level, Serie, SerieBrief, Set, SetBrief,
};
