//! Serie operations.

use crate::client::TcgdexClient;
use crate::error::Result;
use crate::query::SerieQueryOptions;
use crate::types::{Serie, SerieBrief};

/// Provides access to serie operations.
///
/// Obtained via [`TcgdexClient::series()`].
#[derive(Debug)]
pub struct SerieActions<'a> {
    pub(crate) client: &'a TcgdexClient,
}

impl SerieActions<'_> {
    /// Fetch a serie with the briefs of its sets (`/series/{id}`).
    pub async fn get(&self, serie_id: &str) -> Result<Serie> {
        self.client
            .invoke("get serie", &["series", serie_id])
            .await
    }

    /// Search series (`/series?...`).
    pub async fn search(&self, options: &SerieQueryOptions) -> Result<Vec<SerieBrief>> {
        self.client
            .invoke_with_query("search series", &["series"], options)
            .await
    }
}
