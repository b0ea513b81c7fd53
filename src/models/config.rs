//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::query::PagingOptions;

fn default_page_size() -> usize {
    PagingOptions::default().default_page_size
}

fn default_max_page_size() -> usize {
    PagingOptions::default().max_page_size
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Page size used when a client does not ask for one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Upper bound silently applied to client supplied page sizes.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

impl ServerConfig {
    pub fn paging(&self) -> PagingOptions {
        PagingOptions::new(self.default_page_size, self.max_page_size)
    }
}
