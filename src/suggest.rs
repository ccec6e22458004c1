//! Suggestion fetching
//!
//! Sources answer a query with an ordered list of textures. Fetches run on
//! a background worker thread; the UI talks to it through
//! [`SuggestionFetcher`] and never blocks on a request.

mod catalog;
mod fetcher;
mod http;
mod provider;
mod worker;

pub use catalog::Catalog;
pub use fetcher::SuggestionFetcher;
pub use http::HttpClient;
pub use provider::{FetchError, SuggestionProvider};
pub use worker::{FetchRequest, FetchResponse};
