pub mod client;
pub mod error;
pub mod params;

pub use client::SolrClient;
pub use error::SolrError;
pub use params::SearchParams;
