//! Corpus layer: immutable document store, metadata filters, lexical scoring,
//! and ranked retrieval.

mod error;
pub use error::StoreError;

pub mod autocomplete;
pub mod filter;
pub mod retriever;
pub mod scorer;
mod store;

pub use retriever::{Retrieval, Retriever};
pub use scorer::{Query, Scorer};
pub use store::DocumentStore;
