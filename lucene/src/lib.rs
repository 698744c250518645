//! Cloudant Lucene: query construction for Cloudant search indexes.
//!
//! Builds Lucene-syntax query strings from a typed expression tree and parses
//! a `field:value` shorthand into that tree. Queries are only produced here;
//! running them against a search service is left to the caller.

pub mod config;
pub mod error;
pub mod escape;
pub mod query;

pub use config::FieldAliases;
pub use error::{Error, Result};
pub use escape::escape;
pub use query::{parse_query, Component, ComponentList, Index, Keyword, Query, Range, Value};
