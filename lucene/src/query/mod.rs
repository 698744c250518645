//! Lucene query construction for Cloudant search indexes.
//!
//! # Output grammar
//!
//! ```text
//! query       := clause (" " clause)*
//! clause      := group | field_scope | operator
//! group       := "(" query ")"
//! field_scope := fieldname ":(" query ")"
//! operator    := "AND" | "OR"
//! range       := "[" leaf " TO " leaf "]"
//! ```
//!
//! - **Builder**: [`Query`], [`Index`] and [`Component`] form the expression tree
//! - **Leaves**: [`Value`], [`Range`] and [`Keyword`]
//! - **Shorthand**: [`parse_query`] turns `field:value` input into a [`Query`]

mod builder;
mod parser;
mod value;

pub use builder::{Component, ComponentList, Index, Query};
pub use parser::parse_query;
pub use value::{Keyword, Range, Value};
