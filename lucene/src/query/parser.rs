//! Parser for the `field:value` shorthand syntax.

use log::{debug, trace};

use super::builder::Query;
use crate::config::FieldAliases;

/// Parse shorthand input into a query.
///
/// Input is split on spaces. A `prefix:value` token whose prefix is a known
/// alias becomes a clause on the aliased field; every other token becomes a
/// clause on the default field with the whole token as its value. Clauses
/// are joined with `AND`.
///
/// Returns the query and whether any clause was added. The query is always
/// usable, even when nothing matched.
pub fn parse_query(input: &str, aliases: &FieldAliases) -> (Query, bool) {
    let mut query = Query::new();
    let mut accepted = 0;

    for token in input.split(' ').filter(|t| !t.is_empty()) {
        if accepted > 0 {
            query.and();
        }

        match try_parse_field(token, aliases) {
            Some((field, value)) => {
                trace!("shorthand token {:?} -> field {:?}", token, field);
                query.index(field).is(value);
            }
            None => {
                if token.contains(':') {
                    debug!("unknown field in shorthand token {:?}, using default field", token);
                }
                query.index("").is(token);
            }
        }

        accepted += 1;
    }

    (query, accepted > 0)
}

/// Try to split a token into a known field and its value (`prefix:value`).
fn try_parse_field<'a>(token: &'a str, aliases: &'a FieldAliases) -> Option<(&'a str, &'a str)> {
    let (prefix, value) = token.split_once(':')?;

    // Empty halves are not a field clause
    if prefix.is_empty() || value.is_empty() {
        return None;
    }

    let field = aliases.resolve(prefix)?;
    Some((field, value))
}
