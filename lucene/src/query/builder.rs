//! Expression tree builder for Lucene queries.

use std::fmt;

use super::value::{Keyword, Range, Value};

/// Field label used when an index scope has no name.
const DEFAULT_FIELD: &str = "default";

/// A node in the query expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Boolean operator (AND, OR)
    Keyword(Keyword),
    /// Field scope: name:(...)
    Index(Index),
    /// Parenthesized sub-query
    Group(Query),
    /// Literal value
    Value(Value),
    /// Inclusive range
    Range(Range),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Keyword(k) => fmt::Display::fmt(k, f),
            Component::Index(i) => fmt::Display::fmt(i, f),
            Component::Group(q) => fmt::Display::fmt(q, f),
            Component::Value(v) => fmt::Display::fmt(v, f),
            Component::Range(r) => fmt::Display::fmt(r, f),
        }
    }
}

/// Ordered list of components, rendered space-separated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentList(Vec<Component>);

impl ComponentList {
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, component: Component) {
        self.0.push(component);
    }

    fn push_index(&mut self, index: Index) -> &mut Index {
        self.0.push(Component::Index(index));
        match self.0.last_mut() {
            Some(Component::Index(index)) => index,
            _ => unreachable!("last component is the index just pushed"),
        }
    }

    fn push_group(&mut self, group: Query) -> &mut Query {
        self.0.push(Component::Group(group));
        match self.0.last_mut() {
            Some(Component::Group(group)) => group,
            _ => unreachable!("last component is the group just pushed"),
        }
    }
}

impl fmt::Display for ComponentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ComponentList {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A query expression: the root of a tree, or a parenthesized group inside one.
///
/// Clauses render left to right in the order they were added.
///
/// ```
/// use cloudant_lucene::Query;
///
/// let mut q = Query::new();
/// q.index("type").is("issue");
/// q.and();
/// q.group().index("priority").range(1, 3);
/// assert_eq!(q.to_string(), r#"type:("issue") AND (priority:([1 TO 3]))"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    is_group: bool,
    components: ComponentList,
}

impl Query {
    /// Create an empty root query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parenthesized sub-query and return it for chaining.
    pub fn group(&mut self) -> &mut Query {
        self.components.push_group(Query {
            is_group: true,
            components: ComponentList::default(),
        })
    }

    /// Append a field scope and return it for chaining.
    ///
    /// An empty name targets the default field.
    pub fn index(&mut self, name: impl Into<String>) -> &mut Index {
        self.components.push_index(Index::new(name))
    }

    pub fn and(&mut self) {
        self.components.push(Component::Keyword(Keyword::And));
    }

    pub fn or(&mut self) {
        self.components.push(Component::Keyword(Keyword::Or));
    }

    pub fn is_group(&self) -> bool {
        self.is_group
    }

    /// Check if no clauses have been added.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of top-level clauses, operators included.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &ComponentList {
        &self.components
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_group {
            write!(f, "({})", self.components)
        } else {
            fmt::Display::fmt(&self.components, f)
        }
    }
}

/// A field scope: clauses constrained to a single index field.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    name: String,
    components: ComponentList,
}

impl Index {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: ComponentList::default(),
        }
    }

    /// Field name; empty for the default field.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &ComponentList {
        &self.components
    }

    pub fn and(&mut self) -> &mut Self {
        self.components.push(Component::Keyword(Keyword::And));
        self
    }

    pub fn or(&mut self) -> &mut Self {
        self.components.push(Component::Keyword(Keyword::Or));
        self
    }

    /// Match a value.
    pub fn is(&mut self, value: impl Into<Value>) -> &mut Self {
        self.components.push(Component::Value(value.into()));
        self
    }

    /// Match an inclusive range of values.
    pub fn range(&mut self, lower: impl Into<Value>, upper: impl Into<Value>) -> &mut Self {
        self.components.push(Component::Range(Range::new(lower, upper)));
        self
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            DEFAULT_FIELD
        } else {
            &self.name
        };
        write!(f, "{}:({})", name, self.components)
    }
}
