//! Leaf components: keywords, literal values and ranges.

use std::fmt;

use crate::escape::escape;

/// A token emitted verbatim, never quoted or escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `Infinity`, open upper range bound
    Infinity,
    /// `-Infinity`, open lower range bound
    NegInfinity,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Infinity => "Infinity",
            Keyword::NegInfinity => "-Infinity",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A literal value matched against a field.
///
/// Built through `From` for strings, every integer width and [`Keyword`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Text, rendered quoted and escaped
    Text(String),
    /// Signed integer, rendered in decimal
    Signed(i128),
    /// Unsigned integer, rendered in decimal
    Unsigned(u128),
    /// Keyword, rendered verbatim
    Keyword(Keyword),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "\"{}\"", escape(s)),
            Value::Signed(n) => write!(f, "{}", n),
            Value::Unsigned(n) => write!(f, "{}", n),
            Value::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<Keyword> for Value {
    fn from(k: Keyword) -> Self {
        Value::Keyword(k)
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Signed => i128: i8, i16, i32, i64, i128, isize);
impl_from_int!(Unsigned => u128: u8, u16, u32, u64, u128, usize);

/// An inclusive range between two values: `[lower TO upper]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub lower: Value,
    pub upper: Value,
}

impl Range {
    pub fn new(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} TO {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_display() {
        assert_eq!(Keyword::And.to_string(), "AND");
        assert_eq!(Keyword::Or.to_string(), "OR");
        assert_eq!(Keyword::Infinity.to_string(), "Infinity");
        assert_eq!(Keyword::NegInfinity.to_string(), "-Infinity");
    }

    #[test]
    fn test_text_value_quoted_and_escaped() {
        assert_eq!(Value::from("open").to_string(), "\"open\"");
        assert_eq!(Value::from("a/b").to_string(), "\"a\\/b\"");
        assert_eq!(Value::from(String::new()).to_string(), "\"\"");
    }

    #[test]
    fn test_signed_values() {
        assert_eq!(Value::from(-5i8).to_string(), "-5");
        assert_eq!(Value::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(Value::from(42isize).to_string(), "42");
        assert_eq!(Value::from(0i32).to_string(), "0");
    }

    #[test]
    fn test_unsigned_values() {
        assert_eq!(Value::from(7u8).to_string(), "7");
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Value::from(1000usize).to_string(), "1000");
    }

    #[test]
    fn test_keyword_value_not_quoted() {
        assert_eq!(Value::from(Keyword::Infinity).to_string(), "Infinity");
    }

    #[test]
    fn test_range_integers() {
        assert_eq!(Range::new(1, 10).to_string(), "[1 TO 10]");
    }

    #[test]
    fn test_range_infinity() {
        assert_eq!(
            Range::new(Keyword::NegInfinity, Keyword::Infinity).to_string(),
            "[-Infinity TO Infinity]"
        );
    }

    #[test]
    fn test_range_text() {
        assert_eq!(Range::new("a", "m").to_string(), "[\"a\" TO \"m\"]");
    }
}
