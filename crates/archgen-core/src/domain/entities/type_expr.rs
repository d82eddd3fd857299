//! Go type expressions and their canonical textual encoding.
//!
//! Parsers convert syntax trees into [`TypeExpr`]; emitters only ever see the
//! encoded text produced by its `Display` impl. Anonymous interface and
//! function types collapse to fixed placeholders and do not round-trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Placeholder for inline `interface { ... }` types.
pub const ANONYMOUS_INTERFACE: &str = "interface{}";

/// Placeholder for inline `func(...)` types.
pub const FUNC_PLACEHOLDER: &str = "func(...)";

/// A Go type as seen in a method signature or struct field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeExpr {
    /// `User`, `string`, `error`
    Ident(String),
    /// `context.Context`
    Qualified { package: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` (fixed-size arrays encode the same way)
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, direction dropped
    Chan(Box<TypeExpr>),
    /// `...T`, only valid as the last parameter
    Variadic(Box<TypeExpr>),
    /// Any inline interface type, including `any`-style constraints
    AnonymousInterface,
    /// Any inline function type
    Func,
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn slice(inner: TypeExpr) -> Self {
        Self::Slice(Box::new(inner))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(inner: TypeExpr) -> Self {
        Self::Chan(Box::new(inner))
    }

    pub fn variadic(inner: TypeExpr) -> Self {
        Self::Variadic(Box::new(inner))
    }

    /// Canonical text, identical to `to_string()`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Deterministic zero-value literal for this type.
    pub fn zero_value(&self) -> String {
        zero_value(&self.encode())
    }

    /// Parse the canonical encoding back into a type expression.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let text = text.trim();
        let invalid = |reason: &str| DomainError::InvalidTypeExpression {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        if text.is_empty() {
            return Err(invalid("empty type"));
        }
        if text == ANONYMOUS_INTERFACE {
            return Ok(Self::AnonymousInterface);
        }
        if text == FUNC_PLACEHOLDER {
            return Ok(Self::Func);
        }
        if let Some(rest) = text.strip_prefix("...") {
            return Ok(Self::variadic(Self::parse(rest)?));
        }
        if let Some(rest) = text.strip_prefix('*') {
            return Ok(Self::pointer(Self::parse(rest)?));
        }
        if let Some(rest) = text.strip_prefix("[]") {
            return Ok(Self::slice(Self::parse(rest)?));
        }
        if let Some(rest) = text.strip_prefix("chan ") {
            return Ok(Self::chan(Self::parse(rest)?));
        }
        if let Some(rest) = text.strip_prefix("map[") {
            let close = matching_bracket(rest).ok_or_else(|| invalid("unbalanced map key"))?;
            let key = Self::parse(&rest[..close])?;
            let value = Self::parse(&rest[close + 1..])?;
            return Ok(Self::map(key, value));
        }
        if let Some((package, name)) = text.split_once('.') {
            if is_identifier(package) && is_identifier(name) {
                return Ok(Self::qualified(package, name));
            }
            return Err(invalid("malformed qualified name"));
        }
        if is_identifier(text) {
            return Ok(Self::ident(text));
        }
        Err(invalid("unsupported type shape"))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => f.write_str(name),
            Self::Qualified { package, name } => write!(f, "{package}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Slice(inner) => write!(f, "[]{inner}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Chan(inner) => write!(f, "chan {inner}"),
            Self::Variadic(inner) => write!(f, "...{inner}"),
            Self::AnonymousInterface => f.write_str(ANONYMOUS_INTERFACE),
            Self::Func => f.write_str(FUNC_PLACEHOLDER),
        }
    }
}

/// Zero-value literal for an encoded type.
///
/// Total over all strings: anything unrecognised becomes a composite
/// literal of the type itself (`time.Time` → `time.Time{}`).
pub fn zero_value(type_text: &str) -> String {
    let t = type_text.trim();
    match t {
        "error" => "nil".into(),
        "string" => "\"\"".into(),
        "bool" => "false".into(),
        _ if is_nil_shaped(t) => "nil".into(),
        _ if is_numeric(t) => "0".into(),
        _ => format!("{t}{{}}"),
    }
}

fn is_nil_shaped(t: &str) -> bool {
    t.starts_with('*')
        || t.starts_with("[]")
        || t.starts_with("map[")
        || t.starts_with("chan ")
        || t.starts_with("func(")
        || t.contains("interface")
        || t == "any"
}

fn is_numeric(t: &str) -> bool {
    t.starts_with("int")
        || t.starts_with("uint")
        || t.starts_with("complex")
        || matches!(t, "float32" | "float64" | "byte" | "rune")
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Index of the `]` closing a `map[` whose opening bracket was already consumed.
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_every_shape() {
        let ctx = TypeExpr::qualified("context", "Context");
        assert_eq!(ctx.to_string(), "context.Context");
        assert_eq!(TypeExpr::pointer(TypeExpr::ident("User")).to_string(), "*User");
        assert_eq!(
            TypeExpr::slice(TypeExpr::pointer(TypeExpr::qualified("entity", "User"))).to_string(),
            "[]*entity.User"
        );
        assert_eq!(
            TypeExpr::map(TypeExpr::ident("string"), TypeExpr::slice(TypeExpr::ident("int")))
                .to_string(),
            "map[string][]int"
        );
        assert_eq!(TypeExpr::chan(TypeExpr::ident("Event")).to_string(), "chan Event");
        assert_eq!(
            TypeExpr::variadic(TypeExpr::ident("string")).to_string(),
            "...string"
        );
        assert_eq!(TypeExpr::AnonymousInterface.to_string(), "interface{}");
        assert_eq!(TypeExpr::Func.to_string(), "func(...)");
    }

    #[test]
    fn parses_encoded_shapes_back() {
        let cases = [
            TypeExpr::ident("error"),
            TypeExpr::qualified("sql", "DB"),
            TypeExpr::pointer(TypeExpr::pointer(TypeExpr::ident("Node"))),
            TypeExpr::map(
                TypeExpr::map(TypeExpr::ident("string"), TypeExpr::ident("int")),
                TypeExpr::chan(TypeExpr::qualified("time", "Time")),
            ),
            TypeExpr::variadic(TypeExpr::slice(TypeExpr::ident("byte"))),
        ];
        for case in cases {
            assert_eq!(TypeExpr::parse(&case.to_string()).unwrap(), case);
        }
    }

    #[test]
    fn anonymous_types_are_lossy() {
        // An expanded func type cannot come back; only the placeholder parses.
        assert!(TypeExpr::parse("func(int) error").is_err());
        assert_eq!(TypeExpr::parse("func(...)").unwrap(), TypeExpr::Func);
    }

    #[test]
    fn rejects_garbage() {
        assert!(TypeExpr::parse("").is_err());
        assert!(TypeExpr::parse("map[string").is_err());
        assert!(TypeExpr::parse("a.b.c").is_err());
    }

    #[test]
    fn zero_values() {
        assert_eq!(zero_value("error"), "nil");
        assert_eq!(zero_value("string"), "\"\"");
        assert_eq!(zero_value("int64"), "0");
        assert_eq!(zero_value("uint8"), "0");
        assert_eq!(zero_value("float64"), "0");
        assert_eq!(zero_value("bool"), "false");
        assert_eq!(zero_value("*User"), "nil");
        assert_eq!(zero_value("[]*User"), "nil");
        assert_eq!(zero_value("map[string]int"), "nil");
        assert_eq!(zero_value("interface{}"), "nil");
        assert_eq!(zero_value("any"), "nil");
        assert_eq!(zero_value("chan int"), "nil");
        assert_eq!(zero_value("time.Time"), "time.Time{}");
        assert_eq!(zero_value("User"), "User{}");
    }

    #[test]
    fn zero_value_is_referentially_transparent() {
        for t in ["error", "User", "map[a]b", "whatever"] {
            assert_eq!(zero_value(t), zero_value(t));
        }
        let expr = TypeExpr::pointer(TypeExpr::ident("User"));
        assert_eq!(expr.zero_value(), zero_value("*User"));
    }
}
