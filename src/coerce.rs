//! Weak scalar coercion.
//!
//! User configuration is loosely typed: a tab width may arrive as `"4"`, a
//! flag as `1`, a CSS prefix as `42`. Before structural decoding, every leaf
//! whose target kind is known is passed through [`coerce`], which applies the
//! table below and nothing else:
//!
//! | Target  | Input            | Result                                   |
//! |---------|------------------|------------------------------------------|
//! | string  | integer / float  | decimal representation                   |
//! | string  | bool             | `"1"` / `"0"`                            |
//! | bool    | integer / float  | non-zero is `true`                       |
//! | bool    | string           | see [`parse_bool`]; empty is `false`     |
//! | integer | bool             | `1` / `0`                                |
//! | integer | float            | truncated                                |
//! | integer | string           | parsed; empty is `0`                     |
//! | float   | integer / bool   | widened                                  |
//! | float   | string           | parsed; empty is `0.0`                   |
//! | array   | scalar           | one-element array                        |
//! | array   | array            | each element coerced to the element kind |
//!
//! The element kind of a list comes from the first element of its default.
//! Lists declared empty (`default = []`) hold strings.
//!
//! Anything outside the table is returned untouched, so the decoder reports
//! it as a type mismatch.

use confique::meta::{Expr, LeafKind};
use toml::Value;

/// The value kind a schema leaf expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Str,
    Integer,
    Float,
    Bool,
    Array(Element),
    Map,
}

/// The value kind of a list's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Str,
    Integer,
    Float,
    Bool,
}

impl Element {
    fn of_expr(expr: &Expr) -> Option<Self> {
        match Target::of_expr(expr)? {
            Target::Str => Some(Element::Str),
            Target::Integer => Some(Element::Integer),
            Target::Float => Some(Element::Float),
            Target::Bool => Some(Element::Bool),
            Target::Array(_) | Target::Map => None,
        }
    }

    fn target(self) -> Target {
        match self {
            Element::Str => Target::Str,
            Element::Integer => Target::Integer,
            Element::Float => Target::Float,
            Element::Bool => Target::Bool,
        }
    }
}

impl Target {
    /// Infer the target kind from a leaf's declared default.
    ///
    /// Leaves without a default carry no type information and are not coerced.
    pub fn of_leaf(kind: &LeafKind) -> Option<Self> {
        match kind {
            LeafKind::Required { default: Some(expr) } => Self::of_expr(expr),
            _ => None,
        }
    }

    fn of_expr(expr: &Expr) -> Option<Self> {
        match expr {
            Expr::Str(_) => Some(Target::Str),
            Expr::Integer(_) => Some(Target::Integer),
            Expr::Float(_) => Some(Target::Float),
            Expr::Bool(_) => Some(Target::Bool),
            Expr::Array(items) => Some(Target::Array(
                items
                    .first()
                    .and_then(Element::of_expr)
                    .unwrap_or(Element::Str),
            )),
            Expr::Map(_) => Some(Target::Map),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

/// Coerce `value` toward `target` using the weak coercion table.
pub fn coerce(value: Value, target: Target) -> Value {
    match (target, value) {
        (Target::Str, Value::Integer(i)) => Value::String(i.to_string()),
        (Target::Str, Value::Float(f)) => Value::String(f.to_string()),
        (Target::Str, Value::Boolean(b)) => Value::String(if b { "1" } else { "0" }.into()),

        (Target::Bool, Value::Integer(i)) => Value::Boolean(i != 0),
        (Target::Bool, Value::Float(f)) => Value::Boolean(f != 0.0),
        (Target::Bool, Value::String(s)) if s.is_empty() => Value::Boolean(false),
        (Target::Bool, Value::String(s)) => match parse_bool(&s) {
            Some(b) => Value::Boolean(b),
            None => Value::String(s),
        },

        (Target::Integer, Value::Boolean(b)) => Value::Integer(i64::from(b)),
        (Target::Integer, Value::Float(f)) => Value::Integer(f as i64),
        (Target::Integer, Value::String(s)) if s.is_empty() => Value::Integer(0),
        (Target::Integer, Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::String(s),
        },

        (Target::Float, Value::Integer(i)) => Value::Float(i as f64),
        (Target::Float, Value::Boolean(b)) => Value::Float(if b { 1.0 } else { 0.0 }),
        (Target::Float, Value::String(s)) if s.is_empty() => Value::Float(0.0),
        (Target::Float, Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::String(s),
        },

        (Target::Array(element), Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|v| coerce(v, element.target()))
                .collect(),
        ),
        (
            Target::Array(element),
            v @ (Value::String(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::Boolean(_)
            | Value::Datetime(_)),
        ) => Value::Array(vec![coerce(v, element.target())]),

        (_, v) => v,
    }
}

/// Parse the boolean spellings accepted in configuration values.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
