//! SQL literal values and tuple rendering.
//!
//! Expressions such as `now()` are emitted as-is and left for the SQL engine
//! to evaluate.

use std::fmt;

/// Opaque expression producing a fresh random UUID on the SQL side.
pub const RANDOM_UUID_EXPR: &str = "gen_random_uuid()";

/// A single value inside a row literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i64),
    Float(f64),
    /// Single-quoted string literal.
    Text(String),
    /// Opaque SQL expression, written verbatim.
    Expr(String),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    /// `now() + interval '<minutes> minute'`
    pub fn now_plus_minutes(minutes: u64) -> Self {
        SqlValue::Expr(format!("now() + interval '{minutes} minute'"))
    }

    pub fn random_uuid() -> Self {
        SqlValue::Expr(RANDOM_UUID_EXPR.to_string())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(value) => write!(f, "{value}"),
            // Postgres only accepts the special float values as quoted strings.
            SqlValue::Float(value) if value.is_nan() => f.write_str("'NaN'"),
            SqlValue::Float(value) if value.is_infinite() => {
                if value.is_sign_positive() {
                    f.write_str("'Infinity'")
                } else {
                    f.write_str("'-Infinity'")
                }
            }
            SqlValue::Float(value) => write!(f, "{value}"),
            SqlValue::Text(value) => write!(f, "'{}'", value.replace('\'', "''")),
            SqlValue::Expr(expr) => f.write_str(expr),
        }
    }
}

/// Render values as a parenthesized tuple: `(v1, v2, ...)`.
pub fn row_literal(values: &[SqlValue]) -> String {
    let mut out = String::with_capacity(values.len() * 12 + 2);
    out.push('(');
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&value.to_string());
    }
    out.push(')');
    out
}
