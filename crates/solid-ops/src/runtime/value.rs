use std::fmt::{self, Write};

// ─── Value ────────────────────────────────────────────────────────────────────

/// Runtime type discriminator of a `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Undefined,
    Bool,
    Number,
    String,
    Vector,
    Range,
}

/// A dynamically-typed value produced by expression evaluation.
///
/// Every coercion (`to_f64`, `to_bool`, `to_text`, `to_vector`) is total:
/// a value of the wrong type degrades to a fixed fallback instead of failing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Bool(bool),
    Number(f64),
    Str(String),
    Vector(Vec<Value>),
    Range { begin: f64, step: f64, end: f64 },
}

impl Value {
    pub fn vector<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Vector(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined    => ValueKind::Undefined,
            Value::Bool(_)      => ValueKind::Bool,
            Value::Number(_)    => ValueKind::Number,
            Value::Str(_)       => ValueKind::String,
            Value::Vector(_)    => ValueKind::Vector,
            Value::Range { .. } => ValueKind::Range,
        }
    }

    pub fn is_undefined(&self) -> bool { matches!(self, Value::Undefined) }

    /// Numbers pass through; everything else is `0.0`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Number(x) => *x,
            _ => 0.0,
        }
    }

    /// Truncates toward zero. Out-of-range values saturate, NaN becomes 0.
    pub fn to_i32(&self) -> i32 { self.to_f64() as i32 }

    pub fn to_bool(&self) -> bool {
        match self {
            Value::Undefined    => false,
            Value::Bool(b)      => *b,
            Value::Number(x)    => *x != 0.0,
            Value::Str(s)       => !s.is_empty(),
            Value::Vector(v)    => !v.is_empty(),
            Value::Range { .. } => true,
        }
    }

    /// String form: the raw text of a string, the literal form of anything else.
    pub fn to_text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Vector elements, or an empty slice for non-vectors.
    pub fn to_vector(&self) -> &[Value] {
        match self {
            Value::Vector(items) => items,
            _ => &[],
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Number(x) }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self { Value::Number(f64::from(x)) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Str(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Value::Vector(items) }
}

// ─── Literal form ─────────────────────────────────────────────────────────────

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undef"),
            Value::Bool(b)   => write!(f, "{b}"),
            Value::Number(x) => f.write_str(&format_number(*x)),
            Value::Str(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"'  => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        c    => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
            Value::Vector(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { f.write_str(", ")?; }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Range { begin, step, end } => write!(
                f, "[{} : {} : {}]",
                format_number(*begin), format_number(*step), format_number(*end),
            ),
        }
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// Shortest `%g`-style rendering: six significant digits, trailing zeros
/// dropped, scientific notation below 1e-4 or from 1e6 up.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
        trim_fraction(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
