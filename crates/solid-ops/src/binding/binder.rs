use std::collections::HashMap;

use crate::diagnostics::WarningSink;
use crate::error::{Warning, WarningCode};
use crate::runtime::value::Value;

static UNDEFINED: Value = Value::Undefined;

// ─── Call arguments ───────────────────────────────────────────────────────────

/// One evaluated call argument. `name: None` means positional.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<String>,
    pub value: Value,
}

impl Argument {
    pub fn positional(value: impl Into<Value>) -> Self {
        Self { name: None, value: value.into() }
    }

    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: Some(name.into()), value: value.into() }
    }

    /// Pair up parallel name/value lists. An empty name marks a positional
    /// argument. Extra entries on the longer side are dropped.
    pub fn from_parallel<S: AsRef<str>>(names: &[S], values: Vec<Value>) -> Vec<Argument> {
        names.iter()
            .zip(values)
            .map(|(name, value)| match name.as_ref() {
                "" => Argument::positional(value),
                n  => Argument::named(n, value),
            })
            .collect()
    }
}

// ─── Bound arguments ──────────────────────────────────────────────────────────

/// Parameter name → value for one call. Every schema name is present,
/// undefined when the call did not supply it.
#[derive(Debug, Clone, Default)]
pub struct BoundArgs {
    values: HashMap<String, Value>,
}

impl BoundArgs {
    /// Bound value, or undefined.
    pub fn get(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&UNDEFINED)
    }

    /// Like `get`, but a `required` name that was neither declared nor bound
    /// is reported before falling back to undefined.
    pub fn lookup(&self, name: &str, required: bool, sink: &mut dyn WarningSink) -> &Value {
        match self.values.get(name) {
            Some(v) => v,
            None => {
                if required {
                    sink.warn(Warning::new(
                        WarningCode::W004,
                        format!("Ignoring unknown variable '{name}'."),
                    ));
                }
                &UNDEFINED
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool { self.values.contains_key(name) }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Resolve a call's arguments against an ordered parameter schema.
///
/// Named arguments bind directly, in any order, and leave the positional
/// cursor where it is. Positional arguments fill `schema` left to right;
/// once the schema is exhausted they are dropped. A repeated name keeps
/// the last value. Never fails.
pub fn bind(schema: &[&str], args: &[Argument]) -> BoundArgs {
    let mut values: HashMap<String, Value> = schema.iter()
        .map(|name| (name.to_string(), Value::Undefined))
        .collect();

    let mut cursor = 0;
    let mut dropped = 0;
    for arg in args {
        match &arg.name {
            Some(name) => {
                values.insert(name.clone(), arg.value.clone());
            }
            None => match schema.get(cursor) {
                Some(param) => {
                    values.insert(param.to_string(), arg.value.clone());
                    cursor += 1;
                }
                None => dropped += 1,
            },
        }
    }

    tracing::trace!(params = schema.len(), args = args.len(), dropped, "bound call arguments");
    BoundArgs { values }
}
