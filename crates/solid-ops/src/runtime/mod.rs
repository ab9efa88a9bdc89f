pub mod value;

pub use value::{Value, ValueKind, format_number};
