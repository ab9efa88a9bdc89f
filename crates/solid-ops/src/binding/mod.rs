pub mod schema;
pub mod binder;

pub use schema::{OperationDesc, OperationKind};
pub use binder::{Argument, BoundArgs, bind};
