use std::fmt;

use crate::binding::{BoundArgs, OperationKind};
use crate::diagnostics::WarningSink;
use super::{Operation, convexity};

/// Minkowski sum of the children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Minkowski {
    pub convexity: i32,
}

impl Operation for Minkowski {
    const KIND: OperationKind = OperationKind::Minkowski;

    fn build(args: &BoundArgs, sink: &mut dyn WarningSink) -> Self {
        Self { convexity: convexity(args, sink) }
    }

    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "convexity = {}", self.convexity)
    }
}
