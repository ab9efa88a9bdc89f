use std::fmt;

use crate::binding::{BoundArgs, OperationKind};
use crate::diagnostics::WarningSink;
use crate::runtime::value::Value;
use super::{Operation, convexity};

/// Sweep of the children along `path`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Glide {
    /// Passed through untouched; the geometry evaluator interprets it.
    pub path: Value,
    pub convexity: i32,
}

impl Operation for Glide {
    const KIND: OperationKind = OperationKind::Glide;

    fn build(args: &BoundArgs, sink: &mut dyn WarningSink) -> Self {
        let convexity = convexity(args, sink);
        let path = args.lookup("path", false, sink).clone();
        Self { path, convexity }
    }

    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path = {}, convexity = {}", self.path, self.convexity)
    }
}
