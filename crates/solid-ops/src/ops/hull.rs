use std::fmt;

use crate::binding::{BoundArgs, OperationKind};
use crate::diagnostics::WarningSink;
use super::Operation;

/// Convex hull of the children. Takes no parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hull;

impl Operation for Hull {
    const KIND: OperationKind = OperationKind::Hull;

    fn build(_args: &BoundArgs, _sink: &mut dyn WarningSink) -> Self { Hull }

    fn write_params(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result { Ok(()) }
}
