pub mod binding;
pub mod diagnostics;
pub mod error;
pub mod eval;
pub mod ops;
pub mod runtime;

pub use binding::{Argument, BoundArgs, OperationKind, bind};
pub use diagnostics::{CollectingSink, TracingSink, WarningSink};
pub use error::{BuildError, Warning, WarningCode};
pub use eval::{ChildEvaluator, GeometryEvaluator};
pub use ops::{
    Glide, Hull, Minkowski, Operation, OperationNode, OperationSpec, Resize, SceneNode,
    Subdivision, SubdivisionType, dump_tree,
};
pub use runtime::value::{Value, ValueKind};

// ─── Public API ───────────────────────────────────────────────────────────────

/// Build one operation node from a call's arguments and its evaluated children.
///
/// Never fails: malformed arguments fall back to defaults, and the recoverable
/// ones are reported to `sink`.
pub fn build_operation_node(
    kind: OperationKind,
    args: &[Argument],
    children: Vec<Box<dyn SceneNode>>,
    sink: &mut dyn WarningSink,
) -> OperationNode {
    OperationNode::new(OperationSpec::build(kind, args, sink), children)
}

/// Keyword entry point: look up the operation registered under `keyword`,
/// build its arguments, then ask `children` for the nested block.
#[tracing::instrument(level = "debug", skip_all, fields(keyword = %keyword))]
pub fn instantiate<C: ChildEvaluator>(
    keyword: &str,
    args: &[Argument],
    children: C,
    sink: &mut dyn WarningSink,
) -> Result<OperationNode, BuildError> {
    let kind = OperationKind::from_keyword(keyword)
        .ok_or_else(|| BuildError::UnknownOperation(keyword.to_string()))?;

    let spec = OperationSpec::build(kind, args, sink);
    let children = children.evaluate_children();
    tracing::debug!(children = children.len(), "evaluated nested block");

    Ok(OperationNode::new(spec, children))
}
