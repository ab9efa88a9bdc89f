//! Collaborator seams: where children come from and where geometry goes.

use crate::ops::{OperationNode, SceneNode};

/// Produces the already-built children of a call's nested block, in
/// evaluation order. Runs after the operation's own arguments are built.
pub trait ChildEvaluator {
    fn evaluate_children(self) -> Vec<Box<dyn SceneNode>>;
}

impl<F> ChildEvaluator for F
where
    F: FnOnce() -> Vec<Box<dyn SceneNode>>,
{
    fn evaluate_children(self) -> Vec<Box<dyn SceneNode>> { self() }
}

/// Computes geometry for a built node. This crate never implements it.
pub trait GeometryEvaluator {
    type Output;

    fn evaluate_operation(&mut self, node: &OperationNode) -> Self::Output;
}
