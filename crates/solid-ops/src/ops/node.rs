use std::fmt;

use crate::binding::OperationKind;
use crate::eval::GeometryEvaluator;
use crate::runtime::value::Value;
use super::{OperationSpec, SubdivisionType};

// ─── Scene node interface ─────────────────────────────────────────────────────

/// What a tree collaborator needs from any node: identity, description and
/// owned children. Leaf primitives live outside this crate and implement it
/// themselves.
pub trait SceneNode: fmt::Debug {
    fn name(&self) -> &str;

    /// Canonical, byte-stable description of this node alone.
    fn describe(&self) -> String;

    fn children(&self) -> &[Box<dyn SceneNode>] { &[] }
}

// ─── OperationNode ────────────────────────────────────────────────────────────

/// One built operation and the children it owns. Read-only once constructed.
#[derive(Debug)]
pub struct OperationNode {
    spec: OperationSpec,
    children: Vec<Box<dyn SceneNode>>,
}

impl OperationNode {
    pub fn new(spec: OperationSpec, children: Vec<Box<dyn SceneNode>>) -> Self {
        Self { spec, children }
    }

    pub fn spec(&self) -> &OperationSpec { &self.spec }

    pub fn kind(&self) -> OperationKind { self.spec.kind() }

    pub fn name(&self) -> &'static str { self.spec.name() }

    pub fn children(&self) -> &[Box<dyn SceneNode>] { &self.children }

    pub fn convexity(&self) -> Option<i32> {
        match &self.spec {
            OperationSpec::Minkowski(op)   => Some(op.convexity),
            OperationSpec::Glide(op)       => Some(op.convexity),
            OperationSpec::Subdivision(op) => Some(op.convexity),
            OperationSpec::Hull(_) | OperationSpec::Resize(_) => None,
        }
    }

    pub fn path(&self) -> Option<&Value> {
        match &self.spec {
            OperationSpec::Glide(op) => Some(&op.path),
            _ => None,
        }
    }

    pub fn level(&self) -> Option<u32> {
        match &self.spec {
            OperationSpec::Subdivision(op) => Some(op.level),
            _ => None,
        }
    }

    pub fn subdivision_type(&self) -> Option<SubdivisionType> {
        match &self.spec {
            OperationSpec::Subdivision(op) => Some(op.subdivision),
            _ => None,
        }
    }

    pub fn new_size(&self) -> Option<[f64; 3]> {
        match &self.spec {
            OperationSpec::Resize(op) => Some(op.new_size),
            _ => None,
        }
    }

    pub fn auto_size(&self) -> Option<[bool; 3]> {
        match &self.spec {
            OperationSpec::Resize(op) => Some(op.auto_size),
            _ => None,
        }
    }

    /// Hand this node to the geometry evaluator.
    pub fn evaluate<E: GeometryEvaluator>(&self, evaluator: &mut E) -> E::Output {
        evaluator.evaluate_operation(self)
    }
}

impl fmt::Display for OperationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(&self.spec, f) }
}

impl SceneNode for OperationNode {
    fn name(&self) -> &str { self.spec.name() }

    fn describe(&self) -> String { self.spec.to_string() }

    fn children(&self) -> &[Box<dyn SceneNode>] { &self.children }
}

// ─── Tree dump ────────────────────────────────────────────────────────────────

/// Render a node and its subtree, two spaces per level:
///
/// ```text
/// hull() {
///   cube();
///   sphere();
/// }
/// ```
pub fn dump_tree(node: &dyn SceneNode) -> String {
    let mut out = String::new();
    dump_into(node, 0, &mut out);
    out
}

fn dump_into(node: &dyn SceneNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push_str(&node.describe());

    let children = node.children();
    if children.is_empty() {
        out.push_str(";\n");
        return;
    }
    out.push_str(" {\n");
    for child in children {
        dump_into(child.as_ref(), depth + 1, out);
    }
    out.push_str(&indent);
    out.push_str("}\n");
}
