//! Operation payloads, one struct per `OperationKind` with its own builder,
//! and the node that wraps them.
//!
//! Adding an operation = one descriptor in `binding::schema`, one payload
//! module here, one arm in `OperationSpec`.

use std::fmt;

use crate::binding::{Argument, BoundArgs, OperationKind, bind};
use crate::diagnostics::WarningSink;

pub mod minkowski;
pub mod glide;
pub mod subdiv;
pub mod hull;
pub mod resize;
pub mod node;

pub use minkowski::Minkowski;
pub use glide::Glide;
pub use subdiv::{Subdivision, SubdivisionType};
pub use hull::Hull;
pub use resize::Resize;
pub use node::{OperationNode, SceneNode, dump_tree};

// ─── Operation trait ──────────────────────────────────────────────────────────

/// Per-kind payload: how to build it from bound arguments and how to print
/// its parameter list.
pub trait Operation: Sized + Into<OperationSpec> {
    const KIND: OperationKind;

    fn build(args: &BoundArgs, sink: &mut dyn WarningSink) -> Self;

    /// Write `attr = value` pairs, comma separated, without parentheses.
    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Shared by minkowski, glide and subdiv: truncated numeric value, undefined
/// and non-numbers count as 0.
pub(crate) fn convexity(args: &BoundArgs, sink: &mut dyn WarningSink) -> i32 {
    args.lookup("convexity", true, sink).to_i32()
}

// ─── OperationSpec ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum OperationSpec {
    Minkowski(Minkowski),
    Glide(Glide),
    Subdivision(Subdivision),
    Hull(Hull),
    Resize(Resize),
}

impl OperationSpec {
    /// Bind `args` against the kind's schema and run its builder.
    pub fn build(kind: OperationKind, args: &[Argument], sink: &mut dyn WarningSink) -> Self {
        let bound = bind(kind.params(), args);
        let spec = match kind {
            OperationKind::Minkowski   => build_as::<Minkowski>(&bound, sink),
            OperationKind::Glide       => build_as::<Glide>(&bound, sink),
            OperationKind::Subdivision => build_as::<Subdivision>(&bound, sink),
            OperationKind::Hull        => build_as::<Hull>(&bound, sink),
            OperationKind::Resize      => build_as::<Resize>(&bound, sink),
        };
        tracing::debug!(%spec, "built operation");
        spec
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Minkowski(_)   => Minkowski::KIND,
            Self::Glide(_)       => Glide::KIND,
            Self::Subdivision(_) => Subdivision::KIND,
            Self::Hull(_)        => Hull::KIND,
            Self::Resize(_)      => Resize::KIND,
        }
    }

    pub fn name(&self) -> &'static str { self.kind().keyword() }
}

fn build_as<O: Operation>(args: &BoundArgs, sink: &mut dyn WarningSink) -> OperationSpec {
    O::build(args, sink).into()
}

impl fmt::Display for OperationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        match self {
            Self::Minkowski(op)   => op.write_params(f)?,
            Self::Glide(op)       => op.write_params(f)?,
            Self::Subdivision(op) => op.write_params(f)?,
            Self::Hull(op)        => op.write_params(f)?,
            Self::Resize(op)      => op.write_params(f)?,
        }
        f.write_str(")")
    }
}

macro_rules! into_spec {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for OperationSpec {
                fn from(op: $variant) -> Self { OperationSpec::$variant(op) }
            }
        )*
    };
}

into_spec!(Minkowski, Glide, Subdivision, Hull, Resize);
