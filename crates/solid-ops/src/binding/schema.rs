//! Operation descriptor table: keyword, kind and positional parameter order
//! for every built-in operation.
//!
//! The table is fixed at compile time: nothing registers into it at runtime
//! and nothing mutates it afterwards.

/// The closed set of operations this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Minkowski,
    Glide,
    Subdivision,
    Hull,
    Resize,
}

pub struct OperationDesc {
    pub kind: OperationKind,
    /// Call-site keyword, also the node's `name()`.
    pub keyword: &'static str,
    /// Parameter names positional arguments bind to, left to right.
    pub params: &'static [&'static str],
}

// Indexed by `OperationKind as usize`; order must follow the enum.
static OPERATIONS: [OperationDesc; 5] = [
    OperationDesc { kind: OperationKind::Minkowski,   keyword: "minkowski", params: &["convexity"] },
    OperationDesc { kind: OperationKind::Glide,       keyword: "glide",     params: &["path", "convexity"] },
    OperationDesc { kind: OperationKind::Subdivision, keyword: "subdiv",    params: &["level", "type", "convexity"] },
    OperationDesc { kind: OperationKind::Hull,        keyword: "hull",      params: &[] },
    OperationDesc { kind: OperationKind::Resize,      keyword: "resize",    params: &["newsize", "auto"] },
];

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Minkowski,
        OperationKind::Glide,
        OperationKind::Subdivision,
        OperationKind::Hull,
        OperationKind::Resize,
    ];

    pub fn desc(self) -> &'static OperationDesc { &OPERATIONS[self as usize] }

    pub fn keyword(self) -> &'static str { self.desc().keyword }

    pub fn params(self) -> &'static [&'static str] { self.desc().params }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        OPERATIONS.iter().find(|d| d.keyword == keyword).map(|d| d.kind)
    }
}
