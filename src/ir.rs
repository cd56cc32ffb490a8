use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Semantic category assigned to a file by the upstream analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Shared,
    Infrastructure,
    Test,
    Config,
    Folder,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Shared => "shared",
            Self::Infrastructure => "infrastructure",
            Self::Test => "test",
            Self::Config => "config",
            Self::Folder => "folder",
            Self::Unknown => "unknown",
        }
    }
}

/// Architectural role of a file, used to sub-group files inside a domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Entry,
    Page,
    Component,
    Hook,
    Context,
    Store,
    Service,
    Controller,
    Route,
    Middleware,
    Model,
    Utility,
    Type,
    Config,
    Test,
    Style,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub const ALL: [Role; 17] = [
        Role::Entry,
        Role::Page,
        Role::Component,
        Role::Hook,
        Role::Context,
        Role::Store,
        Role::Service,
        Role::Controller,
        Role::Route,
        Role::Middleware,
        Role::Model,
        Role::Utility,
        Role::Type,
        Role::Config,
        Role::Test,
        Role::Style,
        Role::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Page => "page",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::Context => "context",
            Self::Store => "store",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Route => "route",
            Self::Middleware => "middleware",
            Self::Model => "model",
            Self::Utility => "utility",
            Self::Type => "type",
            Self::Config => "config",
            Self::Test => "test",
            Self::Style => "style",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Top-level grouping. `Frontend` is the primary domain and is laid out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Frontend,
    Backend,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Frontend, Domain::Backend];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::Frontend
    }
}

/// Descriptive data carried through the layout untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePayload {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub lines: Option<u64>,
    #[serde(default)]
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    pub id: String,
    pub label: String,
    pub path: String,
    pub category: Category,
    pub role: Role,
    pub payload: NodePayload,
}

impl FileNode {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        let id = id.into();
        let path = path.into();
        let label = match path.trim_end_matches('/').rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment.to_string(),
            _ => id.clone(),
        };
        Self {
            id,
            label,
            path,
            category: Category::Unknown,
            role: Role::Unknown,
            payload: NodePayload::default(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.payload.language = Some(language.into());
        self
    }

    pub fn language(&self) -> Option<&str> {
        self.payload.language.as_deref()
    }
}

/// `source` depends on (imports) `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    #[serde(alias = "from")]
    pub source: String,
    #[serde(alias = "to")]
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A snapshot of the analyzed codebase. Node ids are expected to be unique;
/// node order is the tie-break for every ordering the layout performs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    pub nodes: Vec<FileNode>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: FileNode) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.edges.push(Edge::new(source, target));
    }

    /// Maps each id to its position in `nodes`. A duplicated id maps to its
    /// last occurrence.
    pub fn node_index(&self) -> HashMap<&str, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id.as_str(), idx))
            .collect()
    }

}
