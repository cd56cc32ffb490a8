#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ConfigError, LayoutConfig, load_config};
pub use ir::{Category, Domain, Edge, FileNode, Graph, NodePayload, Role};
pub use layout::{
    DomainBox, FilterSpec, LayoutEngine, LayoutResult, PositionedNode, RoleBox, Selection,
    apply_filter, compute_layout,
};
pub use layout_dump::{LayoutDump, write_layout_dump};
pub use parser::{ParseError, parse_graph};
