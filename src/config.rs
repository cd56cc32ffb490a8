use crate::ir::Domain;
use crate::layout::FilterSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidLength { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero")]
    ZeroLength { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainLabels {
    pub frontend: String,
    pub backend: String,
}

impl Default for DomainLabels {
    fn default() -> Self {
        Self {
            frontend: "Frontend".to_string(),
            backend: "Backend".to_string(),
        }
    }
}

impl DomainLabels {
    pub fn get(&self, domain: Domain) -> &str {
        match domain {
            Domain::Frontend => &self.frontend,
            Domain::Backend => &self.backend,
        }
    }
}

/// Spacing and sizing constants for the three-level layout.
///
/// File nodes are laid out on a `columns`-wide grid inside their role box;
/// role boxes flow left to right inside their domain and wrap once a row
/// would cross `max_row_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub node_height: f32,
    pub node_gap_x: f32,
    pub node_gap_y: f32,
    /// Inner padding of a role box, left/right of the grid and below it.
    pub role_padding: f32,
    /// Space reserved at the top of a role box for its label.
    pub role_header_height: f32,
    pub columns: usize,
    pub min_role_width: f32,
    pub min_role_height: f32,
    pub domain_padding: f32,
    pub domain_header_height: f32,
    pub role_gap_x: f32,
    pub role_gap_y: f32,
    /// Wrap threshold for a row of role boxes, measured from the domain's
    /// left edge.
    pub max_row_width: f32,
    pub min_domain_width: f32,
    pub min_domain_height: f32,
    pub domain_gap_x: f32,
    pub domain_labels: DomainLabels,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 180.0,
            node_height: 40.0,
            node_gap_x: 12.0,
            node_gap_y: 12.0,
            role_padding: 16.0,
            role_header_height: 36.0,
            columns: 2,
            min_role_width: 220.0,
            min_role_height: 100.0,
            domain_padding: 24.0,
            domain_header_height: 48.0,
            role_gap_x: 24.0,
            role_gap_y: 24.0,
            max_row_width: 1200.0,
            min_domain_width: 400.0,
            min_domain_height: 200.0,
            domain_gap_x: 80.0,
            domain_labels: DomainLabels::default(),
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        let lengths = [
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("nodeGapX", self.node_gap_x),
            ("nodeGapY", self.node_gap_y),
            ("rolePadding", self.role_padding),
            ("roleHeaderHeight", self.role_header_height),
            ("minRoleWidth", self.min_role_width),
            ("minRoleHeight", self.min_role_height),
            ("domainPadding", self.domain_padding),
            ("domainHeaderHeight", self.domain_header_height),
            ("roleGapX", self.role_gap_x),
            ("roleGapY", self.role_gap_y),
            ("maxRowWidth", self.max_row_width),
            ("minDomainWidth", self.min_domain_width),
            ("minDomainHeight", self.min_domain_height),
            ("domainGapX", self.domain_gap_x),
        ];
        for (field, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        for (field, value) in [
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("maxRowWidth", self.max_row_width),
        ] {
            if value == 0.0 {
                return Err(ConfigError::ZeroLength { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub filter: FilterSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterConfigFile {
    search: Option<String>,
    language: Option<String>,
    role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutConfig>,
    filter: Option<FilterConfigFile>,
}

/// Loads a JSON5 config file over the defaults. Without a path the defaults
/// are returned unchanged.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed = parse_config_file(&contents)?;

    if let Some(layout) = parsed.layout {
        config.layout = layout;
    }
    if let Some(filter) = parsed.filter {
        if let Some(search) = filter.search {
            config.filter.search = search;
        }
        if let Some(language) = filter.language {
            config.filter.language = FilterSpec::parse_language(&language);
        }
        if let Some(role) = filter.role {
            config.filter.role = FilterSpec::parse_role(&role)?;
        }
    }

    config.layout.validate()?;
    tracing::debug!(path = %path.display(), "loaded layout config");
    Ok(config)
}

fn parse_config_file(contents: &str) -> anyhow::Result<ConfigFile> {
    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(json5::from_str(contents)?)
}
