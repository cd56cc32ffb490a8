use crate::layout::LayoutResult;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub domains: Vec<DomainDump>,
    pub roles: Vec<RoleDump>,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct DomainDump {
    pub id: String,
    pub domain: String,
    pub label: String,
    pub member_count: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleDump {
    pub id: String,
    pub parent: String,
    pub role: String,
    pub member_count: usize,
    pub weight: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute: Option<[f32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub label: String,
    pub path: String,
    pub category: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub parent: String,
    pub weight: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute: Option<[f32; 2]>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub source: String,
    pub target: String,
}

impl LayoutDump {
    /// With `absolute` set, every role box and node also carries its position
    /// composed up the containment chain.
    pub fn from_layout(layout: &LayoutResult, absolute: bool) -> Self {
        let domains = layout
            .domains
            .iter()
            .map(|domain| DomainDump {
                id: domain.id.clone(),
                domain: domain.domain.as_str().to_string(),
                label: domain.label.clone(),
                member_count: domain.member_count,
                x: domain.x,
                y: domain.y,
                width: domain.width,
                height: domain.height,
                roles: domain.roles.iter().map(|role| role.id.clone()).collect(),
            })
            .collect();

        let roles = layout
            .domains
            .iter()
            .flat_map(|domain| {
                domain.roles.iter().map(move |role| RoleDump {
                    id: role.id.clone(),
                    parent: domain.id.clone(),
                    role: role.role.as_str().to_string(),
                    member_count: role.member_count,
                    weight: role.weight,
                    x: role.x,
                    y: role.y,
                    width: role.width,
                    height: role.height,
                    nodes: role.members.clone(),
                    absolute: absolute.then(|| {
                        let rect = domain.role_absolute_rect(role);
                        [rect.x, rect.y]
                    }),
                })
            })
            .collect();

        // Absolute origin of each role box, so node lookups stay constant-time.
        let origins: HashMap<&str, [f32; 2]> = if absolute {
            layout
                .domains
                .iter()
                .flat_map(|domain| {
                    domain.roles.iter().map(move |role| {
                        let rect = domain.role_absolute_rect(role);
                        (role.id.as_str(), [rect.x, rect.y])
                    })
                })
                .collect()
        } else {
            HashMap::new()
        };

        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.node.id.clone(),
                label: node.node.label.clone(),
                path: node.node.path.clone(),
                category: node.node.category.as_str().to_string(),
                role: node.node.role.as_str().to_string(),
                language: node.node.payload.language.clone(),
                parent: node.parent.clone(),
                weight: node.weight,
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                absolute: origins
                    .get(node.parent.as_str())
                    .map(|[x, y]| [x + node.x, y + node.y]),
            })
            .collect();

        let edges = layout
            .edges
            .iter()
            .map(|edge| EdgeDump {
                source: edge.source.clone(),
                target: edge.target.clone(),
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            domains,
            roles,
            nodes,
            edges,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn write_layout_dump(path: &Path, layout: &LayoutResult, absolute: bool) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, absolute);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
