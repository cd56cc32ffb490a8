use crate::ir::{Domain, Edge, FileNode, Role};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// True when the two rectangles share interior area. Touching edges do
    /// not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

pub fn domain_box_id(domain: Domain) -> String {
    format!("domain:{}", domain.as_str())
}

pub fn role_box_id(domain: Domain, role: Role) -> String {
    format!("role:{}:{}", domain.as_str(), role.as_str())
}

/// A file node with its position relative to the containing role box.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub node: FileNode,
    pub parent: String,
    pub domain: Domain,
    pub weight: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PositionedNode {
    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One role group inside a domain. Position is relative to the domain box.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleBox {
    pub id: String,
    pub domain: Domain,
    pub role: Role,
    pub label: String,
    pub member_count: usize,
    /// Sum of the members' dependency weights.
    pub weight: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub members: Vec<String>,
}

impl RoleBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainBox {
    pub id: String,
    pub domain: Domain,
    pub label: String,
    pub member_count: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub roles: Vec<RoleBox>,
}

impl DomainBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn role(&self, role: Role) -> Option<&RoleBox> {
        self.roles.iter().find(|role_box| role_box.role == role)
    }

    pub fn role_absolute_rect(&self, role_box: &RoleBox) -> Rect {
        role_box.rect().translate(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Primary domain first, then secondary. Always exactly two entries.
    pub domains: Vec<DomainBox>,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    pub width: f32,
    pub height: f32,
}

impl LayoutResult {
    pub fn domain(&self, domain: Domain) -> Option<&DomainBox> {
        self.domains.iter().find(|domain_box| domain_box.domain == domain)
    }

    pub fn role_box(&self, id: &str) -> Option<(&DomainBox, &RoleBox)> {
        self.domains.iter().find_map(|domain_box| {
            domain_box
                .roles
                .iter()
                .find(|role_box| role_box.id == id)
                .map(|role_box| (domain_box, role_box))
        })
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Composes a node's relative position up the containment chain.
    pub fn absolute_rect(&self, node_id: &str) -> Option<Rect> {
        let node = self.node(node_id)?;
        let (domain_box, role_box) = self.role_box(&node.parent)?;
        Some(
            node.rect()
                .translate(role_box.x, role_box.y)
                .translate(domain_box.x, domain_box.y),
        )
    }
}
