use crate::config::LayoutConfig;

/// Rows and columns occupied by `count` cells on a grid `columns` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn for_count(count: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            rows: count.div_ceil(columns),
            cols: count.min(columns),
        }
    }
}

/// Width and height of a role box holding `count` file nodes.
pub fn role_box_size(count: usize, config: &LayoutConfig) -> (f32, f32) {
    let shape = GridShape::for_count(count, config.columns);
    let cell_w = config.node_width + config.node_gap_x;
    let cell_h = config.node_height + config.node_gap_y;
    let width = shape.cols as f32 * cell_w + config.role_padding * 2.0;
    let height = config.role_header_height + shape.rows as f32 * cell_h + config.role_padding;
    (
        width.max(config.min_role_width),
        height.max(config.min_role_height),
    )
}

/// Top-left of the `index`-th member, relative to its role box.
pub fn node_offset(index: usize, config: &LayoutConfig) -> (f32, f32) {
    let columns = config.columns.max(1);
    let row = index / columns;
    let col = index % columns;
    (
        config.role_padding + col as f32 * (config.node_width + config.node_gap_x),
        config.role_header_height + row as f32 * (config.node_height + config.node_gap_y),
    )
}
