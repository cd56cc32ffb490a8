use crate::config::LayoutConfig;

/// Greedy left-to-right, top-to-bottom flow of role boxes inside a domain.
///
/// A box that would cross `max_row_width` starts a new row, unless it is
/// already the first box of its row.
#[derive(Debug, Clone)]
pub struct RowPacker<'a> {
    config: &'a LayoutConfig,
    cursor_x: f32,
    cursor_y: f32,
    row_max_height: f32,
    max_right: f32,
    rows: usize,
}

impl<'a> RowPacker<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            cursor_x: config.domain_padding,
            cursor_y: config.domain_header_height,
            row_max_height: 0.0,
            max_right: 0.0,
            rows: 0,
        }
    }

    /// Returns the top-left of the placed box, relative to the domain.
    pub fn place(&mut self, width: f32, height: f32) -> (f32, f32) {
        let first_in_row = self.cursor_x <= self.config.domain_padding;
        if self.cursor_x + width > self.config.max_row_width && !first_in_row {
            self.cursor_x = self.config.domain_padding;
            self.cursor_y += self.row_max_height + self.config.role_gap_y;
            self.row_max_height = 0.0;
            self.rows += 1;
        } else if self.rows == 0 {
            self.rows = 1;
        }

        let position = (self.cursor_x, self.cursor_y);
        self.max_right = self.max_right.max(self.cursor_x + width);
        self.cursor_x += width + self.config.role_gap_x;
        self.row_max_height = self.row_max_height.max(height);
        position
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Final domain size, floored at the configured minimums.
    pub fn finish(self) -> (f32, f32) {
        let width = (self.max_right + self.config.domain_padding).max(self.config.min_domain_width);
        let height = (self.cursor_y + self.row_max_height + self.config.domain_padding)
            .max(self.config.min_domain_height);
        (width, height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    pub positions: Vec<(f32, f32)>,
    pub width: f32,
    pub height: f32,
    pub rows: usize,
}

pub fn pack_rows(sizes: &[(f32, f32)], config: &LayoutConfig) -> Packing {
    let mut packer = RowPacker::new(config);
    let positions = sizes
        .iter()
        .map(|&(width, height)| packer.place(width, height))
        .collect();
    let rows = packer.rows();
    let (width, height) = packer.finish();
    Packing {
        positions,
        width,
        height,
        rows,
    }
}
