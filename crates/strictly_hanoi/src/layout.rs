//! Geometry of pegs and disks.
//!
//! Every coordinate is derived from a [`LayoutMetrics`] and the disk count,
//! so a peg's hit region is sized for the tallest possible stack regardless
//! of how many disks it currently holds.

use crate::peg::PegId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Size and spacing constants for drawing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Width of the smallest disk.
    pub disk_width_initial: i32,
    /// Extra width per disk id above 1.
    pub disk_width_increment: i32,
    /// Height of a single disk.
    pub disk_height: i32,
    /// Gap between neighbouring peg regions.
    pub disk_horizontal_space: i32,
    /// Gap between stacked disks.
    pub disk_vertical_space: i32,
    /// Width of a peg shaft.
    pub peg_width: i32,
    /// Space above the pegs.
    pub margin_top: i32,
    /// Space below the pegs.
    pub margin_bottom: i32,
    /// Space left of the first peg.
    pub margin_left: i32,
    /// Space right of the last peg.
    pub margin_right: i32,
    /// Shaft length above a full stack.
    pub peg_padding_top: i32,
    /// Shaft length below the bottom disk.
    pub peg_padding_bottom: i32,
}

impl LayoutMetrics {
    /// Metrics for a pixel canvas.
    pub const fn pixels() -> Self {
        Self {
            disk_width_initial: 40,
            disk_width_increment: 20,
            disk_height: 12,
            disk_horizontal_space: 20,
            disk_vertical_space: 4,
            peg_width: 10,
            margin_top: 20,
            margin_bottom: 20,
            margin_left: 20,
            margin_right: 20,
            peg_padding_top: 10,
            peg_padding_bottom: 6,
        }
    }

    /// Metrics for a grid of terminal character cells.
    ///
    /// Disk widths are odd so every disk centres on its peg's column.
    pub const fn cells() -> Self {
        Self {
            disk_width_initial: 3,
            disk_width_increment: 2,
            disk_height: 1,
            disk_horizontal_space: 2,
            disk_vertical_space: 0,
            peg_width: 1,
            margin_top: 1,
            margin_bottom: 1,
            margin_left: 1,
            margin_right: 1,
            peg_padding_top: 1,
            peg_padding_bottom: 1,
        }
    }

    /// Width of the disk with the given id.
    pub fn disk_width(&self, id: u8) -> i32 {
        self.disk_width_initial + self.disk_width_increment * (i32::from(id) - 1)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::pixels()
    }
}

/// Inclusive rectangle used for pointer hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRegion {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl HitRegion {
    /// Returns true if the point lies inside the region, edges included.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

/// Where a disk is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskRect {
    /// Leftmost column covered by the disk.
    pub x0: i32,
    /// Rightmost column covered by the disk (inclusive).
    pub x1: i32,
    /// Vertical centre of the disk.
    pub y: i32,
}

/// Layout of the three pegs for a fixed disk count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    metrics: LayoutMetrics,
    num_disks: u8,
}

impl BoardLayout {
    /// Creates the layout for `num_disks` disks.
    #[instrument]
    pub fn new(metrics: LayoutMetrics, num_disks: u8) -> Self {
        Self { metrics, num_disks }
    }

    /// Returns the metrics this layout was built from.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Number of disks the layout was sized for.
    pub fn num_disks(&self) -> u8 {
        self.num_disks
    }

    /// Width of the largest disk in play.
    pub fn max_disk_width(&self) -> i32 {
        self.metrics.disk_width(self.num_disks)
    }

    /// Shaft length, tall enough for every disk on one peg.
    pub fn peg_height(&self) -> i32 {
        let m = &self.metrics;
        let n = i32::from(self.num_disks);
        m.peg_padding_top + n * m.disk_height + (n - 1) * m.disk_vertical_space + m.peg_padding_bottom
    }

    /// Horizontal centre of a peg.
    pub fn peg_x(&self, peg: PegId) -> i32 {
        let max = self.max_disk_width();
        let offset = i32::from(peg.number()) - 1;
        self.metrics.margin_left + max / 2 + offset * (max + self.metrics.disk_horizontal_space)
    }

    /// Top of every peg shaft.
    pub fn peg_top(&self) -> i32 {
        self.metrics.margin_top
    }

    /// Fixed hit region of a peg.
    pub fn peg_region(&self, peg: PegId) -> HitRegion {
        let x = self.peg_x(peg);
        let half = self.max_disk_width() / 2;
        let y0 = self.peg_top();
        HitRegion {
            x0: x - half,
            y0,
            x1: x + half,
            y1: y0 + self.peg_height(),
        }
    }

    /// Placement of disk `id` at stack position `pos` (0 = bottom) on `peg`.
    pub fn disk_rect(&self, peg: PegId, pos: usize, id: u8) -> DiskRect {
        let m = &self.metrics;
        let width = m.disk_width(id);
        let x0 = self.peg_x(peg) - width / 2;
        let pos = i32::try_from(pos).unwrap_or(i32::MAX / 2);
        let y = self.peg_top() + self.peg_height()
            - m.peg_padding_bottom
            - pos * (m.disk_height + m.disk_vertical_space)
            - m.disk_height / 2;
        DiskRect {
            x0,
            x1: x0 + width - 1,
            y,
        }
    }

    /// Total drawing surface as `(width, height)`.
    pub fn canvas_size(&self) -> (i32, i32) {
        let m = &self.metrics;
        let width = self.peg_region(PegId::Right).x1 + m.margin_right;
        let height = self.peg_height() + m.margin_top + m.margin_bottom;
        (width, height)
    }
}
