use crate::engine::LayoutEngine;
use crate::geometry::{extent, window_count, WindowLocation};
use serde::{Deserialize, Serialize};

/// Axis along which windows are laid side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Full-height columns, left to right.
    Vertical,
    /// Full-width rows, top to bottom.
    Horizontal,
}

/// Splits the space into equal strips, one per window.
///
/// Strip size is truncated, so up to `count - 1` pixels at the far edge stay
/// unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayoutEngine {
    orientation: Orientation,
}

impl PaneLayoutEngine {
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl LayoutEngine for PaneLayoutEngine {
    fn name(&self) -> &'static str {
        match self.orientation {
            Orientation::Vertical => "vert",
            Orientation::Horizontal => "horz",
        }
    }

    fn calc_layout<W>(
        &self,
        windows: &[W],
        space_width: u32,
        space_height: u32,
    ) -> Vec<WindowLocation> {
        if windows.is_empty() {
            return vec![];
        }

        let count = window_count(windows.len());
        let width = extent(space_width);
        let height = extent(space_height);

        match self.orientation {
            Orientation::Vertical => {
                let strip = width / count;
                (0..count)
                    .map(|i| WindowLocation::normal(i * strip, 0, strip, height))
                    .collect()
            }
            Orientation::Horizontal => {
                let strip = height / count;
                (0..count)
                    .map(|i| WindowLocation::normal(0, i * strip, width, strip))
                    .collect()
            }
        }
    }

    fn shrink_primary_area(&mut self) {}

    fn expand_primary_area(&mut self) {}

    fn reset_primary_area(&mut self) {}

    fn increment_num_in_primary(&mut self) {}

    fn decrement_num_in_primary(&mut self) {}

    fn flip_primary_area(&mut self) {}
}
