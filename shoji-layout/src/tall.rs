use crate::engine::LayoutEngine;
use crate::geometry::{extent, window_count, WindowLocation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_main_count() -> i32 {
    1
}

fn default_main_ratio() -> f64 {
    0.5
}

fn default_ratio_step() -> f64 {
    0.03
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidTallConfig {
    #[error("main ratio must be finite, got {0}")]
    MainRatio(f64),
    #[error("ratio step must be finite, got {0}")]
    RatioStep(f64),
}

/// Fixed parameters of a tall engine, chosen when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallConfig {
    /// Base number of windows in the primary area.
    #[serde(default = "default_main_count")]
    pub main_count: i32,
    /// Base fraction of the width given to the primary area.
    #[serde(default = "default_main_ratio")]
    pub main_ratio: f64,
    /// How far one shrink or expand moves the split.
    #[serde(default = "default_ratio_step")]
    pub ratio_step: f64,
}

impl Default for TallConfig {
    fn default() -> Self {
        Self {
            main_count: default_main_count(),
            main_ratio: default_main_ratio(),
            ratio_step: default_ratio_step(),
        }
    }
}

impl TallConfig {
    /// Builds a config from user-supplied values. The count is not checked
    /// here since anything below one already lays out a single main window.
    pub fn try_new(
        main_count: i32,
        main_ratio: f64,
        ratio_step: f64,
    ) -> Result<Self, InvalidTallConfig> {
        if !main_ratio.is_finite() {
            return Err(InvalidTallConfig::MainRatio(main_ratio));
        }
        if !ratio_step.is_finite() {
            return Err(InvalidTallConfig::RatioStep(ratio_step));
        }
        Ok(Self {
            main_count,
            main_ratio,
            ratio_step,
        })
    }
}

/// User adjustments layered on top of a [`TallConfig`].
///
/// The split offset is kept as a count of increments so that shrink/expand
/// and flip undo each other exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallState {
    pub main_count_offset: i32,
    pub ratio_steps: i32,
    pub flipped: bool,
}

/// Master/stack layout: the first windows share a primary column, the rest
/// are stacked in a secondary column beside it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TallLayoutEngine {
    config: TallConfig,
    state: TallState,
}

impl TallLayoutEngine {
    pub fn new(config: TallConfig) -> Self {
        Self::with_state(config, TallState::default())
    }

    pub fn with_state(config: TallConfig, state: TallState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &TallConfig {
        &self.config
    }

    pub fn state(&self) -> TallState {
        self.state
    }

    /// Base count plus offset, never below one.
    pub fn num_in_primary(&self) -> i32 {
        self.config
            .main_count
            .saturating_add(self.state.main_count_offset)
            .max(1)
    }

    pub fn primary_percent_offset(&self) -> f64 {
        f64::from(self.state.ratio_steps) * self.config.ratio_step
    }

    pub fn is_flipped(&self) -> bool {
        self.state.flipped
    }
}

impl LayoutEngine for TallLayoutEngine {
    fn name(&self) -> &'static str {
        "tall"
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

        let num_in_primary = self.num_in_primary().min(count);
        let has_secondary = num_in_primary < count;

        let primary_width = if has_secondary {
            // Truncates toward zero; saturates at the i32 range.
            (f64::from(width) * (self.config.main_ratio + self.primary_percent_offset()))
                as i32
        } else {
            width
        };
        let secondary_width = width.saturating_sub(primary_width);

        let primary_height = height / num_in_primary;
        let secondary_height = height / (count - num_in_primary).max(1);

        let flip = self.state.flipped;

        tracing::trace!(
            count,
            num_in_primary,
            primary_width,
            secondary_width,
            flip,
            "tall layout"
        );

        (0..count)
            .map(|i| {
                if i < num_in_primary {
                    let (x, w) = if flip && has_secondary {
                        (primary_width, secondary_width)
                    } else {
                        (0, primary_width)
                    };
                    WindowLocation::normal(x, i * primary_height, w, primary_height)
                } else {
                    let (x, w) = if flip {
                        (0, primary_width)
                    } else {
                        (primary_width, secondary_width)
                    };
                    WindowLocation::normal(
                        x,
                        (i - num_in_primary) * secondary_height,
                        w,
                        secondary_height,
                    )
                }
            })
            .collect()
    }

    fn shrink_primary_area(&mut self) {
        // Clamped short of i32::MIN so flip can always negate it back.
        self.state.ratio_steps =
            self.state.ratio_steps.saturating_sub(1).max(-i32::MAX);
    }

    fn expand_primary_area(&mut self) {
        self.state.ratio_steps = self.state.ratio_steps.saturating_add(1);
    }

    fn reset_primary_area(&mut self) {
        self.state.ratio_steps = 0;
    }

    fn increment_num_in_primary(&mut self) {
        self.state.main_count_offset = self.state.main_count_offset.saturating_add(1);
    }

    fn decrement_num_in_primary(&mut self) {
        if self.num_in_primary() > 1 {
            self.state.main_count_offset -= 1;
        }
    }

    /// Mirrors the split and negates the ratio offset, so an earlier
    /// shrink still reads as a smaller primary area on the new side.
    fn flip_primary_area(&mut self) {
        self.state.flipped = !self.state.flipped;
        self.state.ratio_steps = self.state.ratio_steps.saturating_neg();
    }
}
