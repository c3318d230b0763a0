use crate::engine::LayoutEngine;
use crate::geometry::WindowLocation;
use crate::pane::PaneLayoutEngine;
use crate::tall::{TallLayoutEngine, TallState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout: {0}")]
pub struct UnknownLayout(pub String);

/// Every engine a workspace can be backed by.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    Pane(PaneLayoutEngine),
    Tall(TallLayoutEngine),
}

impl Layout {
    pub fn names() -> &'static [&'static str] {
        &["vert", "horz", "tall"]
    }

    /// Default-configured engine for a name from [`Layout::names`].
    pub fn from_name(name: &str) -> Result<Self, UnknownLayout> {
        match name {
            "vert" => Ok(Self::Pane(PaneLayoutEngine::vertical())),
            "horz" => Ok(Self::Pane(PaneLayoutEngine::horizontal())),
            "tall" => Ok(Self::Tall(TallLayoutEngine::default())),
            _ => Err(UnknownLayout(name.to_string())),
        }
    }

    /// Adjustment state, if this engine has any.
    pub fn tall_state(&self) -> Option<TallState> {
        match self {
            Self::Pane(_) => None,
            Self::Tall(engine) => Some(engine.state()),
        }
    }
}

impl From<PaneLayoutEngine> for Layout {
    fn from(engine: PaneLayoutEngine) -> Self {
        Self::Pane(engine)
    }
}

impl From<TallLayoutEngine> for Layout {
    fn from(engine: TallLayoutEngine) -> Self {
        Self::Tall(engine)
    }
}

impl LayoutEngine for Layout {
    fn name(&self) -> &'static str {
        match self {
            Self::Pane(engine) => engine.name(),
            Self::Tall(engine) => engine.name(),
        }
    }

    fn calc_layout<W>(
        &self,
        windows: &[W],
        space_width: u32,
        space_height: u32,
    ) -> Vec<WindowLocation> {
        match self {
            Self::Pane(engine) => engine.calc_layout(windows, space_width, space_height),
            Self::Tall(engine) => engine.calc_layout(windows, space_width, space_height),
        }
    }

    fn shrink_primary_area(&mut self) {
        match self {
            Self::Pane(engine) => engine.shrink_primary_area(),
            Self::Tall(engine) => engine.shrink_primary_area(),
        }
    }

    fn expand_primary_area(&mut self) {
        match self {
            Self::Pane(engine) => engine.expand_primary_area(),
            Self::Tall(engine) => engine.expand_primary_area(),
        }
    }

    fn reset_primary_area(&mut self) {
        match self {
            Self::Pane(engine) => engine.reset_primary_area(),
            Self::Tall(engine) => engine.reset_primary_area(),
        }
    }

    fn increment_num_in_primary(&mut self) {
        match self {
            Self::Pane(engine) => engine.increment_num_in_primary(),
            Self::Tall(engine) => engine.increment_num_in_primary(),
        }
    }

    fn decrement_num_in_primary(&mut self) {
        match self {
            Self::Pane(engine) => engine.decrement_num_in_primary(),
            Self::Tall(engine) => engine.decrement_num_in_primary(),
        }
    }

    fn flip_primary_area(&mut self) {
        match self {
            Self::Pane(engine) => engine.flip_primary_area(),
            Self::Tall(engine) => engine.flip_primary_area(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_name() {
        for name in Layout::names() {
            let layout = Layout::from_name(name).unwrap();
            assert_eq!(layout.name(), *name);
        }
    }

    #[test]
    fn test_unknown_layout() {
        let err = Layout::from_name("spiral").unwrap_err();
        assert_eq!(err, UnknownLayout("spiral".to_string()));
        assert_eq!(err.to_string(), "unknown layout: spiral");
    }

    #[test]
    fn test_dispatch_reaches_tall_state() {
        let mut layout = Layout::from_name("tall").unwrap();
        layout.increment_num_in_primary();
        layout.flip_primary_area();
        assert_eq!(
            layout.tall_state(),
            Some(TallState {
                main_count_offset: 1,
                ratio_steps: 0,
                flipped: true,
            })
        );
    }

    #[test]
    fn test_pane_has_no_state() {
        let mut layout = Layout::from(PaneLayoutEngine::horizontal());
        layout.expand_primary_area();
        assert_eq!(layout.tall_state(), None);
        assert_eq!(layout, Layout::Pane(PaneLayoutEngine::horizontal()));
    }

    #[test]
    fn test_dispatch_matches_engine() {
        let engine = TallLayoutEngine::default();
        let layout = Layout::from(engine.clone());
        assert_eq!(
            layout.calc_layout(&[1, 2, 3], 1920, 1080),
            engine.calc_layout(&[1, 2, 3], 1920, 1080)
        );
    }
}
