use crate::engine::LayoutEngine;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// Adjustment commands a host can send to a running engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutCommand {
    Expand,
    Shrink,
    Reset,
    IncrementMain,
    DecrementMain,
    Flip,
}

impl LayoutCommand {
    pub const ALL: [LayoutCommand; 6] = [
        LayoutCommand::Expand,
        LayoutCommand::Shrink,
        LayoutCommand::Reset,
        LayoutCommand::IncrementMain,
        LayoutCommand::DecrementMain,
        LayoutCommand::Flip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutCommand::Expand => "expand",
            LayoutCommand::Shrink => "shrink",
            LayoutCommand::Reset => "reset",
            LayoutCommand::IncrementMain => "inc-main",
            LayoutCommand::DecrementMain => "dec-main",
            LayoutCommand::Flip => "flip",
        }
    }

    pub fn apply<E: LayoutEngine>(self, engine: &mut E) {
        match self {
            LayoutCommand::Expand => engine.expand_primary_area(),
            LayoutCommand::Shrink => engine.shrink_primary_area(),
            LayoutCommand::Reset => engine.reset_primary_area(),
            LayoutCommand::IncrementMain => engine.increment_num_in_primary(),
            LayoutCommand::DecrementMain => engine.decrement_num_in_primary(),
            LayoutCommand::Flip => engine.flip_primary_area(),
        }
    }
}

impl FromStr for LayoutCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand" | "expand-main" => Ok(LayoutCommand::Expand),
            "shrink" | "shrink-main" => Ok(LayoutCommand::Shrink),
            "reset" | "reset-main" => Ok(LayoutCommand::Reset),
            "inc-main" | "increment-main" => Ok(LayoutCommand::IncrementMain),
            "dec-main" | "decrement-main" => Ok(LayoutCommand::DecrementMain),
            "flip" | "flip-main" => Ok(LayoutCommand::Flip),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for LayoutCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
