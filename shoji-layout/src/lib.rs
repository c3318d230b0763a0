pub mod command;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod pane;
pub mod server;
pub mod tall;

pub use command::{LayoutCommand, UnknownCommand};
pub use engine::LayoutEngine;
pub use geometry::{WindowLocation, WindowState};
pub use layout::{Layout, UnknownLayout};
pub use pane::{Orientation, PaneLayoutEngine};
pub use server::serve;
pub use tall::{InvalidTallConfig, TallConfig, TallLayoutEngine, TallState};
