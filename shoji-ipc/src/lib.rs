pub mod layout;

pub use layout::{LayoutMessage, LayoutResult, WindowGeometry, WindowState};
