pub use shoji_ipc::WindowState;
use shoji_ipc::WindowGeometry;

/// Where one window should go, in workspace-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowLocation {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub state: WindowState,
}

impl WindowLocation {
    pub fn new(x: i32, y: i32, width: i32, height: i32, state: WindowState) -> Self {
        Self {
            x,
            y,
            width,
            height,
            state,
        }
    }

    pub fn normal(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, width, height, WindowState::Normal)
    }

    pub fn into_geometry(self, id: u32) -> WindowGeometry {
        WindowGeometry {
            id,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            state: self.state,
        }
    }
}

/// Space dimensions arrive unsigned but geometry is signed.
pub(crate) fn extent(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub(crate) fn window_count(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
