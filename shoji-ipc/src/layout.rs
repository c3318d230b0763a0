use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutMessage {
    Layout {
        width: u32,
        height: u32,
        windows: Vec<u32>,
    },
    Command {
        cmd: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutResult {
    Layout { windows: Vec<WindowGeometry> },
    Ok,
    NeedsRetile,
    Error { message: String },
}

/// Display state the host should put a window in alongside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Frame for a single window. Width and height are signed: an extreme
/// main ratio can produce an empty or negative area, and it is passed
/// through as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub state: WindowState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_message_wire_format() {
        let msg: LayoutMessage =
            serde_json::from_str(r#"{"type":"layout","width":1920,"height":1080,"windows":[3,1]}"#)
                .unwrap();
        assert_eq!(
            msg,
            LayoutMessage::Layout {
                width: 1920,
                height: 1080,
                windows: vec![3, 1],
            }
        );
    }

    #[test]
    fn test_command_args_default_to_empty() {
        let msg: LayoutMessage = serde_json::from_str(r#"{"type":"command","cmd":"flip"}"#).unwrap();
        assert_eq!(
            msg,
            LayoutMessage::Command {
                cmd: "flip".to_string(),
                args: vec![],
            }
        );
    }

    #[test]
    fn test_result_tags() {
        assert_eq!(
            serde_json::to_string(&LayoutResult::NeedsRetile).unwrap(),
            r#"{"type":"needs_retile"}"#
        );
        assert_eq!(
            serde_json::to_string(&LayoutResult::Error {
                message: "bad".to_string()
            })
            .unwrap(),
            r#"{"type":"error","message":"bad"}"#
        );
    }

    #[test]
    fn test_geometry_state_defaults_to_normal() {
        let geometry: WindowGeometry =
            serde_json::from_str(r#"{"id":7,"x":0,"y":0,"width":-12,"height":40}"#).unwrap();
        assert_eq!(geometry.state, WindowState::Normal);
        assert_eq!(geometry.width, -12);

        let json = serde_json::to_string(&geometry).unwrap();
        assert!(json.contains(r#""state":"normal""#));
    }
}
