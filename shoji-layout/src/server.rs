use crate::command::LayoutCommand;
use crate::engine::LayoutEngine;
use crate::layout::Layout;
use anyhow::{Context, Result};
use shoji_ipc::{LayoutMessage, LayoutResult};
use std::io::{BufRead, Write};

/// Answers newline-delimited [`LayoutMessage`]s until `reader` is exhausted.
///
/// A malformed line gets an error reply and the loop keeps going; only I/O
/// failures end it early.
pub fn serve<R: BufRead, W: Write>(layout: &mut Layout, reader: R, mut writer: W) -> Result<()> {
    tracing::info!("Layout engine '{}' serving", layout.name());

    for line in reader.lines() {
        let line = line.context("Failed to read layout request")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<LayoutMessage>(&line) {
            Ok(msg) => handle_message(layout, msg),
            Err(e) => {
                tracing::warn!("Malformed layout request: {}", e);
                LayoutResult::Error {
                    message: format!("invalid message: {}", e),
                }
            }
        };

        serde_json::to_writer(&mut writer, &result).context("Failed to write layout response")?;
        writeln!(writer)?;
        writer.flush()?;
    }

    tracing::info!("Layout engine '{}' input closed", layout.name());
    Ok(())
}

pub fn handle_message(layout: &mut Layout, msg: LayoutMessage) -> LayoutResult {
    match msg {
        LayoutMessage::Layout {
            width,
            height,
            windows,
        } => {
            tracing::debug!("Layout {}x{} for {} windows", width, height, windows.len());
            let geometries = layout
                .calc_layout(&windows, width, height)
                .into_iter()
                .zip(&windows)
                .map(|(location, &id)| location.into_geometry(id))
                .collect();
            LayoutResult::Layout {
                windows: geometries,
            }
        }
        LayoutMessage::Command { cmd, args } => handle_command(layout, &cmd, &args),
    }
}

fn handle_command(layout: &mut Layout, cmd: &str, args: &[String]) -> LayoutResult {
    let command = match cmd.parse::<LayoutCommand>() {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!("{}", e);
            return LayoutResult::Error {
                message: e.to_string(),
            };
        }
    };
    if !args.is_empty() {
        tracing::debug!("Ignoring arguments to '{}': {:?}", command, args);
    }

    let before = layout.tall_state();
    command.apply(layout);
    let after = layout.tall_state();

    if before == after {
        LayoutResult::Ok
    } else {
        tracing::debug!("Command '{}' changed state: {:?}", command, after);
        LayoutResult::NeedsRetile
    }
}
