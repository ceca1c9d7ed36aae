use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::PaintResult;
use crate::tool::ToolType;

/// The editor configuration that survives between runs: the active tool and
/// its parameters, plus the remembered image path.
///
/// Pixel contents are not part of this; images go through the image codec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// The active tool with its color and size
    pub tool: ToolType,
    /// Where the image was last loaded from or saved to
    pub file_path: Option<PathBuf>,
    /// Version of the application that wrote the settings
    pub version: String,
}

impl EditorSettings {
    /// Captures the current configuration of a canvas.
    pub fn capture(canvas: &Canvas) -> Self {
        Self {
            tool: canvas.tool().clone(),
            file_path: canvas.file_path().map(Path::to_owned),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Applies this configuration to a canvas.
    pub fn restore(self, canvas: &mut Canvas) {
        if self.version != env!("CARGO_PKG_VERSION") {
            log::warn!(
                "Settings were written by version {}, current version is {}",
                self.version,
                env!("CARGO_PKG_VERSION")
            );
        }
        canvas.set_tool(self.tool);
        canvas.set_file_path(self.file_path);
    }
}

/// Saves the canvas configuration as JSON.
pub fn save_settings(canvas: &Canvas, path: &Path) -> PaintResult<()> {
    let settings = EditorSettings::capture(canvas);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(&settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads a canvas configuration from JSON.
pub fn load_settings(path: &Path) -> PaintResult<EditorSettings> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
