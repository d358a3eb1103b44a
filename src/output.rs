//! Rendering pipeline results as text and writing them out.

use std::io;
use std::path::Path;

use crate::config::OutputFormat;
use crate::dsl::Token;
use crate::scene::Scene;

/// Render a scene in the requested format.
pub fn render_scene(scene: &Scene, format: OutputFormat) -> Result<String, io::Error> {
    match format {
        OutputFormat::Text => Ok(scene.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(scene).map_err(io::Error::other),
        OutputFormat::Json => serde_json::to_string_pretty(scene)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(io::Error::other),
    }
}

/// One token per line: `<line> <Kind> "<text>"`.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{} {:?} \"{}\"\n", t.line, t.kind, t.text))
        .collect()
}

/// Write `text` to `path`, creating parent directories as needed.
pub fn save_output(path: &Path, text: &str) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
}
