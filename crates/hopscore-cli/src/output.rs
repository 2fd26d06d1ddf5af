//! Text/JSON output shared by every command.
//!
//! Handlers build a serializable value and a text renderer; [`render`] picks
//! one based on the [`OutputMode`].

use serde::Serialize;
use std::io::{self, Write};

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Plain `key: value` lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Write `value` to `w` as JSON, or through `text` otherwise.
pub fn render_to<T, F>(w: &mut dyn Write, mode: OutputMode, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T, &mut dyn Write) -> io::Result<()>,
{
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *w, value)?;
            writeln!(w)?;
        }
        OutputMode::Text => text(value, w)?,
    }
    Ok(())
}

/// [`render_to`] on locked stdout.
pub fn render<T, F>(mode: OutputMode, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T, &mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render_to(&mut lock, mode, value, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        name: &'static str,
    }

    #[test]
    fn json_mode_ignores_text_renderer() {
        let mut buf = Vec::new();
        render_to(&mut buf, OutputMode::Json, &Item { name: "a" }, |_, _| {
            panic!("text renderer called in json mode")
        })
        .expect("render");
        let parsed: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        assert_eq!(parsed["name"], "a");
    }

    #[test]
    fn text_mode_uses_renderer() {
        let mut buf = Vec::new();
        render_to(&mut buf, OutputMode::Text, &Item { name: "a" }, |item, w| {
            writeln!(w, "name={}", item.name)
        })
        .expect("render");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "name=a\n");
    }
}
