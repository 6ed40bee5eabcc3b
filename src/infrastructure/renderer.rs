// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::instrument;

/// Writes rendered pages to a temporary directory and hands them to the browser.
#[derive(Debug, Default)]
pub struct PageRenderer {
    // Keep last temp dir alive to prevent deletion
    temp_dir: Option<TempDir>,
}

impl PageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notelist-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug")]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_content_when_creating_temp_file_then_file_holds_content() {
        let mut renderer = PageRenderer::new();

        let path = renderer.create_temp_file("<html></html>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
        assert!(path.ends_with("notes.html"));
    }

    #[test]
    fn given_second_page_when_creating_temp_file_then_previous_dir_is_released() {
        let mut renderer = PageRenderer::new();
        let first = renderer.create_temp_file("one").unwrap();

        let second = renderer.create_temp_file("two").unwrap();

        assert!(!first.exists());
        assert!(second.exists());
    }
}
