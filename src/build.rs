//! Static export.
//!
//! Renders the page once and writes it as `index.html`, so the shell can be
//! deployed to any static file host.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crate::{errors::BuildError, page::Page, templates::Templates};

const INDEX_FILE: &str = "index.html";

/// Statistics from a build run.
#[derive(Debug, Default)]
pub struct BuildStats {
    pub pages: usize,
    pub bytes_written: usize,
    pub duration: Duration,
}

/// Static page exporter.
pub struct Builder {
    page: Page,
    templates: Templates,
    output_dir: PathBuf,
}

impl Builder {
    pub fn new(page: Page, templates: Templates, output_dir: PathBuf) -> Self {
        Builder {
            page,
            templates,
            output_dir,
        }
    }

    /// Path of the file [`Builder::build`] writes.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(INDEX_FILE)
    }

    pub fn build(&self) -> Result<BuildStats, BuildError> {
        let start = Instant::now();

        self.prepare_output_dir()?;

        let html = self.page.render(&self.templates)?;
        let index = self.index_path();
        write_file(&index, &html)?;

        let stats = BuildStats {
            pages: 1,
            bytes_written: html.len(),
            duration: start.elapsed(),
        };
        tracing::info!(
            "Wrote {} ({} bytes) in {:?}",
            index.display(),
            stats.bytes_written,
            stats.duration
        );
        Ok(stats)
    }

    fn prepare_output_dir(&self) -> Result<(), BuildError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| BuildError::CreateDirFailed {
            path: self.output_dir.clone(),
            source,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|source| BuildError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn builder(output_dir: PathBuf) -> Builder {
        Builder::new(
            Config::default().page().unwrap(),
            Templates::new(None).unwrap(),
            output_dir,
        )
    }

    #[test]
    fn test_build_writes_index() {
        let dir = TempDir::new().unwrap();
        let builder = builder(dir.path().to_path_buf());
        let stats = builder.build().unwrap();

        assert_eq!(stats.pages, 1);
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert_eq!(html.len(), stats.bytes_written);
        assert!(html.contains("<title>Vibe Gen</title>"));
    }

    #[test]
    fn test_build_creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("a").join("b");
        builder(out.clone()).build().unwrap();
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn test_build_overwrites_existing_index() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "stale").unwrap();
        builder(dir.path().to_path_buf()).build().unwrap();
        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!html.contains("stale"));
    }

    #[test]
    fn test_build_fails_when_output_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "").unwrap();
        let result = builder(file).build();
        assert!(matches!(result, Err(BuildError::CreateDirFailed { .. })));
    }
}
