//! Temporary corpus/input/output tree for integration tests.

use image::RgbaImage;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use pixmosaic::models::AppConfig;

use super::fixtures;

/// A throwaway directory laid out like a real run:
/// `corpus/`, `input/` and `out/` under one temp root.
pub struct TestWorkspace {
    root: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("corpus")).unwrap();
        std::fs::create_dir_all(root.path().join("input")).unwrap();
        Self { root }
    }

    pub fn corpus_dir(&self) -> PathBuf {
        self.root.path().join("corpus")
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.path().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Add a corpus image at `rel` (relative to `corpus/`)
    pub fn add_corpus(&self, rel: &str, image: &RgbaImage) -> PathBuf {
        let path = self.corpus_dir().join(rel);
        fixtures::write_png(&path, image);
        path
    }

    /// Add an input image at `rel` (relative to `input/`)
    pub fn add_input(&self, rel: &str, image: &RgbaImage) -> PathBuf {
        let path = self.input_dir().join(rel);
        fixtures::write_png(&path, image);
        path
    }

    /// Add an undecodable file at `rel` (relative to the workspace root)
    pub fn add_garbage(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        fixtures::write_garbage(&path);
        path
    }

    /// Default config pointed at this workspace with a fixed seed
    pub fn config(&self) -> AppConfig {
        AppConfig {
            corpus_dir: self.corpus_dir(),
            input_dir: self.input_dir(),
            output_dir: self.output_dir(),
            seed: Some(7),
            ..Default::default()
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
