//! Pixmosaic - batch pixel-art and photo-mosaic converter
//!
//! Learns a palette (or a tile library) from a corpus directory and
//! converts a tree of images with it on a fixed worker pool.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
