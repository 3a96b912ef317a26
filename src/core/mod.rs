//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - The data model (FileEntry, FilterSpec, Config)
//! - Path utilities and filters
//! - The directory tree builder
//! - Renderers for tree, list and contents
//! - File reading and error types

pub mod error;
pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod tree;
pub mod util;
