//! Utility modules for common functionality

pub mod files;
pub mod filesystem;
pub mod sanitizers;

// Re-export commonly used functions
pub use files::{GistFiles, apply_files, build_payload, collect_files, removed_files};
pub use filesystem::ensure_directory_exists;
pub use sanitizers::{gist_name_to_path, path_to_gist_name};
