//! Sandbox filesystem locations.
//!
//! Zellij mounts the host filesystem under `/host`; everything here translates
//! user-facing paths into that view.

pub mod paths;

pub use paths::{data_dir, expand_tilde, trace_file_path, TRACE_FILE_NAME};
