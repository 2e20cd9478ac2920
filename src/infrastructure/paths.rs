//! Path helpers for the Zellij plugin sandbox.
//!
//! In the sandbox `/host` is the cwd of the last focused terminal, or the
//! folder Zellij was started from. That is usually the user's home directory,
//! so `~` is mapped onto it.

use std::path::PathBuf;

/// File name of the OTLP trace log inside [`data_dir`].
pub const TRACE_FILE_NAME: &str = "countrydex-otlp.json";

/// Directory holding the plugin's trace log.
///
/// ```
/// use countrydex::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/countrydex"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("countrydex")
}

/// Full path of the OTLP trace log.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Rewrites a leading `~` to the sandbox mount point.
///
/// Only `~` and `~/...` are expanded; `~user` forms have no sandbox meaning and
/// are returned as given.
///
/// ```
/// use countrydex::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/.config/countrydex/nord.toml"), "/host/.config/countrydex/nord.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_lives_in_data_dir() {
        let path = trace_file_path();
        assert_eq!(path.parent(), Some(data_dir().as_path()));
        assert!(path.ends_with(TRACE_FILE_NAME));
    }

    #[test]
    fn named_home_directories_are_left_alone() {
        assert_eq!(expand_tilde("~alice/themes"), "~alice/themes");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }
}
