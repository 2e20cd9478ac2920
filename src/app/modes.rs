//! Input mode state for the application.
//!
//! The mode decides how keys are interpreted: in [`InputMode::Normal`] letters
//! are commands (page navigation, retry, quit), in [`InputMode::Search`] they are
//! appended to the search term.

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the search bar is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: h/l (page), / (search), r (retry), q (quit).
    #[default]
    Normal,

    /// The search bar has focus and every keystroke edits the term.
    ///
    /// Enter keeps the term and returns to `Normal`; Esc clears it.
    Search,
}
