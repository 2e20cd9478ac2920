//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! truncated strings, highlight ranges, and the enabled state of the
//! pagination controls.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Cards for the visible page, at most one page long.
    pub cards: Vec<CountryCard>,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Previous/next controls and the "Page X of Y" label.
    pub pagination: PaginationInfo,

    /// Search bar, shown while searching or while a term is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Replaces the card table when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single country card.
///
/// The country code is the row identity; names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
    /// Three-letter country code.
    pub code: String,

    /// Display name, truncated to the name column.
    pub name: String,

    /// Portuguese name, truncated to its column.
    pub localized_name: String,

    /// Flag image URL.
    pub flag_url: String,

    /// Flag alt text; may be empty.
    pub flag_alt: String,

    /// Population with thousands separators.
    pub population: String,

    /// Character ranges of the search term inside `name`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// "Page X of Y".
    pub label: String,

    /// Whether the previous control is enabled (page > 1).
    pub has_previous: bool,

    /// Whether the next control is enabled (page < total pages).
    pub has_next: bool,
}

/// Message shown instead of the card table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Loading countries...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Render with the error color instead of the neutral one.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,

    /// Whether keystrokes currently go to the search bar.
    pub is_focused: bool,
}
