//! Empty state component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// Used while waiting for permissions, while loading, after a failed load
/// (in the error color), and when the search matches nothing.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    render_centered(row + 1, &empty.message, &Theme::fg(color), cols);
    render_centered(
        row + 2,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
    row + 3
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
