//! Pagination bar renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

const PREVIOUS_LABEL: &str = "‹ Previous (h)";
const NEXT_LABEL: &str = "(l) Next ›";

/// Renders `‹ Previous   Page X of Y   Next ›` across the pane at `row`.
///
/// Disabled controls are drawn dimmed; enabled ones use `pager_fg`.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let control_style = |enabled: bool| {
        if enabled {
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.pager_fg))
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    let prev_len = PREVIOUS_LABEL.chars().count();
    let next_len = NEXT_LABEL.chars().count();
    let label_len = pagination.label.chars().count();
    let gap = cols.saturating_sub(prev_len + next_len + label_len);
    let left_gap = gap / 2;

    position_cursor(row, 1);
    print!("{}{PREVIOUS_LABEL}{}", control_style(pagination.has_previous), Theme::reset());
    print!("{}", " ".repeat(left_gap));
    print!("{}{}{}", Theme::fg(&theme.colors.text_normal), pagination.label, Theme::reset());
    print!("{}", " ".repeat(gap - left_gap));
    print!("{}{NEXT_LABEL}{}", control_style(pagination.has_next), Theme::reset());
    row + 1
}
