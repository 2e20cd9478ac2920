//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts and data age
//! - [`search`]: Search input box
//! - [`table`]: Country cards (CODE, NAME, PORTUGUESE NAME, POPULATION, FLAG)
//! - [`empty`]: Message shown instead of the table
//! - [`pagination`]: Previous/next controls and "Page X of Y"
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, optional]
//! [Table Headers]
//! [Table Rows | Empty State]
//! ...
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole plugin pane from a view model.
///
/// The pagination bar, bottom border, and footer are pinned to the last three
/// rows regardless of how many cards are shown.
pub fn render_list(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme, cols);
        render_table_rows(current_row, &vm.cards, theme, cols);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);

    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
