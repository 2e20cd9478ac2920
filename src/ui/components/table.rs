//! Country card table renderer.
//!
//! Each visible country is one row: CODE, NAME (with search highlights),
//! PORTUGUESE NAME, POPULATION, and FLAG. The flag column shows the alt text,
//! or the image URL when the API has no alt text, and is dropped on narrow
//! panes.

use crate::app::state::{
    CODE_COLUMN_WIDTH, LOCALIZED_COLUMN_WIDTH, NAME_COLUMN_WIDTH, POPULATION_COLUMN_WIDTH,
};
use crate::ui::helpers::{self, padding_for, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CountryCard;

/// Narrowest flag column worth drawing.
const MIN_FLAG_COLUMN_WIDTH: usize = 8;

/// Columns used before the flag column (including one separator each).
const FIXED_COLUMNS_WIDTH: usize =
    CODE_COLUMN_WIDTH + NAME_COLUMN_WIDTH + LOCALIZED_COLUMN_WIDTH + POPULATION_COLUMN_WIDTH + 4;

fn flag_column_width(cols: usize) -> Option<usize> {
    let width = cols.saturating_sub(FIXED_COLUMNS_WIDTH + 1);
    (width >= MIN_FLAG_COLUMN_WIDTH).then_some(width)
}

/// Renders the bold column headers at `row` and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<code$} {:<name$} {:<local$} {:>pop$}",
        "CODE",
        "NAME",
        "PORTUGUESE NAME",
        "POPULATION",
        code = CODE_COLUMN_WIDTH,
        name = NAME_COLUMN_WIDTH,
        local = LOCALIZED_COLUMN_WIDTH,
        pop = POPULATION_COLUMN_WIDTH,
    );
    if flag_column_width(cols).is_some() {
        print!("  FLAG");
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one row per card starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, cards: &[CountryCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_table_row(current_row, card, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, card: &CountryCard, theme: &Theme, cols: usize) -> usize {
    let normal = Theme::fg(&theme.colors.text_normal);

    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.code_fg));
    print!("{}{} ", card.code, padding_for(&card.code, CODE_COLUMN_WIDTH));

    print!("{normal}");
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, &normal);
    print!("{} ", padding_for(&card.name, NAME_COLUMN_WIDTH));

    print!("{}{} ", card.localized_name, padding_for(&card.localized_name, LOCALIZED_COLUMN_WIDTH));
    print!("{}{}", padding_for(&card.population, POPULATION_COLUMN_WIDTH), card.population);

    let mut line_len = FIXED_COLUMNS_WIDTH - 1;
    if let Some(width) = flag_column_width(cols) {
        let flag = if card.flag_alt.is_empty() {
            &card.flag_url
        } else {
            &card.flag_alt
        };
        let flag = truncate(flag, width);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {flag}");
        line_len += 2 + flag.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_column_needs_room() {
        assert_eq!(flag_column_width(80), None);
        assert_eq!(flag_column_width(FIXED_COLUMNS_WIDTH + 1 + MIN_FLAG_COLUMN_WIDTH), Some(MIN_FLAG_COLUMN_WIDTH));
        assert_eq!(flag_column_width(140), Some(140 - FIXED_COLUMNS_WIDTH - 1));
    }
}
