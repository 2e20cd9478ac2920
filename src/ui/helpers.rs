//! Shared rendering utilities.
//!
//! Cursor positioning, character-safe truncation and padding, and search match
//! highlighting. All widths are counted in `char`s, since country names are
//! full of non-ASCII letters ("Côte d'Ivoire", "Åland Islands").

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// # Example
///
/// ```
/// use countrydex::ui::helpers::truncate;
///
/// assert_eq!(truncate("São Tomé and Príncipe", 10), "São Tom...");
/// assert_eq!(truncate("Chad", 10), "Chad");
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let mut out: String = text.chars().take(max_chars - 3).collect();
    out.push_str("...");
    out
}

/// Spaces needed to pad `text` to `width` characters.
#[must_use]
pub fn padding_for(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. After each highlighted section the `restore` sequence is
/// printed so the surrounding row style continues.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal: String = chars[current_pos..start].iter().collect();
        print!("{normal}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        print!("{highlighted}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}
