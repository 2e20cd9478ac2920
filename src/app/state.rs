//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It wraps the [`ListViewModel`] (catalog, search term, page) with the
//! plugin-level concerns: input mode, theme, and the configured endpoint.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`]: one card
//! per visible country, truncated to the table columns, with search highlight
//! ranges, the pagination controls, and an empty state when there is nothing
//! to list (waiting, loading, failed, or no matches).
//!
//! # Example
//!
//! ```
//! use countrydex::{AppState, Theme};
//!
//! let state = AppState::new(Theme::default(), "https://restcountries.com/v3.1/all");
//! let viewmodel = state.compute_viewmodel(24, 120);
//! assert!(viewmodel.cards.is_empty());
//! assert_eq!(viewmodel.pagination.label, "Page 1 of 0");
//! ```

use super::list::{ListViewModel, LoadState};
use super::modes::InputMode;
use crate::domain::Country;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CountryCard, EmptyState, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo, UIViewModel,
};

/// Width of the NAME column in characters.
pub const NAME_COLUMN_WIDTH: usize = 26;

/// Width of the PORTUGUESE NAME column in characters.
pub const LOCALIZED_COLUMN_WIDTH: usize = 26;

/// Width of the CODE column in characters.
pub const CODE_COLUMN_WIDTH: usize = 5;

/// Width of the POPULATION column in characters.
pub const POPULATION_COLUMN_WIDTH: usize = 15;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and fetch results.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Country catalog, search term, and page index.
    pub list: ListViewModel,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// URL fetched by [`Action::FetchCountries`](crate::app::Action::FetchCountries).
    pub endpoint: String,
}

impl AppState {
    /// Creates a new application state with an empty catalog.
    #[must_use]
    pub fn new(theme: Theme, endpoint: impl Into<String>) -> Self {
        Self {
            list: ListViewModel::new(),
            input_mode: InputMode::Normal,
            theme,
            endpoint: endpoint.into(),
        }
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// At most one page of cards is produced; on very short panes the cards that
    /// do not fit below the chrome are dropped.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let page = self.list.visible_page();
        let available_rows = self.calculate_available_rows(rows);

        let cards = page
            .countries
            .iter()
            .take(available_rows)
            .map(|country| self.compute_card(country))
            .collect();

        UIViewModel {
            cards,
            header: self.compute_header(),
            footer: self.compute_footer(),
            pagination: PaginationInfo {
                label: format!("Page {} of {}", page.current_page, page.total_pages),
                has_previous: self.list.has_previous_page(),
                has_next: self.list.has_next_page(),
            },
            search_bar: self.compute_search_bar(),
            empty_state: self.compute_empty_state(page.countries.is_empty()),
        }
    }

    /// Builds the card for one visible country.
    fn compute_card(&self, country: &Country) -> CountryCard {
        let name = truncate(country.display_name(), NAME_COLUMN_WIDTH - 1);
        // Highlights stop before the "..." of a truncated name.
        let visible_len = if name == country.display_name() {
            name.chars().count()
        } else {
            name.chars().count().saturating_sub(3)
        };

        let highlight_ranges = country
            .name_match_ranges(self.list.search_term())
            .into_iter()
            .filter(|&(start, _)| start < visible_len)
            .map(|(start, end)| (start, end.min(visible_len)))
            .collect();

        CountryCard {
            code: country.code.to_string(),
            name,
            localized_name: truncate(country.localized_name(), LOCALIZED_COLUMN_WIDTH - 1),
            flag_url: country.flags.svg.clone(),
            flag_alt: country.flags.alt.clone(),
            population: country.population_label(),
            highlight_ranges,
        }
    }

    /// Title with match counts and the age of the data.
    fn compute_header(&self) -> HeaderInfo {
        let catalog = self.list.catalog();
        let total = catalog.len();
        let matching = self.list.filtered_len();

        let counts = if self.list.search_term().is_empty() {
            format!("{total}")
        } else {
            format!("{matching} of {total}")
        };

        let mut title = format!(" Countries ({counts}) ");
        if let Some(age) = catalog.age_label(chrono::Utc::now().timestamp()) {
            title.push_str(&format!("· fetched {age} "));
        }
        if matches!(self.list.load_state(), LoadState::Failed { .. }) && !catalog.is_empty() {
            title.push_str("· refresh failed ");
        }

        HeaderInfo { title }
    }

    /// Keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (self.input_mode, self.list.load_state()) {
            (InputMode::Search, _) => "Esc: clear search  Enter: done  Type to filter",
            (InputMode::Normal, LoadState::Failed { .. }) => {
                "r: retry  h/l or ←/→: page  /: search  q: quit"
            }
            (InputMode::Normal, _) => "h/l or ←/→: page  /: search  Esc: clear  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// The search bar is drawn while typing and while a term filters the list.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let is_focused = self.input_mode == InputMode::Search;
        let query = self.list.search_term();

        (is_focused || !query.is_empty()).then(|| SearchBarInfo {
            query: query.to_string(),
            is_focused,
        })
    }

    /// Picks the message shown when the visible page is empty.
    fn compute_empty_state(&self, page_is_empty: bool) -> Option<EmptyState> {
        if !page_is_empty {
            return None;
        }

        let catalog_is_empty = self.list.catalog().is_empty();
        let (message, subtitle, is_error) = match self.list.load_state() {
            LoadState::Idle if catalog_is_empty => (
                "Waiting for permissions".to_string(),
                "Grant web access to load the country list".to_string(),
                false,
            ),
            LoadState::Loading if catalog_is_empty => (
                "Loading countries...".to_string(),
                self.endpoint.clone(),
                false,
            ),
            LoadState::Failed { reason, .. } if catalog_is_empty => (
                "Could not load countries".to_string(),
                format!("{reason}  (press r to retry)"),
                true,
            ),
            _ if catalog_is_empty => (
                "No countries available".to_string(),
                "The API returned an empty list".to_string(),
                false,
            ),
            _ => (
                format!("No countries match \"{}\"", self.list.search_term()),
                "Search is case-sensitive; Esc clears it".to_string(),
                false,
            ),
        };

        Some(EmptyState {
            message,
            subtitle,
            is_error,
        })
    }

    /// Rows left for cards after the chrome.
    ///
    /// Chrome is: blank line, header, border, column headers, pagination bar,
    /// border, footer; plus 3 rows when the search bar is shown.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = 7;
        let search = if self.compute_search_bar().is_some() { 3 } else { 0 };
        total_rows.saturating_sub(chrome + search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryCatalog;
    use crate::domain::country::fixture;
    use crate::domain::CountrydexError;

    fn state_with(countries: Vec<Country>) -> AppState {
        let mut catalog = CountryCatalog::new();
        catalog.replace(countries);
        let mut state = AppState::new(Theme::default(), "https://example.test/all");
        state.list = ListViewModel::with_catalog(catalog);
        state
    }

    fn sample() -> Vec<Country> {
        vec![
            fixture("ARG", "Argentina", "Buenos Aires", "Americas", "South America"),
            fixture("NLD", "Netherlands", "Amsterdam", "Europe", "Western Europe"),
            fixture("ANT", "Netherlands Antilles", "Willemstad", "Americas", "Caribbean"),
        ]
    }

    #[test]
    fn cards_carry_code_names_and_flag() {
        let vm = state_with(sample()).compute_viewmodel(40, 120);

        assert_eq!(vm.cards.len(), 3);
        assert_eq!(vm.cards[0].code, "ARG");
        assert_eq!(vm.cards[0].name, "Argentina");
        assert_eq!(vm.cards[0].localized_name, "Argentina");
        assert_eq!(vm.cards[0].flag_url, "https://flagcdn.com/arg.svg");
        assert_eq!(vm.cards[0].flag_alt, "The flag of Argentina");
        assert!(vm.empty_state.is_none());
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn highlights_follow_search_term() {
        let mut state = state_with(sample());
        state.list.set_search_term("Nether");
        let vm = state.compute_viewmodel(40, 120);

        assert_eq!(vm.cards.len(), 2);
        assert!(vm.cards.iter().all(|c| c.highlight_ranges == vec![(0, 6)]));
        assert!(vm.header.title.contains("(2 of 3)"));
        let search = vm.search_bar.expect("active term shows the search bar");
        assert_eq!(search.query, "Nether");
        assert!(!search.is_focused);
    }

    #[test]
    fn long_names_are_truncated_and_ranges_clipped() {
        let long = "United Kingdom of Great Britain and Northern Ireland";
        let mut state = state_with(vec![fixture("GBR", long, "London", "Europe", "Northern Europe")]);
        state.list.set_search_term("Ireland");
        let vm = state.compute_viewmodel(40, 120);

        let card = &vm.cards[0];
        assert!(card.name.chars().count() < NAME_COLUMN_WIDTH);
        assert!(card.name.ends_with("..."));
        assert!(card.highlight_ranges.is_empty());
    }

    #[test]
    fn match_in_truncated_tail_does_not_highlight_ellipsis() {
        let mut state = state_with(vec![fixture(
            "ALP",
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123",
            "",
            "Europe",
            "",
        )]);

        state.list.set_search_term("WXYZ");
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.cards[0].name, "ABCDEFGHIJKLMNOPQRSTUV...");
        assert!(vm.cards[0].highlight_ranges.is_empty());

        state.list.set_search_term("TUVW");
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.cards[0].highlight_ranges, vec![(19, 22)]);
    }

    #[test]
    fn pagination_controls_reflect_bounds() {
        let countries: Vec<Country> = (0..15)
            .map(|i| fixture(&format!("X{i:02}"), &format!("Land{i:02}"), "", "Oceania", ""))
            .collect();
        let mut state = state_with(countries);

        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.pagination.label, "Page 1 of 2");
        assert!(!vm.pagination.has_previous);
        assert!(vm.pagination.has_next);
        assert_eq!(vm.cards.len(), 10);

        state.list.next_page();
        let vm = state.compute_viewmodel(40, 120);
        assert_eq!(vm.pagination.label, "Page 2 of 2");
        assert!(vm.pagination.has_previous);
        assert!(!vm.pagination.has_next);
        assert_eq!(vm.cards.len(), 5);
    }

    #[test]
    fn short_panes_drop_cards_that_do_not_fit() {
        let state = state_with(sample());
        let vm = state.compute_viewmodel(9, 120);
        assert_eq!(vm.cards.len(), 2);
    }

    #[test]
    fn empty_states_follow_load_state() {
        let mut state = AppState::new(Theme::default(), "https://example.test/all");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.as_ref().map(|e| e.message.as_str()), Some("Waiting for permissions"));

        state.list.begin_load();
        let vm = state.compute_viewmodel(24, 80);
        let empty = vm.empty_state.expect("loading");
        assert_eq!(empty.message, "Loading countries...");
        assert_eq!(empty.subtitle, "https://example.test/all");

        let _ = state.list.complete_load(Err(CountrydexError::Network {
            status: 400,
            message: "dns error".into(),
        }));
        let vm = state.compute_viewmodel(24, 80);
        let empty = vm.empty_state.expect("failed");
        assert!(empty.is_error);
        assert!(empty.subtitle.contains("dns error"));
        assert!(vm.footer.keybindings.starts_with("r: retry"));
        assert_eq!(vm.pagination.label, "Page 1 of 0");
        assert!(!vm.pagination.has_previous && !vm.pagination.has_next);
    }

    #[test]
    fn no_matches_message_names_the_term() {
        let mut state = state_with(sample());
        state.list.set_search_term("zzz");
        let vm = state.compute_viewmodel(24, 80);

        let empty = vm.empty_state.expect("no matches");
        assert_eq!(empty.message, "No countries match \"zzz\"");
        assert!(!empty.is_error);
    }
}
