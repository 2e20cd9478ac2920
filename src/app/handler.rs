//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for state changes. It consumes
//! one [`Event`] at a time (Zellij delivers them sequentially), mutates
//! [`AppState`], and returns whether a re-render is needed together with the
//! [`Action`]s the plugin shim should perform.
//!
//! # Event Types
//!
//! - **Paging**: `NextPage`, `PreviousPage`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `CommitSearch`, `ExitSearch`, `Escape`
//! - **Loading**: `PermissionsGranted`, `PermissionsDenied`, `CountriesFetched`, `Retry`
//! - **Plugin**: `CloseFocus`
//!
//! # Example
//!
//! ```
//! use countrydex::{handle_event, Action, AppState, Event, Theme};
//!
//! let mut state = AppState::new(Theme::default(), "https://restcountries.com/v3.1/all");
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(render);
//! assert_eq!(actions, vec![Action::FetchCountries {
//!     url: "https://restcountries.com/v3.1/all".to_string(),
//! }]);
//! # Ok::<(), countrydex::CountrydexError>(())
//! ```

use crate::app::list::LoadState;
use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::catalog::decode_response;
use crate::domain::error::Result;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shows the next page, if any.
    NextPage,
    /// Shows the previous page, if any.
    PreviousPage,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Focuses the search bar, keeping the current term.
    SearchMode,
    /// Leaves search mode, keeping the term as an active filter.
    CommitSearch,
    /// Leaves search mode and clears the term.
    ExitSearch,
    /// Appends a character to the search term (search mode only).
    Char(char),
    /// Removes the last character of the search term (search mode only).
    Backspace,
    /// Clears the search term from normal mode.
    Escape,
    /// Re-issues the fetch after a failure.
    Retry,

    /// The user granted the permissions needed to reach the network.
    PermissionsGranted,
    /// The user denied the permissions; the list stays empty.
    PermissionsDenied,

    /// The countries request finished.
    ///
    /// Carries the raw status and body from Zellij's `WebRequestResult`.
    CountriesFetched {
        /// HTTP status; Zellij reports transport errors as 400.
        status: u16,
        /// Response body bytes.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. No-op events (paging past the last page, typing
/// outside search mode) return `false` so the shim can skip a redraw.
///
/// # Errors
///
/// Fetch failures are absorbed into [`LoadState::Failed`] and never returned,
/// so the other events keep working. The `Result` is kept for handler-level
/// failures.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    match event {
        Event::NextPage => Ok((state.list.next_page(), vec![])),
        Event::PreviousPage => Ok((state.list.previous_page(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::CommitSearch => {
            tracing::debug!(term = %state.list.search_term(), "search committed");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(term = %state.list.search_term(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.list.set_search_term(String::new());
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.list.push_search_char(*c);
            tracing::trace!(term = %state.list.search_term(), "search term updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.list.pop_search_char();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.list.search_term().is_empty() {
                return Ok((false, vec![]));
            }
            state.list.set_search_term(String::new());
            Ok((true, vec![]))
        }
        Event::Retry => {
            if !matches!(state.list.load_state(), LoadState::Failed { .. }) {
                tracing::debug!(state = ?state.list.load_state(), "retry ignored");
                return Ok((false, vec![]));
            }
            Ok((true, start_fetch(state)))
        }
        Event::PermissionsGranted => {
            if state.list.load_state() != &LoadState::Idle {
                tracing::debug!("permissions re-granted, countries already requested");
                return Ok((false, vec![]));
            }
            Ok((true, start_fetch(state)))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access denied - country list will stay empty");
            Ok((false, vec![]))
        }
        Event::CountriesFetched { status, body } => {
            let outcome = decode_response(*status, body);
            match state.list.complete_load(outcome) {
                Ok(count) => {
                    tracing::info!(count, "countries loaded");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load countries");
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Marks the list as loading and returns the fetch action, unless a fetch is
/// already in flight.
fn start_fetch(state: &mut AppState) -> Vec<Action> {
    if !state.list.begin_load() {
        return vec![];
    }
    tracing::debug!(url = %state.endpoint, "requesting countries");
    vec![Action::FetchCountries {
        url: state.endpoint.clone(),
    }]
}

/// Short event label for spans; avoids dumping response bodies into traces.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::NextPage => "NextPage",
        Event::PreviousPage => "PreviousPage",
        Event::CloseFocus => "CloseFocus",
        Event::SearchMode => "SearchMode",
        Event::CommitSearch => "CommitSearch",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::Retry => "Retry",
        Event::PermissionsGranted => "PermissionsGranted",
        Event::PermissionsDenied => "PermissionsDenied",
        Event::CountriesFetched { .. } => "CountriesFetched",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FailureKind;
    use crate::ui::Theme;

    const URL: &str = "https://example.test/v3.1/all";

    fn payload(count: usize) -> Vec<u8> {
        let records: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"name":{{"common":"Country{i:02}"}},"translations":{{"por":{{"common":"País{i:02}"}}}},"capital":["Capital{i:02}"],"region":"Europe","subregion":"Northern Europe","population":{i},"cca3":"C{i:02}"}}"#
                )
            })
            .collect();
        format!("[{}]", records.join(",")).into_bytes()
    }

    fn loaded_state(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default(), URL);
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        handle_event(
            &mut state,
            &Event::CountriesFetched {
                status: 200,
                body: payload(count),
            },
        )
        .unwrap();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn permissions_trigger_exactly_one_fetch() {
        let mut state = AppState::new(Theme::default(), URL);

        let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FetchCountries { url: URL.to_string() }]);
        assert_eq!(state.list.load_state(), &LoadState::Loading);

        let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn fetched_countries_populate_the_first_page() {
        let state = loaded_state(25);
        let page = state.list.visible_page();

        assert_eq!(state.list.load_state(), &LoadState::Loaded);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.countries.len(), 10);
        assert_eq!(page.countries[0].localized_name(), "País00");
    }

    #[test]
    fn paging_reports_whether_anything_changed() {
        let mut state = loaded_state(25);

        assert_eq!(handle_event(&mut state, &Event::PreviousPage).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));
        assert_eq!(state.list.current_page(), 3);
    }

    #[test]
    fn typing_only_edits_the_term_in_search_mode() {
        let mut state = loaded_state(25);

        assert_eq!(handle_event(&mut state, &Event::Char('x')).unwrap(), (false, vec![]));
        assert_eq!(state.list.search_term(), "");

        handle_event(&mut state, &Event::NextPage).unwrap();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "Capital2");
        assert_eq!(state.list.search_term(), "Capital2");
        assert_eq!(state.list.current_page(), 1);
        assert_eq!(state.list.filtered_len(), 5);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.list.search_term(), "Capital");
        assert_eq!(state.list.filtered_len(), 25);
    }

    #[test]
    fn commit_keeps_term_and_exit_clears_it() {
        let mut state = loaded_state(25);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "Country1");

        handle_event(&mut state, &Event::CommitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list.search_term(), "Country1");

        assert_eq!(handle_event(&mut state, &Event::Char('9')).unwrap(), (false, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Escape).unwrap(), (true, vec![]));
        assert_eq!(state.list.search_term(), "");
        assert_eq!(handle_event(&mut state, &Event::Escape).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "Europe");
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list.search_term(), "");
    }

    #[test]
    fn failed_fetch_is_recoverable_with_retry() {
        let mut state = AppState::new(Theme::default(), URL);
        handle_event(&mut state, &Event::PermissionsGranted).unwrap();

        let result = handle_event(
            &mut state,
            &Event::CountriesFetched {
                status: 400,
                body: b"error sending request".to_vec(),
            },
        );
        assert_eq!(result.unwrap(), (true, vec![]));
        assert!(state.list.catalog().is_empty());
        assert!(matches!(
            state.list.load_state(),
            LoadState::Failed { kind: FailureKind::Network, .. }
        ));

        handle_event(&mut state, &Event::SearchMode).unwrap();
        type_text(&mut state, "abc");
        assert_eq!(handle_event(&mut state, &Event::NextPage).unwrap(), (false, vec![]));

        let (render, actions) = handle_event(&mut state, &Event::Retry).unwrap();
        assert!(render);
        assert_eq!(actions, vec![Action::FetchCountries { url: URL.to_string() }]);
        assert_eq!(handle_event(&mut state, &Event::Retry).unwrap(), (false, vec![]));

        handle_event(
            &mut state,
            &Event::CountriesFetched {
                status: 200,
                body: payload(3),
            },
        )
        .unwrap();
        assert_eq!(state.list.catalog().len(), 3);
    }

    #[test]
    fn malformed_body_keeps_existing_catalog() {
        let mut state = loaded_state(12);
        state.list.begin_load();

        handle_event(
            &mut state,
            &Event::CountriesFetched {
                status: 200,
                body: b"[{\"name\":{}}]".to_vec(),
            },
        )
        .unwrap();

        assert_eq!(state.list.catalog().len(), 12);
        assert!(matches!(
            state.list.load_state(),
            LoadState::Failed { kind: FailureKind::MalformedResponse, .. }
        ));
    }

    #[test]
    fn close_and_denied_permissions() {
        let mut state = AppState::new(Theme::default(), URL);
        assert_eq!(
            handle_event(&mut state, &Event::CloseFocus).unwrap(),
            (false, vec![Action::CloseFocus])
        );
        assert_eq!(handle_event(&mut state, &Event::PermissionsDenied).unwrap(), (false, vec![]));
        assert_eq!(state.list.load_state(), &LoadState::Idle);
    }
}
