//! Zellij plugin entry point.
//!
//! Thin shim between Zellij and the `countrydex` library: it translates host
//! events into [`Event`]s, runs them through [`handle_event`], and performs the
//! returned [`Action`]s with the plugin API.
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, start tracing, request `WebAccess`, subscribe
//! 2. **Permission granted**: the handler asks for the country list
//! 3. **WebRequestResult**: the response body is decoded into the catalog
//! 4. **Key / Render**: paging and search run entirely in memory
//!
//! # Keybindings
//!
//! In normal mode:
//! - `l`/`Right`/`n`: Next page
//! - `h`/`Left`/`p`: Previous page
//! - `/`: Search
//! - `Esc`: Clear the search term
//! - `r`: Retry a failed load
//! - `q`: Close plugin
//!
//! In search mode:
//! - Any character: Type into the search term
//! - `Backspace`: Delete the last character
//! - `Enter`: Keep the term and return to normal mode
//! - `Esc`: Clear the term and return to normal mode
//! - `Left`/`Right`: Change page

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use countrydex::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Context key tagging our web requests so unrelated results are ignored.
const REQUEST_CONTEXT_KEY: &str = "request";
const REQUEST_CONTEXT_COUNTRIES: &str = "countries";

struct State {
    app: countrydex::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: countrydex::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, requests web access, and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        countrydex::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        self.app = countrydex::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                if context.get(REQUEST_CONTEXT_KEY).map(String::as_str)
                    != Some(REQUEST_CONTEXT_COUNTRIES)
                {
                    tracing::debug!(?context, "ignoring web request result with unknown context");
                    return false;
                }
                tracing::debug!(status, body_len = body.len(), "countries response received");
                Event::CountriesFetched { status, body }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::PermissionsGranted,
                PermissionStatus::Denied => Event::PermissionsDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        countrydex::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) || key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        let event = match self.app.input_mode {
            InputMode::Search => match key.bare_key {
                BareKey::Enter => Event::CommitSearch,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Right => Event::NextPage,
                BareKey::Left => Event::PreviousPage,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Right | BareKey::Char('l' | 'n') => Event::NextPage,
                BareKey::Left | BareKey::Char('h' | 'p') => Event::PreviousPage,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Esc => Event::Escape,
                BareKey::Char('r') => Event::Retry,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        };
        Some(event)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchCountries { url } => {
                let context = BTreeMap::from([(
                    REQUEST_CONTEXT_KEY.to_string(),
                    REQUEST_CONTEXT_COUNTRIES.to_string(),
                )]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
