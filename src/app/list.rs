//! Search and pagination over the country catalog.
//!
//! [`ListViewModel`] owns the [`CountryCatalog`] together with the two pieces of
//! user-controlled state, the search term and the 1-based page index. Everything
//! else (filtered countries, page count, visible slice) is derived on every read
//! and never stored, so the visible page can not drift out of sync with the
//! catalog or the term.
//!
//! # Example
//!
//! ```
//! use countrydex::app::{ListViewModel, PAGE_SIZE};
//!
//! let mut list = ListViewModel::new();
//! assert!(list.begin_load());
//!
//! let body = br#"[{"name":{"common":"Chile"},"capital":["Santiago"],"cca3":"CHL"}]"#;
//! list.complete_load(countrydex::catalog::decode_response(200, body)).unwrap();
//!
//! let page = list.visible_page();
//! assert_eq!(page.countries.len(), 1);
//! assert_eq!((page.current_page, page.total_pages), (1, 1));
//! assert!(PAGE_SIZE >= page.countries.len());
//! ```

use crate::catalog::CountryCatalog;
use crate::domain::{Country, FailureKind, Result};

/// Number of countries per page.
pub const PAGE_SIZE: usize = 10;

/// Progress of the single country fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No request issued yet (waiting for permissions).
    Idle,
    /// A request is in flight.
    Loading,
    /// The catalog holds the result of a successful fetch.
    Loaded,
    /// The last fetch failed; the catalog kept its previous contents.
    Failed {
        kind: FailureKind,
        reason: String,
    },
}

/// The current page as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisiblePage<'a> {
    /// At most [`PAGE_SIZE`] countries, in catalog order.
    pub countries: Vec<&'a Country>,
    /// 1-based page index.
    pub current_page: usize,
    /// Number of pages for the current filter, 0 when nothing matches.
    pub total_pages: usize,
}

/// Country list with substring search and fixed-size pages.
#[derive(Debug, Clone)]
pub struct ListViewModel {
    catalog: CountryCatalog,
    search_term: String,
    current_page: usize,
    load_state: LoadState,
}

impl Default for ListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewModel {
    /// Creates an empty list on page 1 with an empty search term.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(CountryCatalog::new())
    }

    /// Creates a list over an already populated catalog.
    #[must_use]
    pub fn with_catalog(catalog: CountryCatalog) -> Self {
        let load_state = if catalog.fetched_at().is_some() {
            LoadState::Loaded
        } else {
            LoadState::Idle
        };

        Self {
            catalog,
            search_term: String::new(),
            current_page: 1,
            load_state,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Marks the start of a fetch.
    ///
    /// Returns `false` when a fetch is already in flight, in which case no new
    /// request must be issued.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state == LoadState::Loading {
            tracing::debug!("country load already in flight");
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Applies the outcome of a fetch.
    ///
    /// On success the catalog is replaced wholesale and the number of countries
    /// is returned. On failure the catalog is left as it was and the error is
    /// handed back to the caller after being recorded in [`LoadState::Failed`].
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged.
    pub fn complete_load(&mut self, outcome: Result<Vec<Country>>) -> Result<usize> {
        if self.load_state != LoadState::Loading {
            tracing::debug!(state = ?self.load_state, "applying unsolicited load result");
        }

        match outcome {
            Ok(countries) => {
                let count = countries.len();
                self.catalog.replace(countries);
                self.load_state = LoadState::Loaded;
                Ok(count)
            }
            Err(e) => {
                let kind = e.failure_kind().unwrap_or(FailureKind::Network);
                self.load_state = LoadState::Failed {
                    kind,
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Replaces the search term verbatim and returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Appends one typed character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(c);
        self.set_search_term(term);
    }

    /// Removes the last character of the search term, if any.
    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_search_term(term);
    }

    /// Countries matching the search term, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &Country> + '_ {
        self.catalog
            .countries()
            .iter()
            .filter(move |country| country.matches(&self.search_term))
    }

    /// Number of countries matching the search term.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    /// Number of pages for the current filter; 0 when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_len().div_ceil(PAGE_SIZE)
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Advances one page unless already on the last one.
    pub fn next_page(&mut self) -> bool {
        if self.has_next_page() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless already on the first one.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous_page() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Slice of the filtered countries for the current page.
    #[must_use]
    pub fn visible_page(&self) -> VisiblePage<'_> {
        let offset = (self.current_page - 1) * PAGE_SIZE;
        let countries = self.filtered().skip(offset).take(PAGE_SIZE).collect();

        VisiblePage {
            countries,
            current_page: self.current_page,
            total_pages: self.total_pages(),
        }
    }
}
