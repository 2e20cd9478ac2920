//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a list of
//! [`Action`]s which the plugin shim in `main.rs` translates into host calls
//! (`web_request`, `hide_self`). This keeps every state transition testable on
//! the host.
//!
//! # Example
//!
//! ```
//! use countrydex::Action;
//!
//! let actions = vec![Action::FetchCountries {
//!     url: "https://restcountries.com/v3.1/all".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues the single unauthenticated GET for the country list.
    ///
    /// The result comes back later as a `WebRequestResult` event.
    FetchCountries {
        /// Endpoint to query, without query parameters.
        url: String,
    },
}
