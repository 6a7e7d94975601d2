//! Page context provider for linkpage.
//!
//! Provides the startup state to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| page_state);
//!
//! // In child components
//! let page = use_page();
//! ```

use dioxus::prelude::*;
use linkpage_core::PageState;

use crate::platform::Environment;
use crate::LaunchOptions;

/// Get the launch options for the application.
/// Uses the global options set from command line args.
pub fn get_launch_options() -> LaunchOptions {
    crate::get_launch_options()
}

/// Hook to access the page state from context.
///
/// Starts as `PageState::Loading` and is replaced exactly once when the
/// configuration has been loaded and composed (or failed to load).
pub fn use_page() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Hook to access the probed webview environment.
pub fn use_environment() -> Signal<Environment> {
    use_context::<Signal<Environment>>()
}
