//! Root application module.
//!
//! Contains the main App component, AppContext definition, ViewerState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Viewer;
use crate::models::FetchPhase;

// ============================================================================
// ViewerState
// ============================================================================

/// Viewer state managed with Leptos signals.
///
/// Owns the URL input text and the fetch phase. All mutation goes through
/// the named transitions below, so the phase invariants (one outcome at a
/// time, Loading clears previous results) hold everywhere.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ViewerState {
    /// Raw text of the repository URL input.
    pub input_url: RwSignal<String>,
    /// Current phase of the fetch state machine.
    pub phase: RwSignal<FetchPhase>,
    /// Monotonic token identifying the latest submission.
    request_seq: RwSignal<u64>,
}

impl ViewerState {
    /// Creates a new viewer state with empty defaults.
    pub fn new() -> Self {
        Self {
            input_url: RwSignal::new(String::new()),
            phase: RwSignal::new(FetchPhase::Idle),
            request_seq: RwSignal::new(0),
        }
    }

    /// Enter `Loading`, superseding any in-flight request.
    ///
    /// Returns the token for this submission; a response may only be
    /// applied through [`ViewerState::resolve`] with that token, so a slow
    /// earlier request can no longer overwrite a later one.
    pub fn begin_fetch(&self) -> u64 {
        let token = self.request_seq.get_untracked() + 1;
        self.request_seq.set(token);
        self.phase.set(FetchPhase::Loading);
        token
    }

    /// Apply a fetch outcome unless a newer submission superseded it.
    pub fn resolve(&self, token: u64, phase: FetchPhase) {
        if self.request_seq.get_untracked() == token {
            self.phase.set(phase);
        }
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Viewer state (URL input, fetch phase).
    pub viewer: ViewerState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            viewer: ViewerState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Viewer component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="color: #57606a; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <details style="margin-bottom: 1rem;">
                        <summary style="cursor: pointer;">"Error details"</summary>
                        <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #cf222e;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Viewer />
        </ErrorBoundary>
    }
}
