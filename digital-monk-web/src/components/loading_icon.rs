use leptos::prelude::*;

/// Spinning ring shown while the oracle is consulted.
#[component]
pub fn LoadingIcon() -> impl IntoView {
    view! {
        <svg
            class="loading-icon"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <circle class="loading-icon-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="loading-icon-head" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"></path>
        </svg>
    }
}
