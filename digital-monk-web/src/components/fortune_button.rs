use leptos::prelude::*;

use super::LoadingIcon;

#[component]
pub fn FortuneButton(
    is_loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="fortune-button"
            on:click=move |_| on_submit.run(())
            disabled=move || is_loading.get()
            aria-live="polite"
        >
            {move || if is_loading.get() {
                view! {
                    <LoadingIcon />
                    "Consulting the Oracle..."
                }.into_any()
            } else {
                view! { "Unveil My Fortune" }.into_any()
            }}
        </button>
    }
}
