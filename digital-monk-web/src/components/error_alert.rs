use leptos::prelude::*;

#[component]
pub fn ErrorAlert(message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div class="error-alert" role="alert">
                    <strong class="error-alert-title">"Oops! "</strong>
                    <span>{msg}</span>
                </div>
            }
        })
    }
}
