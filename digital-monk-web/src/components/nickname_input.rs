use leptos::prelude::*;

#[component]
pub fn NicknameInput(
    nickname: Signal<String>,
    disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="config-section">
            <label for="nickname" class="field-label">"Nickname (optional):"</label>
            <input
                type="text"
                id="nickname"
                placeholder="Your identifier..."
                aria-label="Nickname for history entries"
                prop:value=move || nickname.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}
