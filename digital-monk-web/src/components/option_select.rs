use digital_monk::Field;
use leptos::prelude::*;

#[component]
pub fn OptionSelect(
    field: Field,
    value: Signal<&'static str>,
    disabled: Signal<bool>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let id = field.as_str();

    view! {
        <div class="config-section">
            <label for=id class="field-label">{field.prompt_label()}</label>
            <select
                id=id
                aria-label=field.aria_label()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {field.options().iter().map(|opt| {
                    view! {
                        <option value=opt.value selected=move || value.get() == opt.value>
                            {opt.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
