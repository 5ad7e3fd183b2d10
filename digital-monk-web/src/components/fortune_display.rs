use leptos::prelude::*;

#[component]
pub fn FortuneDisplay(fortune: Signal<Option<String>>) -> impl IntoView {
    move || {
        fortune.get().filter(|f| !f.is_empty()).map(|text| {
            view! {
                <div class="fortune-section">
                    <h2 class="section-title">"Your Fortune:"</h2>
                    <blockquote class="fortune-text">
                        <p>{text}</p>
                    </blockquote>
                </div>
            }
        })
    }
}
