use leptos::prelude::*;

fn download_label(count: usize) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("Download Full History ({} {})", count, noun)
}

/// Download button, shown once there is at least one history entry.
#[component]
pub fn HistoryDownload(
    count: Signal<usize>,
    #[prop(into)] on_download: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <div class="download-section">
                <button
                    class="download-button"
                    on:click=move |_| on_download.run(())
                    aria-label="Download all fortune history as CSV file"
                >
                    {move || download_label(count.get())}
                </button>
            </div>
        </Show>
    }
}
