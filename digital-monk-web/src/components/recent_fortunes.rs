//! Read-only list of the latest history entries.

use digital_monk::HistoryEntry;
use leptos::prelude::*;

const MAX_SHOWN: usize = 5;
const PREVIEW_CHARS: usize = 120;

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[component]
pub fn RecentFortunes(history: Signal<Vec<HistoryEntry>>) -> impl IntoView {
    let recent = Memo::new(move |_| {
        history
            .get()
            .into_iter()
            .rev()
            .take(MAX_SHOWN)
            .collect::<Vec<_>>()
    });

    view! {
        <Show when=move || !recent.get().is_empty()>
            <div class="history-section">
                <h3 class="section-title">"Recent Fortunes"</h3>
                <div class="history-list">
                    {move || recent.get().into_iter().map(|entry| {
                        view! { <HistoryItem entry=entry /> }
                    }).collect_view()}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn HistoryItem(entry: HistoryEntry) -> impl IntoView {
    let class = if entry.is_error() {
        "history-entry history-entry-error"
    } else {
        "history-entry"
    };
    let full_text = entry.result.clone();
    let display_text = preview(&entry.result);
    let when = format!("{} {}", entry.date, entry.time);

    view! {
        <div class=class>
            <div class="history-entry-text" title=full_text>
                {display_text}
            </div>
            <div class="history-entry-meta">
                <span class="history-nickname">{entry.nickname}</span>
                " · "
                <span class="history-when">{when}</span>
                " · "
                <span class="history-mood">{entry.mood}</span>
            </div>
        </div>
    }
}
