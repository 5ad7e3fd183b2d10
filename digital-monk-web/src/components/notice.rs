//! Notices about the history export, shown as self-dismissing toasts.

use digital_monk::ExportError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicUsize, Ordering};

const NOTICE_DISMISS_MS: u32 = 5000;

/// Something the export flow wants the user to know.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The CSV was handed to the browser.
    Downloaded { entries: usize },
    /// Nothing was exported; carries the refusal reason.
    ExportRefused(ExportError),
    /// Building or clicking the download link failed.
    DownloadFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Downloaded { entries: 1 } => "Downloaded 1 fortune.".to_string(),
            Notice::Downloaded { entries } => format!("Downloaded {} fortunes.", entries),
            Notice::ExportRefused(e) => e.to_string(),
            Notice::DownloadFailed(reason) => format!("Could not download history: {}", reason),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Downloaded { .. } => "toast toast-success",
            Notice::ExportRefused(_) => "toast toast-info",
            Notice::DownloadFailed(_) => "toast toast-error",
        }
    }
}

/// A notice on screen, keyed for dismissal.
#[derive(Debug, Clone)]
pub struct ShownNotice {
    pub id: usize,
    pub notice: Notice,
}

static NOTICE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Show `notice` and drop it again after five seconds.
pub fn push_notice(notices: RwSignal<Vec<ShownNotice>>, notice: Notice) {
    let id = NOTICE_COUNTER.fetch_add(1, Ordering::Relaxed);
    if let Notice::DownloadFailed(reason) = &notice {
        log::error!("CSV download failed: {}", reason);
    }
    notices.update(|n| n.push(ShownNotice { id, notice }));

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        notices.update(|n| n.retain(|m| m.id != id));
    });
}

#[component]
pub fn NoticeTray(notices: RwSignal<Vec<ShownNotice>>) -> impl IntoView {
    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || notices.get()
                key=|shown| shown.id
                children=move |shown| {
                    let id = shown.id;
                    view! {
                        <div class=shown.notice.class() role="status">
                            <span class="toast-message">{shown.notice.message()}</span>
                            <button
                                class="toast-dismiss"
                                aria-label="Dismiss notice"
                                on:click=move |_| notices.update(|n| n.retain(|m| m.id != id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_uses_export_error_text() {
        assert_eq!(
            Notice::ExportRefused(ExportError::NothingToExport).message(),
            "No fortune history to download yet! Interact with the monk first."
        );
    }

    #[test]
    fn test_download_messages() {
        assert_eq!(Notice::Downloaded { entries: 1 }.message(), "Downloaded 1 fortune.");
        assert_eq!(Notice::Downloaded { entries: 4 }.message(), "Downloaded 4 fortunes.");
        assert_eq!(
            Notice::DownloadFailed("No document".to_string()).message(),
            "Could not download history: No document"
        );
        assert_eq!(Notice::DownloadFailed(String::new()).class(), "toast toast-error");
    }
}
