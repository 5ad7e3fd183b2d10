use digital_monk::export::{self, CSV_MIME, EXPORT_FILENAME};
use digital_monk::{Config, Controller, Field, FortuneClient, HistoryEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GeminiClient;
use crate::components::notice::{Notice, NoticeTray, ShownNotice, push_notice};
use crate::components::{
    ErrorAlert, FortuneButton, FortuneDisplay, HistoryDownload, NicknameInput, OptionSelect,
    RecentFortunes,
};
use crate::download;
use crate::storage::{self, BrowserStore};

#[component]
pub fn App() -> impl IntoView {
    let client = GeminiClient::new(Config::from_build_env());

    // Selections, request state and history
    let controller = RwSignal::new(Controller::new(BrowserStore::detect()));

    // Export notices
    let notices = RwSignal::new(Vec::<ShownNotice>::new());

    // Derived views of the controller
    let is_pending = Signal::derive(move || controller.with(|c| c.is_pending()));
    let fortune = Signal::derive(move || controller.with(|c| c.fortune().map(str::to_string)));
    let error = Signal::derive(move || controller.with(|c| c.error().map(str::to_string)));
    let history: Signal<Vec<HistoryEntry>> =
        Signal::derive(move || controller.with(|c| c.history().to_vec()));
    let history_count = Signal::derive(move || controller.with(|c| c.history().len()));
    let nickname = Signal::derive(move || controller.with(|c| c.selection().nickname().to_string()));

    // Callbacks
    let on_submit = Callback::new(move |_: ()| {
        let Some(submission) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        let client = client.clone();

        spawn_local(async move {
            let situation = submission.situation();
            log::info!("Consulting the oracle: {}", situation);
            let outcome = client.request_fortune(&situation).await;
            controller.update(|c| {
                c.settle(submission, outcome, storage::now_timestamp());
            });
        });
    });

    let on_nickname = Callback::new(move |value: String| {
        controller.update(|c| c.set_nickname(value));
    });

    let on_download = Callback::new(move |_: ()| {
        let (csv, entries) =
            controller.with_untracked(|c| (export::to_csv(c.history()), c.history().len()));
        let notice = match csv {
            Ok(csv) => match download::download_text(EXPORT_FILENAME, CSV_MIME, &csv) {
                Ok(()) => Notice::Downloaded { entries },
                Err(reason) => Notice::DownloadFailed(reason),
            },
            Err(e) => Notice::ExportRefused(e),
        };
        push_notice(notices, notice);
    });

    let selects = Field::ALL
        .into_iter()
        .map(|field| {
            let value = Signal::derive(move || controller.with(|c| c.selection().get(field)));
            let on_change = Callback::new(move |picked: String| {
                controller.update(|c| {
                    if let Err(e) = c.select(field, &picked) {
                        log::warn!("{}", e);
                    }
                });
            });
            view! {
                <OptionSelect field=field value=value disabled=is_pending on_change=on_change />
            }
        })
        .collect_view();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1 class="app-title">"Digital Monk's Wisdom"</h1>
                <p class="tagline">
                    "Peer into the digital ether, and find your fortune by weaving your state of mind."
                </p>
            </header>

            <main class="main-content">
                <div class="panel form-panel">
                    {selects}
                    <NicknameInput nickname=nickname disabled=is_pending on_input=on_nickname />
                </div>

                <FortuneButton is_loading=is_pending on_submit=on_submit />

                <ErrorAlert message=error />

                <FortuneDisplay fortune=fortune />

                <HistoryDownload count=history_count on_download=on_download />

                <RecentFortunes history=history />
            </main>

            <NoticeTray notices=notices />

            <footer class="app-footer">
                <p>
                    {format!(
                        "© {} Digital Monk AI. All wisdom compiled on demand and saved locally in your browser.",
                        storage::current_year()
                    )}
                </p>
            </footer>
        </div>
    }
}
