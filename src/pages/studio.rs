//! Studio page — the single-screen ascii-art workbench.
//!
//! ARCHITECTURE
//! ============
//! This component wires the editor, banner dropdown, color groups,
//! preview, and export panel around the shared context signals, and
//! spawns the one worker task that owns all timing state (debounce
//! scheduler, export guard). Components never touch timers; they push
//! `StudioCommand`s and the worker applies them in arrival order.
//!
//! SYSTEM CONTEXT
//! ==============
//! Render and export requests go through `net::api`; finished exports
//! go through `util::download`. The worker snapshots form and color
//! state with untracked reads at fire time, so a request reflects the
//! latest input even when several changes landed inside one debounce
//! window.
//!
//! TRADE-OFFS
//! ==========
//! Render requests run concurrently rather than serialized: a slow
//! response can land after a newer one and overwrite it. The debounce
//! window keeps overlap rare in practice, and in exchange the worker
//! never blocks on the network.

use leptos::prelude::*;

use controls::channel::{ChannelKind, ColorBoard};
use controls::consts::DEFAULT_EXPORT_FORMAT;
use controls::form::FormState;
use controls::preview::PreviewState;

use crate::app::{StudioCommand, StudioSender};
use crate::components::banner_select::BannerSelect;
use crate::components::color_group::ColorGroup;
use crate::components::editor_form::EditorForm;
use crate::components::export_panel::ExportPanel;
use crate::components::preview_pane::PreviewPane;

/// Studio page composing all controls around the shared state contexts.
#[component]
pub fn StudioPage() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let colors = expect_context::<RwSignal<ColorBoard>>();
    let preview = expect_context::<RwSignal<PreviewState>>();
    let sender = expect_context::<RwSignal<StudioSender>>();

    let export_format = RwSignal::new(DEFAULT_EXPORT_FORMAT.to_owned());
    let export_filename = RwSignal::new(String::new());
    let export_notice = RwSignal::new(None::<String>);

    // Spawn the worker once the page is live in the browser.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let tx = spawn_studio_worker(
                form,
                colors,
                preview,
                export_format,
                export_filename,
                export_notice,
            );
            sender.set(StudioSender::connected(tx));
        }
    });

    // Suppression goes first so the worker drops any queued render
    // before the state it would have snapshotted is reset.
    let on_clear = Callback::new(move |_| {
        sender.get_untracked().send(StudioCommand::SuppressRender);
        form.set(FormState::default());
        colors.set(ColorBoard::default());
        preview.update(|p| p.reset());
        export_notice.set(None);
    });

    let on_export = Callback::new(move |_| {
        sender.get_untracked().send(StudioCommand::BeginExport);
    });

    view! {
        <div class="studio">
            <header class="studio__header">
                <h1 class="studio__title">"Asciiboard"</h1>
                <p class="studio__tagline">"Text in, banner art out."</p>
            </header>

            <main class="studio__layout">
                <section class="studio__controls">
                    <EditorForm on_clear=on_clear/>
                    <BannerSelect/>
                    <div class="studio__colors">
                        <ColorGroup kind=ChannelKind::Global/>
                        <ColorGroup kind=ChannelKind::Target/>
                        <ColorGroup kind=ChannelKind::Background/>
                    </div>
                    <ExportPanel
                        format=export_format
                        filename=export_filename
                        notice=export_notice
                        on_export=on_export
                    />
                </section>

                <PreviewPane/>
            </main>
        </div>
    }
}

/// Spawn the studio worker and return the command-side sender.
#[cfg(feature = "hydrate")]
fn spawn_studio_worker(
    form: RwSignal<FormState>,
    colors: RwSignal<ColorBoard>,
    preview: RwSignal<PreviewState>,
    export_format: RwSignal<String>,
    export_filename: RwSignal<String>,
    export_notice: RwSignal<Option<String>>,
) -> futures::channel::mpsc::UnboundedSender<StudioCommand> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<StudioCommand>();
    let tx_clone = tx.clone();

    leptos::task::spawn_local(studio_loop(
        tx_clone,
        rx,
        form,
        colors,
        preview,
        export_format,
        export_filename,
        export_notice,
    ));

    tx
}

/// Worker loop owning the debounce scheduler and the export guard.
///
/// Commands arrive strictly ordered, so all timing state lives in plain
/// locals. Debounce and cool-down timers are fire-and-forget tasks that
/// report back through the same channel; a stale debounce timer dies at
/// the scheduler's ticket check.
#[cfg(feature = "hydrate")]
async fn studio_loop(
    tx: futures::channel::mpsc::UnboundedSender<StudioCommand>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<StudioCommand>,
    form: RwSignal<FormState>,
    colors: RwSignal<ColorBoard>,
    preview: RwSignal<PreviewState>,
    export_format: RwSignal<String>,
    export_filename: RwSignal<String>,
    export_notice: RwSignal<Option<String>>,
) {
    use std::time::Duration;

    use controls::consts::{DEBOUNCE_MS, EMPTY_EXPORT_NOTICE, EXPORT_COOLDOWN_MS};
    use controls::guard::ExportGuard;
    use controls::request::ExportRequest;
    use controls::schedule::RenderScheduler;
    use futures::StreamExt;

    let mut scheduler = RenderScheduler::default();
    let mut guard = ExportGuard::default();

    while let Some(command) = rx.next().await {
        match command {
            StudioCommand::ScheduleRender => {
                let Some(ticket) = scheduler.request() else {
                    continue;
                };
                let timer_tx = tx.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(DEBOUNCE_MS))).await;
                    let _ = timer_tx.unbounded_send(StudioCommand::FireRender(ticket));
                });
            }
            StudioCommand::FireRender(ticket) => {
                if scheduler.fire(ticket) {
                    start_render(form, colors, preview);
                }
            }
            StudioCommand::SuppressRender => scheduler.suppress_next(),
            StudioCommand::BeginExport => {
                if !guard.try_begin(js_sys::Date::now()) {
                    continue;
                }
                let timer_tx = tx.clone();
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(Duration::from_millis(u64::from(EXPORT_COOLDOWN_MS)))
                        .await;
                    let _ = timer_tx.unbounded_send(StudioCommand::ReleaseExport);
                });

                let text = preview.get_untracked().plain_text();
                let format = export_format.get_untracked();
                let filename = export_filename.get_untracked();
                let Some(request) = ExportRequest::from_parts(&text, &format, &filename) else {
                    // An empty-preview click still consumes the window.
                    export_notice.set(Some(EMPTY_EXPORT_NOTICE.to_owned()));
                    continue;
                };
                export_notice.set(None);
                leptos::task::spawn_local(async move {
                    match crate::net::api::export_banner(&request).await {
                        Ok(bytes) => {
                            crate::util::download::save_bytes(&request.download_name(), &bytes);
                        }
                        Err(message) => {
                            export_notice.set(Some(format!("Export error: {message}")));
                        }
                    }
                });
            }
            StudioCommand::ReleaseExport => guard.release(js_sys::Date::now()),
        }
    }
}

/// Fire one render against the current form snapshot.
///
/// Responses apply in arrival order; when requests overlap, the last
/// response to land wins the preview.
#[cfg(feature = "hydrate")]
fn start_render(
    form: RwSignal<FormState>,
    colors: RwSignal<ColorBoard>,
    preview: RwSignal<PreviewState>,
) {
    use controls::request::RenderRequest;

    let snapshot = form.get_untracked();
    let board = colors.get_untracked();
    // Empty input renders nothing; the preview keeps whatever it shows.
    let Some(request) = RenderRequest::from_state(&snapshot, &board) else {
        return;
    };
    preview.update(|p| p.begin_render());
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::render_banner(&request).await;
        preview.update(|p| p.apply_outcome(request.alignment, outcome));
    });
}
