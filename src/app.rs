//! Root application component, shared state contexts, and the studio
//! command channel.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use controls::channel::ColorBoard;
use controls::form::FormState;
use controls::preview::PreviewState;

use crate::pages::studio::StudioPage;

/// Commands components push onto the studio worker loop.
///
/// The worker processes these strictly in order, so debounce bookkeeping
/// and the export guard live in one place instead of being threaded
/// through individual DOM callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudioCommand {
    /// Queue a render behind the debounce window, superseding any
    /// queued one.
    ScheduleRender,
    /// A debounce window elapsed for the given ticket. Sent by the
    /// worker's own timer tasks, never by components.
    FireRender(u64),
    /// Drop the queued render and swallow the next schedule request.
    SuppressRender,
    /// Try to export the current preview.
    BeginExport,
    /// The export cool-down elapsed. Sent by the worker's own timer
    /// tasks, never by components.
    ReleaseExport,
}

/// Handle for pushing commands to the studio worker.
///
/// Empty until the studio page hydrates and spawns its worker; `send`
/// reports whether the command was accepted so callers can degrade
/// quietly before hydration.
#[derive(Clone, Default)]
pub struct StudioSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<StudioCommand>>,
}

impl StudioSender {
    /// Wrap the command side of a spawned worker's channel.
    #[cfg(feature = "hydrate")]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<StudioCommand>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Push a command to the worker.
    ///
    /// Returns `false` when no worker is running (server render, or the
    /// channel closed).
    pub fn send(&self, command: StudioCommand) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(command).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = command;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared form, color, and preview contexts plus the studio
/// command sender.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let form = RwSignal::new(FormState::default());
    let colors = RwSignal::new(ColorBoard::default());
    let preview = RwSignal::new(PreviewState::default());
    let sender = RwSignal::new(StudioSender::default());

    provide_context(form);
    provide_context(colors);
    provide_context(preview);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/asciiboard.css"/>
        <Title text="Asciiboard"/>

        <StudioPage/>
    }
}
