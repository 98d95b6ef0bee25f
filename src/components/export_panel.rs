//! Export controls: the download trigger and a collapsible options panel.

use leptos::prelude::*;

use controls::consts::DEFAULT_EXPORT_BASENAME;
use controls::request::EXPORT_FORMATS;

/// Export panel for the rendered preview.
///
/// The download button always pushes `BeginExport`; whether anything
/// happens is the worker's call (guard window, empty preview). Notices
/// from those decisions come back through the `notice` signal. Format
/// and filename live behind an options toggle and keep their values
/// while hidden.
#[component]
pub fn ExportPanel(
    format: RwSignal<String>,
    filename: RwSignal<String>,
    notice: RwSignal<Option<String>>,
    on_export: Callback<()>,
) -> impl IntoView {
    let options_open = RwSignal::new(false);

    view! {
        <div class="export-panel">
            <div class="export-panel__bar">
                <span class="export-panel__title">"Export"</span>
                <button class="btn btn--primary export-panel__download" on:click=move |_| on_export.run(())>
                    "Download"
                </button>
                <button
                    class="export-panel__toggle"
                    class:export-panel__toggle--open=move || options_open.get()
                    on:click=move |_| options_open.update(|o| *o = !*o)
                >
                    "Options"
                </button>
            </div>

            <Show when=move || options_open.get()>
                <div class="export-panel__options">
                    <fieldset class="export-panel__formats">
                        <legend class="export-panel__legend">"Format"</legend>
                        {EXPORT_FORMATS
                            .iter()
                            .map(|(value, label)| {
                                let value = *value;
                                view! {
                                    <label class="export-panel__format">
                                        <input
                                            type="radio"
                                            name="export-format"
                                            value=value
                                            prop:checked=move || format.get() == value
                                            on:change=move |_| format.set(value.to_owned())
                                        />
                                        {*label}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>

                    <label class="export-panel__label" for="export-filename">"File name"</label>
                    <input
                        id="export-filename"
                        class="export-panel__filename"
                        type="text"
                        placeholder=DEFAULT_EXPORT_BASENAME
                        prop:value=move || filename.get()
                        on:input=move |ev| filename.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            {move || {
                notice
                    .get()
                    .map(|message| view! { <div class="export-panel__notice">{message}</div> })
            }}
        </div>
    }
}
