//! Editor form: banner text, alignment, highlight targets, and clear.

use leptos::prelude::*;

use controls::form::{ALIGNMENTS, FormState};

use crate::app::{StudioCommand, StudioSender};

/// Text and layout inputs feeding the render pipeline.
///
/// Every change lands in `FormState` first and then pushes one
/// `ScheduleRender`; the worker decides when a request actually fires.
#[component]
pub fn EditorForm(on_clear: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let sender = expect_context::<RwSignal<StudioSender>>();

    view! {
        <div class="editor-form">
            <label class="editor-form__label" for="editor-text">"Your text"</label>
            <textarea
                id="editor-text"
                class="editor-form__text"
                placeholder="Type something to render"
                prop:value=move || form.get().text
                on:input=move |ev| {
                    form.update(|f| f.text = event_target_value(&ev));
                    sender.get_untracked().send(StudioCommand::ScheduleRender);
                }
            ></textarea>
            <div
                class="editor-form__counter"
                class:editor-form__counter--over=move || form.get().over_limit()
            >
                {move || form.get().counter_label()}
            </div>

            <fieldset class="editor-form__alignments">
                <legend class="editor-form__legend">"Alignment"</legend>
                {ALIGNMENTS
                    .iter()
                    .map(|alignment| {
                        let alignment = *alignment;
                        view! {
                            <label class="editor-form__radio">
                                <input
                                    type="radio"
                                    name="alignment"
                                    value=alignment.as_str()
                                    prop:checked=move || form.get().alignment == alignment
                                    on:change=move |_| {
                                        form.update(|f| f.alignment = alignment);
                                        sender.get_untracked().send(StudioCommand::ScheduleRender);
                                    }
                                />
                                {alignment.label()}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>

            <label class="editor-form__label" for="editor-targets">"Highlight letters"</label>
            <input
                id="editor-targets"
                class="editor-form__targets"
                type="text"
                placeholder="e.g. a,b,c"
                prop:value=move || form.get().color_targets
                on:input=move |ev| {
                    form.update(|f| f.color_targets = event_target_value(&ev));
                    sender.get_untracked().send(StudioCommand::ScheduleRender);
                }
            />

            <button class="btn editor-form__clear" on:click=move |_| on_clear.run(())>
                "Clear"
            </button>
        </div>
    }
}
