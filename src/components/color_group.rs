//! One color channel: picker input plus preset radio swatches.

use leptos::prelude::*;

use controls::channel::{ChannelKind, ChannelReaction, ColorBoard};
use controls::preview::PreviewState;

use crate::app::{StudioCommand, StudioSender};

/// Color picker with preset radios for a single channel.
///
/// Radio checked-state is derived from the stored hex rather than from
/// DOM events, and writing `prop:checked` fires no input event. That
/// one-way derivation is what keeps picker and radios in sync without
/// the two mirroring rules feeding each other.
#[component]
pub fn ColorGroup(kind: ChannelKind) -> impl IntoView {
    let colors = expect_context::<RwSignal<ColorBoard>>();
    let preview = expect_context::<RwSignal<PreviewState>>();
    let sender = expect_context::<RwSignal<StudioSender>>();

    let apply = move |value: String| {
        colors.update(|board| board.set(kind, &value));
        match kind.reaction() {
            ChannelReaction::ScheduleRender => {
                sender.get_untracked().send(StudioCommand::ScheduleRender);
            }
            ChannelReaction::RepaintBackground => {
                // Read back post-canonicalization so the painted value
                // always matches the stored one.
                let hex = colors.get_untracked().hex(kind).to_owned();
                preview.update(|p| p.background = hex);
            }
        }
    };

    view! {
        <div class="color-group">
            <span class="color-group__title">{kind.title()}</span>
            <input
                class="color-group__picker"
                type="color"
                prop:value=move || colors.get().hex(kind).to_owned()
                on:input=move |ev| apply(event_target_value(&ev))
            />
            <div class="color-group__presets">
                {kind
                    .presets()
                    .iter()
                    .map(|(value, label)| {
                        let value = *value;
                        view! {
                            <label class="color-group__preset">
                                <input
                                    type="radio"
                                    name=kind.radio_group()
                                    value=value
                                    prop:checked=move || {
                                        colors.get().channel(kind).matches_preset(value)
                                    }
                                    on:change=move |_| apply(value.to_owned())
                                />
                                <span
                                    class="color-group__swatch"
                                    style:background-color=value
                                ></span>
                                {*label}
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
