//! Banner style dropdown with an outside-click backdrop.

use leptos::prelude::*;

use controls::form::{BANNER_STYLES, FormState, banner_label};

use crate::app::{StudioCommand, StudioSender};

/// Dropdown selector for the figlet banner style.
///
/// The open menu sits above a full-viewport backdrop, so any click
/// outside the menu closes it before reaching whatever is underneath.
#[component]
pub fn BannerSelect() -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let sender = expect_context::<RwSignal<StudioSender>>();

    let open = RwSignal::new(false);

    let current_label = move || {
        let banner = form.get().banner;
        banner_label(&banner).map_or(banner, ToOwned::to_owned)
    };

    view! {
        <div class="banner-select">
            <span class="banner-select__label">"Banner style"</span>
            <button
                class="banner-select__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="banner-select__current">{current_label}</span>
                <span class="banner-select__caret">"▾"</span>
            </button>

            <Show when=move || open.get()>
                <div class="banner-select__backdrop" on:click=move |_| open.set(false)></div>
                <ul class="banner-select__menu">
                    {BANNER_STYLES
                        .iter()
                        .map(|(name, label)| {
                            let name = *name;
                            view! {
                                <li>
                                    <button
                                        class="banner-select__option"
                                        class:banner-select__option--active=move || {
                                            form.get().banner == name
                                        }
                                        on:click=move |_| {
                                            form.update(|f| f.banner = name.to_owned());
                                            open.set(false);
                                            sender.get_untracked().send(StudioCommand::ScheduleRender);
                                        }
                                    >
                                        {*label}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}
