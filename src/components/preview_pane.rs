//! Rendered banner display surface.

use leptos::prelude::*;

use controls::preview::PreviewState;

/// Preview surface showing rendered markup, a render error, or a hint.
///
/// The background paints straight from `PreviewState` so background
/// color changes land without waiting on any render round-trip.
#[component]
pub fn PreviewPane() -> impl IntoView {
    let preview = expect_context::<RwSignal<PreviewState>>();

    view! {
        <section
            class="preview"
            style:background-color=move || preview.get().background
        >
            {move || {
                let state = preview.get();
                if let Some(message) = state.error {
                    return view! { <div class="preview__error">{message}</div> }.into_any();
                }
                match state.markup {
                    Some(markup) => {
                        view! {
                            <pre
                                class=format!("preview__output {}", state.align_class)
                                inner_html=markup
                            ></pre>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <div class="preview__empty">"Nothing rendered yet"</div> }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}
