//! Previous / next controls under the guide card.

use leptos::prelude::*;

use crate::state::guide::GuideState;

/// Footer controls. "Next Step" becomes a completion marker on the last step.
#[component]
pub fn GuideControls() -> impl IntoView {
    let guide = expect_context::<RwSignal<GuideState>>();

    view! {
        <footer class="guide-footer">
            <button
                class="btn btn--secondary"
                disabled=move || !guide.get().can_retreat()
                on:click=move |_| guide.update(GuideState::retreat)
            >
                "Previous"
            </button>
            <Show
                when=move || !guide.get().is_complete()
                fallback=|| view! { <span class="guide-footer__done">"All Done! 🎉"</span> }
            >
                <button class="btn btn--primary" on:click=move |_| guide.update(GuideState::advance)>
                    "Next Step"
                </button>
            </Show>
        </footer>
    }
}
