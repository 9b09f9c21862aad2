//! Step counter and progress bar above the current step.

use leptos::prelude::*;

use crate::state::guide::GuideState;

#[component]
pub fn ProgressHeader() -> impl IntoView {
    let guide = expect_context::<RwSignal<GuideState>>();

    let label = move || guide.get().step_label();
    let title = move || guide.get().current().title;
    let width = move || format!("{:.2}%", guide.get().progress_percent());

    view! {
        <div class="progress">
            <div class="progress__meta">
                <span class="progress__label">{label}</span>
                <span class="progress__title">{title}</span>
            </div>
            <div
                class="progress__track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || format!("{:.0}", guide.get().progress_percent())
            >
                <div class="progress__bar" style:width=width></div>
            </div>
        </div>
    }
}
