//! The single guide page: header, step card, disclaimer, floating assistant.

use leptos::prelude::*;

use crate::components::assistant_panel::AssistantPanel;
use crate::components::guide_controls::GuideControls;
use crate::components::progress_header::ProgressHeader;
use crate::components::step_view::StepView;

#[component]
pub fn GuidePage() -> impl IntoView {
    view! {
        <div class="guide-page">
            <div class="guide-page__column">
                <header class="guide-header">
                    <h1 class="guide-header__title">"Jetson OS Cloner Guide"</h1>
                    <p class="guide-header__subtitle">
                        "Your interactive guide to migrating Jetson OS from SD Card to SSD."
                    </p>
                </header>

                <main class="guide-card">
                    <div class="guide-card__body">
                        <ProgressHeader/>
                        <StepView/>
                    </div>
                    <GuideControls/>
                </main>

                <p class="guide-page__disclaimer">
                    "Disclaimer: This is a guide and not an automated tool. Running these commands involves risk. "
                    "Always double-check your drive identifiers. We are not responsible for any data loss."
                </p>
            </div>
            <AssistantPanel/>
        </div>
    }
}
