//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::guide::GuidePage;
use crate::state::{assistant::AssistantState, guide::GuideState, ui::UiState};

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
/// Provides the guide, assistant, and UI state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let guide = RwSignal::new(GuideState::default());
    let assistant = RwSignal::new(AssistantState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(guide);
    provide_context(assistant);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/jetson-guide.css"/>
        <Title text="Jetson OS Cloner Guide"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GuidePage/>
            </Routes>
        </Router>
    }
}
