//! Floating AI assistant: toggle button plus the chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transitions live in `state::assistant`; this component only turns accepted
//! submissions into relay calls and feeds their outcome back through
//! `AssistantState::settle`. The panel stays mounted while hidden so the
//! seeded question is sent on first load regardless of visibility.

use leptos::prelude::*;

use crate::net::types::{AssistantRequest, ChatMessage, ChatRole};
use crate::state::assistant::AssistantState;
use crate::state::ui::UiState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let assistant = expect_context::<RwSignal<AssistantState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Mount-time seed. `seed` is latched, so reruns are no-ops.
    Effect::new(move || {
        if let Some(request) = assistant.try_update(AssistantState::seed).flatten() {
            dispatch(assistant, request);
        }
    });

    Effect::new(move || {
        let _ = assistant.with(|a| (a.transcript().len(), a.is_pending()));
        let _ = ui.get().assistant_open;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(request) = assistant.try_update(|a| a.submit(&text)).flatten() else {
            return;
        };
        input.set(String::new());
        dispatch(assistant, request);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let is_pending = move || assistant.with(AssistantState::is_pending);
    let can_send = move || {
        let text = input.get();
        assistant.with(|a| a.can_submit(&text))
    };

    view! {
        <button
            class="assistant-toggle"
            class:assistant-toggle--open=move || ui.get().assistant_open
            aria-label="Toggle AI Assistant"
            on:click=move |_| ui.update(UiState::toggle_assistant)
        >
            {move || if ui.get().assistant_open { "✕" } else { "💬" }}
        </button>

        <Show when=move || ui.get().assistant_open>
            <section class="assistant-panel" aria-label="Jetson AI Assistant">
                <header class="assistant-panel__header">
                    <h2 class="assistant-panel__title">"Jetson AI Assistant"</h2>
                    <button
                        class="assistant-panel__close"
                        aria-label="Close chat"
                        on:click=move |_| ui.update(UiState::close_assistant)
                    >
                        "✕"
                    </button>
                </header>

                <div class="assistant-panel__messages" node_ref=messages_ref>
                    {move || {
                        assistant.with(|a| a.transcript().iter().map(message_view).collect::<Vec<_>>())
                    }}

                    {move || {
                        is_pending().then(|| view! { <div class="assistant-panel__loading">"Thinking..."</div> })
                    }}

                    {move || {
                        assistant
                            .with(|a| a.error().map(str::to_owned))
                            .map(|error| {
                                view! {
                                    <div class="assistant-panel__error" role="alert">
                                        {error}
                                    </div>
                                }
                            })
                    }}
                </div>

                <form class="assistant-panel__input-row" on:submit=on_submit>
                    <input
                        class="assistant-panel__input"
                        type="text"
                        placeholder="Ask a question..."
                        aria-label="Chat input"
                        disabled=is_pending
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary assistant-panel__send"
                        type="submit"
                        aria-label="Send message"
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </form>
            </section>
        </Show>
    }
}

fn message_view(msg: &ChatMessage) -> AnyView {
    match msg.role {
        ChatRole::User => view! {
            <div class="assistant-panel__message assistant-panel__message--user">
                <span class="assistant-panel__content">{msg.text.clone()}</span>
            </div>
        }
        .into_any(),
        ChatRole::Assistant => {
            let rendered = render_markdown_html(&msg.text);
            view! {
                <div class="assistant-panel__message assistant-panel__message--assistant">
                    <div class="assistant-panel__content assistant-panel__markdown" inner_html=rendered></div>
                </div>
            }
            .into_any()
        }
    }
}

/// Send `request` to the relay and settle `assistant` with the outcome.
fn dispatch(assistant: RwSignal<AssistantState>, request: AssistantRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::send_assistant_message(&request).await;
        if let Err(e) = &outcome {
            log::error!("assistant request failed: {e}");
        }
        assistant.update(|a| {
            a.settle(outcome);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (assistant, request);
    }
}
