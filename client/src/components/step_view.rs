//! Current step rendering: description blocks plus optional warning,
//! command, and note callouts.

use leptos::prelude::*;

use crate::content::{Block, Inline, RichText};
use crate::state::guide::GuideState;

/// Body of the guide card for the current step.
#[component]
pub fn StepView() -> impl IntoView {
    let guide = expect_context::<RwSignal<GuideState>>();

    view! {
        <article class="step">
            {move || {
                let step = guide.get().current();
                view! {
                    <h2 class="step__title">{step.title}</h2>
                    {step.description.iter().map(block_view).collect::<Vec<_>>()}
                    {step.warning.map(|message| view! { <WarningBlock message=message/> })}
                    {step.command.map(|command| view! { <CommandBlock command=command/> })}
                    {step.note.map(|note| view! { <NoteBlock note=note/> })}
                }
            }}
        </article>
    }
}

/// Highlighted risk callout.
#[component]
pub fn WarningBlock(message: RichText) -> impl IntoView {
    view! {
        <div class="callout callout--warning" role="alert">
            <span class="callout__icon" aria-hidden="true">"!"</span>
            <p class="callout__text">{rich_text_view(message)}</p>
        </div>
    }
}

/// Terminal-style command block. The `$ ` prompt is decoration only.
#[component]
pub fn CommandBlock(command: &'static str) -> impl IntoView {
    view! {
        <div class="terminal">
            <div class="terminal__header">
                <span class="terminal__label">"Jetson Terminal"</span>
            </div>
            <pre class="terminal__body">
                <code>
                    <span class="terminal__prompt">"$ "</span>
                    {command}
                </code>
            </pre>
        </div>
    }
}

/// Informational callout prefixed with "Note:".
#[component]
pub fn NoteBlock(note: RichText) -> impl IntoView {
    view! {
        <div class="callout callout--note">
            <p class="callout__text">
                <strong class="callout__label">"Note:"</strong>
                " "
                {rich_text_view(note)}
            </p>
        </div>
    }
}

fn block_view(block: &Block) -> AnyView {
    match *block {
        Block::Paragraph(run) => view! { <p>{rich_text_view(run)}</p> }.into_any(),
        Block::List(items) => view! {
            <ul class="step__list">
                {items
                    .iter()
                    .copied()
                    .map(|item| view! { <li>{rich_text_view(item)}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any(),
    }
}

fn rich_text_view(run: RichText) -> Vec<AnyView> {
    run.iter().copied().map(inline_view).collect()
}

fn inline_view(inline: Inline) -> AnyView {
    match inline {
        Inline::Text(text) => text.into_any(),
        Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Inline::Code(text) => view! { <code>{text}</code> }.into_any(),
    }
}
