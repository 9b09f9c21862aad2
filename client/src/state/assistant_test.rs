use super::*;
use crate::net::types::ChatRole;

fn reply(text: &str) -> Result<String, String> {
    Ok(text.to_owned())
}

fn failure() -> Result<String, String> {
    Err("network down".to_owned())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_idle_and_empty() {
    let state = AssistantState::default();
    assert!(state.transcript().is_empty());
    assert!(state.context().is_empty());
    assert!(!state.is_pending());
    assert_eq!(state.phase(), AssistantPhase::Idle);
    assert!(state.error().is_none());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_trimmed_user_message_and_goes_pending() {
    let mut state = AssistantState::default();
    let request = state.submit("  thanks \n").unwrap();
    assert_eq!(request.message, "thanks");
    assert!(request.history.is_empty());
    assert_eq!(state.transcript(), &[ChatMessage::user("thanks")]);
    assert_eq!(state.phase(), AssistantPhase::AwaitingReply);
}

#[test]
fn blank_submissions_are_rejected() {
    let mut state = AssistantState::default();
    for input in ["", " ", "\t\n", "   \r\n  "] {
        assert!(state.submit(input).is_none());
    }
    assert!(state.transcript().is_empty());
    assert!(!state.is_pending());
}

#[test]
fn submit_while_pending_is_rejected() {
    let mut state = AssistantState::default();
    assert!(state.submit("first").is_some());
    assert!(state.submit("second").is_none());
    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].text, "first");
}

#[test]
fn submit_clears_previous_error() {
    let mut state = AssistantState::default();
    state.submit("q");
    state.settle(failure());
    assert!(state.error().is_some());

    state.submit("again");
    assert!(state.error().is_none());
}

#[test]
fn can_submit_mirrors_submit_guard() {
    let mut state = AssistantState::default();
    assert!(state.can_submit("hi"));
    assert!(!state.can_submit("  "));
    state.submit("hi");
    assert!(!state.can_submit("more"));
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_success_appends_one_assistant_entry() {
    let mut state = AssistantState::default();
    state.submit("q");
    assert!(state.settle(reply("X")));

    assert_eq!(state.transcript().len(), 2);
    let last = state.transcript().last().unwrap();
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.text, "X");
    assert!(!state.is_pending());
    assert!(state.error().is_none());
}

#[test]
fn settle_failure_appends_fixed_message_and_sets_error() {
    let mut state = AssistantState::default();
    state.submit("q");
    assert!(state.settle(failure()));

    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.transcript()[1], ChatMessage::assistant(FAILURE_MESSAGE));
    assert_eq!(state.error(), Some(FAILURE_MESSAGE));
    assert!(!state.is_pending());
}

#[test]
fn settle_without_outstanding_request_is_ignored() {
    let mut state = AssistantState::default();
    assert!(!state.settle(reply("stray")));
    assert!(state.transcript().is_empty());

    state.submit("q");
    assert!(state.settle(reply("a")));
    assert!(!state.settle(reply("duplicate")));
    assert_eq!(state.transcript().len(), 2);
}

#[test]
fn panel_is_usable_after_failure() {
    let mut state = AssistantState::default();
    state.submit("q");
    state.settle(failure());

    let request = state.submit("retry").unwrap();
    assert_eq!(request.message, "retry");
    assert!(state.settle(reply("ok")));
    assert_eq!(state.transcript().len(), 4);
}

// =============================================================
// Context
// =============================================================

#[test]
fn context_holds_only_completed_exchanges() {
    let mut state = AssistantState::default();
    state.submit("one");
    state.settle(reply("uno"));
    state.submit("two");
    state.settle(failure());

    let request = state.submit("three").unwrap();
    assert_eq!(request.history, vec![ChatMessage::user("one"), ChatMessage::assistant("uno")]);
    assert_eq!(state.transcript().len(), 5);
}

#[test]
fn transcript_grows_monotonically() {
    let mut state = AssistantState::default();
    let mut last_len = 0;
    for (i, outcome) in [reply("a"), failure(), reply("b")].into_iter().enumerate() {
        state.submit(&format!("q{i}"));
        assert!(state.transcript().len() > last_len);
        last_len = state.transcript().len();
        state.settle(outcome);
        assert!(state.transcript().len() > last_len);
        last_len = state.transcript().len();
    }
    assert_eq!(last_len, 6);
}

// =============================================================
// Seeding
// =============================================================

#[test]
fn fresh_mount_seeds_one_user_message_and_goes_pending() {
    let mut state = AssistantState::default();
    let request = state.seed().unwrap();

    assert_eq!(request.message, SEED_MESSAGE);
    assert_eq!(state.transcript(), &[ChatMessage::user("/dev/mmcblk0 my sd right?")]);
    assert!(state.is_pending());

    state.settle(reply("Yes, mmcblk0 is usually the SD card."));
    assert!(!state.is_pending());
    assert_eq!(state.transcript().len(), 2);
}

#[test]
fn seed_fires_at_most_once() {
    let mut state = AssistantState::default();
    assert!(state.seed().is_some());
    assert!(state.seed().is_none());
    state.settle(reply("a"));
    assert!(state.seed().is_none());
    assert_eq!(state.transcript().len(), 2);
}

#[test]
fn user_submission_after_seed_scenario() {
    let mut state = AssistantState::default();
    state.seed();
    state.settle(reply("It is."));

    let request = state.submit("thanks").unwrap();
    assert_eq!(request.history.len(), 2);
    assert_eq!(state.transcript().last().unwrap(), &ChatMessage::user("thanks"));
    assert!(state.is_pending());

    state.settle(reply("You're welcome!"));
    assert!(!state.is_pending());
    assert_eq!(state.transcript().len(), 4);
    assert_eq!(state.transcript()[3].role, ChatRole::Assistant);
}
