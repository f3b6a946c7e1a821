//! Tests for the suggest widget.

use super::types::{SelectMsg, SuggestErrorMsg, SuggestionsMsg};
use super::*;
use crate::client::SuggestClient;
use crate::rule::PrefixRule;
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

fn widget() -> Model {
    // The endpoint is never contacted in these tests; results are injected
    // as messages.
    let client = SuggestClient::new("http://127.0.0.1:9").unwrap();
    let mut w = new(client);
    w.focus();
    w
}

fn press(w: &mut Model, code: KeyCode) -> Option<bubbletea_rs::Cmd> {
    w.update(Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }))
}

fn type_str(w: &mut Model, s: &str) -> Option<bubbletea_rs::Cmd> {
    let mut last = None;
    for ch in s.chars() {
        last = press(w, KeyCode::Char(ch));
    }
    last
}

fn results(w: &Model, prefix: &str, category: &str, suggestions: &[&str]) -> SuggestionsMsg {
    SuggestionsMsg {
        id: w.id(),
        rule: PrefixRule::new(prefix, category, "#"),
        query: String::new(),
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}

async fn run_cmd(cmd: bubbletea_rs::Cmd) -> bubbletea_rs::Msg {
    cmd.await.expect("command should produce a message")
}

#[test]
fn non_matching_input_keeps_panel_closed() {
    let mut w = widget();
    let cmd = type_str(&mut w, "plain search text");
    assert!(cmd.is_none(), "no fetch without a prefix match");
    assert!(!w.is_open());
    assert_eq!(w.active_index(), None);
}

#[test]
fn matching_prefix_issues_a_fetch() {
    let mut w = widget();
    assert!(type_str(&mut w, "tag:w").is_some());
}

#[test]
fn unchanged_value_does_not_refetch() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    // Home then End moves the cursor without changing the value.
    assert!(press(&mut w, KeyCode::Home).is_none());
    assert!(press(&mut w, KeyCode::End).is_none());
}

#[test]
fn results_open_the_panel_with_no_selection() {
    let mut w = widget();
    type_str(&mut w, "cat:sca");
    w.update(Box::new(results(&w, "cat:", "category", &["scarf", "scarves"])));

    assert!(w.is_open());
    assert_eq!(w.active_index(), None);
    assert_eq!(w.suggestions().len(), 2);
    let view = w.view();
    assert!(view.contains("cat:scarf"));
    assert!(view.contains("cat:scarves"));
}

#[test]
fn empty_results_close_the_panel() {
    let mut w = widget();
    type_str(&mut w, "cat:zzz");
    w.update(Box::new(results(&w, "cat:", "category", &["stale"])));
    assert!(w.is_open());

    w.update(Box::new(results(&w, "cat:", "category", &[])));
    assert!(!w.is_open());
    assert_eq!(w.active_index(), None);
}

#[test]
fn exact_formatted_match_keeps_panel_closed() {
    let mut w = widget();
    type_str(&mut w, "cat:scarf");
    w.update(Box::new(results(&w, "cat:", "category", &["scarf"])));

    assert!(!w.is_open());
    assert_eq!(w.input.value(), "cat:scarf");
}

#[test]
fn exact_match_is_case_insensitive() {
    let mut w = widget();
    type_str(&mut w, "CAT:Scarf");
    w.update(Box::new(results(&w, "cat:", "category", &["scarf"])));
    assert!(!w.is_open());
}

#[test]
fn results_for_another_widget_are_ignored() {
    let mut w = widget();
    type_str(&mut w, "cat:sca");
    let mut other = results(&w, "cat:", "category", &["scarf"]);
    other.id = w.id() + 1000;
    w.update(Box::new(other));
    assert!(!w.is_open());
}

#[test]
fn down_saturates_at_the_last_item() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm", "winter"])));

    let mut seen = Vec::new();
    for _ in 0..5 {
        press(&mut w, KeyCode::Down);
        seen.push(w.active_index().unwrap());
    }
    assert_eq!(seen, vec![0, 1, 2, 2, 2]);
}

#[test]
fn up_never_goes_below_zero() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));

    press(&mut w, KeyCode::Up);
    assert_eq!(w.active_index(), Some(0));
    press(&mut w, KeyCode::Up);
    assert_eq!(w.active_index(), Some(0));

    press(&mut w, KeyCode::Down);
    assert_eq!(w.active_index(), Some(1));
    press(&mut w, KeyCode::Up);
    assert_eq!(w.active_index(), Some(0));
}

#[test]
fn navigation_is_inert_while_closed() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    press(&mut w, KeyCode::Down);
    assert_eq!(w.active_index(), None);
}

#[tokio::test]
async fn enter_with_no_selection_commits_item_zero() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));

    let cmd = press(&mut w, KeyCode::Enter).expect("commit emits a message");
    assert_eq!(w.input.value(), "tag:wool");
    assert!(!w.is_open());

    let msg = run_cmd(cmd).await;
    let committed = msg.downcast_ref::<CommittedMsg>().unwrap();
    assert_eq!(committed.id, w.id());
    assert_eq!(committed.value, "tag:wool");
}

#[tokio::test]
async fn enter_commits_the_active_item() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));

    press(&mut w, KeyCode::Down);
    press(&mut w, KeyCode::Down);
    let cmd = press(&mut w, KeyCode::Enter).unwrap();
    assert_eq!(w.input.value(), "tag:warm");
    let msg = run_cmd(cmd).await;
    assert_eq!(msg.downcast_ref::<CommittedMsg>().unwrap().value, "tag:warm");
}

#[test]
fn brand_commit_quotes_multiword_values() {
    let mut w = widget();
    type_str(&mut w, "brand:mer");
    w.update(Box::new(results(&w, "brand:", "brand", &["merino"])));
    press(&mut w, KeyCode::Enter);
    assert_eq!(w.input.value(), "brand:merino");

    type_str(&mut w, " wool");
    w.update(Box::new(results(&w, "brand:", "brand", &["merino wool"])));
    press(&mut w, KeyCode::Enter);
    assert_eq!(w.input.value(), "brand:\"merino wool\"");
}

#[test]
fn escape_closes_without_touching_the_text() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool"])));
    assert!(w.is_open());

    press(&mut w, KeyCode::Esc);
    assert!(!w.is_open());
    assert_eq!(w.active_index(), None);
    assert_eq!(w.input.value(), "tag:w");
}

#[test]
fn blur_closes_and_resets_selection() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool"])));
    press(&mut w, KeyCode::Down);

    w.blur();
    assert!(!w.is_open());
    assert_eq!(w.active_index(), None);
    assert_eq!(w.input.value(), "tag:w");
}

#[test]
fn failed_fetch_closes_the_panel_and_keeps_the_text() {
    let mut w = widget();
    type_str(&mut w, "tag:wo");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool"])));
    assert!(w.is_open());

    w.update(Box::new(SuggestErrorMsg {
        id: w.id(),
        error: "connection refused".to_string(),
    }));
    assert!(!w.is_open());
    assert_eq!(w.input.value(), "tag:wo");
}

#[tokio::test]
async fn select_message_commits_by_index() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));

    let cmd = w
        .update(Box::new(SelectMsg { id: w.id(), index: 1 }))
        .expect("select commits");
    assert_eq!(w.input.value(), "tag:warm");
    let msg = run_cmd(cmd).await;
    assert_eq!(msg.downcast_ref::<CommittedMsg>().unwrap().value, "tag:warm");
}

#[test]
fn select_with_out_of_range_index_falls_back_to_item_zero() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));

    w.update(Box::new(SelectMsg { id: w.id(), index: 99 }));
    assert_eq!(w.input.value(), "tag:wool");
}

#[test]
fn select_with_no_suggestions_is_a_no_op() {
    let mut w = widget();
    type_str(&mut w, "tag:w");
    let cmd = w.update(Box::new(SelectMsg { id: w.id(), index: 0 }));
    assert!(cmd.is_none());
    assert_eq!(w.input.value(), "tag:w");
}

#[tokio::test]
async fn clear_empties_the_input_and_notifies_the_host() {
    let mut w = widget();
    type_str(&mut w, "tag:wool");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "warm"])));
    assert!(w.clear_visible());

    let cmd = w
        .update(Box::new(KeyMsg {
            key: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
        }))
        .expect("clear emits a message");
    assert_eq!(w.input.value(), "");
    assert!(!w.is_open());
    assert!(!w.clear_visible());

    let msg = run_cmd(cmd).await;
    assert_eq!(msg.downcast_ref::<CommittedMsg>().unwrap().value, "");
}

#[test]
fn stale_results_overwrite_newer_ones() {
    // Lookups are not sequence-numbered; whichever response arrives last
    // wins, even if it was issued first.
    let mut w = widget();
    type_str(&mut w, "tag:wo");
    w.update(Box::new(results(&w, "tag:", "tag", &["wool", "wound"])));
    assert_eq!(w.suggestions(), &["wool".to_string(), "wound".to_string()]);

    // The response for the earlier, shorter query arrives afterwards.
    w.update(Box::new(results(&w, "tag:", "tag", &["wa", "wo", "wu"])));
    assert_eq!(w.suggestions().len(), 3);
    assert!(w.is_open());
}

#[test]
fn window_follows_the_active_index() {
    let mut w = widget().with_max_visible(2);
    type_str(&mut w, "tag:w");
    w.update(Box::new(results(&w, "tag:", "tag", &["w1", "w2", "w3", "w4"])));

    for _ in 0..4 {
        press(&mut w, KeyCode::Down);
    }
    let view = w.view();
    assert!(view.contains("tag:w4"), "active row must be visible: {view}");
    assert!(!view.contains("tag:w1"), "scrolled-out rows are hidden");

    for _ in 0..4 {
        press(&mut w, KeyCode::Up);
    }
    let view = w.view();
    assert!(view.contains("tag:w1"));
    assert!(!view.contains("tag:w4"));
}

#[test]
fn unfocused_widget_ignores_keys() {
    let mut w = widget();
    w.blur();
    assert!(type_str(&mut w, "tag:w").is_none());
    assert_eq!(w.input.value(), "");
}

#[test]
fn duplicate_rules_are_dropped_at_construction() {
    let client = SuggestClient::new("http://127.0.0.1:9").unwrap();
    let w = new(client).with_rules(vec![
        PrefixRule::new("tag:", "tag", "#"),
        PrefixRule::new("tag:", "shadowed", "?"),
    ]);
    assert_eq!(w.rules().len(), 1);
    assert_eq!(w.rules()[0].category, "tag");
}
