//! Interaction classification through the update loop
//!
//! Which engine reports reach the store and which are dropped as reflow or
//! echo noise.

mod common;

use common::{loaded_model, moved};
use gridboard::classifier::{InteractionState, PendingEcho};
use gridboard::commands::Cmd;
use gridboard::messages::{GridMsg, Msg, StoreMsg, ViewportMsg};
use gridboard::model::AppModel;
use gridboard::update::update;

fn report(model: &mut AppModel, layout: gridboard::model::Layout) -> Option<Cmd> {
    update(model, Msg::Grid(GridMsg::LayoutChanged(layout)))
}

fn debounce_revision(cmd: &Option<Cmd>) -> Option<u64> {
    match cmd {
        Some(Cmd::Batch(cmds)) => cmds.iter().find_map(|c| match c {
            Cmd::DebouncedPersist { revision, .. } => Some(*revision),
            _ => None,
        }),
        Some(Cmd::DebouncedPersist { revision, .. }) => Some(*revision),
        _ => None,
    }
}

// ========================================================================
// Gestures
// ========================================================================

#[test]
fn test_drag_report_is_saved_after_debounce() {
    let (mut model, storage) = loaded_model();
    let next = moved(model.layout(), "chat-1", 8, 12);

    update(&mut model, Msg::Grid(GridMsg::DragStart));
    let cmd = report(&mut model, next.clone());

    let revision = debounce_revision(&cmd).expect("save should arm the debounce timer");
    assert!(model.layout().same_geometry(&next));
    assert_eq!(storage.write_count(), 0);

    update(&mut model, Msg::Store(StoreMsg::PersistReady { revision }));
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn test_resize_gesture_also_enables_saving() {
    let (mut model, _) = loaded_model();
    let mut next = model.layout().clone();
    next.get_mut("alert-1").unwrap().h = 8;

    update(&mut model, Msg::Grid(GridMsg::ResizeStart));
    assert!(debounce_revision(&report(&mut model, next)).is_some());
    assert_eq!(model.layout().get("alert-1").unwrap().h, 8);
    assert!(model.classifier.animated());
}

#[test]
fn test_report_without_gesture_is_ignored() {
    let (mut model, storage) = loaded_model();
    let before = model.layout().clone();

    let cmd = report(&mut model, moved(&before, "chat-1", 8, 12));

    assert_eq!(cmd, None);
    assert_eq!(model.layout(), &before);
    assert!(!model.store.has_pending_write());
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_echo_of_accepted_save_is_swallowed() {
    let (mut model, _) = loaded_model();
    let next = moved(model.layout(), "chat-1", 8, 12);

    update(&mut model, Msg::Grid(GridMsg::DragStart));
    report(&mut model, next.clone());
    assert_eq!(model.classifier.pending_echo(), PendingEcho::Save);

    // The engine re-reports with its own compaction applied
    let compacted = moved(&next, "chat-1", 8, 10);
    assert_eq!(report(&mut model, compacted), None);
    assert!(model.layout().same_geometry(&next));
}

#[test]
fn test_stale_debounce_timer_is_ignored() {
    let (mut model, storage) = loaded_model();
    update(&mut model, Msg::Grid(GridMsg::DragStart));

    let next = moved(model.layout(), "chat-1", 8, 12);
    let first = debounce_revision(&report(&mut model, next));
    update(&mut model, Msg::Grid(GridMsg::DragStart));
    let next = moved(model.layout(), "chat-1", 8, 18);
    let second = debounce_revision(&report(&mut model, next));

    update(
        &mut model,
        Msg::Store(StoreMsg::PersistReady {
            revision: first.unwrap(),
        }),
    );
    assert_eq!(storage.write_count(), 0);

    update(
        &mut model,
        Msg::Store(StoreMsg::PersistReady {
            revision: second.unwrap(),
        }),
    );
    assert_eq!(storage.write_count(), 1);
}

// ========================================================================
// Breakpoint changes
// ========================================================================

#[test]
fn test_breakpoint_change_during_interaction_discards_next_report() {
    let (mut model, storage) = loaded_model();
    let before = model.layout().clone();

    update(&mut model, Msg::Grid(GridMsg::DragStart));
    assert_eq!(model.classifier.state(), InteractionState::UserInteracting);

    update(
        &mut model,
        Msg::Viewport(ViewportMsg::Resize {
            width: 700,
            height: None,
        }),
    );
    assert_eq!(model.cols, 6);
    assert_eq!(model.classifier.state(), InteractionState::Idle);

    // Reflowed coordinates for six columns
    let reflowed = model.enriched_layout();
    assert_eq!(report(&mut model, reflowed), None);
    assert_eq!(model.layout(), &before);
    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_resize_within_breakpoint_keeps_interaction() {
    let (mut model, _) = loaded_model();
    update(&mut model, Msg::Grid(GridMsg::DragStart));
    update(
        &mut model,
        Msg::Viewport(ViewportMsg::Resize {
            width: 1500,
            height: None,
        }),
    );
    assert_eq!(model.classifier.state(), InteractionState::UserInteracting);
}

#[test]
fn test_gesture_after_breakpoint_change_saves_again() {
    let (mut model, _) = loaded_model();
    update(
        &mut model,
        Msg::Viewport(ViewportMsg::Resize {
            width: 1000,
            height: None,
        }),
    );
    update(&mut model, Msg::Grid(GridMsg::DragStart));

    let next = moved(model.layout(), "alert-1", 0, 20);
    assert!(debounce_revision(&report(&mut model, next)).is_some());
}
