//! Runtime tests
//!
//! Timers and fetches running on helper threads, and replayed message files.

mod common;

use gridboard::config::DashboardConfig;
use gridboard::drop_target::IdSequence;
use gridboard::messages::{AppMsg, DashboardMsg, GridMsg, Msg, ViewportMsg};
use gridboard::model::AppModel;
use gridboard::registry::WidgetType;
use gridboard::runtime::Runtime;
use gridboard::store::MemoryStorage;

use common::moved;

fn started_runtime(storage: &MemoryStorage) -> Runtime {
    let config = DashboardConfig {
        save_debounce_ms: 10,
        ..DashboardConfig::default()
    };
    let model = AppModel::new(config, Box::new(storage.clone()), IdSequence::starting_at(100));
    let mut runtime = Runtime::new(model);
    runtime.start();
    runtime.run_until_idle();
    runtime
}

fn drag(runtime: &mut Runtime, x: u32) {
    let next = moved(runtime.model().layout(), "chat-1", x, 12);
    runtime.dispatch(Msg::Grid(GridMsg::DragStart));
    runtime.dispatch(Msg::Grid(GridMsg::LayoutChanged(next)));
}

// ========================================================================
// Event loop
// ========================================================================

#[test]
fn test_start_syncs_widget_data() {
    let runtime = started_runtime(&MemoryStorage::new());
    assert!(runtime.model().is_ready());
    assert_eq!(runtime.model().widgets.len(), 6);
    assert_eq!(runtime.in_flight(), 0);
}

#[test]
fn test_debounced_save_lands_after_timer() {
    let storage = MemoryStorage::new();
    let mut runtime = started_runtime(&storage);

    drag(&mut runtime, 8);
    assert_eq!(storage.write_count(), 0);
    assert_eq!(runtime.in_flight(), 1);

    runtime.run_until_idle();
    assert_eq!(storage.write_count(), 1);
}

#[test]
fn test_burst_of_drags_writes_once() {
    let storage = MemoryStorage::new();
    let mut runtime = started_runtime(&storage);

    for x in [2, 4, 6, 8] {
        drag(&mut runtime, x);
    }
    runtime.run_until_idle();

    assert_eq!(storage.write_count(), 1);
    assert_eq!(runtime.model().layout().get("chat-1").unwrap().x, 8);
}

#[test]
fn test_teardown_prevents_pending_write() {
    let storage = MemoryStorage::new();
    let mut runtime = started_runtime(&storage);

    drag(&mut runtime, 8);
    runtime.shutdown();
    runtime.run_until_idle();

    assert_eq!(storage.write_count(), 0);
}

#[test]
fn test_reset_round_trips_through_fetch() {
    let storage = MemoryStorage::new();
    let mut runtime = started_runtime(&storage);
    runtime.dispatch(Msg::Dashboard(DashboardMsg::AddWidget(WidgetType::Agent)));
    assert_eq!(runtime.model().layout().len(), 7);

    runtime.dispatch(Msg::Dashboard(DashboardMsg::ResetLayout));
    runtime.run_until_idle();

    assert_eq!(runtime.model().layout().len(), 6);
    assert!(!runtime.model().widgets.contains("agent-101"));
}

#[test]
fn test_quit_stops_runtime() {
    let mut runtime = started_runtime(&MemoryStorage::new());
    runtime.dispatch(Msg::App(AppMsg::Quit));
    assert!(runtime.has_quit());
}

#[test]
fn test_redraws_are_counted() {
    let mut runtime = started_runtime(&MemoryStorage::new());
    let before = runtime.redraw_count();
    runtime.dispatch(Msg::Viewport(ViewportMsg::Resize {
        width: 800,
        height: None,
    }));
    assert_eq!(runtime.redraw_count(), before + 1);
}

// ========================================================================
// Replay files
// ========================================================================

const REPLAY: &str = r#"
- grid: drag_start
- grid:
    layout_changed:
      - { i: portfolio-overview-1, x: 8, y: 0, w: 4, h: 6 }
      - { i: market-watch-1, x: 4, y: 0, w: 4, h: 6 }
      - { i: alert-1, x: 0, y: 0, w: 4, h: 4 }
      - { i: chat-1, x: 0, y: 6, w: 4, h: 6 }
      - { i: agent-1, x: 4, y: 6, w: 6, h: 6 }
      - { i: news-feed-1, x: 0, y: 12, w: 4, h: 6 }
- viewport:
    resize: { width: 700 }
- dashboard:
    add_widget: order-book
"#;

#[test]
fn test_replay_file_parses_and_applies() {
    let messages: Vec<Msg> = serde_yaml::from_str(REPLAY).unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0], Msg::Grid(GridMsg::DragStart));

    let storage = MemoryStorage::new();
    let mut runtime = started_runtime(&storage);
    for msg in messages {
        runtime.dispatch(msg);
    }
    runtime.run_until_idle();

    let layout = runtime.model().layout();
    assert_eq!(layout.get("portfolio-overview-1").unwrap().x, 8);
    assert!(layout.contains("order-book-101"));
    assert_eq!(runtime.model().cols, 6);
}
