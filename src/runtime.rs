//! Event loop driving the model
//!
//! Messages are handled on the thread that owns the [`Runtime`]. Timers and
//! the widget data fetch run on helper threads whose only job is to send a
//! message back through the channel once they finish.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::{AppMsg, FetchPurpose, Msg, StoreMsg, WidgetsMsg};
use crate::mock_data::fetch_default_widgets_data;
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Helper threads spawned whose message has not been handled yet
    in_flight: usize,
    redraws: usize,
    quit: bool,
}

impl Runtime {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            msg_tx,
            msg_rx,
            in_flight: 0,
            redraws: 0,
            quit: false,
        }
    }

    /// Kick off the initial widget data sync
    pub fn start(&mut self) {
        self.process_cmd(Cmd::FetchWidgets {
            purpose: FetchPurpose::InitialSync,
        });
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    /// Number of updates that asked for a redraw so far
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    /// Helper threads still to report back
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handle one message synchronously
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            if cmd.needs_redraw() {
                self.redraws += 1;
            }
            self.process_cmd(cmd);
        }
    }

    /// Handle every message already delivered, without waiting
    ///
    /// Returns whether any of them asked for a redraw.
    pub fn process_async_messages(&mut self) -> bool {
        let before = self.redraws;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.dispatch(msg);
        }
        self.redraws != before
    }

    /// Block until every timer and fetch has reported back
    pub fn run_until_idle(&mut self) {
        while self.in_flight > 0 && !self.quit {
            match self.msg_rx.recv() {
                Ok(msg) => {
                    self.in_flight -= 1;
                    self.dispatch(msg);
                }
                Err(e) => {
                    tracing::warn!("Runtime channel closed: {}", e);
                    break;
                }
            }
        }
    }

    /// Tear down the dashboard; timers still pending will not write
    pub fn shutdown(&mut self) {
        self.dispatch(Msg::App(AppMsg::Teardown));
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::DebouncedPersist { revision, delay_ms } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Store(StoreMsg::PersistReady { revision }));
                });
            }
            Cmd::FetchWidgets { purpose } => {
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let data = fetch_default_widgets_data();
                    let _ = tx.send(Msg::Widgets(WidgetsMsg::Loaded { data, purpose }));
                });
            }
            Cmd::Quit => {
                tracing::debug!("Quit requested");
                self.quit = true;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}
