//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::messages::FetchPurpose;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,
    /// Request a redraw
    Redraw,
    /// Arm the save debounce timer
    ///
    /// After `delay_ms` the runtime sends `StoreMsg::PersistReady` carrying
    /// `revision`; the store ignores it if a newer save happened meanwhile.
    DebouncedPersist { revision: u64, delay_ms: u64 },
    /// Fetch default widget data off the event loop
    FetchWidgets { purpose: FetchPurpose },
    /// Stop the event loop
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::DebouncedPersist { .. } => false,
            Cmd::FetchWidgets { .. } => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Create a batch command from multiple commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Redraw, then arm the debounce timer for `revision`
    pub fn redraw_and_persist(revision: u64, delay_ms: u64) -> Self {
        Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::DebouncedPersist { revision, delay_ms },
        ])
    }
}
