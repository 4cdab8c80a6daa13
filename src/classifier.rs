//! Interaction classifier
//!
//! Decides which layout reports from the grid engine are user edits worth
//! persisting and which are reflow or echo noise.
//!
//! ```text
//!              drag/resize start
//!   ┌──────┐ ───────────────────▶ ┌─────────────────┐
//!   │ Idle │                      │ UserInteracting │
//!   └──────┘ ◀─────────────────── └─────────────────┘
//!              column count change
//! ```
//!
//! Orthogonal to the state, two one-shot echo flags each swallow the single
//! report the engine emits right after the canonical layout was replaced from
//! our side. A drop and an accepted save arm their own flag, so both echoes
//! are swallowed when they overlap.

use crate::model::layout::{Layout, LayoutItem};
use crate::model::widgets::WidgetStore;

/// Id prefix the engine uses for its transient drop preview item
pub const PLACEHOLDER_ID_PREFIX: &str = "__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    UserInteracting,
}

/// Which echo a suppressed report was taken as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingEcho {
    #[default]
    None,
    /// The engine's compacted view of a drop we already applied
    Drop,
    /// The engine re-reporting a layout we just accepted
    Save,
}

/// Outcome of classifying one engine report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportVerdict {
    /// A genuine user edit; the cleaned layout should be saved
    Persist(Layout),
    /// Same geometry as the canonical layout
    Unchanged,
    /// Arrived while idle, so it is reflow output
    Reflow,
    /// Swallowed by a one-shot echo flag
    EchoSuppressed(PendingEcho),
}

#[derive(Debug, Clone, Default)]
pub struct InteractionClassifier {
    state: InteractionState,
    drop_echo: bool,
    save_echo: bool,
    /// Column count the state was last validated against
    cols: Option<u32>,
    /// Latched on the first gesture and never cleared
    animated: bool,
}

impl InteractionClassifier {
    pub fn new(cols: u32) -> Self {
        Self {
            cols: Some(cols),
            ..Self::default()
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The echo the next report will be swallowed as
    pub fn pending_echo(&self) -> PendingEcho {
        if self.drop_echo {
            PendingEcho::Drop
        } else if self.save_echo {
            PendingEcho::Save
        } else {
            PendingEcho::None
        }
    }

    /// Number of upcoming reports that will be swallowed
    pub fn pending_echo_count(&self) -> usize {
        usize::from(self.drop_echo) + usize::from(self.save_echo)
    }

    /// Whether motion animation has been enabled
    pub fn animated(&self) -> bool {
        self.animated
    }

    /// A drag or resize gesture started
    ///
    /// A save echo still waiting at this point was never sent; the next
    /// report belongs to the new gesture. A drop echo is kept.
    pub fn gesture_started(&mut self) {
        if !self.animated {
            tracing::debug!("First gesture, enabling motion animation");
        }
        self.animated = true;
        self.state = InteractionState::UserInteracting;
        self.save_echo = false;
    }

    /// The active column count is `cols`
    ///
    /// A change forces `Idle` whatever the current state: coordinates
    /// reported after a reflow are relative to the new column count.
    pub fn cols_changed(&mut self, cols: u32) -> bool {
        if self.cols == Some(cols) {
            return false;
        }
        tracing::debug!(
            "Column count {:?} -> {}, dropping interaction state {:?}",
            self.cols,
            cols,
            self.state
        );
        self.cols = Some(cols);
        self.state = InteractionState::Idle;
        true
    }

    /// Swallow the next report unconditionally
    pub fn arm_drop_echo(&mut self) {
        self.drop_echo = true;
    }

    /// Classify one layout report from the engine against `canonical`
    pub fn classify(
        &mut self,
        report: &Layout,
        canonical: &Layout,
        widgets: &WidgetStore,
    ) -> ReportVerdict {
        if std::mem::take(&mut self.drop_echo) {
            return ReportVerdict::EchoSuppressed(PendingEcho::Drop);
        }
        if std::mem::take(&mut self.save_echo) {
            return ReportVerdict::EchoSuppressed(PendingEcho::Save);
        }

        let cleaned = clean_report(report, widgets);
        if cleaned.same_geometry(canonical) {
            return ReportVerdict::Unchanged;
        }

        if self.state != InteractionState::UserInteracting {
            return ReportVerdict::Reflow;
        }

        self.save_echo = true;
        ReportVerdict::Persist(cleaned)
    }
}

/// Strip placeholder items and re-derive constraints from the registry
///
/// Reported `minW`/`minH` are never trusted; items whose type cannot be
/// resolved keep what was reported.
pub fn clean_report(report: &Layout, widgets: &WidgetStore) -> Layout {
    report
        .iter()
        .filter(|item| !item.id.starts_with(PLACEHOLDER_ID_PREFIX))
        .map(|item| match widgets.type_of(&item.id) {
            Some(widget_type) => item.clone().with_min(widget_type.config().min_size),
            None => item.clone(),
        })
        .collect::<Vec<LayoutItem>>()
        .into()
}
