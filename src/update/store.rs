//! Debounced persistence handlers

use crate::commands::Cmd;
use crate::messages::StoreMsg;
use crate::model::AppModel;

/// Handle layout store timer messages
pub fn update_store(model: &mut AppModel, msg: StoreMsg) -> Option<Cmd> {
    match msg {
        StoreMsg::PersistReady { revision } => {
            // Stale revisions are a no-op inside the store
            model.store.flush_pending(revision);
            None
        }
    }
}
