//! App lifecycle handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app lifecycle messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Teardown => {
            model.store.teardown();
            None
        }

        AppMsg::Quit => {
            model.store.teardown();
            Some(Cmd::Quit)
        }
    }
}
