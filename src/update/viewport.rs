//! Viewport resize handling

use crate::commands::Cmd;
use crate::geometry::resolve_cols;
use crate::messages::ViewportMsg;
use crate::model::AppModel;

/// Handle viewport messages
pub fn update_viewport(model: &mut AppModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resize { width, height } => {
            model.viewport_width = width;
            if let Some(height) = height {
                model.container_height = height;
            }

            let cols = resolve_cols(width);
            if model.classifier.cols_changed(cols) {
                tracing::info!("Breakpoint change: {} -> {} cols", model.cols, cols);
                model.cols = cols;
            }
            Some(Cmd::Redraw)
        }
    }
}
