//! Grid engine report handlers

use crate::classifier::ReportVerdict;
use crate::commands::Cmd;
use crate::drop_target::{default_drop_size, drag_over_footprint, plan_drop, DropRejection};
use crate::messages::GridMsg;
use crate::mock_data::create_widget_data;
use crate::model::AppModel;

/// Handle grid engine messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::DragStart | GridMsg::ResizeStart => {
            model.classifier.gesture_started();
            None
        }

        GridMsg::LayoutChanged(report) => {
            let verdict = model
                .classifier
                .classify(&report, model.store.layout(), &model.widgets);

            match verdict {
                ReportVerdict::Persist(layout) => {
                    let revision = model.store.save(layout);
                    Some(Cmd::redraw_and_persist(revision, model.store.debounce_ms()))
                }
                ReportVerdict::Unchanged => None,
                ReportVerdict::Reflow => {
                    tracing::debug!("Ignoring layout report while idle (reflow)");
                    None
                }
                ReportVerdict::EchoSuppressed(echo) => {
                    tracing::trace!("Suppressed {:?} echo", echo);
                    None
                }
            }
        }

        GridMsg::Drop {
            layout,
            placeholder,
            payload,
        } => {
            model.drop_preview = None;

            let planned = match plan_drop(
                &payload,
                &layout,
                placeholder.as_ref(),
                &model.widgets,
                &mut model.ids,
            ) {
                Ok(planned) => planned,
                Err(rejection) => {
                    tracing::debug!("Drop ignored: {}", rejection);
                    if let DropRejection::AlreadyPresent(_) = rejection {
                        model.status_message = Some(rejection.to_string());
                    }
                    return Some(Cmd::Redraw);
                }
            };

            tracing::info!(
                "Dropped {} as '{}' at ({}, {})",
                planned.widget_type,
                planned.item.id,
                planned.item.x,
                planned.item.y
            );

            model
                .widgets
                .add(create_widget_data(&planned.item.id, planned.widget_type));
            model.store.add_item(planned.item);
            model.classifier.arm_drop_echo();
            Some(Cmd::Redraw)
        }

        GridMsg::DragOver(payload) => {
            let preview = drag_over_footprint(&payload, model.cols)
                .unwrap_or_else(|| default_drop_size(model.cols));
            if model.drop_preview == Some(preview) {
                return None;
            }
            model.drop_preview = Some(preview);
            Some(Cmd::Redraw)
        }
    }
}
