//! Dashboard header and widget menu actions

use std::fmt;

use crate::commands::Cmd;
use crate::drop_target::can_start_drag;
use crate::messages::{DashboardMsg, FetchPurpose};
use crate::mock_data::create_widget_data;
use crate::model::AppModel;
use crate::placement::place_new_item;
use crate::registry::WidgetType;

/// Why a dashboard action was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRejection {
    /// A single-instance type that already has an instance
    AlreadyPresent(WidgetType),
    /// The widget's type cannot be removed
    NotDeletable(WidgetType),
    /// No widget with this id exists
    UnknownWidget(String),
}

impl fmt::Display for ActionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPresent(t) => write!(f, "only one {} widget is allowed", t),
            Self::NotDeletable(t) => write!(f, "{} widgets cannot be removed", t),
            Self::UnknownWidget(id) => write!(f, "no widget '{}'", id),
        }
    }
}

/// Handle dashboard actions
pub fn update_dashboard(model: &mut AppModel, msg: DashboardMsg) -> Option<Cmd> {
    let result = match msg {
        DashboardMsg::AddWidget(widget_type) => add_widget(model, widget_type),
        DashboardMsg::DeleteWidget(id) => delete_widget(model, &id),
        DashboardMsg::ResetLayout => {
            tracing::info!("Resetting dashboard to defaults");
            return Some(Cmd::FetchWidgets {
                purpose: FetchPurpose::Reset,
            });
        }
    };

    match result {
        Ok(()) => model.status_message = None,
        Err(rejection) => {
            tracing::debug!("Dashboard action refused: {}", rejection);
            model.status_message = Some(rejection.to_string());
        }
    }
    Some(Cmd::Redraw)
}

fn add_widget(model: &mut AppModel, widget_type: WidgetType) -> Result<(), ActionRejection> {
    if !can_start_drag(widget_type, &model.widgets) {
        return Err(ActionRejection::AlreadyPresent(widget_type));
    }

    let id = model.ids.next_id(widget_type);
    let item = place_new_item(model.store.layout(), &id, widget_type, model.cols);
    tracing::info!("Adding {} as '{}' at ({}, {})", widget_type, id, item.x, item.y);

    model.widgets.add(create_widget_data(&id, widget_type));
    model.store.add_item(item);
    Ok(())
}

fn delete_widget(model: &mut AppModel, id: &str) -> Result<(), ActionRejection> {
    if !model.widgets.contains(id) && !model.store.layout().contains(id) {
        return Err(ActionRejection::UnknownWidget(id.to_string()));
    }

    if let Some(widget_type) = model.widgets.type_of(id) {
        if !widget_type.config().deletable {
            return Err(ActionRejection::NotDeletable(widget_type));
        }
    }

    tracing::info!("Removing widget '{}'", id);
    model.widgets.remove(id);
    model.store.remove_item(id);
    Ok(())
}
