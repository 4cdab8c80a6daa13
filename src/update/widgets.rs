//! Widget data fetch completion handlers

use std::collections::BTreeMap;

use crate::commands::Cmd;
use crate::messages::{FetchPurpose, WidgetsMsg};
use crate::mock_data::create_widget_data;
use crate::model::layout::Layout;
use crate::model::widgets::WidgetData;
use crate::model::AppModel;
use crate::registry::parse_widget_type;

/// Handle widget data messages
pub fn update_widgets(model: &mut AppModel, msg: WidgetsMsg) -> Option<Cmd> {
    match msg {
        WidgetsMsg::Loaded {
            data,
            purpose: FetchPurpose::InitialSync,
        } => {
            let records = reconcile_widgets(model.store.layout(), data);
            tracing::info!("Widget data synced ({} records)", records.len());
            model.widgets.set_all(records);
            model.data_loaded = true;
            Some(Cmd::Redraw)
        }

        WidgetsMsg::Loaded {
            data,
            purpose: FetchPurpose::Reset,
        } => {
            model.widgets.set_all(data);
            model.store.reset(None);
            model.status_message = None;
            model.data_loaded = true;
            Some(Cmd::Redraw)
        }

        WidgetsMsg::SettingsChanged { id, settings } => {
            if model.widgets.update_settings(&id, settings) {
                tracing::debug!("Updated settings of '{}'", id);
                Some(Cmd::Redraw)
            } else {
                tracing::debug!("Settings for unknown widget '{}' ignored", id);
                None
            }
        }
    }
}

/// Match fetched records to the ids present in `layout`
///
/// Records without a layout item are dropped. Layout ids without a record
/// get fresh data for the type parsed from the id; ids that name no known
/// type are left without data.
pub fn reconcile_widgets(
    layout: &Layout,
    mut fetched: BTreeMap<String, WidgetData>,
) -> BTreeMap<String, WidgetData> {
    let mut records = BTreeMap::new();

    for id in layout.ids() {
        if let Some(record) = fetched.remove(id) {
            records.insert(id.to_string(), record);
            continue;
        }

        match parse_widget_type(id) {
            Some(widget_type) => {
                records.insert(id.to_string(), create_widget_data(id, widget_type));
            }
            None => tracing::debug!("Layout item '{}' has no known widget type", id),
        }
    }

    if !fetched.is_empty() {
        tracing::debug!("Dropping {} records with no layout item", fetched.len());
    }
    records
}
