//! Widget business data
//!
//! The id → record map that widget content is rendered from. The layout
//! core never reaches into records; it only adds, removes and bulk-replaces
//! them, and asks which types are present.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::registry::{parse_widget_type, WidgetType};

/// One tab of a widget's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabData {
    pub label: String,
    pub content: String,
    pub items: Vec<String>,
}

/// Business data for a single widget instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    pub id: String,
    pub widget_type: WidgetType,
    pub title: String,
    pub tabs: Vec<TabData>,
    pub settings: Map<String, Value>,
}

/// Owner of all widget records, keyed by instance id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetStore {
    records: BTreeMap<String, WidgetData>,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every record
    pub fn set_all(&mut self, records: BTreeMap<String, WidgetData>) {
        self.records = records;
    }

    /// Insert or replace one record
    pub fn add(&mut self, record: WidgetData) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn remove(&mut self, id: &str) -> Option<WidgetData> {
        self.records.remove(id)
    }

    /// Merge new settings into an existing record; unknown ids are ignored
    pub fn update_settings(&mut self, id: &str, settings: Map<String, Value>) -> bool {
        match self.records.get_mut(id) {
            Some(record) => {
                record.settings.extend(settings);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&WidgetData> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_type(&self, widget_type: WidgetType) -> bool {
        self.records.values().any(|r| r.widget_type == widget_type)
    }

    /// Type of a widget instance: its record if present, else parsed from the id
    pub fn type_of(&self, id: &str) -> Option<WidgetType> {
        self.records
            .get(id)
            .map(|r| r.widget_type)
            .or_else(|| parse_widget_type(id))
    }
}
