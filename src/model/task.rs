use chrono::NaiveDateTime;
use egui::Color32;
use serde::{Deserialize, Serialize};

use super::color;

/// How a row is drawn in the timeline panel.
///
/// The gradient variants are bar renderings whose edges fade into the
/// background; `Line` plots the row's `dates`/`values` series instead of a
/// span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKind {
    #[default]
    Bar,
    Gradient,
    GradientRight,
    Line,
}

/// One row of the task tree, supplied wholesale by the caller each render
/// pass. The widget never mutates task data; expansion state lives in a
/// separate flat map keyed by `id` (see `state::HierarchyStore`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskNode {
    /// Unique within the whole tree.
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, alias = "displayType")]
    pub display: DisplayKind,

    // Bar-family fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    // Line-series fields. `dates` and `values` must be equal length; the
    // projector skips the row (with a diagnostic) when they are not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<f64>,
    #[serde(
        default,
        with = "color::serde_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TaskNode>,
}

impl TaskNode {
    /// A bar-family row with a start/end span.
    pub fn bar(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            display: DisplayKind::Bar,
            start: Some(start),
            end: Some(end),
            label: None,
            status: None,
            dates: Vec::new(),
            values: Vec::new(),
            color: None,
            children: Vec::new(),
        }
    }

    /// A time-series row plotted as a line.
    pub fn line(
        id: impl Into<String>,
        name: impl Into<String>,
        dates: Vec<NaiveDateTime>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            display: DisplayKind::Line,
            start: None,
            end: None,
            label: None,
            status: None,
            dates,
            values,
            color: None,
            children: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_children(mut self, children: Vec<TaskNode>) -> Self {
        self.children = children;
        self
    }

    /// Look up a named field as display text, used for color mapping and
    /// tooltip assembly. Unknown fields resolve to `None`.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "label" => self.label.clone(),
            "status" => self.status.clone(),
            "start" => self.start.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            "end" => self.end.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            _ => None,
        }
    }
}
