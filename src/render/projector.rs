//! Projection of the task tree into renderable row descriptors.
//!
//! This is the composition root the presentation layer consumes: one call
//! per render pass walks the visible subtree and produces everything both
//! panels need — row descriptors for the label panel, geometry/color/
//! tooltip descriptors for the timeline panel, the header columns, and the
//! current-time marker. Malformed rows degrade to skip markers with a
//! diagnostic; they never abort the projection.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, RowIssue};
use crate::layout::geometry::{self, Geometry};
use crate::layout::intervals::{self, Interval, MIN_COLUMN_WIDTH};
use crate::model::{color, DisplayKind, TaskNode, TimeScale, TimelineRange};
use crate::state::HierarchyStore;

/// Fallback for values the color mapping does not resolve.
pub const DEFAULT_ITEM_COLOR: Color32 = Color32::from_rgb(0x66, 0x66, 0x66);

/// Maps one task field's value to a bar color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorMapping {
    #[serde(alias = "key")]
    pub field: String,
    #[serde(alias = "map", with = "color::serde_map")]
    pub colors: HashMap<String, Color32>,
}

impl ColorMapping {
    pub fn resolve(&self, node: &TaskNode) -> Color32 {
        node.field_text(&self.field)
            .and_then(|value| self.colors.get(&value).copied())
            .unwrap_or(DEFAULT_ITEM_COLOR)
    }
}

impl Default for ColorMapping {
    fn default() -> Self {
        Self {
            field: "status".to_string(),
            colors: HashMap::from([
                ("completed".to_string(), Color32::from_rgb(0x4c, 0xaf, 0x50)),
                (
                    "in_progress".to_string(),
                    Color32::from_rgb(0xff, 0xa7, 0x26),
                ),
                ("pending".to_string(), Color32::from_rgb(0x90, 0xca, 0xf9)),
            ]),
        }
    }
}

/// Everything the projector needs besides the tree and expansion state,
/// supplied fresh each render pass.
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    pub range: TimelineRange,
    pub scale: TimeScale,
    /// Width available for the timeline area, used to size header columns.
    pub container_width: f32,
    pub min_column_width: f32,
    pub color_mapping: ColorMapping,
    /// Fields concatenated into tooltips; empty falls back to the row name.
    pub tooltip_fields: Vec<String>,
    pub current_time: Option<NaiveDateTime>,
}

impl ProjectorConfig {
    pub fn new(range: TimelineRange, scale: TimeScale) -> Self {
        Self {
            range,
            scale,
            container_width: 0.0,
            min_column_width: MIN_COLUMN_WIDTH,
            color_mapping: ColorMapping::default(),
            tooltip_fields: Vec::new(),
            current_time: None,
        }
    }
}

/// Which edges of a bar fade into the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarFade {
    None,
    BothEdges,
    RightEdge,
}

/// One point of a line series, positioned on the full timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePoint {
    pub x_pct: f64,
    pub value: f64,
}

/// The renderable content of one visible row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowShape {
    Bar {
        geometry: Geometry,
        color: Color32,
        fade: BarFade,
        label: Option<String>,
        tooltip: String,
    },
    Line {
        geometry: Geometry,
        points: Vec<LinePoint>,
        color: Color32,
    },
    /// Malformed row: keeps its slot so sibling alignment survives, but
    /// renders empty.
    Skip,
}

/// One visible row, in traversal order shared by both panels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub shape: RowShape,
}

/// The full output contract of one projection pass.
#[derive(Debug, Clone)]
pub struct TimelineFrame {
    pub rows: Vec<RowDescriptor>,
    pub intervals: Vec<Interval>,
    pub column_width: f32,
    pub total_width: f32,
    /// Marker position as a percentage, `None` when no marker was supplied.
    pub current_time_pct: Option<f64>,
    /// Non-fatal per-row diagnostics collected during this pass.
    pub issues: Vec<RowIssue>,
}

/// Project the visible subtree into a [`TimelineFrame`].
///
/// Fails only for a degenerate range or a zero scale step; per-row problems
/// are reported through `TimelineFrame::issues` instead.
pub fn project(
    tree: &[TaskNode],
    store: &HierarchyStore,
    cfg: &ProjectorConfig,
) -> Result<TimelineFrame, GanttError> {
    cfg.range.validate()?;
    cfg.scale.validate()?;

    let intervals = intervals::generate(&cfg.range, &cfg.scale);
    let column_width =
        intervals::column_width(cfg.container_width, intervals.len(), cfg.min_column_width);
    let total_width = intervals::total_width(column_width, intervals.len());

    let mut rows = Vec::new();
    let mut issues = Vec::new();
    for row in store.visible_rows(tree) {
        let shape = project_row(row.node, cfg, &mut issues);
        rows.push(RowDescriptor {
            id: row.node.id.clone(),
            name: row.node.name.clone(),
            icon: row.node.icon.clone(),
            depth: row.depth,
            has_children: !row.node.children.is_empty(),
            expanded: store.is_expanded(&row.node.id),
            shape,
        });
    }

    for issue in &issues {
        log::warn!("skipping row: {issue}");
    }

    Ok(TimelineFrame {
        rows,
        intervals,
        column_width,
        total_width,
        current_time_pct: cfg
            .current_time
            .map(|t| geometry::position(t, &cfg.range, cfg.scale.unit)),
        issues,
    })
}

fn project_row(node: &TaskNode, cfg: &ProjectorConfig, issues: &mut Vec<RowIssue>) -> RowShape {
    match node.display {
        DisplayKind::Line => project_line_row(node, cfg, issues),
        DisplayKind::Bar | DisplayKind::Gradient | DisplayKind::GradientRight => {
            project_bar_row(node, cfg, issues)
        }
    }
}

fn project_line_row(node: &TaskNode, cfg: &ProjectorConfig, issues: &mut Vec<RowIssue>) -> RowShape {
    if node.dates.len() != node.values.len() {
        issues.push(RowIssue::SeriesLengthMismatch {
            id: node.id.clone(),
            dates: node.dates.len(),
            values: node.values.len(),
        });
        return RowShape::Skip;
    }
    if node.dates.is_empty() {
        issues.push(RowIssue::EmptySeries {
            id: node.id.clone(),
        });
        return RowShape::Skip;
    }

    let unit = cfg.scale.unit;
    let points = node
        .dates
        .iter()
        .zip(&node.values)
        .map(|(&date, &value)| LinePoint {
            x_pct: geometry::position(date, &cfg.range, unit),
            value,
        })
        .collect();

    RowShape::Line {
        geometry: geometry::series_geometry(&node.dates, &cfg.range, unit),
        points,
        // A row-level color wins over the mapping for line series.
        color: node.color.unwrap_or_else(|| cfg.color_mapping.resolve(node)),
    }
}

fn project_bar_row(node: &TaskNode, cfg: &ProjectorConfig, issues: &mut Vec<RowIssue>) -> RowShape {
    let (start, end) = match (node.start, node.end) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            issues.push(RowIssue::MissingSpan {
                id: node.id.clone(),
            });
            return RowShape::Skip;
        }
    };

    RowShape::Bar {
        geometry: geometry::bar_geometry(start, end, &cfg.range, cfg.scale.unit),
        color: cfg.color_mapping.resolve(node),
        fade: match node.display {
            DisplayKind::Gradient => BarFade::BothEdges,
            DisplayKind::GradientRight => BarFade::RightEdge,
            _ => BarFade::None,
        },
        label: node.label.clone(),
        tooltip: tooltip_text(node, &cfg.tooltip_fields),
    }
}

/// `"field: value"` per configured field, newline-joined; rows that resolve
/// none of the fields (or an empty field list) fall back to the row name.
fn tooltip_text(node: &TaskNode, fields: &[String]) -> String {
    let lines: Vec<String> = fields
        .iter()
        .filter_map(|field| {
            node.field_text(field)
                .map(|value| format!("{field}: {value}"))
        })
        .collect();
    if lines.is_empty() {
        node.name.clone()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeUnit;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn config() -> ProjectorConfig {
        let mut cfg = ProjectorConfig::new(
            TimelineRange::new(dt(1, 0), dt(2, 0)),
            TimeScale::new(TimeUnit::Hours, 1, "%H:%M"),
        );
        cfg.container_width = 2400.0;
        cfg
    }

    #[test]
    fn degenerate_range_refuses_projection() {
        let mut cfg = config();
        cfg.range = TimelineRange::new(dt(2, 0), dt(1, 0));
        let err = project(&[], &HierarchyStore::new(), &cfg).unwrap_err();
        assert!(matches!(err, GanttError::DegenerateRange { .. }));
    }

    #[test]
    fn quarter_day_bar_projects_at_25_25() {
        let tree = vec![TaskNode::bar("t", "T", dt(1, 6), dt(1, 12)).with_status("completed")];
        let frame = project(&tree, &HierarchyStore::new(), &config()).unwrap();
        assert_eq!(frame.intervals.len(), 24);
        assert_eq!(frame.column_width, 100.0);
        assert_eq!(frame.total_width, 2400.0);
        match &frame.rows[0].shape {
            RowShape::Bar {
                geometry, color, ..
            } => {
                assert_eq!(geometry.left_pct, 25.0);
                assert_eq!(geometry.width_pct, 25.0);
                assert_eq!(*color, Color32::from_rgb(0x4c, 0xaf, 0x50));
            }
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn malformed_line_row_skips_without_aborting_siblings() {
        let tree = vec![
            TaskNode::line(
                "bad",
                "Bad Series",
                vec![dt(1, 0), dt(1, 6), dt(1, 12)],
                vec![10.0, 20.0],
            ),
            TaskNode::bar("ok", "Fine", dt(1, 0), dt(1, 6)),
        ];
        let frame = project(&tree, &HierarchyStore::new(), &config()).unwrap();
        assert_eq!(frame.rows.len(), 2);
        assert_eq!(frame.rows[0].shape, RowShape::Skip);
        assert!(matches!(frame.rows[1].shape, RowShape::Bar { .. }));
        assert_eq!(
            frame.issues,
            vec![RowIssue::SeriesLengthMismatch {
                id: "bad".to_string(),
                dates: 3,
                values: 2,
            }]
        );
    }

    #[test]
    fn bar_without_span_skips_with_a_diagnostic() {
        let mut group = TaskNode::bar("g", "Group", dt(1, 0), dt(1, 1));
        group.start = None;
        group.end = None;
        let frame = project(&[group], &HierarchyStore::new(), &config()).unwrap();
        assert_eq!(frame.rows[0].shape, RowShape::Skip);
        assert_eq!(frame.issues.len(), 1);
    }

    #[test]
    fn unresolved_status_falls_back_to_the_default_color() {
        let tree = vec![TaskNode::bar("t", "T", dt(1, 0), dt(1, 6)).with_status("exploded")];
        let frame = project(&tree, &HierarchyStore::new(), &config()).unwrap();
        match &frame.rows[0].shape {
            RowShape::Bar { color, .. } => assert_eq!(*color, DEFAULT_ITEM_COLOR),
            other => panic!("expected a bar, got {other:?}"),
        }
    }

    #[test]
    fn line_color_prefers_the_row_over_the_mapping() {
        let tree = vec![TaskNode::line("m", "Mem", vec![dt(1, 0), dt(1, 12)], vec![1.0, 2.0])
            .with_color(Color32::BLACK)];
        let frame = project(&tree, &HierarchyStore::new(), &config()).unwrap();
        match &frame.rows[0].shape {
            RowShape::Line { color, points, .. } => {
                assert_eq!(*color, Color32::BLACK);
                assert_eq!(points.len(), 2);
                assert_eq!(points[1].x_pct, 50.0);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn tooltip_joins_configured_fields_and_falls_back_to_name() {
        let node = TaskNode::bar("t", "Task", dt(1, 0), dt(1, 6)).with_status("running");
        assert_eq!(
            tooltip_text(&node, &["name".to_string(), "status".to_string()]),
            "name: Task\nstatus: running"
        );
        assert_eq!(tooltip_text(&node, &[]), "Task");
        // Unresolvable fields are dropped rather than rendered empty.
        assert_eq!(tooltip_text(&node, &["progress".to_string()]), "Task");
    }

    #[test]
    fn current_time_marker_is_positioned_when_supplied() {
        let mut cfg = config();
        cfg.current_time = Some(dt(1, 18));
        let frame = project(&[], &HierarchyStore::new(), &cfg).unwrap();
        assert_eq!(frame.current_time_pct, Some(75.0));
        cfg.current_time = None;
        let frame = project(&[], &HierarchyStore::new(), &cfg).unwrap();
        assert_eq!(frame.current_time_pct, None);
    }
}
