//! The composite Gantt widget: header strip, label panel, and timeline
//! body, kept positionally aligned through one `ScrollSync` controller and
//! one projection per frame.

use std::collections::HashMap;

use egui::{Ui, Vec2};

use crate::error::{GanttError, RowIssue};
use crate::model::TaskNode;
use crate::render::{self, ProjectorConfig};
use crate::state::{HierarchyStore, Panel, RowToggle, ScrollOffset, ScrollSync, ScrollWrite};
use crate::ui::{header, label_panel, theme, timeline_panel};

/// What one frame of the widget reports back to its owner.
#[derive(Debug, Clone, Default)]
pub struct GanttOutput {
    /// Rows toggled this frame, for the external state owner to persist.
    /// Local toggles are the only source of these events.
    pub toggles: Vec<RowToggle>,
    /// Non-fatal row diagnostics from this frame's projection.
    pub issues: Vec<RowIssue>,
}

/// An embeddable Gantt chart. Owns expansion state and scroll sync; the
/// task tree and timeline configuration are supplied each frame and never
/// mutated. Dropping the widget drops all of its state with it — there are
/// no global listeners to detach.
pub struct GanttView {
    title: String,
    label_width: f32,
    hierarchy: HierarchyStore,
    scroll: ScrollSync,
    last_container_width: f32,
}

impl GanttView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            label_width: theme::LABEL_PANEL_WIDTH,
            hierarchy: HierarchyStore::new(),
            scroll: ScrollSync::new(),
            last_container_width: 0.0,
        }
    }

    pub fn label_width(mut self, width: f32) -> Self {
        self.label_width = width;
        self
    }

    /// Replace expansion state wholesale from the authoritative external
    /// copy. One-way flow: local toggles are surfaced through
    /// [`GanttOutput::toggles`] and only persist once the owner pushes them
    /// back through here.
    pub fn set_expanded(&mut self, state: HashMap<String, bool>) {
        self.hierarchy.replace_all(state);
    }

    pub fn expanded_snapshot(&self) -> HashMap<String, bool> {
        self.hierarchy.snapshot()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        tree: &[TaskNode],
        cfg: &ProjectorConfig,
    ) -> Result<GanttOutput, GanttError> {
        // Release the guard from last frame's programmatic write, so the
        // panels' echo of that write reads as a no-op below.
        self.scroll.end_frame();

        let mut cfg = cfg.clone();
        cfg.container_width = (ui.available_width() - self.label_width).max(0.0);

        // A layout reflow can leave the two panels disagreeing; re-apply
        // the shared position to the timeline.
        let mut pending: Option<ScrollWrite> = None;
        if self.last_container_width > 0.0 && cfg.container_width != self.last_container_width {
            pending = Some(self.scroll.on_resize(self.scroll.offset().y));
        }
        self.last_container_width = cfg.container_width;

        let frame = render::project(tree, &self.hierarchy, &cfg)?;

        header::show_header(
            ui,
            &self.title,
            self.label_width,
            &frame,
            self.scroll.offset().x,
        );

        let body_height = ui.available_height();
        let mut output = GanttOutput {
            issues: frame.issues.clone(),
            ..Default::default()
        };

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing = Vec2::ZERO;

            let labels = ui
                .allocate_ui(Vec2::new(self.label_width, body_height), |ui| {
                    ui.set_width(self.label_width);
                    ui.set_min_height(body_height);
                    egui::ScrollArea::vertical()
                        .id_salt("gantt-labels")
                        .auto_shrink([false, false])
                        .show(ui, |ui| label_panel::show_rows(ui, &frame.rows))
                })
                .inner;

            let timeline = egui::ScrollArea::both()
                .id_salt("gantt-timeline")
                .auto_shrink([false, false])
                .show(ui, |ui| timeline_panel::show_timeline(ui, &frame));

            for id in &labels.inner {
                output.toggles.push(self.hierarchy.toggle_row(id));
            }

            // Feed both panels' observed offsets through the controller;
            // at most one write survives per frame.
            let lo = labels.state.offset;
            let to = timeline.state.offset;
            let mut writes: Vec<ScrollWrite> = pending.take().into_iter().collect();
            writes.extend(self.scroll.on_scroll(Panel::Labels, ScrollOffset::new(lo.x, lo.y)));
            writes.extend(self.scroll.on_scroll(Panel::Timeline, ScrollOffset::new(to.x, to.y)));

            for write in writes {
                match write.target {
                    Panel::Labels => {
                        let mut state = labels.state.clone();
                        state.offset.y = write.offset.y;
                        state.store(ui.ctx(), labels.id);
                    }
                    Panel::Timeline => {
                        let mut state = timeline.state.clone();
                        state.offset = egui::vec2(write.offset.x, write.offset.y);
                        state.store(ui.ctx(), timeline.id);
                    }
                }
            }
        });

        Ok(output)
    }
}
