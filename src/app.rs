use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use egui::Color32;

use crate::model::{TaskNode, TimeScale, TimeUnit, TimelineRange};
use crate::render::ProjectorConfig;
use crate::ui::{theme, GanttView};

/// Demo application state. The app plays the role of the external state
/// owner: it holds the authoritative expanded-rows map, applies toggle
/// events from the widget to it, and pushes the result back in.
pub struct GanttApp {
    tree: Vec<TaskNode>,
    expanded: HashMap<String, bool>,
    config: ProjectorConfig,
    view: GanttView,
}

impl GanttApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icons as a fallback so row icons render inline.
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        theme::apply_theme(&cc.egui_ctx);

        let range = TimelineRange::new(at(14, 0), at(15, 12));
        let mut config =
            ProjectorConfig::new(range, TimeScale::new(TimeUnit::Minutes, 15, "%H:%M"));
        config.current_time = Some(at(15, 0));
        config.color_mapping.colors.extend([
            ("running".to_string(), Color32::from_rgb(0x21, 0x96, 0xf3)),
            ("failed".to_string(), Color32::from_rgb(0xf4, 0x43, 0x36)),
        ]);
        config.tooltip_fields = vec![
            "status".to_string(),
            "start".to_string(),
            "end".to_string(),
        ];

        let expanded = HashMap::from([("data_load".to_string(), true)]);
        let mut view = GanttView::new("Jobs");
        view.set_expanded(expanded.clone());

        Self {
            tree: sample_tree(),
            expanded,
            config,
            view,
        }
    }
}

impl eframe::App for GanttApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(theme::BG_DARK))
            .show(ctx, |ui| match self.view.show(ui, &self.tree, &self.config) {
                Ok(output) => {
                    if !output.toggles.is_empty() {
                        for toggle in output.toggles {
                            log::info!("row `{}` expanded={}", toggle.id, toggle.expanded);
                            self.expanded.insert(toggle.id, toggle.expanded);
                        }
                        // The owner's copy is authoritative; push it back.
                        self.view.set_expanded(self.expanded.clone());
                    }
                }
                Err(err) => {
                    log::error!("projection failed: {err}");
                    ui.colored_label(theme::NOW_LINE, err.to_string());
                }
            });
    }
}

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 10, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

/// A small job pipeline with a memory-usage overlay, the same shape of data
/// the widget is meant to receive from its host.
fn sample_tree() -> Vec<TaskNode> {
    let every_5m: Vec<NaiveDateTime> = (0..11).map(|i| at(14, i * 5)).collect();

    vec![
        TaskNode::bar("source_analysis", "Source Data Analysis", at(14, 0), at(14, 30))
            .with_status("completed")
            .with_label("Data Analysis")
            .with_icon("database"),
        TaskNode::bar("data_load", "Data Load", at(14, 11), at(14, 52))
            .with_status("running")
            .with_label("Data Load")
            .with_icon("gear")
            .with_children(vec![
                TaskNode::bar("extract", "Extract", at(14, 11), at(14, 37))
                    .with_status("completed")
                    .with_label("Extraction"),
                TaskNode::bar("transform", "Transform", at(14, 28), at(14, 52))
                    .with_status("failed")
                    .with_label("Transform"),
            ]),
        {
            let mut warmup = TaskNode::bar("warmup", "Cache Warmup", at(14, 40), at(15, 5))
                .with_status("running")
                .with_label("Warmup");
            warmup.display = crate::model::DisplayKind::GradientRight;
            warmup
        },
        TaskNode::line(
            "memory_usage",
            "Memory Usage",
            every_5m.clone(),
            vec![20.0, 35.0, 56.0, 40.0, 45.0, 75.0, 95.0, 87.0, 38.0, 12.0, 44.0],
        )
        .with_color(Color32::WHITE)
        .with_icon("chart-line")
        .with_children(vec![TaskNode::line(
            "bot_1_memory",
            "Memory Usage of Bot 1",
            every_5m,
            vec![10.0, 25.0, 36.0, 10.0, 35.0, 45.0, 95.0, 99.0, 41.0, 2.0, 4.0],
        )
        .with_color(Color32::from_rgb(0x21, 0x96, 0xf3))]),
    ]
}
