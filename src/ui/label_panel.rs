//! Left-hand panel: hierarchical row labels with expand/collapse carets.
//!
//! Rows come from the same projection the timeline panel draws, so the two
//! panels always agree on row order and count.

use egui::{Align2, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::render::RowDescriptor;
use crate::ui::theme;

/// Draw the label rows; returns the ids of rows whose caret was clicked
/// this frame.
pub fn show_rows(ui: &mut Ui, rows: &[RowDescriptor]) -> Vec<String> {
    let mut toggled = Vec::new();
    let width = ui.available_width();

    for row in rows {
        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(width, theme::ROW_HEIGHT + theme::ROW_GAP),
            Sense::hover(),
        );
        let painter = ui.painter_at(rect);

        if response.hovered() {
            painter.rect_filled(rect, 0.0, theme::BG_ROW_HOVER);
        }
        painter.line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            Stroke::new(0.5, theme::BORDER_SUBTLE),
        );

        let mut x = rect.left() + 8.0 + row.depth as f32 * theme::INDENT_STEP;

        // Caret slot is always present so names line up whether or not the
        // row has children.
        let caret_rect = Rect::from_center_size(
            Pos2::new(x + 6.0, rect.center().y),
            Vec2::splat(theme::ROW_HEIGHT * 0.6),
        );
        if row.has_children {
            let caret = ui.interact(
                caret_rect,
                ui.make_persistent_id(("gantt-caret", &row.id)),
                Sense::click(),
            );
            let glyph = if row.expanded { "▼" } else { "►" };
            let color = if caret.hovered() {
                theme::TEXT_PRIMARY
            } else {
                theme::TEXT_SECONDARY
            };
            painter.text(
                caret_rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                theme::font_small(),
                color,
            );
            if caret.clicked() {
                toggled.push(row.id.clone());
            }
        }
        x += 16.0;

        if let Some(icon) = &row.icon {
            painter.text(
                Pos2::new(x + 6.0, rect.center().y),
                Align2::CENTER_CENTER,
                icon_glyph(icon),
                theme::font_row(),
                theme::TEXT_SECONDARY,
            );
            x += 18.0;
        }

        let galley = painter.layout_no_wrap(row.name.clone(), theme::font_row(), theme::TEXT_PRIMARY);
        let clipped = painter.with_clip_rect(rect);
        clipped.galley(
            Pos2::new(x, rect.center().y - galley.size().y / 2.0),
            galley,
            theme::TEXT_PRIMARY,
        );
    }

    toggled
}

/// Map an icon name from task data to a phosphor glyph.
fn icon_glyph(name: &str) -> &'static str {
    use egui_phosphor::regular;
    match name {
        "database" => regular::DATABASE,
        "gear" => regular::GEAR,
        "robot" => regular::ROBOT,
        "chart-line" => regular::CHART_LINE,
        "folder" => regular::FOLDER,
        "clock" => regular::CLOCK,
        _ => regular::CIRCLE,
    }
}
