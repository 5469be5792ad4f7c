//! Header strip: the title cell plus one labelled cell per time interval,
//! translated horizontally in lockstep with the timeline body.

use egui::{Align2, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use crate::render::TimelineFrame;
use crate::ui::theme;

pub fn show_header(ui: &mut Ui, title: &str, title_width: f32, frame: &TimelineFrame, scroll_x: f32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, theme::HEADER_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, theme::BG_HEADER);
    painter.line_segment(
        [rect.left_bottom(), rect.right_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );

    // Title cell over the label panel.
    painter.text(
        Pos2::new(rect.left() + 12.0, rect.center().y),
        Align2::LEFT_CENTER,
        title,
        theme::font_header(),
        theme::TEXT_PRIMARY,
    );

    // Interval cells, clipped to the timeline area and shifted by the
    // shared horizontal offset.
    let cells_rect = Rect::from_min_max(
        Pos2::new(rect.left() + title_width, rect.top()),
        rect.right_bottom(),
    );
    let painter = painter.with_clip_rect(cells_rect);
    for (i, interval) in frame.intervals.iter().enumerate() {
        let x = cells_rect.left() + i as f32 * frame.column_width - scroll_x;
        if x + frame.column_width < cells_rect.left() || x > cells_rect.right() {
            continue;
        }
        let cell = Rect::from_min_size(
            Pos2::new(x, cells_rect.top()),
            Vec2::new(frame.column_width, cells_rect.height()),
        );
        painter.line_segment(
            [cell.right_top(), cell.right_bottom()],
            Stroke::new(1.0, theme::BORDER_SUBTLE),
        );
        painter.text(
            cell.center(),
            Align2::CENTER_CENTER,
            &interval.label,
            theme::font_header(),
            theme::TEXT_SECONDARY,
        );
    }

    painter.line_segment(
        [cells_rect.left_top(), cells_rect.left_bottom()],
        Stroke::new(1.0, theme::BORDER_SUBTLE),
    );
}
