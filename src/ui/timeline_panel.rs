//! Timeline body: bars, gradient bars, line series, grid, and the
//! current-time marker, painted from projector descriptors only.

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Align2, Color32, Pos2, Rect, Rounding, Sense, Shape, Stroke, Ui, Vec2};

use crate::render::{BarFade, LinePoint, RowShape, TimelineFrame};
use crate::ui::theme;

const ROW_STEP: f32 = theme::ROW_HEIGHT + theme::ROW_GAP;

pub fn show_timeline(ui: &mut Ui, frame: &TimelineFrame) {
    let width = frame.total_width.max(ui.available_width());
    let height = (frame.rows.len() as f32 * ROW_STEP).max(ui.available_height());
    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, theme::BG_DARK);

    // Column grid behind everything.
    for i in 0..=frame.intervals.len() {
        let x = origin.x + i as f32 * frame.column_width;
        painter.line_segment(
            [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
            Stroke::new(0.5, theme::GRID_LINE),
        );
    }

    for (i, row) in frame.rows.iter().enumerate() {
        let y = origin.y + i as f32 * ROW_STEP;
        let row_rect = Rect::from_min_size(Pos2::new(origin.x, y), Vec2::new(width, ROW_STEP));

        if i % 2 == 0 {
            painter.rect_filled(row_rect, 0.0, theme::BG_PANEL);
        }
        painter.line_segment(
            [row_rect.left_bottom(), row_rect.right_bottom()],
            Stroke::new(0.5, theme::BORDER_SUBTLE),
        );

        match &row.shape {
            RowShape::Bar {
                geometry,
                color,
                fade,
                label,
                tooltip,
            } => {
                let x_start = origin.x + pct(geometry.left_pct) * frame.total_width;
                let bar_width = (pct(geometry.width_pct) * frame.total_width).max(6.0);
                let bar_rect = Rect::from_min_size(
                    Pos2::new(x_start, y + theme::ROW_GAP + theme::BAR_INSET),
                    Vec2::new(bar_width, theme::ROW_HEIGHT - theme::BAR_INSET * 2.0),
                );
                draw_bar(&painter, bar_rect, *color, *fade);

                if let Some(label) = label {
                    if bar_width > 30.0 {
                        let galley = painter.layout_no_wrap(
                            label.clone(),
                            theme::font_bar(),
                            theme::TEXT_ON_BAR,
                        );
                        let clipped = painter.with_clip_rect(bar_rect);
                        clipped.galley(
                            Pos2::new(
                                bar_rect.left() + 6.0,
                                bar_rect.center().y - galley.size().y / 2.0,
                            ),
                            galley,
                            theme::TEXT_ON_BAR,
                        );
                    }
                }

                let hover = ui.interact(
                    bar_rect,
                    ui.make_persistent_id(("gantt-bar", &row.id)),
                    Sense::hover(),
                );
                if hover.hovered() {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        ui.layer_id(),
                        egui::Id::new(("gantt-bar-tip", &row.id)),
                        |ui| {
                            for line in tooltip.lines() {
                                ui.label(line);
                            }
                        },
                    );
                }
            }
            RowShape::Line { points, color, .. } => {
                draw_series(&painter, row_rect, points, *color, frame.total_width, origin.x);
            }
            // Malformed rows keep their slot but render empty.
            RowShape::Skip => {}
        }
    }

    if let Some(now_pct) = frame.current_time_pct {
        draw_now_line(&painter, origin, pct(now_pct) * frame.total_width, height);
    }
}

fn pct(p: f64) -> f32 {
    (p / 100.0) as f32
}

fn draw_bar(painter: &egui::Painter, rect: Rect, color: Color32, fade: BarFade) {
    match fade {
        BarFade::None => {
            let rounding = Rounding::same(theme::BAR_ROUNDING);
            // Soft shadow under the bar, then a light top highlight.
            painter.rect_filled(
                rect.translate(Vec2::new(1.0, 2.0)),
                rounding,
                Color32::from_black_alpha(35),
            );
            painter.rect_filled(rect, rounding, color);
            let highlight = Rect::from_min_size(
                rect.min,
                Vec2::new(rect.width(), (rect.height() * 0.45).max(4.0)),
            );
            painter.rect_filled(
                highlight,
                Rounding {
                    nw: theme::BAR_ROUNDING,
                    ne: theme::BAR_ROUNDING,
                    sw: 0.0,
                    se: 0.0,
                },
                Color32::from_white_alpha(25),
            );
        }
        BarFade::BothEdges => {
            // Fade in over the left 15% and out over the right 15%.
            let l = rect.left() + rect.width() * 0.15;
            let r = rect.left() + rect.width() * 0.85;
            let mut mesh = Mesh::default();
            fade_quad(&mut mesh, rect, rect.left(), l, Color32::TRANSPARENT, color);
            fade_quad(&mut mesh, rect, l, r, color, color);
            fade_quad(&mut mesh, rect, r, rect.right(), color, Color32::TRANSPARENT);
            painter.add(Shape::mesh(mesh));
        }
        BarFade::RightEdge => {
            // Solid to 90%, fading out on the right only.
            let r = rect.left() + rect.width() * 0.9;
            let mut mesh = Mesh::default();
            fade_quad(&mut mesh, rect, rect.left(), r, color, color);
            fade_quad(&mut mesh, rect, r, rect.right(), color, Color32::TRANSPARENT);
            painter.add(Shape::mesh(mesh));
        }
    }
}

/// One horizontally interpolated quad of a gradient bar.
fn fade_quad(mesh: &mut Mesh, rect: Rect, x0: f32, x1: f32, c0: Color32, c1: Color32) {
    let base = mesh.vertices.len() as u32;
    for (x, c) in [(x0, c0), (x1, c1)] {
        mesh.vertices.push(Vertex {
            pos: Pos2::new(x, rect.top()),
            uv: WHITE_UV,
            color: c,
        });
        mesh.vertices.push(Vertex {
            pos: Pos2::new(x, rect.bottom()),
            uv: WHITE_UV,
            color: c,
        });
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 2, base + 3]);
}

/// Values plot against a fixed 0..100 domain within the row, clamped.
fn draw_series(
    painter: &egui::Painter,
    row_rect: Rect,
    points: &[LinePoint],
    color: Color32,
    total_width: f32,
    origin_x: f32,
) {
    let inner = row_rect.shrink2(Vec2::new(0.0, theme::BAR_INSET));
    if points.len() == 1 {
        let p = &points[0];
        let x = origin_x + pct(p.x_pct) * total_width;
        let t = (p.value.clamp(0.0, 100.0) / 100.0) as f32;
        painter.circle_filled(Pos2::new(x, inner.bottom() - t * inner.height()), 2.0, color);
        return;
    }
    let positions: Vec<Pos2> = points
        .iter()
        .map(|p| {
            let x = origin_x + pct(p.x_pct) * total_width;
            let t = (p.value.clamp(0.0, 100.0) / 100.0) as f32;
            Pos2::new(x, inner.bottom() - t * inner.height())
        })
        .collect();

    // Soft fill under the curve, one translucent quad per segment.
    let mut mesh = Mesh::default();
    let fill = color.gamma_multiply(0.2);
    for pair in positions.windows(2) {
        let base = mesh.vertices.len() as u32;
        for p in pair {
            mesh.vertices.push(Vertex {
                pos: *p,
                uv: WHITE_UV,
                color: fill,
            });
            mesh.vertices.push(Vertex {
                pos: Pos2::new(p.x, inner.bottom()),
                uv: WHITE_UV,
                color: Color32::TRANSPARENT,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 2, base + 3]);
    }
    painter.add(Shape::mesh(mesh));
    painter.add(Shape::line(positions, Stroke::new(1.5, color)));
}

fn draw_now_line(painter: &egui::Painter, origin: Pos2, x_offset: f32, height: f32) {
    let x = origin.x + x_offset;
    painter.line_segment(
        [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
        Stroke::new(1.5, theme::NOW_LINE),
    );

    let badge_w = 36.0;
    let badge = Rect::from_min_size(
        Pos2::new(x - badge_w / 2.0, origin.y),
        Vec2::new(badge_w, 14.0),
    );
    painter.rect_filled(badge, Rounding::same(3.0), theme::NOW_LINE);
    painter.text(
        badge.center(),
        Align2::CENTER_CENTER,
        "Now",
        theme::font_small(),
        Color32::WHITE,
    );
}
