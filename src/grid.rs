use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, pos2};

use crate::problem::DISPLAY_RANGE;

/// Logical canvas size. 21 grid units at 20 px each is 420 px, leaving
/// 10 px of padding on every side.
pub const CANVAS_SIZE: f32 = 440.0;
/// Fixed scale of the coordinate grid.
pub const PX_PER_UNIT: f32 = 20.0;

const GRID_COLOR: Color32 = Color32::from_rgb(0x3a, 0x7b, 0xd5);
const BACKGROUND: Color32 = Color32::WHITE;
const LABEL_COLOR: Color32 = Color32::from_rgb(0x1a, 0x35, 0x57);

const TICK_HALF_LEN: f32 = 8.0;
const LABEL_GAP: f32 = 16.0;

/// Maps a point in graph units to screen coordinates, flipping y so that
/// positive y points up.
pub fn to_screen(center: Pos2, x: f64, y: f64) -> Pos2 {
    pos2(
        center.x + x as f32 * PX_PER_UNIT,
        center.y - y as f32 * PX_PER_UNIT,
    )
}

/// Only even coordinates get a visible numeric label; odd ones are painted
/// fully transparent so the grid stays uncluttered without shifting layout.
pub fn label_visible(coord: i32) -> bool {
    coord % 2 == 0
}

fn label_color(coord: i32) -> Color32 {
    if label_visible(coord) {
        LABEL_COLOR
    } else {
        Color32::TRANSPARENT
    }
}

/// Clears the canvas and draws the coordinate grid, axes, tick marks and
/// numeric labels. Idempotent: the app calls this every frame.
pub fn draw_grid(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let center = rect.center();
    let half = DISPLAY_RANGE as f32 * PX_PER_UNIT;
    let font = FontId::proportional(18.0);

    // Light grid lines at every integer coordinate.
    let grid_stroke = Stroke::new(1.1, GRID_COLOR);
    for i in -DISPLAY_RANGE..=DISPLAY_RANGE {
        let offset = i as f32 * PX_PER_UNIT;
        painter.line_segment(
            [
                pos2(center.x + offset, center.y - half),
                pos2(center.x + offset, center.y + half),
            ],
            grid_stroke,
        );
        painter.line_segment(
            [
                pos2(center.x - half, center.y + offset),
                pos2(center.x + half, center.y + offset),
            ],
            grid_stroke,
        );
    }

    // Bold axes through the origin.
    let axis_stroke = Stroke::new(5.0, GRID_COLOR);
    painter.line_segment(
        [pos2(center.x - half, center.y), pos2(center.x + half, center.y)],
        axis_stroke,
    );
    painter.line_segment(
        [pos2(center.x, center.y - half), pos2(center.x, center.y + half)],
        axis_stroke,
    );

    // Tick marks and numbers at every nonzero integer.
    let tick_stroke = Stroke::new(2.0, LABEL_COLOR);
    for i in -DISPLAY_RANGE..=DISPLAY_RANGE {
        if i == 0 {
            continue;
        }
        let offset = i as f32 * PX_PER_UNIT;

        painter.line_segment(
            [
                pos2(center.x + offset, center.y - TICK_HALF_LEN),
                pos2(center.x + offset, center.y + TICK_HALF_LEN),
            ],
            tick_stroke,
        );
        painter.text(
            pos2(center.x + offset, center.y + LABEL_GAP - 2.0),
            Align2::CENTER_TOP,
            i.to_string(),
            font.clone(),
            label_color(i),
        );

        painter.line_segment(
            [
                pos2(center.x - TICK_HALF_LEN, center.y - offset),
                pos2(center.x + TICK_HALF_LEN, center.y - offset),
            ],
            tick_stroke,
        );
        painter.text(
            pos2(center.x - LABEL_GAP, center.y - offset),
            Align2::RIGHT_CENTER,
            i.to_string(),
            font.clone(),
            label_color(i),
        );
    }

    // Boundary labels just outside the grid edge on both axes.
    painter.text(
        pos2(center.x + half, center.y + LABEL_GAP - 2.0),
        Align2::CENTER_TOP,
        "10",
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        pos2(center.x - half, center.y + LABEL_GAP - 2.0),
        Align2::CENTER_TOP,
        "-10",
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        pos2(center.x - LABEL_GAP, center.y - half),
        Align2::RIGHT_CENTER,
        "10",
        font.clone(),
        LABEL_COLOR,
    );
    painter.text(
        pos2(center.x - LABEL_GAP, center.y + half),
        Align2::RIGHT_CENTER,
        "-10",
        font,
        LABEL_COLOR,
    );
}
