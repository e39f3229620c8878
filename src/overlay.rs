use egui::{Color32, Painter, Rect, Stroke, TextureHandle, Vec2, pos2};

use crate::grid::to_screen;
use crate::problem::{DISPLAY_RANGE, Problem};

/// Side length of the marker glyph, centered on the candidate point.
const MARKER_SIZE: f32 = 28.0;
/// Radius of the fallback dot drawn while the marker image is unavailable.
const DOT_RADIUS: f32 = 7.0;

const LINE_COLOR: Color32 = Color32::from_rgb(0x19, 0x76, 0xd2);
const DOT_COLOR: Color32 = Color32::from_rgb(0xd3, 0x2f, 0x2f);
const ON_LINE_COLOR: Color32 = Color32::from_rgb(0x18, 0xe7, 0x83);
const OFF_LINE_COLOR: Color32 = Color32::from_rgb(0xc3, 0x99, 0xfd);

/// The revealed answer, recomputed from the stored coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    OnLine,
    OffLine,
}

impl Verdict {
    /// Judges the problem geometrically, ignoring its `on_line` intent
    /// flag. Clamped problems can make the two disagree; geometry wins.
    pub fn for_problem(problem: &Problem) -> Self {
        if problem.is_on_line() {
            Self::OnLine
        } else {
            Self::OffLine
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::OnLine => "The point is on the line!",
            Self::OffLine => "The point is NOT on the line.",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::OnLine => ON_LINE_COLOR,
            Self::OffLine => OFF_LINE_COLOR,
        }
    }
}

/// Draws the line and the candidate point on top of an already drawn grid.
///
/// The line is the segment between its intersections with the visible
/// x-range boundaries. The point gets the marker texture when it has
/// loaded, otherwise a filled dot; once the texture shows up a repaint
/// replaces the dot in place.
pub fn draw_overlay(
    painter: &Painter,
    rect: Rect,
    problem: &Problem,
    marker: Option<&TextureHandle>,
) {
    let center = rect.center();

    let x0 = -DISPLAY_RANGE;
    let x1 = DISPLAY_RANGE;
    painter.line_segment(
        [
            to_screen(center, f64::from(x0), problem.line_y(x0)),
            to_screen(center, f64::from(x1), problem.line_y(x1)),
        ],
        Stroke::new(2.5, LINE_COLOR),
    );

    let point = to_screen(center, f64::from(problem.x), problem.y);
    match marker {
        Some(texture) => {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            let marker_rect = Rect::from_center_size(point, Vec2::splat(MARKER_SIZE));
            painter.image(texture.id(), marker_rect, uv, Color32::WHITE);
        }
        None => {
            painter.circle_filled(point, DOT_RADIUS, DOT_COLOR);
        }
    }
}
