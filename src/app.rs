use eframe::egui::{self, Button, RichText, Sense, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::grid;
use crate::marker::MarkerLoader;
use crate::overlay::{self, Verdict};
use crate::session::Session;

/// The main application: owns the session, the random source and the
/// marker loader, and wires the buttons to the session operations.
pub struct QuizApp {
    session: Session,
    rng: StdRng,
    marker: MarkerLoader,
}

impl QuizApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut rng = StdRng::from_os_rng();
        let mut session = Session::new();
        session.new_problem(&mut rng);

        Self {
            session,
            rng,
            marker: MarkerLoader::fetch(cc.egui_ctx.clone()),
        }
    }
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Is the point on the line?");
                ui.add_space(4.0);

                let Some(problem) = self.session.current().copied() else {
                    return;
                };

                ui.label(
                    RichText::new(format!("Y = {}X + {}", problem.slope, problem.intercept))
                        .size(20.0),
                );
                ui.label(RichText::new(format!("({}, {})", problem.x, problem.y)).size(20.0));
                ui.add_space(4.0);

                let (response, painter) =
                    ui.allocate_painter(Vec2::splat(grid::CANVAS_SIZE), Sense::hover());
                // Steep lines leave the visible range; clip like a canvas would.
                let painter = painter.with_clip_rect(response.rect);
                grid::draw_grid(&painter, response.rect);

                if self.session.is_revealed() {
                    let texture = self.marker.texture(ctx);
                    overlay::draw_overlay(&painter, response.rect, &problem, texture);
                    let verdict = Verdict::for_problem(&problem);
                    ui.label(
                        RichText::new(verdict.message())
                            .color(verdict.color())
                            .size(18.0),
                    );
                } else {
                    // Keep the row present so revealing doesn't shift the layout.
                    ui.label(RichText::new("").size(18.0));
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let at_start = self.session.current_index() == 0;
                    if ui.add_enabled(!at_start, Button::new("⬅")).clicked() {
                        self.session.previous();
                    }
                    let can_reveal = !self.session.is_revealed() && !self.session.is_empty();
                    if ui
                        .add_enabled(can_reveal, Button::new("Show Answer"))
                        .clicked()
                    {
                        self.session.reveal();
                    }
                    if ui.button("➡").clicked() {
                        self.session.next(&mut self.rng);
                    }
                    ui.label(format!(
                        "{} / {}",
                        self.session.current_index() + 1,
                        self.session.len()
                    ));
                });
            });
        });
    }
}
