use crate::playback::Playback;
use crate::views::plot_view::PlaybackAction;
use crate::views::{InputView, PlotView};
use std::time::Duration;
use tl_losses::{LossAnalysis, compute};

const INVALID_INPUT: &str = "Please enter valid input values.";

/// Top-level screens. The only transition is Start -> Analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Analyze,
}

impl Screen {
    pub fn advance(self) -> Self {
        match self {
            Screen::Start | Screen::Analyze => Screen::Analyze,
        }
    }
}

pub struct AnalyzerApp {
    screen: Screen,
    input_view: InputView,
    plot_view: PlotView,
    analysis: Option<LossAnalysis>,
    error: Option<String>,
    playback: Playback,
}

impl AnalyzerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            screen: Screen::default(),
            input_view: InputView::default(),
            plot_view: PlotView,
            analysis: None,
            error: None,
            playback: Playback::default(),
        }
    }

    fn calculate(&mut self, now: f64) {
        match compute(&self.input_view.params) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.error = None;
                self.playback.restart(now);
            }
            Err(err) => {
                tracing::warn!(%err, "calculation rejected");
                self.analysis = None;
                self.error = Some(INVALID_INPUT.to_string());
                self.playback.pause();
            }
        }
    }

    fn show_start(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Welcome to Transformer Losses Analyzer");
            ui.add_space(24.0);
            if ui.button("Let's Start Analyzing").clicked() {
                self.screen = self.screen.advance();
            }
        });
    }

    fn show_analyze(&mut self, ui: &mut egui::Ui, now: f64) {
        ui.heading("Transformer Losses Analyzer & Efficiency Calculator");
        ui.separator();

        let mut calculate = false;
        let mut action = None;
        ui.columns(2, |cols| {
            calculate = self.input_view.show(&mut cols[0]);

            cols[1].heading("Output Visualization");
            cols[1].separator();
            if let Some(msg) = &self.error {
                cols[1].colored_label(egui::Color32::RED, msg);
            } else if let Some(analysis) = &self.analysis {
                action = self.plot_view.show(
                    &mut cols[1],
                    analysis,
                    self.playback.frame(),
                    self.playback.is_playing(),
                );
            }
        });

        if calculate {
            self.calculate(now);
        }

        let frame_count = self.analysis.as_ref().map_or(0, LossAnalysis::frame_count);
        match action {
            Some(PlaybackAction::Play) => self.playback.play(now, frame_count),
            Some(PlaybackAction::Pause) => self.playback.pause(),
            None => {}
        }
    }
}

impl eframe::App for AnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        if let Some(analysis) = &self.analysis {
            self.playback.tick(now, analysis.frame_count());
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Start => self.show_start(ui),
            Screen::Analyze => self.show_analyze(ui, now),
        });

        if self.playback.is_playing() {
            ctx.request_repaint_after(Duration::from_secs_f64(crate::playback::FRAME_DURATION_S));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_only_moves_forward() {
        assert_eq!(Screen::default(), Screen::Start);
        assert_eq!(Screen::Start.advance(), Screen::Analyze);
        assert_eq!(Screen::Analyze.advance(), Screen::Analyze);
    }
}
