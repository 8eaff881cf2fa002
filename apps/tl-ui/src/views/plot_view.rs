use egui_plot::{Legend, Line, Plot, PlotPoints};
use tl_losses::{Frame, LossAnalysis, Rgb};

pub const CHART_WIDTH: f32 = 950.0;
pub const CHART_HEIGHT: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
}

/// Animated five-trace chart.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        analysis: &LossAnalysis,
        frame_index: usize,
        playing: bool,
    ) -> Option<PlaybackAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            if ui.add_enabled(!playing, egui::Button::new("Play")).clicked() {
                action = Some(PlaybackAction::Play);
            }
            if ui.add_enabled(playing, egui::Button::new("Pause")).clicked() {
                action = Some(PlaybackAction::Pause);
            }
            ui.label(format!(
                "Frame {}/{}",
                frame_index + 1,
                analysis.frame_count()
            ));
        });

        ui.label(
            egui::RichText::new("Transformer Losses & Efficiency")
                .color(egui::Color32::WHITE)
                .size(18.0),
        );

        let Some(frame) = analysis.frame(frame_index) else {
            ui.label("No frame to display");
            return action;
        };

        let lines = frame_lines(&frame);
        Plot::new("loss_chart")
            .legend(Legend::default())
            .x_axis_label("Load (kVA)")
            .y_axis_label("Losses (W) / Efficiency (%)")
            .include_x(0.0)
            .include_x(analysis.bounds.x_max)
            .include_y(0.0)
            .include_y(analysis.bounds.y_max)
            .width(CHART_WIDTH)
            .height(CHART_HEIGHT)
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });

        action
    }
}

fn frame_lines(frame: &Frame<'_>) -> Vec<Line> {
    frame
        .traces
        .iter()
        .map(|trace| {
            let style = trace.style();
            let points: PlotPoints = trace.points().collect::<Vec<_>>().into();
            Line::new(points)
                .name(trace.name())
                .color(to_color(style.color))
                .width(style.width)
        })
        .collect()
}

fn to_color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
