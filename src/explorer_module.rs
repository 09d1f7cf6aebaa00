use egui::{
    plot::{Legend, Line, Plot, PlotPoints, Points},
    Color32, Context, Key, Ui,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{coefficient::CorrelationCoefficient, scene::Scene, DISPLAY_MAX, DISPLAY_MIN};

const POINT_COLOR: Color32 = Color32::from_rgb(0x7c, 0x3a, 0xed);
const LINE_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const POINT_RADIUS: f32 = 3.0;
const LINE_WIDTH: f32 = 2.0;

pub struct ExplorerModule {
    input: String,
    scene: Scene,
    rng: StdRng,
}

impl ExplorerModule {
    pub fn new(coefficient: CorrelationCoefficient) -> Self {
        Self::with_rng(coefficient, StdRng::from_entropy())
    }

    pub fn with_rng(coefficient: CorrelationCoefficient, mut rng: StdRng) -> Self {
        Self {
            input: coefficient.to_string(),
            scene: Scene::regenerate(coefficient, &mut rng),
            rng,
        }
    }

    pub fn coefficient(&self) -> CorrelationCoefficient {
        self.scene.coefficient
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Accepts whatever is in the input field.
    ///
    /// The field is rewritten with the accepted value. The plot is only
    /// regenerated when the value actually changed.
    pub fn commit_input(&mut self) -> CorrelationCoefficient {
        let coefficient = CorrelationCoefficient::parse_input(&self.input);
        self.input = coefficient.to_string();
        self.set_coefficient(coefficient);
        coefficient
    }

    pub fn set_coefficient(&mut self, coefficient: CorrelationCoefficient) {
        if coefficient == self.scene.coefficient {
            return;
        }
        info!("regenerating sample for coefficient {}", coefficient);
        self.scene = Scene::regenerate(coefficient, &mut self.rng);
    }
}

impl ExplorerModule {
    pub fn display(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.input_row(ui);
            ui.separator();
            self.main_view(ui);
        });
    }

    fn input_row(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.strong("Set correlation coefficient:");
            let response = ui.add(egui::TextEdit::singleline(&mut self.input).desired_width(60.0));
            if response.lost_focus() && ui.input().key_pressed(Key::Enter) {
                self.commit_input();
            }
            ui.label(self.scene.description.to_string());
        });
        ui.small("Enter a value between -1 and 1, then press Enter to update the chart.");
    }

    pub fn main_view(&mut self, ui: &mut Ui) {
        let points: PlotPoints = self.scene.sample.iter().map(|p| p.to_plot()).collect();
        let line = self.scene.line.map(|line| {
            Line::new(PlotPoints::from(line.to_plot().to_vec()))
                .color(LINE_COLOR)
                .width(LINE_WIDTH)
                .name("Best fit")
        });
        if line.is_none() {
            ui.label("no best-fit line for this sample");
        }

        Plot::new("correlation scatter")
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .include_x(DISPLAY_MIN)
            .include_x(DISPLAY_MAX)
            .include_y(DISPLAY_MIN)
            .include_y(DISPLAY_MAX)
            .x_axis_formatter(|x, _| format!("{}%", x))
            .y_axis_formatter(|y, _| format!("{}%", y))
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(points)
                        .color(POINT_COLOR)
                        .radius(POINT_RADIUS)
                        .name("Data points"),
                );
                if let Some(line) = line {
                    plot_ui.line(line);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_SIZE;

    fn module(c: f64) -> ExplorerModule {
        ExplorerModule::with_rng(CorrelationCoefficient::new(c), StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_initial_state() {
        let explorer = module(0.5);
        assert_eq!(explorer.input, "0.5");
        assert_eq!(explorer.scene().sample.len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_commit_clamps_and_rewrites_input() {
        let mut explorer = module(0.5);
        explorer.input = "2".to_string();
        assert_eq!(explorer.commit_input().value(), 1.0);
        assert_eq!(explorer.input, "1");
        assert_eq!(explorer.coefficient().value(), 1.0);
        assert_eq!(
            explorer.scene().description.to_string(),
            "Strong positive correlation"
        );
    }

    #[test]
    fn test_commit_garbage_reads_zero() {
        let mut explorer = module(0.5);
        explorer.input = "abc".to_string();
        explorer.commit_input();
        assert_eq!(explorer.input, "0");
        assert_eq!(explorer.scene().description.to_string(), "No correlation");
    }

    #[test]
    fn test_same_value_keeps_sample() {
        let mut explorer = module(0.5);
        let before = explorer.scene().clone();
        explorer.input = "0.501".to_string();
        explorer.commit_input();
        assert_eq!(explorer.scene(), &before);
    }

    #[test]
    fn test_new_value_replaces_sample() {
        let mut explorer = module(0.5);
        let before = explorer.scene().sample.clone();
        explorer.input = "-0.5".to_string();
        explorer.commit_input();
        assert_ne!(explorer.scene().sample, before);
        assert_eq!(explorer.scene().sample.len(), SAMPLE_SIZE);
    }
}
