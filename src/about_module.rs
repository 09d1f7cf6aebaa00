use egui::{Context, Ui};

#[derive(Default)]
pub struct AboutModule;

impl AboutModule {
    pub fn display(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.main_view(ui));
        });
    }

    fn main_view(&mut self, ui: &mut Ui) {
        ui.heading("What is a correlation coefficient?");
        ui.label(
            "The correlation coefficient measures the strength and direction of the \
             relationship between two variables. It ranges from -1 to 1, where:",
        );
        bullet(ui, "1 indicates a perfect positive correlation");
        bullet(ui, "0 indicates no correlation");
        bullet(ui, "-1 indicates a perfect negative correlation");

        ui.add_space(12.0);
        ui.heading("Interpreting the chart");
        bullet(ui, "Each purple dot represents a data point.");
        bullet(ui, "The red line is the best-fit line (regression line) for the data.");
        bullet(ui, "A steeper line indicates a stronger correlation.");
        bullet(ui, "Dots clustered closely around the line suggest a stronger correlation.");

        ui.add_space(12.0);
        ui.small(
            "The points are synthetic. Their correlation only approximates the \
             coefficient you enter.",
        );
    }
}

fn bullet(ui: &mut Ui, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label("•");
        ui.label(text);
    });
}
