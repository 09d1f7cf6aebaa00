use egui::Ui;
use log::info;

use crate::{
    about_module::AboutModule, coefficient::CorrelationCoefficient,
    explorer_module::ExplorerModule,
};

const COEFFICIENT_KEY: &str = "coefficient";

pub struct CorrelationApp {
    explorer_module: ExplorerModule,
    about_module: AboutModule,
    state: State,
}

#[derive(Default, PartialEq, Eq)]
pub enum State {
    #[default]
    Explorer,
    About,
}

impl CorrelationApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let coefficient: CorrelationCoefficient = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, COEFFICIENT_KEY))
            .unwrap_or_default();
        info!("starting with coefficient {}", coefficient);
        Self {
            explorer_module: ExplorerModule::new(coefficient),
            about_module: Default::default(),
            state: Default::default(),
        }
    }
}

impl eframe::App for CorrelationApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, COEFFICIENT_KEY, &self.explorer_module.coefficient());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| self.menu(ui));
        match self.state {
            State::Explorer => self.explorer_module.display(ctx),
            State::About => self.about_module.display(ctx),
        }
    }
}

impl CorrelationApp {
    fn menu(&mut self, ui: &mut Ui) {
        egui::menu::bar(ui, |ui| {
            ui.horizontal_centered(|ui| {
                ui.selectable_value(&mut self.state, State::Explorer, "📈 Explorer");
                ui.selectable_value(&mut self.state, State::About, "ℹ About");
            });
        });
    }
}
