use std::collections::HashSet;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context};

use crate::labels::{LabelCatalog, load_label_catalog};

mod chart;
mod interaction;
mod physics;
mod render_utils;
mod scale;
mod ui;
mod viewport;

use interaction::InteractionState;
use physics::Simulation;
use viewport::Viewport;

pub struct LabelScopeApp {
    data_path: String,
    state: AppState,
    reload_rx: Option<Receiver<Result<LabelCatalog, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<LabelCatalog, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Bubbles,
    List,
}

struct ViewModel {
    catalog: LabelCatalog,
    min_count: u64,
    search: String,
    view_mode: ViewMode,
    viewport: Viewport,
    interaction: InteractionState,
    simulation: Simulation,
    visible_dirty: bool,
    visible_max_count: u64,
    /// Visible label ids, count descending; drives the list view and the
    /// "showing N labels" readouts.
    visible_sorted: Vec<String>,
    expanded_rows: HashSet<String>,
}

impl LabelScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: String) -> Self {
        let state = Self::start_load(data_path.clone());
        Self {
            data_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(data_path: String) -> Receiver<Result<LabelCatalog, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_label_catalog(&data_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(data_path: String) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(data_path),
        }
    }
}

impl eframe::App for LabelScopeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(catalog) => AppState::Ready(Box::new(ViewModel::new(catalog))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading label data...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load label data");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.data_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.data_path, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.data_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(catalog) => AppState::Ready(Box::new(ViewModel::new(catalog))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
