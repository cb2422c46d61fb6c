//! Main application UI.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use chrono::{Local, NaiveDate};
use eframe::egui;
use egui_phosphor::regular::{USER_PLUS, USERS};

use crate::config::AppConfig;
use crate::data::ReferenceData;
use crate::export::{self, ExportFormat};
use crate::form::FormController;
use crate::store::{Action, Dispatcher, EmployeeStore, Pagination};

use super::components::{self, colors};
use super::{create_panel, employees_panel};

/// Current panel being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    CreateEmployee,
    Employees,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::CreateEmployee => "Create Employee",
            Panel::Employees => "Current Employees",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Panel::CreateEmployee => USER_PLUS,
            Panel::Employees => USERS,
        }
    }
}

/// Main application state.
pub struct App {
    // Create form and the store it dispatches into
    pub form: FormController<Dispatcher>,
    pub store: EmployeeStore,
    actions: Receiver<Action>,

    // Selector options
    pub reference: ReferenceData,

    // Configuration, written back on close
    pub config: AppConfig,
    config_path: PathBuf,

    // Navigation
    pub current_panel: Panel,

    // Date picker scratch values while the matching field is empty
    pub birth_date_pick: NaiveDate,
    pub start_date_pick: NaiveDate,

    // Employee list
    pub employee_search: String,
    pub pagination: Pagination,

    // Dialogs
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, config_path: PathBuf, reference: ReferenceData) -> Self {
        let (tx, rx) = mpsc::channel();
        let today = Local::now().date_naive();

        Self {
            form: FormController::new(Dispatcher::new(tx)),
            store: EmployeeStore::new(),
            actions: rx,
            reference,
            config,
            config_path,
            current_panel: Panel::default(),
            birth_date_pick: today,
            start_date_pick: today,
            employee_search: String::new(),
            pagination: Pagination::default(),
            error_message: None,
            success_message: None,
        }
    }

    /// Apply actions dispatched since the last frame.
    pub fn poll_actions(&mut self) {
        let applied = self.store.drain(&self.actions);
        if applied > 0 {
            tracing::debug!(applied, "Store actions applied");
        }
    }

    /// Store the final window size in the config file.
    fn save_window_size(&mut self, size: egui::Vec2) {
        if !self.config.remember_window_size(size.x, size.y) {
            return;
        }
        match self.config.save(&self.config_path) {
            Ok(()) => tracing::info!("Window size saved to {:?}", self.config_path),
            Err(e) => tracing::error!("Failed to save config: {}", e),
        }
    }

    /// Ask for a destination and export the store's employees.
    pub fn export_employees(&mut self, format: ExportFormat) {
        let default_name = export::generate_export_filename("employees", format);
        let Some(path) = export::show_save_dialog(&default_name, format) else {
            return;
        };

        match export::export_employees(self.store.employees(), format, &path) {
            Ok(()) => {
                tracing::info!("Exported {} employees to {:?}", self.store.len(), path);
                self.success_message = Some(format!("Exported to: {}", path.display()));
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Render navigation bar.
    fn show_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("HRnet").size(20.0).strong().color(colors::ACCENT));
                ui.add_space(20.0);
                for panel in [Panel::CreateEmployee, Panel::Employees] {
                    let text = format!("{} {}", panel.icon(), panel.name());
                    if ui.selectable_label(self.current_panel == panel, text).clicked() {
                        self.current_panel = panel;
                    }
                }
            });
            ui.add_space(6.0);
        });
    }

    /// Render error and success dialogs.
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_actions();

        // Remember the window size when the user closes the window
        let (close_requested, inner_rect) =
            ctx.input(|i| (i.viewport().close_requested(), i.viewport().inner_rect));
        if close_requested && let Some(rect) = inner_rect {
            self.save_window_size(rect.size());
        }

        self.show_nav_bar(ctx);
        self.show_dialogs(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
            Panel::CreateEmployee => create_panel::show(self, ui),
            Panel::Employees => employees_panel::show(self, ui),
        });

        // Confirmation overlay
        if let Some(overlay) = self.form.overlay() {
            components::modal(ctx, overlay.message, || self.form.dismiss());
        }
    }
}
