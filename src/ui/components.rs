//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Ui};
use egui_phosphor::regular::X;

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const ACCENT: Color32 = Color32::from_rgb(0x58, 0x6F, 0x07);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Render a section title inside a panel.
pub fn section_header(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(18.0).strong());
    ui.add_space(8.0);
}

/// Button with a phosphor icon in front of the label.
pub fn icon_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.button(RichText::new(format!("{icon} {label}")).size(14.0))
}

/// Filled accent button used for the main action of a panel.
pub fn primary_button(ui: &mut Ui, icon: &str, label: &str) -> Response {
    ui.add(
        egui::Button::new(RichText::new(format!("{icon} {label}")).size(15.0).color(Color32::WHITE))
            .fill(colors::ACCENT)
            .min_size(egui::vec2(120.0, 32.0)),
    )
}

/// Dismissible message overlay.
///
/// Calls `on_close` when the close button is clicked, the backdrop is
/// clicked, or Escape is pressed.
pub fn modal(ctx: &egui::Context, modal_content: &str, on_close: impl FnOnce()) {
    let mut close_clicked = false;

    let response = egui::Modal::new(egui::Id::new("confirmation_modal")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(modal_content).size(16.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(X).clicked() {
                    close_clicked = true;
                }
            });
        });
    });

    if close_clicked || response.should_close() {
        on_close();
    }
}
