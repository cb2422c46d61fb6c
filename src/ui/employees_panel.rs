//! Current employees list with search, paging and export.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{BRACKETS_CURLY, CARET_LEFT, CARET_RIGHT, FILE_XLS, MAGNIFYING_GLASS};

use super::app::App;
use super::components::{icon_button, panel_header};
use crate::export::{ExportFormat, HEADERS};
use crate::store::{PAGE_SIZES, display_columns, filter_employees};

/// Show the employee list panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Current Employees");

    // Toolbar: page size, search, export
    ui.horizontal(|ui| {
        ui.label("Show");
        egui::ComboBox::from_id_salt("page_size")
            .width(60.0)
            .selected_text(app.pagination.page_size.to_string())
            .show_ui(ui, |ui| {
                for size in PAGE_SIZES {
                    if ui
                        .selectable_label(app.pagination.page_size == size, size.to_string())
                        .clicked()
                    {
                        app.pagination.set_page_size(size);
                    }
                }
            });
        ui.label("entries");

        ui.add_space(20.0);

        ui.label(MAGNIFYING_GLASS);
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.employee_search)
                .desired_width(200.0)
                .hint_text("Search..."),
        );
        if search.changed() {
            app.pagination.page = 0;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let has_rows = !app.store.is_empty();
            if ui
                .add_enabled_ui(has_rows, |ui| icon_button(ui, BRACKETS_CURLY, "Export JSON"))
                .inner
                .clicked()
            {
                app.export_employees(ExportFormat::Json);
            }
            if ui
                .add_enabled_ui(has_rows, |ui| icon_button(ui, FILE_XLS, "Export to Excel"))
                .inner
                .clicked()
            {
                app.export_employees(ExportFormat::Excel);
            }
        });
    });

    ui.add_space(15.0);

    let filtered = filter_employees(app.store.employees(), &app.employee_search);
    let total = filtered.len();
    app.pagination.clamp(total);
    let range = app.pagination.page_range(total);

    let max_height = (ui.available_height() - 40.0).max(100.0);
    ScrollArea::both().id_salt("employees_scroll").max_height(max_height).show(ui, |ui| {
        egui::Grid::new("employees_grid")
            .num_columns(HEADERS.len())
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                for header in HEADERS {
                    ui.strong(header);
                }
                ui.end_row();

                for employee in &filtered[range] {
                    for value in display_columns(employee) {
                        ui.label(value);
                    }
                    ui.end_row();
                }
            });

        if total == 0 {
            ui.add_space(10.0);
            ui.weak("No data available in table");
        }
    });

    ui.add_space(10.0);

    // Footer: summary and paging
    ui.horizontal(|ui| {
        ui.label(app.pagination.summary(total));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(app.pagination.has_next(total), egui::Button::new(format!("Next {CARET_RIGHT}")))
                .clicked()
            {
                app.pagination.page += 1;
            }
            ui.label(format!(
                "Page {} of {}",
                app.pagination.page + 1,
                app.pagination.page_count(total)
            ));
            if ui
                .add_enabled(app.pagination.has_previous(), egui::Button::new(format!("{CARET_LEFT} Previous")))
                .clicked()
            {
                app.pagination.page -= 1;
            }
        });
    });
}
