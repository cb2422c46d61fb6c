//! Create employee form panel.

use chrono::NaiveDate;
use eframe::egui::{self, Response, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{FLOPPY_DISK, X};

use super::app::App;
use super::components::{panel_header, primary_button, section_header};
use crate::form::{Field, FieldUpdate, FormState};
use crate::models::SelectOption;

const DATE_PLACEHOLDER: &str = "Click to select a date";

/// Show the create employee panel.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Create Employee");

    // Render from a snapshot, then apply the collected updates in order.
    let state = app.form.state().clone();
    let mut updates = Vec::new();
    let mut submit = false;

    ScrollArea::vertical().id_salt("create_scroll").show(ui, |ui| {
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                section_header(ui, "Employee informations");
                egui::Grid::new("employee_info_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        submit |= text_row(
                            ui,
                            Field::FirstName,
                            &state.first_name,
                            FieldUpdate::FirstName,
                            &mut updates,
                        );
                        submit |= text_row(
                            ui,
                            Field::LastName,
                            &state.last_name,
                            FieldUpdate::LastName,
                            &mut updates,
                        );
                        date_row(
                            ui,
                            Field::BirthDate,
                            state.birth_date,
                            &mut app.birth_date_pick,
                            FieldUpdate::BirthDate,
                            &mut updates,
                        );
                        date_row(
                            ui,
                            Field::StartDate,
                            state.start_date,
                            &mut app.start_date_pick,
                            FieldUpdate::StartDate,
                            &mut updates,
                        );
                        select_row(
                            ui,
                            Field::Department,
                            "Click to select a department",
                            state.selected_department.as_ref(),
                            &app.reference.departments,
                            FieldUpdate::Department,
                            &mut updates,
                        );
                    });
            });

            ui.add_space(40.0);

            ui.vertical(|ui| {
                section_header(ui, "Employee address");
                egui::Grid::new("employee_address_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        submit |= text_row(
                            ui,
                            Field::Street,
                            &state.street,
                            FieldUpdate::Street,
                            &mut updates,
                        );
                        submit |= text_row(
                            ui,
                            Field::City,
                            &state.city,
                            FieldUpdate::City,
                            &mut updates,
                        );
                        select_row(
                            ui,
                            Field::State,
                            "Click to select a state",
                            state.selected_state.as_ref(),
                            &app.reference.states,
                            FieldUpdate::State,
                            &mut updates,
                        );
                        submit |= zip_code_row(ui, &state, &mut updates);
                    });
            });
        });

        ui.add_space(20.0);
        if primary_button(ui, FLOPPY_DISK, "Save").clicked() {
            submit = true;
        }
    });

    for update in updates {
        app.form.update(update);
    }
    if submit {
        app.form.submit();
    }
}

/// Whether Enter was pressed while `response` had focus.
fn enter_pressed(ui: &Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Text input row. Returns `true` when Enter submits the form.
fn text_row(
    ui: &mut Ui,
    field: Field,
    current: &str,
    make: fn(String) -> FieldUpdate,
    updates: &mut Vec<FieldUpdate>,
) -> bool {
    ui.label(format!("{}:", field.label()));
    let mut value = current.to_string();
    let response = ui.add(egui::TextEdit::singleline(&mut value).desired_width(220.0));
    ui.end_row();

    if response.changed() {
        updates.push(make(value));
    }
    enter_pressed(ui, &response)
}

/// Keep only what a numeric input accepts: digits, sign, decimal point and exponent.
fn numeric_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
        .collect()
}

/// Numeric zip code input. The typed text is otherwise kept as is.
fn zip_code_row(ui: &mut Ui, state: &FormState, updates: &mut Vec<FieldUpdate>) -> bool {
    ui.label(format!("{}:", Field::ZipCode.label()));
    let mut value = state.zip_code.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut value).desired_width(120.0));
    ui.end_row();

    if response.changed() {
        let value = numeric_input(&value);
        if value != state.zip_code {
            updates.push(FieldUpdate::ZipCode(value));
        }
    }
    enter_pressed(ui, &response)
}

/// Date picker row with an empty state.
fn date_row(
    ui: &mut Ui,
    field: Field,
    current: Option<NaiveDate>,
    pick: &mut NaiveDate,
    make: fn(Option<NaiveDate>) -> FieldUpdate,
    updates: &mut Vec<FieldUpdate>,
) {
    if let Some(date) = current {
        *pick = date;
    }

    ui.label(format!("{}:", field.label()));
    ui.horizontal(|ui| {
        let response = ui.add(
            DatePickerButton::new(pick)
                .id_salt(field.label())
                .combo_boxes(true)
                .calendar_week(false),
        );
        if response.changed() {
            updates.push(make(Some(*pick)));
        }

        match current {
            None => {
                ui.weak(DATE_PLACEHOLDER);
            }
            Some(_) => {
                if ui.small_button(X).on_hover_text("Clear").clicked() {
                    updates.push(make(None));
                }
            }
        }
    });
    ui.end_row();
}

/// Dropdown row over a fixed option set.
fn select_row(
    ui: &mut Ui,
    field: Field,
    placeholder: &str,
    current: Option<&SelectOption>,
    options: &[SelectOption],
    make: fn(Option<SelectOption>) -> FieldUpdate,
    updates: &mut Vec<FieldUpdate>,
) {
    ui.label(format!("{}:", field.label()));
    egui::ComboBox::from_id_salt(field.label())
        .width(220.0)
        .selected_text(current.map(|o| o.label.as_str()).unwrap_or(placeholder))
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(current == Some(option), option.label.as_str()).clicked() {
                    updates.push(make(Some(option.clone())));
                }
            }
        });
    ui.end_row();
}
