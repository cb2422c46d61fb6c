//! Excel and JSON export of the employee list.

use crate::Result;
use crate::models::EmployeeDraft;
use crate::store::display_columns;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::path::{Path, PathBuf};

/// Column headers, matching [`display_columns`].
pub const HEADERS: [&str; 9] = [
    "First Name",
    "Last Name",
    "Start Date",
    "Department",
    "Date of Birth",
    "Street",
    "City",
    "State",
    "Zip Code",
];

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    fn filter_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel Files",
            ExportFormat::Json => "JSON Files",
        }
    }
}

/// Export employees to Excel file.
pub fn export_employees_to_excel(employees: &[EmployeeDraft], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x586F07))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    for (col, width) in [15, 20, 12, 18, 13, 30, 20, 8, 10].into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    // Data rows
    for (idx, employee) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, value) in display_columns(employee).iter().enumerate() {
            worksheet.write_string(row, col as u16, value)?;
        }
    }

    // Autofilter
    if !employees.is_empty() {
        let last_row = employees.len() as u32;
        worksheet.autofilter(0, 0, last_row, (HEADERS.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Export employees as a pretty-printed JSON array.
pub fn export_employees_to_json(employees: &[EmployeeDraft], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(employees)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Write employees to `path` in the given format.
pub fn export_employees(employees: &[EmployeeDraft], format: ExportFormat, path: &Path) -> Result<()> {
    match format {
        ExportFormat::Excel => export_employees_to_excel(employees, path),
        ExportFormat::Json => export_employees_to_json(employees, path),
    }
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str, format: ExportFormat) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(format.filter_name(), &[format.extension()])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!(
        "{prefix}_{ts}.{ext}",
        ts = now.format("%Y%m%d_%H%M%S"),
        ext = format.extension()
    )
}
