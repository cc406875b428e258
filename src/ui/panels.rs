use chrono::{Local, NaiveDate};
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::StatusColors;
use crate::config::{Config, ScheduleEntry};
use crate::data::filter::{self, FilterKey};
use crate::data::model::{COLUMNS, Finding};
use crate::data::{delay, export};
use crate::state::{AppState, resolve_selection};
use crate::ui::chart;

/// Row fill for delayed items, the dashboard's one conditional style.
const HIGHLIGHT: Color32 = Color32::from_rgb(139, 26, 26);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &Config) {
    let loaded = state.findings.as_ref().map(|f| f.len());
    let mut reload = false;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("FMEA ONLINE");
        ui.separator();

        if state.gate.unlocked {
            if let Some(n) = loaded {
                ui.label(format!("{n} findings loaded"));
            }
            if ui.button("Reload").clicked() {
                reload = true;
            }
        }

        if let Some(err) = &state.load_error {
            ui.label(RichText::new(err).color(Color32::RED));
        }
    });

    if reload {
        state.reload(&config.data_path);
    }
}

// ---------------------------------------------------------------------------
// Access gate
// ---------------------------------------------------------------------------

/// The app-key prompt shown until the user unlocks the dashboard.
pub fn access_gate(ui: &mut Ui, state: &mut AppState, config: &Config) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(60.0);
        ui.heading("WELCOME TO FMEA ONLINE!");
        ui.add_space(16.0);
        ui.label("Enter app key to view contents:");

        let response = ui.add(
            egui::TextEdit::singleline(&mut state.gate.input).desired_width(220.0),
        );
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Enter").clicked() || submitted {
            state.gate.submit(&config.access_key);
            if state.gate.unlocked {
                state.reload(&config.data_path);
            }
        }

        if let Some(feedback) = state.gate.feedback {
            ui.add_space(8.0);
            ui.label(RichText::new(feedback.message()).color(Color32::LIGHT_RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

/// Render the whole dashboard top to bottom: schedule blocks, the cascading
/// department → car maker → line drill-down with a chart per stage, the
/// delayed-items table, and the export button. Selection changes are applied
/// after rendering and trigger a fresh load of the source file.
pub fn dashboard(ui: &mut Ui, state: &mut AppState, config: &Config) {
    let mut pending_select: Option<(FilterKey, String)> = None;
    let mut new_status: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            schedule_row(ui, config);
            ui.add_space(12.0);

            let Some(findings) = &state.findings else {
                // load_error is already shown in the top bar
                ui.label("No findings loaded.");
                return;
            };

            let rows = filter::all(findings);
            let colors = StatusColors::new(&chart::status_values(&rows));

            // ---- Department ----
            let dept_options = filter::options(&rows, FilterKey::Department);
            selector(
                ui,
                "Please select your department:",
                "department_select",
                &dept_options,
                state.department.as_deref(),
                FilterKey::Department,
                &mut pending_select,
            );
            let Some(department) = resolve_selection(&dept_options, state.department.as_deref())
            else {
                ui.label("No selection possible, the data has no departments.");
                return;
            };
            let dept_rows = filter::narrow(&rows, FilterKey::Department, &department);

            ui.add_space(8.0);
            ui.heading(format!("Here's the FMEA Dashboard for {department}"));
            ui.strong(format!(
                "You have {} OPEN items in total!",
                filter::open_count(&dept_rows)
            ));
            chart::status_chart(ui, "status_by_maker", &dept_rows, FilterKey::CarMaker, &colors);

            // ---- Car maker ----
            ui.add_space(8.0);
            let maker_options = filter::options(&dept_rows, FilterKey::CarMaker);
            selector(
                ui,
                "Select a car maker:",
                "car_maker_select",
                &maker_options,
                state.car_maker.as_deref(),
                FilterKey::CarMaker,
                &mut pending_select,
            );
            let Some(car_maker) = resolve_selection(&maker_options, state.car_maker.as_deref())
            else {
                ui.label("No selection possible, no car makers in this department.");
                return;
            };
            let maker_rows = filter::narrow(&dept_rows, FilterKey::CarMaker, &car_maker);

            ui.strong(format!(
                "You have {} OPEN items in {car_maker}!",
                filter::open_count(&maker_rows)
            ));
            chart::status_chart(ui, "status_by_line", &maker_rows, FilterKey::Line, &colors);

            // ---- Line ----
            ui.add_space(8.0);
            let line_options = filter::options(&maker_rows, FilterKey::Line);
            selector(
                ui,
                "Select line:",
                "line_select",
                &line_options,
                state.line.as_deref(),
                FilterKey::Line,
                &mut pending_select,
            );
            let Some(line) = resolve_selection(&line_options, state.line.as_deref()) else {
                ui.label("No selection possible, no lines for this car maker.");
                return;
            };
            let line_rows = filter::narrow(&maker_rows, FilterKey::Line, &line);
            let open_rows = filter::open_items(&line_rows);

            let today = Local::now().date_naive();
            ui.add_space(8.0);
            ui.strong(format!(
                "{} OPEN Item/s are DELAYED!",
                delay::delayed_count(&open_rows, today)
            ));
            delayed_table(ui, &open_rows, today);

            // ---- Export ----
            ui.add_space(12.0);
            if ui
                .button(format!(
                    "Download {department} FMEA PDCA OPEN Items on Line {line}"
                ))
                .clicked()
            {
                new_status = Some(save_export(&open_rows, &department, &line));
            }
            if let Some(msg) = &state.status_message {
                ui.label(msg);
            }
        });

    if let Some((key, value)) = pending_select {
        state.select(key, value);
        // Fresh copy of the source on every interaction.
        state.reload(&config.data_path);
    }
    if let Some(msg) = new_status {
        state.status_message = Some(msg);
    }
}

// ---------------------------------------------------------------------------
// Schedule blocks
// ---------------------------------------------------------------------------

fn schedule_row(ui: &mut Ui, config: &Config) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("FMEA Checking Schedule:");
    });
    ui.add_space(4.0);
    ui.columns(2, |cols: &mut [Ui]| {
        schedule_block(&mut cols[0], "FMEA Line Checking:", &config.fmea_schedule);
        schedule_block(&mut cols[1], "NPRA Checking:", &config.npra_schedule);
    });
}

fn schedule_block(ui: &mut Ui, title: &str, entry: &ScheduleEntry) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong(title);
        ui.label(&entry.date);
        ui.label(&entry.maker_model);
        ui.label(&entry.line);
        ui.label(&entry.time);
    });
}

// ---------------------------------------------------------------------------
// Cascading single-select
// ---------------------------------------------------------------------------

fn selector(
    ui: &mut Ui,
    label: &str,
    id: &str,
    options: &[String],
    current: Option<&str>,
    key: FilterKey,
    pending: &mut Option<(FilterKey, String)>,
) {
    let resolved = resolve_selection(options, current);
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(resolved.clone().unwrap_or_default())
            .show_ui(ui, |ui: &mut Ui| {
                for option in options {
                    if ui
                        .selectable_label(resolved.as_deref() == Some(option), option)
                        .clicked()
                    {
                        *pending = Some((key, option.clone()));
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Delayed-items table
// ---------------------------------------------------------------------------

/// The open subset as a table, with delayed rows filled red. The highlight
/// is recomputed per render from the pure predicate, never stored.
fn delayed_table(ui: &mut Ui, rows: &[&Finding], today: NaiveDate) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().resizable(true), COLUMNS.len())
        .header(22.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for finding in rows {
                let delayed = delay::is_delayed(finding, today);
                body.row(20.0, |mut row| {
                    for value in finding.field_values() {
                        row.col(|ui| {
                            if delayed {
                                let rect = ui.max_rect().expand2(egui::vec2(4.0, 2.0));
                                ui.painter().rect_filled(rect, 0, HIGHLIGHT);
                            }
                            ui.label(value);
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

fn save_export(rows: &[&Finding], department: &str, line: &str) -> String {
    let file = rfd::FileDialog::new()
        .set_title("Save FMEA PDCA export")
        .add_filter("CSV", &["csv"])
        .set_file_name(export::export_filename(department, line))
        .save_file();

    let Some(path) = file else {
        return "Export cancelled".to_string();
    };

    let result = export::to_csv_bytes(rows)
        .map_err(anyhow::Error::from)
        .and_then(|bytes| std::fs::write(&path, bytes).map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            log::info!("Exported {} open items to {}", rows.len(), path.display());
            format!("Saved {}", path.display())
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            format!("Export failed: {e:#}")
        }
    }
}
