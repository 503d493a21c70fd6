use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, ReportTab};

// ---------------------------------------------------------------------------
// Left side panel – block summary
// ---------------------------------------------------------------------------

/// Render the left summary panel: one row per report block.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Resumen");
    ui.separator();

    let Some(report) = &state.report else {
        ui.label("No dataset loaded.");
        return;
    };

    if let Some(src) = &state.source {
        ui.label(RichText::new(src.display().to_string()).weak());
    }
    ui.label(format!(
        "{} filas leídas, {} filas dentales",
        report.survey_rows, report.dental_rows
    ));
    ui.add_space(6.0);

    let status = state.block_status();
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Gráfico");
            });
            header.col(|ui| {
                ui.strong("Estado");
            });
        })
        .body(|mut body| {
            for (tab, text) in &status {
                body.row(36.0, |mut row| {
                    row.col(|ui| {
                        if ui
                            .selectable_label(state.active_tab == *tab, tab.short_title())
                            .clicked()
                        {
                            clicked = Some(*tab);
                        }
                    });
                    row.col(|ui| {
                        ui.label(text);
                    });
                });
            }
        });

    if let Some(tab) = clicked {
        state.active_tab = tab;
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu and the report tab strip.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        for tab in ReportTab::ALL {
            if ui
                .selectable_label(state.active_tab == tab, tab.short_title())
                .clicked()
            {
                state.active_tab = tab;
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open survey table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
