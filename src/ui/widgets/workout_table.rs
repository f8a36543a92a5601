//! Tabular views of workout history and accounts.

use egui::{RichText, Ui};

use crate::accounts::Account;
use crate::ui::theme::{HIGHLIGHT_MAX, HIGHLIGHT_TEXT};
use crate::workouts::WorkoutRecord;

const WORKOUT_HEADERS: [&str; 5] = ["Date", "Duration", "Heart Rate", "Body Temp", "Calories"];
const ACCOUNT_HEADERS: [&str; 5] = ["ID", "Username", "DOB", "Height", "Weight"];

/// Per-column maxima of the numeric workout columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMaxima {
    pub duration_minutes: u32,
    pub heart_rate_bpm: u32,
    pub body_temp_c: f64,
    pub calories: f64,
}

impl ColumnMaxima {
    pub fn of(records: &[WorkoutRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut maxima = Self {
            duration_minutes: first.duration_minutes,
            heart_rate_bpm: first.heart_rate_bpm,
            body_temp_c: first.body_temp_c,
            calories: first.calories,
        };
        for r in &records[1..] {
            maxima.duration_minutes = maxima.duration_minutes.max(r.duration_minutes);
            maxima.heart_rate_bpm = maxima.heart_rate_bpm.max(r.heart_rate_bpm);
            maxima.body_temp_c = maxima.body_temp_c.max(r.body_temp_c);
            maxima.calories = maxima.calories.max(r.calories);
        }
        Some(maxima)
    }
}

/// Striped grid of workouts with the column maxima highlighted.
pub struct WorkoutTable<'a> {
    id: &'a str,
    records: &'a [WorkoutRecord],
}

impl<'a> WorkoutTable<'a> {
    pub fn new(id: &'a str, records: &'a [WorkoutRecord]) -> Self {
        Self { id, records }
    }

    pub fn show(self, ui: &mut Ui) {
        let Some(maxima) = ColumnMaxima::of(self.records) else {
            return;
        };

        egui::ScrollArea::both()
            .id_salt(self.id)
            .max_height(320.0)
            .show(ui, |ui| {
                egui::Grid::new(self.id)
                    .striped(true)
                    .num_columns(WORKOUT_HEADERS.len())
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in WORKOUT_HEADERS {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for r in self.records {
                            ui.label(r.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string());
                            cell(
                                ui,
                                r.duration_minutes.to_string(),
                                r.duration_minutes == maxima.duration_minutes,
                            );
                            cell(
                                ui,
                                r.heart_rate_bpm.to_string(),
                                r.heart_rate_bpm == maxima.heart_rate_bpm,
                            );
                            cell(
                                ui,
                                format!("{:.1}", r.body_temp_c),
                                r.body_temp_c == maxima.body_temp_c,
                            );
                            cell(
                                ui,
                                format!("{:.2}", r.calories),
                                r.calories == maxima.calories,
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}

fn cell(ui: &mut Ui, text: String, highlighted: bool) {
    if highlighted {
        ui.label(
            RichText::new(text)
                .background_color(HIGHLIGHT_MAX)
                .color(HIGHLIGHT_TEXT),
        );
    } else {
        ui.label(text);
    }
}

/// Striped grid of registered accounts for the admin view.
pub struct AccountTable<'a> {
    accounts: &'a [Account],
}

impl<'a> AccountTable<'a> {
    pub fn new(accounts: &'a [Account]) -> Self {
        Self { accounts }
    }

    pub fn show(self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .id_salt("account_table")
            .max_height(360.0)
            .show(ui, |ui| {
                egui::Grid::new("account_table")
                    .striped(true)
                    .num_columns(ACCOUNT_HEADERS.len())
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for header in ACCOUNT_HEADERS {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for account in self.accounts {
                            ui.label(account.id.to_string());
                            ui.label(&account.username);
                            ui.label(account.dob.format("%Y-%m-%d").to_string());
                            ui.label(format!("{:.1}", account.height_cm));
                            ui.label(format!("{:.1}", account.weight_kg));
                            ui.end_row();
                        }
                    });
            });
    }
}
