//! Line chart of calories per workout over time.

use chrono::DateTime;
use egui::{Response, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::workouts::WorkoutRecord;

const CHART_HEIGHT: f32 = 260.0;

/// Calories line chart keyed by workout timestamp.
pub struct CalorieChart<'a> {
    records: &'a [WorkoutRecord],
    id: &'a str,
}

impl<'a> CalorieChart<'a> {
    /// `id` must be unique among charts shown in the same frame.
    pub fn new(id: &'a str, records: &'a [WorkoutRecord]) -> Self {
        Self { records, id }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let line = Line::new("calories", PlotPoints::new(chart_points(self.records)));

        Plot::new(self.id)
            .height(CHART_HEIGHT)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .x_axis_label("Date")
            .y_axis_label("Calories")
            .x_axis_formatter(|mark, _range| format_axis_date(mark.value))
            .label_formatter(|_name, value| {
                format!("{}\n{:.2} kcal", format_axis_date(value.x), value.y)
            })
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            })
            .response
    }
}

/// `[unix seconds, calories]` pairs in record order.
pub fn chart_points(records: &[WorkoutRecord]) -> Vec<[f64; 2]> {
    records
        .iter()
        .map(|r| [r.recorded_at.and_utc().timestamp() as f64, r.calories])
        .collect()
}

fn format_axis_date(seconds: f64) -> String {
    DateTime::from_timestamp(seconds as i64, 0)
        .map(|dt| dt.naive_utc().format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
