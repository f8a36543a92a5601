//! Metric card widget for the sidebar and the admin overview.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::metrics::body;
use crate::workouts::DailyProgress;

/// A widget for displaying a single labeled value.
pub struct MetricDisplay<'a> {
    /// The metric value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The metric name/label
    label: &'a str,
    /// Optional value color
    color: Option<Color32>,
    /// Size multiplier
    size: MetricSize,
}

/// Size variants for metric display.
#[derive(Debug, Clone, Copy, Default)]
pub enum MetricSize {
    /// Sidebar metric
    Small,
    /// Dashboard card
    #[default]
    Medium,
}

impl MetricSize {
    fn value_size(&self) -> f32 {
        match self {
            MetricSize::Small => 22.0,
            MetricSize::Medium => 32.0,
        }
    }

    fn unit_size(&self) -> f32 {
        match self {
            MetricSize::Small => 12.0,
            MetricSize::Medium => 14.0,
        }
    }

    fn label_size(&self) -> f32 {
        match self {
            MetricSize::Small => 11.0,
            MetricSize::Medium => 13.0,
        }
    }
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
            color: None,
            size: MetricSize::default(),
        }
    }

    pub fn age(years: i32) -> Self {
        Self::new(years.to_string(), "", "Age")
    }

    /// BMI to one decimal, with its category beside it.
    pub fn bmi(bmi: f64) -> Self {
        Self::new(format!("{:.1}", bmi), body::bmi_category(bmi), "BMI")
    }

    pub fn daily_goal(progress: &DailyProgress) -> Self {
        match progress.goal {
            Some(goal) => Self::new(goal.to_string(), "kcal", "Daily Goal"),
            None => Self::new("Not Set", "", "Daily Goal"),
        }
    }

    pub fn burned_today(progress: &DailyProgress) -> Self {
        Self::new(
            format!("{:.2}", progress.burned_today),
            "kcal",
            "Calories Burned Today",
        )
    }

    pub fn calories_left(progress: &DailyProgress) -> Self {
        match progress.calories_left() {
            Some(left) => Self::new(format!("{:.2}", left), "kcal", "Calories Left to Goal"),
            None => Self::new("Set a Goal", "", "Calories Left to Goal"),
        }
    }

    /// Set a color for the value.
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the display size.
    pub fn with_size(mut self, size: MetricSize) -> Self {
        self.size = size;
        self
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        let min_size = match self.size {
            MetricSize::Small => Vec2::new(80.0, 48.0),
            MetricSize::Medium => Vec2::new(140.0, 72.0),
        };

        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(min_size);

            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.label(
                    RichText::new(self.label)
                        .size(self.size.label_size())
                        .weak(),
                );

                ui.add_space(2.0);

                let value_text = RichText::new(&self.value)
                    .size(self.size.value_size())
                    .strong();

                let value_text = if let Some(color) = self.color {
                    value_text.color(color)
                } else {
                    value_text
                };

                ui.horizontal(|ui| {
                    ui.label(value_text);
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(self.size.unit_size()).weak());
                    }
                });
            });
        });
    }
}
