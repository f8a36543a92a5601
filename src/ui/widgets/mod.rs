//! UI widgets for reusable components.

pub mod calorie_chart;
pub mod metric_display;
pub mod workout_table;

pub use calorie_chart::CalorieChart;
pub use metric_display::{MetricDisplay, MetricSize};
pub use workout_table::{AccountTable, ColumnMaxima, WorkoutTable};
