//! Body metrics used by the dashboard and the calorie model.

use chrono::{Datelike, NaiveDate};

/// Body-mass index: weight (kg) divided by height (m) squared.
///
/// Returns 0.0 for a non-positive height.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Age in whole years as the difference of calendar years.
///
/// Birthdays within the year are not considered; a user born 1995-05-01
/// counts as 29 throughout 2024.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - dob.year()
}

/// BMI category label for the sidebar.
pub fn bmi_category(bmi: f64) -> &'static str {
    match bmi {
        b if b < 18.5 => "Underweight",
        b if b < 25.0 => "Normal",
        b if b < 30.0 => "Overweight",
        _ => "Obese",
    }
}
