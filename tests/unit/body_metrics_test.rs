//! Unit tests for body metrics.

use chrono::NaiveDate;
use fittrack::metrics::{age_on, bmi, bmi_category};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_bmi_reference_values() {
    assert!((bmi(60.0, 165.0) - 22.04).abs() < 0.01);
    assert!((bmi(80.0, 180.0) - 24.69).abs() < 0.01);
    assert_eq!(format!("{:.1}", bmi(60.0, 165.0)), "22.0");
}

#[test]
fn test_age_is_calendar_year_difference() {
    let dob = date(1995, 5, 1);
    assert_eq!(age_on(dob, date(2024, 6, 1)), 29);
    assert_eq!(age_on(dob, date(2024, 1, 1)), 29);
    assert_eq!(age_on(date(1995, 12, 31), date(1996, 1, 1)), 1);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(bmi_category(17.0), "Underweight");
    assert_eq!(bmi_category(22.0), "Normal");
    assert_eq!(bmi_category(27.5), "Overweight");
    assert_eq!(bmi_category(31.0), "Obese");
}
