//! Configurator Integration Tests
//!
//! Drive the configuration form the way a user clicks through it.

use crate::helpers::strings;
use chartastic::chart::{AxisRole, ChartConfigForm, ConfigError, build_config};
use chartastic::types::ChartType;

fn form() -> ChartConfigForm {
    ChartConfigForm::new(strings(&["region", "q1", "q2", "q3"]))
}

#[test]
fn test_fresh_form_defaults() {
    let form = form();
    assert_eq!(form.chart_type(), ChartType::Bar);
    assert_eq!(form.x_axis(), "region");
    assert!(form.y_axes().is_empty());
    assert_eq!(form.y_axis_candidates(), vec!["q1", "q2", "q3"]);
    assert_eq!(form.y_axis_label(), "Y-Axis Columns (Select one or more)");
}

#[test]
fn test_multi_series_bar_in_click_order() {
    let mut form = form();
    assert!(form.toggle_y_axis("q3"));
    assert!(form.toggle_y_axis("q1"));

    let config = form.submit().unwrap();
    assert_eq!(config.y_axes, strings(&["q3", "q1"]));
    assert!(form.error().is_none());
}

#[test]
fn test_x_axis_cannot_be_a_y_axis() {
    let mut form = form();
    assert!(!form.toggle_y_axis("region"));
    assert!(!form.is_y_axis_enabled("region"));

    form.toggle_y_axis("q1");
    assert!(form.select_x_axis("q1"));
    // Picking a selected Y column as X removes it from the Y selection
    assert!(form.y_axes().is_empty());
    assert_eq!(form.y_axis_candidates(), vec!["region", "q2", "q3"]);
}

#[test]
fn test_unknown_x_axis_is_ignored() {
    let mut form = form();
    assert!(!form.select_x_axis("q9"));
    assert_eq!(form.x_axis(), "region");
}

#[test]
fn test_switching_chart_type_clears_y_axes() {
    let mut form = form();
    form.toggle_y_axis("q1");
    form.toggle_y_axis("q2");

    form.set_chart_type(ChartType::Line);
    assert!(form.y_axes().is_empty());

    form.set_chart_type(ChartType::Pie);
    assert_eq!(form.y_axis_label(), "Value Column (Select one)");
}

#[test]
fn test_pie_allows_single_value_column() {
    let mut form = form();
    form.set_chart_type(ChartType::Pie);

    assert!(form.toggle_y_axis("q2"));
    assert!(!form.is_y_axis_enabled("q1"));
    assert!(!form.toggle_y_axis("q1"));
    assert_eq!(form.y_axes(), &["q2"]);

    // Deselecting re-enables the others
    assert!(form.toggle_y_axis("q2"));
    assert!(form.is_y_axis_enabled("q1"));
}

#[test]
fn test_submit_error_messages() {
    let mut form = form();
    assert_eq!(
        form.submit().unwrap_err(),
        ConfigError::MissingAxis(AxisRole::Y)
    );
    assert_eq!(form.error(), Some("Please select at least one Y-axis column."));

    form.set_chart_type(ChartType::Pie);
    assert_eq!(form.submit().unwrap_err().to_string(), "Please select at least one Value column.");

    let mut form = ChartConfigForm::new(strings(&["region", "q1"])).with_selection("", vec![]);
    assert_eq!(form.submit().unwrap_err().to_string(), "Please select an X-axis column.");
}

#[test]
fn test_pie_arity_checked_on_submit() {
    // Outside selections bypass the click rules, so the pie limit is
    // enforced on submit
    let mut form = form().with_selection("region", strings(&["q1", "q2"]));
    assert!(form.submit().is_ok());
    form.set_chart_type(ChartType::Pie);
    let mut form = form.with_selection("region", strings(&["q1", "q2"]));
    assert_eq!(form.submit().unwrap_err(), ConfigError::PieArity);

    let err = build_config(
        ChartType::Pie,
        "region",
        &strings(&["q1", "q2"]),
        &strings(&["region", "q1", "q2"]),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::PieArity);
    assert_eq!(err.to_string(), "Pie charts can only have one Value column.");
}

#[test]
fn test_selections_from_outside_are_validated() {
    let columns = strings(&["region", "q1"]);

    let err = build_config(ChartType::Bar, "region", &strings(&["q7"]), &columns).unwrap_err();
    assert_eq!(err, ConfigError::UnknownColumn("q7".to_string()));

    let err = build_config(ChartType::Bar, "region", &strings(&["region"]), &columns).unwrap_err();
    assert_eq!(err, ConfigError::AxisOverlap("region".to_string()));
}

#[test]
fn test_form_round_trips_a_config() {
    let mut form = form();
    form.set_chart_type(ChartType::Line);
    form.select_x_axis("q1");
    form.toggle_y_axis("q2");
    let config = form.submit().unwrap();

    let mut reopened = ChartConfigForm::from_config(strings(&["region", "q1", "q2", "q3"]), &config);
    assert_eq!(reopened.chart_type(), ChartType::Line);
    assert_eq!(reopened.x_axis(), "q1");
    assert!(reopened.is_y_axis_selected("q2"));
    assert_eq!(reopened.submit().unwrap(), config);
}
