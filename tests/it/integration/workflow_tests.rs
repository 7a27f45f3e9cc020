//! Workflow Integration Tests
//!
//! Upload, configure, chart and reset through the controller.

use crate::helpers::{SALES_CSV, SALES_JSON};
use chartastic::app::{AppState, Chartastic};
use chartastic::chart::{ChartSeries, ConfigError};
use chartastic::notifications::ToastVariant;
use chartastic::types::{CellValue, ChartType};

fn app_with_sales() -> Chartastic {
    let mut app = Chartastic::default();
    app.load_upload("sales.csv", Some("text/csv"), SALES_CSV.as_bytes()).unwrap();
    app
}

#[test]
fn test_initial_state() {
    let app = Chartastic::default();
    assert!(app.state().is_initial());
    assert!(!app.can_reset());
    assert!(app.configurator().is_none());
    assert!(app.chart_series().is_none());
    assert_eq!(app.toasts().count(), 0);
}

#[test]
fn test_upload_configure_chart() {
    let mut app = app_with_sales();
    assert!(app.can_reset());
    assert!(app.chart_series().is_none());

    let mut form = app.configurator().unwrap();
    form.set_chart_type(ChartType::Line);
    form.toggle_y_axis("sales");
    form.toggle_y_axis("cost");
    let config = app.submit_config(&mut form).unwrap();

    assert_eq!(app.state().config.as_ref(), Some(&config));
    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.title.as_deref(), Some("Chart Generated"));
    assert_eq!(toast.message, "Displaying line chart.");

    let Some(ChartSeries::Cartesian(data)) = app.chart_series() else {
        panic!("Expected cartesian series");
    };
    assert_eq!(data.series.len(), 2);
    assert_eq!(data.points[1]["cost"], CellValue::text("n/a"));
}

#[test]
fn test_pie_workflow() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.set_chart_type(ChartType::Pie);
    form.toggle_y_axis("cost");
    app.submit_config(&mut form).unwrap();

    let series = app.chart_series().unwrap();
    assert_eq!(series.chart_type(), ChartType::Pie);
    // Feb's cost is not numeric
    assert_eq!(series.len(), 2);
    assert_eq!(app.toasts().latest().unwrap().message, "Displaying pie chart.");
}

#[test]
fn test_rejected_pie_keeps_previous_chart() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("sales");
    form.toggle_y_axis("cost");
    let bar = app.submit_config(&mut form).unwrap();

    // Selections arriving from outside the form skip its pie click rule
    let mut form = app.configurator().unwrap();
    form.set_chart_type(ChartType::Pie);
    let mut form = form.with_selection("month", vec!["sales".to_string(), "cost".to_string()]);
    assert!(app.submit_config(&mut form).is_err());

    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.message, "Pie charts can only have one Value column.");
    assert_eq!(form.error(), Some("Pie charts can only have one Value column."));

    assert_eq!(app.state().config.as_ref(), Some(&bar));
    assert_eq!(app.chart_series().unwrap().chart_type(), ChartType::Bar);
}

#[test]
fn test_configurator_reopens_with_current_config() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.select_x_axis("cost");
    form.toggle_y_axis("sales");
    app.submit_config(&mut form).unwrap();

    let reopened = app.configurator().unwrap();
    assert_eq!(reopened.x_axis(), "cost");
    assert_eq!(reopened.y_axes(), &["sales"]);
}

#[test]
fn test_failed_upload_keeps_chart() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("sales");
    app.submit_config(&mut form).unwrap();
    let before = app.state().clone();

    assert!(app.load_upload("notes.txt", Some("text/plain"), b"hello").is_err());
    assert!(app.load_upload("empty.json", None, b"[]").is_err());

    assert_eq!(app.state(), &before);
    assert!(app.chart_series().is_some());
}

#[test]
fn test_new_upload_replaces_dataset_and_hides_chart() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("sales");
    app.submit_config(&mut form).unwrap();

    app.load_upload("sales.json", None, SALES_JSON.as_bytes()).unwrap();

    assert_eq!(app.state().file_name(), Some("sales.json"));
    assert!(app.state().config.is_none());
    assert!(app.chart_series().is_none());
    // A fresh form, not the previous selections
    assert!(app.configurator().unwrap().y_axes().is_empty());
}

#[test]
fn test_reset_clears_everything() {
    let mut app = app_with_sales();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("sales");
    app.submit_config(&mut form).unwrap();

    app.reset();

    assert_eq!(app.state(), &AppState::default());
    assert!(app.preview().is_none());
    let toast = app.toasts().latest().unwrap();
    assert_eq!(toast.variant, ToastVariant::Info);
    assert_eq!(toast.message, "Application state has been reset.");
}

#[test]
fn test_form_opened_before_reset_is_rejected() {
    let mut app = Chartastic::default();
    app.load_upload("ab.csv", None, b"a,b\n1,2").unwrap();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("b");

    app.reset();
    let err = app.submit_config(&mut form).unwrap_err();

    assert_eq!(err, ConfigError::NoDataset);
    assert_eq!(form.error(), Some("Please upload a data file first."));
    assert_eq!(app.state(), &AppState::default());
    assert!(!app.can_reset());
    assert_eq!(app.toasts().latest().unwrap().variant, ToastVariant::Error);
}

#[test]
fn test_form_opened_before_new_upload_is_rejected() {
    let mut app = Chartastic::default();
    app.load_upload("ab.csv", None, b"a,b\n1,2").unwrap();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("b");

    app.load_upload("xy.csv", None, b"x,y\n3,4").unwrap();
    let err = app.submit_config(&mut form).unwrap_err();

    assert_eq!(err, ConfigError::UnknownColumn("a".to_string()));
    assert_eq!(app.state().columns(), &["x", "y"]);
    assert!(app.state().config.is_none());
    assert!(!app.state().show_chart);
    assert!(app.chart_series().is_none());
}

#[test]
fn test_form_survives_upload_with_same_columns() {
    let mut app = Chartastic::default();
    app.load_upload("first.csv", None, b"a,b\n1,2").unwrap();
    let mut form = app.configurator().unwrap();
    form.toggle_y_axis("b");

    app.load_upload("second.csv", None, b"a,b\n5,6\n7,8").unwrap();
    app.submit_config(&mut form).unwrap();

    assert_eq!(app.chart_series().unwrap().len(), 2);
}
