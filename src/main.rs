use anyhow::{Context, Result};
use chartastic::app::Chartastic;
use chartastic::settings::Settings;
use chartastic::types::ChartType;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "chartastic",
    version,
    about = "Preview a JSON/CSV/Excel dataset and turn it into chart data"
)]
struct Args {
    /// Dataset to load (.json, .csv, .xls, .xlsx)
    file: PathBuf,

    /// MIME type reported for the file; the extension is used when absent
    #[arg(long)]
    mime: Option<String>,

    /// Chart type: bar, line or pie
    #[arg(long, default_value = "bar")]
    chart_type: ChartType,

    /// X-axis (category) column; defaults to the first column
    #[arg(long)]
    x_axis: Option<String>,

    /// Y-axis column; repeat for several series. Pie charts take exactly one.
    #[arg(long = "y-axis")]
    y_axes: Vec<String>,

    /// Print the data preview table
    #[arg(long)]
    preview: bool,

    /// Settings file to use instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chartastic=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut app = Chartastic::with_settings(settings);

    let loaded = app.load_file(&args.file, args.mime.as_deref());
    report_latest_toast(&app);
    loaded.with_context(|| format!("Failed to load {}", args.file.display()))?;

    if args.preview
        && let Some(preview) = app.preview()
    {
        println!("{}", preview.to_text_table());
        println!("{}", preview.row_count_label());
    }

    if args.y_axes.is_empty() {
        if !args.preview {
            eprintln!(
                "No --y-axis given; nothing to chart. Columns: {}",
                app.state().columns().join(", ")
            );
        }
        return Ok(());
    }

    let mut form = app.configurator().context("No dataset loaded")?;
    form.set_chart_type(args.chart_type);
    let x_axis = args.x_axis.clone().unwrap_or_else(|| form.x_axis().to_string());
    let mut form = form.with_selection(x_axis, args.y_axes.clone());

    let submitted = app.submit_config(&mut form);
    report_latest_toast(&app);
    submitted?;

    let series = app.chart_series().context("Chart is not visible")?;
    eprintln!("{} ({} entries)", series.chart_type().title(), series.len());
    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}

fn report_latest_toast(app: &Chartastic) {
    if let Some((toast, _)) = app.visible_toasts().last() {
        eprintln!("{}", toast.display_line());
    }
}
