use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, normalize_service_url, DashboardController, SubmitOutcome};
use shared::domain::InputField;

/// Console front end for the gold price dashboard: fetches the model
/// metrics and the two data charts, and optionally submits one
/// prediction from the given market inputs.
#[derive(Parser, Debug)]
struct Args {
    /// Override the prediction service base address.
    #[arg(long)]
    service_url: Option<String>,
    #[arg(long)]
    spx: Option<String>,
    #[arg(long)]
    uso: Option<String>,
    #[arg(long)]
    slv: Option<String>,
    #[arg(long)]
    eurusd: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(raw) = &args.service_url {
        settings.service_url = normalize_service_url(raw)
            .ok_or_else(|| anyhow::anyhow!("invalid --service-url: {raw}"))?;
    }
    tracing::info!(service_url = %settings.service_url, "starting dashboard session");

    let controller = DashboardController::with_settings(&settings);
    tokio::join!(
        controller.refresh_metrics(),
        controller.refresh_correlation(),
        controller.refresh_distribution(),
    );

    let snapshot = controller.snapshot().await;
    match &snapshot.metrics {
        Some(metrics) => println!("Model metrics: {}", serde_json::to_string_pretty(metrics)?),
        None => println!("Model metrics unavailable."),
    }
    match controller.correlation_chart().await {
        Some(chart) => println!("Correlation chart: {}", serde_json::to_string(&chart)?),
        None => println!("Correlation chart loading placeholder (snapshot absent)."),
    }
    match controller.distribution_chart().await {
        Some(chart) => println!("Distribution chart: {}", serde_json::to_string(&chart)?),
        None => println!("Distribution chart loading placeholder (snapshot absent)."),
    }

    let inputs = [
        (InputField::Spx, &args.spx),
        (InputField::Uso, &args.uso),
        (InputField::Slv, &args.slv),
        (InputField::Eurusd, &args.eurusd),
    ];
    if inputs.iter().all(|(_, value)| value.is_none()) {
        return Ok(());
    }
    for (field, value) in inputs {
        if let Some(value) = value {
            controller.set_field(field, value.clone()).await;
        }
    }

    match controller.submit().await {
        SubmitOutcome::Predicted(prediction) => {
            println!("Predicted gold price: {prediction}");
            if let Some(trend) = controller.trend_chart().await {
                println!("Trend chart: {}", serde_json::to_string(&trend)?);
            }
        }
        SubmitOutcome::Rejected => {
            println!("Prediction needs all four inputs as numbers (SPX, USO, SLV, EUR/USD).");
        }
        SubmitOutcome::Failed(message) => {
            println!("Prediction failed: {message}");
        }
    }

    Ok(())
}
