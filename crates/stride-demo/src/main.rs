//! # stride-demo
//!
//! Interactive harness: `load` initializes the activity model and reports
//! how long it took, `run` classifies a freshly synthesized feature vector.
//! Rendered regions go to stdout as `[load-time]` / `[out]` blocks, logs go
//! to stderr.

mod commands;
mod session;

use anyhow::Context;
use stride_controller::Controller;
use stride_core::config::{PresentationConfig, StrideConfig};
use stride_features::{source_from_config, FeatureSynthesizer};
use stride_observability::tracing_setup::{events, init_tracing};
use stride_predictor::providers::create_model;
use stride_predictor::PredictorGateway;
use stride_presenter::{Presenter, TerminalSurface};
use tokio::io::BufReader;
use tracing::{info, warn};

use commands::HELP;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let root = std::env::current_dir().context("cannot determine working directory")?;

    let config = match StrideConfig::load(&root) {
        Ok(config) => config,
        Err(e) => {
            // No configured presenter yet; report through a default one.
            Presenter::new(TerminalSurface::stdout(), &PresentationConfig::default())
                .render_error(&e.to_string());
            return Err(e).context("failed to load configuration");
        }
    };

    init_tracing(&config.observability);
    info!(
        gating = %config.model.gating,
        format = ?config.presentation.format,
        seeded = config.features.seed.is_some(),
        "stride demo starting"
    );

    let model = create_model(&config.model);
    let controller = Controller::new(
        PredictorGateway::new(model, &config.model),
        FeatureSynthesizer::new(source_from_config(&config.features)),
        Presenter::new(TerminalSurface::stdout(), &config.presentation),
    );

    println!("{HELP}");
    let end = session::run_session(&controller, BufReader::new(tokio::io::stdin())).await;
    info!(reason = ?end, "input loop finished");

    match controller.metrics_snapshot() {
        Ok(snapshot) => events::session_summary(&snapshot),
        Err(e) => warn!(error = %e, "could not serialize session metrics"),
    }
    Ok(())
}
