mod cli;
mod result;

use std::time::Duration;

use anyhow::Context;
use axum::{Json, Router, http::StatusCode, routing::post};
use clap::{Parser, crate_version};
use merit_engine::{
    plan::ProductionPlan,
    planner::{PlanError, Planner},
    request::ProductionPlanRequest,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, instrument};

use crate::{cli::Args, result::Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    let args = Args::parse();
    info!(version = crate_version!(), args.bind_address, "starting…");

    let listener =
        TcpListener::bind(&args.bind_address).await.context("failed to bind to the address")?;
    let app = Router::new()
        .route("/productionplan", post(post_production_plan))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(Duration::from_secs(10))));

    info!("serving…");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// JSON error body: `{"detail": …}`.
#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

impl ErrorDetail {
    fn new(error: &impl std::fmt::Display) -> Self {
        Self { detail: error.to_string() }
    }
}

/// An infeasible scenario is the client's problem, an allocation mismatch is
/// ours.
const fn plan_error_status(error: &PlanError) -> StatusCode {
    match error {
        PlanError::InsufficientCapacity => StatusCode::BAD_REQUEST,
        PlanError::AllocationMismatch => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[instrument(skip_all)]
async fn post_production_plan(
    Json(request): Json<ProductionPlanRequest>,
) -> Result<Json<ProductionPlan>, (StatusCode, Json<ErrorDetail>)> {
    let scenario = request.validate().map_err(|error| {
        error!("invalid request: {error}");
        (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail::new(&error)))
    })?;
    let plan = Planner::builder()
        .load(scenario.load)
        .prices(&scenario.prices)
        .plants(&scenario.plants)
        .plan()
        .map_err(|error| {
            error!("{error}");
            (plan_error_status(&error), Json(ErrorDetail::new(&error)))
        })?;
    info!(n_plants = plan.0.len(), total = %plan.total_power(), "planned");
    Ok(Json(plan))
}
