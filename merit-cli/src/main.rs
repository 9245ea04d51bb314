mod cli;
mod prelude;
mod tables;

use std::fs;

use clap::{Parser, crate_version};
use merit_engine::{planner::Planner, request::ProductionPlanRequest};

use crate::{
    cli::{Args, Command},
    prelude::*,
    tables::build_plan_table,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Plan(args) => {
            let payload = fs::read_to_string(&args.payload)
                .with_context(|| format!("failed to read `{}`", args.payload.display()))?;
            let request: ProductionPlanRequest =
                serde_json::from_str(&payload).context("malformed payload")?;
            let scenario = request.validate().context("invalid payload")?;
            info!(n_plants = scenario.plants.len(), load = %scenario.load, "planning…");

            let plan = Planner::builder()
                .load(scenario.load)
                .prices(&scenario.prices)
                .plants(&scenario.plants)
                .plan()?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("{}", build_plan_table(&scenario, &plan));
            }
            info!(total = %plan.total_power(), "done!");
        }
    }
    Ok(())
}
