use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pacecalc::{CalculationParams, calculate_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::InvalidLogFilter {
        filter: filter.to_string(),
        reason: e.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging(&args.log_level)?;
    }

    let params = CalculationParams::new(args.first_unit, args.preposition, args.second_unit);
    info!(
        "Calculating: {} {} {}",
        params.first, params.preposition, params.second
    );

    let calculation = calculate_with_params(&params).inspect_err(|e| {
        warn!("Rejected {} token {:?}", e.kind(), e.token());
    })?;
    info!(
        "{} = {} {}",
        calculation.quantity,
        calculation.value,
        calculation.quantity.unit()
    );

    if args.json {
        println!("{}", serde_json::to_string(&calculation)?);
    } else {
        println!("{calculation}");
    }

    Ok(())
}
