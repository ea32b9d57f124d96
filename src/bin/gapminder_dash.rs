use std::process::ExitCode;

use gapminder_dash::DashboardConfig;
use gapminder_dash::telemetry::init_default_tracing;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = init_default_tracing();

    match gapminder_dash::server::serve(DashboardConfig::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "dashboard failed to start");
            ExitCode::FAILURE
        }
    }
}
