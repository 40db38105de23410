mod advise;
mod cli;
mod infra;
mod routes;
mod server;

use skill_advisor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
