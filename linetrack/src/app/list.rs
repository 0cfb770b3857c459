use linetrack_core::store::{store_ops, JsonFileStore};

use crate::app::{render, AppConfig, AppError};

/// prints the stored routes
pub fn run_routes(config: &AppConfig) -> Result<(), AppError> {
    println!("{}", routes_output(config)?);
    Ok(())
}

/// prints the stored lines
pub fn run_lines(config: &AppConfig) -> Result<(), AppError> {
    println!("{}", lines_output(config)?);
    Ok(())
}

/// the stored routes rendered in the configured output format
pub fn routes_output(config: &AppConfig) -> Result<String, AppError> {
    let store = JsonFileStore::new(config.store_path());
    let routes = store_ops::load_routes(&store)?;
    log::debug!("listing {} routes from {}", routes.len(), store.path().display());
    config
        .output_format
        .render(&routes, |r| render::routes_text(r))
}

/// the stored lines rendered in the configured output format
pub fn lines_output(config: &AppConfig) -> Result<String, AppError> {
    let store = JsonFileStore::new(config.store_path());
    let lines = store_ops::load_lines(&store)?;
    log::debug!("listing {} lines from {}", lines.len(), store.path().display());
    config
        .output_format
        .render(&lines, |l| render::lines_text(l))
}
