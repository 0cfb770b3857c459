use linetrack_core::{
    itinerary::calculate_itinerary,
    store::{store_ops, JsonFileStore},
};

use crate::app::{render, AppConfig, AppError};

/// computes the itinerary of a stored line and prints it.
///
/// # Arguments
/// * `config`  - application configuration, naming the store and output format
/// * `line_id` - id of the line to compute
pub fn run(config: &AppConfig, line_id: &str) -> Result<(), AppError> {
    let store = JsonFileStore::new(config.store_path());
    let definitions = store_ops::find_line_definitions(&store, line_id)?;
    let itinerary = calculate_itinerary(
        &definitions.line,
        &definitions.route_ida,
        &definitions.route_vuelta,
    )?;
    log::info!(
        "computed {} trips for line '{}'",
        itinerary.len(),
        definitions.line.name
    );
    let output = config
        .output_format
        .render(&itinerary, |it| render::itinerary_text(&definitions, it))?;
    println!("{output}");
    Ok(())
}
