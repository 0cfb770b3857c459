use std::{io::Write, time::Duration};

use linetrack_core::{
    store::{store_ops, JsonFileStore},
    tracking::{TrackingEvent, TrackingSession},
};

use crate::app::{render, AppConfig, AppError};

/// tracks a stored line against the local clock, printing a snapshot every
/// tick to stdout. see [`watch`].
pub fn run(
    config: &AppConfig,
    line_id: &str,
    ticks: Option<usize>,
    interval: Duration,
) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let printed = watch(config, line_id, ticks, interval, &mut stdout.lock())?;
    log::info!("stopped watching line '{line_id}' after {printed} ticks");
    Ok(())
}

/// tracks a stored line against the local clock, writing a snapshot every
/// tick. definitions are re-read from the store on each tick so that edits
/// take effect while watching, edits that do not yield an itinerary are
/// reported and skipped.
///
/// # Arguments
/// * `config`   - application configuration
/// * `line_id`  - id of the line to watch
/// * `ticks`    - number of ticks before returning, unbounded when None
/// * `interval` - time between ticks
/// * `out`      - destination of the rendered snapshots
///
/// # Returns
///
/// * the number of snapshots written
pub fn watch<W: Write>(
    config: &AppConfig,
    line_id: &str,
    ticks: Option<usize>,
    interval: Duration,
    out: &mut W,
) -> Result<usize, AppError> {
    let store = JsonFileStore::new(config.store_path());
    let definitions = store_ops::find_line_definitions(&store, line_id)?;
    let mut session = TrackingSession::new(definitions, chrono::Local::now().time())?;
    log::info!(
        "watching line '{line_id}' every {}",
        humantime::format_duration(interval)
    );

    let mut tick = 0;
    while ticks.map_or(true, |limit| tick < limit) {
        if tick > 0 {
            std::thread::sleep(interval);
        }
        match store_ops::find_line_definitions(&store, line_id) {
            Ok(definitions) => {
                if let Err(e) = session.handle(TrackingEvent::DefinitionsChanged(definitions)) {
                    log::warn!("keeping previous definitions of line '{line_id}': {e}");
                }
            }
            Err(e) => log::warn!("unable to reload line '{line_id}': {e}"),
        }
        let snapshot = session.handle(TrackingEvent::Tick(chrono::Local::now().time()))?;
        let output = config
            .output_format
            .render(&snapshot, render::snapshot_text)?;
        writeln!(out, "{output}")
            .and_then(|_| out.flush())
            .map_err(|e| AppError::OutputError(e.to_string()))?;
        tick += 1;
    }
    Ok(tick)
}
