mod actual_progress;
mod clock_position;
mod deviation_ops;
mod deviation_result;
mod locate_ops;
mod located_position;
mod manual_override;
mod progress_mode;
mod simulation_cursor;
mod tracking_event;
mod tracking_session;
mod tracking_snapshot;

pub use actual_progress::{ActualProgress, ResolvedProgress};
pub use clock_position::ClockPosition;
pub use deviation_ops::compute_deviation;
pub use deviation_result::DeviationResult;
pub use locate_ops::locate;
pub use located_position::{ExpectedPosition, LocatedPosition};
pub use manual_override::{ManualOverride, StepDirection};
pub use progress_mode::ProgressMode;
pub use simulation_cursor::SimulationCursor;
pub use tracking_event::TrackingEvent;
pub use tracking_session::TrackingSession;
pub use tracking_snapshot::TrackingSnapshot;
