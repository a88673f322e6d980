pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{
    App, AvailabilitySource, BookingCommit, BookingState, BookingSummary, FixedAvailability,
    Focus, Mode, RandomAvailability, SeatGrid, SeatId, SeatStatus, ShowDate,
};
pub use crate::errors::{BookingError, SettingsError};
