pub mod core;
pub mod settings;
pub mod types;

pub use core::availability::{AvailabilitySource, FixedAvailability, RandomAvailability};
pub use core::booking::{BookingState, BookingSummary};
pub use core::commit::{BookingCommit, LogOnlyCommit};
pub use core::seat_grid::{SeatGrid, SeatRow};
pub use core::App;
pub use types::{Focus, Mode, MovieInfo, SeatCursor, SeatId, SeatStatus, ShowDate};
