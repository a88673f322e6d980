use tracing::{info, warn};

use self::availability::AvailabilitySource;
use self::booking::BookingState;
use self::commit::{BookingCommit, LogOnlyCommit};
use super::settings::Settings;
use super::types::{Focus, Mode, MovieInfo, SeatCursor};
use crate::errors::{render_booking_error, BookingError};

pub mod availability;
pub mod booking;
pub mod commit;
mod navigation;
pub mod seat_grid;

/// Screen controller: one booking state per activation plus the UI-only
/// state (focus, seat cursor, modal) the terminal front end needs.
pub struct App {
    pub booking: BookingState,
    pub movie: MovieInfo,
    pub currency: String,
    pub focus: Focus,
    pub cursor: SeatCursor,
    pub mode: Mode,
    commit: Box<dyn BookingCommit>,
}

impl App {
    pub fn new<A>(settings: &Settings, source: &mut A) -> Result<Self, BookingError>
    where
        A: AvailabilitySource + ?Sized,
    {
        let booking = BookingState::from_settings(&settings.booking, source)?;
        Ok(App::from_state(booking, settings))
    }

    /// Wrap an already built booking state.
    pub fn from_state(booking: BookingState, settings: &Settings) -> Self {
        App {
            booking,
            movie: settings.movie.clone(),
            currency: settings.currency.clone(),
            focus: Focus::Seats,
            cursor: SeatCursor::default(),
            mode: Mode::Normal,
            commit: Box::new(LogOnlyCommit),
        }
    }

    /// Replace the commit handler used by `request_booking`.
    pub fn with_commit(mut self, commit: Box<dyn BookingCommit>) -> Self {
        self.commit = commit;
        self
    }

    /// Toggle the seat under the cursor. Errors become a message modal.
    pub fn toggle_cursor_seat(&mut self) {
        let Some(row) = self.booking.grid().rows().get(self.cursor.row) else {
            return;
        };
        let label = row.label.clone();
        if let Err(e) = self.booking.toggle_seat(&label, self.cursor.position) {
            self.show_error(&e);
        }
    }

    /// Hand the current selection to the commit handler. The booking state
    /// itself is left as is whatever the handler does.
    pub fn request_booking(&mut self) {
        let summary = self.booking.summary();
        if summary.seats.is_empty() {
            self.mode = Mode::Message {
                title: "Nothing to book".to_string(),
                content: "Select at least one seat first.".to_string(),
            };
            return;
        }
        match self.commit.commit(&summary) {
            Ok(()) => {
                let seats: Vec<String> = summary.seats.iter().map(|s| s.to_string()).collect();
                info!(count = seats.len(), "booking handed to commit handler");
                self.mode = Mode::Message {
                    title: "Booking requested".to_string(),
                    content: format!(
                        "{} at {}\nSeats: {}\nTotal: {}{}",
                        summary.date,
                        summary.showtime,
                        seats.join(", "),
                        self.currency,
                        summary.total_price
                    ),
                };
            }
            Err(e) => {
                warn!("booking commit failed: {:#}", e);
                self.mode = Mode::Message {
                    title: "Error".to_string(),
                    content: format!("Booking failed: {:#}", e),
                };
            }
        }
    }

    pub fn dismiss_message(&mut self) {
        self.mode = Mode::Normal;
    }

    pub(crate) fn show_error(&mut self, err: &BookingError) {
        self.mode = Mode::Message {
            title: "Error".to_string(),
            content: render_booking_error(err),
        };
    }
}
