//! Seat/date/time selection state for one screen activation.
//!
//! `BookingState` is UI independent: the presentation layer reads it and
//! feeds it `select_date`, `select_time` and `toggle_seat` events.
//!
//! Invariants held after every call:
//! - a seat is in `selected_seats` iff its status is `Selected`;
//! - `Booked` seats only come from the availability source and never change;
//! - exactly one date and one showtime are active.

use tracing::{debug, warn};

use super::availability::AvailabilitySource;
use super::seat_grid::SeatGrid;
use crate::app::settings::BookingSettings;
use crate::app::types::{SeatId, SeatStatus, ShowDate};
use crate::errors::{BookingError, SelectionKind};

/// Snapshot of what the user intends to book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    pub date: ShowDate,
    pub showtime: String,
    pub seats: Vec<SeatId>,
    pub total_price: u64,
}

#[derive(Clone, Debug)]
pub struct BookingState {
    dates: Vec<ShowDate>,
    showtimes: Vec<String>,
    price_per_seat: u32,
    selected_date: usize,
    selected_time: usize,
    grid: SeatGrid,
    // Insertion order is kept for display only.
    selected_seats: Vec<SeatId>,
}

impl BookingState {
    pub fn new(
        dates: Vec<ShowDate>,
        showtimes: Vec<String>,
        price_per_seat: u32,
        default_date: usize,
        default_time: usize,
        grid: SeatGrid,
    ) -> Result<Self, BookingError> {
        check_index(SelectionKind::Date, default_date, dates.len())?;
        check_index(SelectionKind::Time, default_time, showtimes.len())?;
        // A freshly built grid never contains selected seats, but a caller
        // may hand over one taken from an earlier state.
        let selected_seats = grid
            .rows()
            .iter()
            .flat_map(|row| {
                row.seats()
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| **s == SeatStatus::Selected)
                    .map(move |(pos, _)| SeatId::new(row.label.as_str(), pos))
            })
            .collect();
        Ok(BookingState {
            dates,
            showtimes,
            price_per_seat,
            selected_date: default_date,
            selected_time: default_time,
            grid,
            selected_seats,
        })
    }

    /// Build the grid from `settings` using `source` for initial bookings.
    pub fn from_settings<A>(settings: &BookingSettings, source: &mut A) -> Result<Self, BookingError>
    where
        A: AvailabilitySource + ?Sized,
    {
        let grid = SeatGrid::generate(&settings.rows, settings.seats_per_row, source)?;
        debug!(
            rows = grid.row_count(),
            seats_per_row = grid.seats_per_row(),
            booked = grid.count(SeatStatus::Booked),
            "seat grid generated"
        );
        BookingState::new(
            settings.dates.clone(),
            settings.showtimes.clone(),
            settings.price_per_seat,
            settings.default_date,
            settings.default_time,
            grid,
        )
    }

    /// Make `index` the active date. Last call wins.
    pub fn select_date(&mut self, index: usize) -> Result<(), BookingError> {
        check_index(SelectionKind::Date, index, self.dates.len())?;
        self.selected_date = index;
        Ok(())
    }

    /// Make `index` the active showtime. Last call wins.
    pub fn select_time(&mut self, index: usize) -> Result<(), BookingError> {
        check_index(SelectionKind::Time, index, self.showtimes.len())?;
        self.selected_time = index;
        Ok(())
    }

    /// Flip one seat between `Available` and `Selected` and return its new
    /// status. Booked seats are left alone and report `Booked`.
    pub fn toggle_seat(&mut self, row: &str, position: usize) -> Result<SeatStatus, BookingError> {
        let status = match self.grid.status_mut(row, position) {
            Ok(s) => s,
            Err(e) => {
                warn!("rejected toggle: {}", e);
                return Err(e);
            }
        };
        let id = SeatId::new(row, position);
        match *status {
            SeatStatus::Booked => {
                debug!(seat = %id, "seat already booked, ignoring toggle");
            }
            SeatStatus::Available => {
                *status = SeatStatus::Selected;
                self.selected_seats.push(id);
            }
            SeatStatus::Selected => {
                *status = SeatStatus::Available;
                self.selected_seats.retain(|s| *s != id);
            }
        }
        let new_status = *status;
        debug!(row, position, status = %new_status, "seat toggled");
        Ok(new_status)
    }

    pub fn total_price(&self) -> u64 {
        self.selected_seats.len() as u64 * u64::from(self.price_per_seat)
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn seat_status(&self, row: &str, position: usize) -> Option<SeatStatus> {
        self.grid.status(row, position)
    }

    pub fn selected_seats(&self) -> &[SeatId] {
        &self.selected_seats
    }

    pub fn selected_date(&self) -> usize {
        self.selected_date
    }

    pub fn selected_time(&self) -> usize {
        self.selected_time
    }

    pub fn active_date(&self) -> &ShowDate {
        &self.dates[self.selected_date]
    }

    pub fn active_showtime(&self) -> &str {
        &self.showtimes[self.selected_time]
    }

    pub fn dates(&self) -> &[ShowDate] {
        &self.dates
    }

    pub fn showtimes(&self) -> &[String] {
        &self.showtimes
    }

    pub fn price_per_seat(&self) -> u32 {
        self.price_per_seat
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            date: self.active_date().clone(),
            showtime: self.active_showtime().to_string(),
            seats: self.selected_seats.clone(),
            total_price: self.total_price(),
        }
    }
}

fn check_index(kind: SelectionKind, index: usize, len: usize) -> Result<(), BookingError> {
    if len == 0 {
        return Err(BookingError::EmptyCandidates(kind));
    }
    if index >= len {
        warn!(%kind, index, len, "rejected out-of-range selection");
        return Err(BookingError::InvalidSelection { kind, index, len });
    }
    Ok(())
}
