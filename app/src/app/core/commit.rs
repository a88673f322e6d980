//! Extension point for the "Book Seats" action.
//!
//! The screen defines no commit semantics of its own: a commit receives a
//! summary and must not assume anything about what happens to the selection
//! afterwards. The booking state is never mutated by a commit.

use tracing::info;

use super::booking::BookingSummary;

pub trait BookingCommit {
    fn commit(&mut self, summary: &BookingSummary) -> anyhow::Result<()>;
}

/// Records the request in the log and does nothing else.
#[derive(Debug, Default)]
pub struct LogOnlyCommit;

impl BookingCommit for LogOnlyCommit {
    fn commit(&mut self, summary: &BookingSummary) -> anyhow::Result<()> {
        let seats: Vec<String> = summary.seats.iter().map(|s| s.to_string()).collect();
        info!(
            date = %summary.date,
            showtime = %summary.showtime,
            seats = %seats.join(","),
            total = summary.total_price,
            "booking requested"
        );
        Ok(())
    }
}
