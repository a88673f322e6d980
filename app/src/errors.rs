use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which candidate list a selection index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    Date,
    Time,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::Date => write!(f, "date"),
            SelectionKind::Time => write!(f, "showtime"),
        }
    }
}

/// Errors produced by the booking state core. All of them leave the state
/// exactly as it was before the rejected call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A date/time index outside the candidate list.
    #[error("{kind} index {index} is out of range (have {len})")]
    InvalidSelection {
        kind: SelectionKind,
        index: usize,
        len: usize,
    },

    /// Unknown row label or a position past the end of the row.
    #[error("no seat at row `{row}` position {position}")]
    InvalidSeatReference { row: String, position: usize },

    /// A candidate list with nothing to select.
    #[error("the {0} list is empty")]
    EmptyCandidates(SelectionKind),

    /// Row labels or row width that cannot form an addressable grid.
    #[error("invalid seat layout: {0}")]
    InvalidLayout(String),
}

/// Errors produced while loading, validating or writing settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl From<String> for SettingsError {
    fn from(s: String) -> Self {
        SettingsError::Invalid(s)
    }
}

/// Render a booking error as short text suitable for the message modal.
pub fn render_booking_error(err: &BookingError) -> String {
    match err {
        BookingError::InvalidSelection { kind, index, len } => format!(
            "Cannot select {} #{}: only {} available",
            kind,
            index + 1,
            len
        ),
        BookingError::InvalidSeatReference { row, position } => {
            format!("Seat {}{} does not exist", row, position + 1)
        }
        BookingError::EmptyCandidates(kind) => format!("No {} options are configured", kind),
        BookingError::InvalidLayout(msg) => format!("Seat layout is invalid: {}", msg),
    }
}
