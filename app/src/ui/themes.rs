use ratatui::style::Color;

/// Base palette from which concrete widget styles are derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub booked: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(15, 15, 15),
            fg: Color::White,
            accent: Color::Rgb(229, 9, 20),
            muted: Color::Gray,
            booked: Color::DarkGray,
            highlight: Color::Rgb(255, 193, 7),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Red,
            muted: Color::DarkGray,
            booked: Color::Gray,
            highlight: Color::Rgb(191, 144, 0),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}
