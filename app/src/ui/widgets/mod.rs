pub mod chips;
pub mod dialogs;
pub mod footer;
pub mod header;
pub mod seat_map;
