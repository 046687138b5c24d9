pub mod api;
pub mod poll;
pub mod ui;
