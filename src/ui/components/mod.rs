pub mod chart;
pub mod rank;
pub mod summary;

pub use chart::render_speak_chart;
pub use rank::render_rank;
pub use summary::render_summary;
