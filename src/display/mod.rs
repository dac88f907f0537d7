//! Terminal display formatting
//!
//! Pure mapping from engine results to printable strings; kept outside the
//! engine so the wire/display shape never leaks into the algorithms.

pub mod goals;
pub mod history;
pub mod requests;

pub use goals::format_goals_table;
pub use history::format_history_table;
pub use requests::format_requests_table;
