pub mod page;
pub mod playlist;

pub use page::{handle_index, handle_visitor_count};
pub use playlist::handle_playlist;
