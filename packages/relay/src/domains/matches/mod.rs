pub mod discovery;
pub mod models;

pub use discovery::{discover_new_matches, PAGE_SIZE};
pub use models::Match;
