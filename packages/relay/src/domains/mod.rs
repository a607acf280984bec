pub mod demos;
pub mod hubs;
pub mod matches;
