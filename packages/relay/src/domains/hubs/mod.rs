pub mod models;
pub mod store;

pub use models::Hub;
pub use store::HubStore;
