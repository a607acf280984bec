//! Kernel module - relay infrastructure and dependencies.

pub mod demo_download;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use demo_download::HttpDemoDownloader;
pub use deps::{DemosTfAdapter, FaceitAdapter, RelayDeps};
pub use test_dependencies::TestDependencies;
pub use traits::*;
