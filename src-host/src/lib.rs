//! Hosting layer for the microservices frontend: renders each page with the
//! static metadata in the document head and writes a static site.

pub mod cli;
pub mod error;
pub mod render;
pub mod settings;
pub mod site;

pub use error::{HostError, Result};
pub use settings::Settings;
pub use site::{build_site, BuildReport};
