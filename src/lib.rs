//! Yew components for the microservices frontend: the root layout, the
//! document head, a placeholder button and the pages built from them.

pub mod app;
pub mod components;
pub mod metadata;
pub mod pages;
pub mod styles;

pub use app::{App, AppProps};
pub use metadata::{Metadata, METADATA};
pub use pages::Page;
