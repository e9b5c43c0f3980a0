pub mod config;
mod loader;

pub use config::CatalogConfig;
pub use loader::{CatalogError, load, load_embedded, load_from_dir};
