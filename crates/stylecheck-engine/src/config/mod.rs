//! Check configuration: the module tree, property expansion and the XML loader.
//!
//! - `configuration.rs`: `Configuration` module tree
//! - `expander.rs`: `${name}` expansion through a `PropertyResolver`
//! - `loader.rs`: quick-xml reader → `Configuration`

pub mod configuration;
pub mod expander;
pub mod loader;

pub use configuration::Configuration;
pub use expander::{expand, PropertiesExpander, PropertyResolver};
pub use loader::{load_configuration, load_configuration_file};
