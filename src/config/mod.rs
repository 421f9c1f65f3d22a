pub mod credentials;
pub mod loader;
pub mod settings;
pub mod types;

pub use credentials::Credentials;
pub use types::{ClientConfig, YouzanConfig};
