pub mod config;
pub use config::Config;

pub mod context;
pub use context::Context;

pub mod errors;
pub use errors::Error;

pub mod model;
pub mod filters;
pub mod booking;

pub type Result<T> = std::result::Result<T, Error>;
