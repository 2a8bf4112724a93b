pub mod aggregate;
pub mod config;
pub mod error;
pub mod fetch;
pub mod playlist;
pub mod server;
pub mod shorten;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
