pub mod caption;
pub mod compose;
pub mod config;
pub mod error;
pub mod layout;
pub mod speech;
pub mod workflow;

pub use error::Error;
