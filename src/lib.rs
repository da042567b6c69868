pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod mail;
pub mod models;

pub use batch::BatchRunner;
pub use config::{Config, Credentials};
pub use error::{AppError, Result};
