pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{AppError, AppResult};
