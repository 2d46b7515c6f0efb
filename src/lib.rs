pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{
    http::HttpApi,
    storage::{InMemoryUserStore, JsonFileUserStore},
};
pub use config::{ApiSettings, AppConfig};
pub use crate::core::{save::save_data, sum::checked_sum, sum::sum, users::get_user_name};
pub use domain::model::{Payload, SaveResponse, User, UserId};
pub use domain::ports::{RemoteApi, UserStore};
pub use utils::error::{AppError, Result};
