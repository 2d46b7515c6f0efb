pub mod save;
pub mod sum;
pub mod users;

pub use crate::domain::model::{Payload, SaveResponse, User, UserId};
pub use crate::domain::ports::{RemoteApi, UserStore};
pub use crate::utils::error::Result;
