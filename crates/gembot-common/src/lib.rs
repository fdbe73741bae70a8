pub mod errors;
pub mod id;

pub use errors::{ConfigError, GembotError};
pub use id::{new_id, SessionId};
