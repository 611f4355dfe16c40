pub mod error;
pub mod models;
pub mod accounting;
pub mod validation;
pub mod user_info;

pub use error::{PollError, Result};
pub use models::*;
pub use validation::*;
pub use user_info::*;
