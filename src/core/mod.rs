pub mod models;
pub mod errors;

pub use models::*;
pub use errors::{CreditError, Result};
