pub use crate::models::*;
pub use crate::utils::errors::*;
