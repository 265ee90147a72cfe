pub mod catalog;
pub mod enums;
pub mod interaction;
pub mod medication;
pub mod patient;

pub use catalog::*;
pub use enums::*;
pub use interaction::*;
pub use medication::*;
pub use patient::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
