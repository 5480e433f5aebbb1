pub mod error;
pub mod links;
pub mod notebook;

pub use error::{Error, Result};
