//! Error and result types shared by the cursorseq crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
