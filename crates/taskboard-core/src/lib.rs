pub mod error;
pub mod result;

pub use error::BoardError;
pub use result::BoardResult;
