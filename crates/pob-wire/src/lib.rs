#![warn(clippy::pedantic)]

pub mod compress;
pub mod error;
pub mod transcode;

pub use compress::Format;
pub use error::WireError;
