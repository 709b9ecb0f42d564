#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod markup;

mod normalize;

pub use decoder::PobDecoder;
pub use error::DecodeError;
