#![warn(clippy::pedantic)]

pub mod build;
pub mod item;
pub mod skill;

pub use build::{Build, Character};
pub use item::{Item, UNKNOWN_ITEM};
pub use skill::{SkillGroup, is_support_gem};
