#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod profile;

pub use catalog::{Category, Difficulty, Exercise, ExerciseFilter};
pub use profile::{ProfileError, ProfileField, UserProfile};
