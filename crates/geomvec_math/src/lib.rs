#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod number_traits;
pub mod vector;

pub use vector::{Vector, Vector2, Vector3, Vector4};
