//! Colors handed to the GPU as clear values.

pub mod color;

pub use color::Color;
