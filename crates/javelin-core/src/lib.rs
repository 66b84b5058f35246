//! Core data types for javelin: the `Javelin.toml` descriptor and
//! credential interpolation.

pub mod descriptor;
pub mod properties;
