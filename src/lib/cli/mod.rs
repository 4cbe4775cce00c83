//! Command line interface of the generator
pub mod input;
