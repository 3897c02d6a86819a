//! Trait definitions for the Fabula story-writing pipeline.

mod driver;

pub use driver::FabulaDriver;
