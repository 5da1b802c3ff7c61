//! Input phases: file preload and the interactive loop.

pub mod interactive;
pub mod preload;
