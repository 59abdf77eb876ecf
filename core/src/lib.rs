extern crate self as hearth_core;

pub mod log;
