#[macro_use] extern crate lazy_static;

pub mod errors;
pub mod integer_ext;
pub mod parser;
pub mod config;
pub mod profiling;

pub mod karatsuba;
pub mod sorting;
pub mod inversions;
pub mod matrix;
pub mod strassen;

pub mod harness;
