#[cfg(test)]
#[macro_use]
extern crate parameterized;

pub mod bean;
pub mod dump;
pub mod geometry;
pub mod sample;
