//! Answer input

pub mod answer;
