//! Helpers shared between solutions

pub mod pair_sum;
