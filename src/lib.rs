//! math4games - configuration and smoke report for the `m4g_math` library

pub mod config;
pub mod smoke;

pub use m4g_math as math;
