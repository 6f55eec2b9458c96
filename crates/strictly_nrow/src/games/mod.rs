//! Game implementations.

pub mod nrow;
