//! Infrastructure layer: concrete database access.

pub mod persistence;
