//! Command implementations for metafill

pub mod batch;
pub mod dispatch;
pub mod single;
