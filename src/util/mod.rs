//! Small browser and formatting helpers.

pub mod browser;
pub mod date;
pub mod storage;
