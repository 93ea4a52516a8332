//! `MBmp` payload layout and format classification.

pub mod classify;
pub mod constants;
pub mod sub_header;
