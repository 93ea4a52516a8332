mod core;
mod mapped;
mod naming;
mod throughput;

pub use core::*;
pub use mapped::*;
pub use naming::*;
pub use throughput::*;
