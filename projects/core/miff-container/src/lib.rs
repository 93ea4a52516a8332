#![doc = include_str!("../README.MD")]

#[cfg(test)]
pub mod test_prelude;

pub mod constants;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod record;
pub mod string;
pub mod tag;
pub mod writer;

pub use container::{read_container, Container, ContainerHeader, Endianness, MiffReader};
pub use dispatch::{
    DispatchOutcome, DispatchReport, Dispatcher, RecordFailure, RecordHandler,
    RecordHandlerError, SkippedRecord,
};
pub use error::{ContainerError, ContainerResult, CorruptRecordReason};
pub use record::Record;
pub use string::read_truncated_string;
pub use tag::RecordTag;
pub use writer::MiffWriter;
