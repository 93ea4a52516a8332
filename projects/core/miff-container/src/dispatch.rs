//! Tag-based routing of records to handlers.
//!
//! A [`Dispatcher`] owns a table of handlers keyed by [`RecordTag`]. Handlers write
//! their results into a caller-provided collector, which is handed back together with
//! a [`DispatchReport`] once the container has been walked.

use crate::container::MiffReader;
use crate::error::ContainerResult;
use crate::record::Record;
use crate::tag::RecordTag;
use std::collections::HashMap;
use std::error::Error;
use tracing::{debug, warn};

/// Error type returned by record handlers. Failures are local to one record.
pub type RecordHandlerError = Box<dyn Error + Send + Sync>;

/// Processes records of one tag, writing results into a collector `C`.
pub trait RecordHandler<C> {
    fn handle(&self, record: &Record<'_>, collector: &mut C) -> Result<(), RecordHandlerError>;
}

impl<C, F> RecordHandler<C> for F
where
    F: Fn(&Record<'_>, &mut C) -> Result<(), RecordHandlerError>,
{
    fn handle(&self, record: &Record<'_>, collector: &mut C) -> Result<(), RecordHandlerError> {
        self(record, collector)
    }
}

/// A record with no registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub tag: RecordTag,
    pub offset: usize,
    pub name: String,
}

/// A record whose handler returned an error.
#[derive(Debug)]
pub struct RecordFailure {
    pub tag: RecordTag,
    pub offset: usize,
    pub name: String,
    pub error: RecordHandlerError,
}

/// Summary of a dispatch run.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Records whose handler succeeded.
    pub handled: usize,
    pub skipped: Vec<SkippedRecord>,
    pub failures: Vec<RecordFailure>,
}

impl DispatchReport {
    /// Total records visited.
    pub fn total(&self) -> usize {
        self.handled + self.skipped.len() + self.failures.len()
    }
}

/// Collector and report returned by [`Dispatcher::dispatch`].
#[derive(Debug)]
pub struct DispatchOutcome<C> {
    pub collector: C,
    pub report: DispatchReport,
}

/// Routes records to handlers by tag.
pub struct Dispatcher<'h, C> {
    handlers: HashMap<RecordTag, Box<dyn RecordHandler<C> + 'h>>,
}

impl<C> Default for Dispatcher<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h, C> Dispatcher<'h, C> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `tag`, replacing any earlier handler for that tag.
    pub fn register(&mut self, tag: RecordTag, handler: impl RecordHandler<C> + 'h) -> &mut Self {
        self.handlers.insert(tag, Box::new(handler));
        self
    }

    pub fn handles(&self, tag: RecordTag) -> bool {
        self.handlers.contains_key(&tag)
    }

    /// Walks the container in `data` and feeds each record to its handler.
    ///
    /// Unknown tags and handler failures are recorded in the report and the walk
    /// continues. Container errors abort the walk.
    pub fn dispatch(&self, data: &[u8], mut collector: C) -> ContainerResult<DispatchOutcome<C>> {
        let mut report = DispatchReport::default();

        for record in MiffReader::new(data)? {
            let record = record?;
            let Some(handler) = self.handlers.get(&record.tag) else {
                warn!(tag = %record.tag, offset = record.offset, name = %record.name, "No handler for record, skipping");
                report.skipped.push(SkippedRecord {
                    tag: record.tag,
                    offset: record.offset,
                    name: record.name,
                });
                continue;
            };

            match handler.handle(&record, &mut collector) {
                Ok(()) => {
                    debug!(tag = %record.tag, name = %record.name, "Handled record");
                    report.handled += 1;
                }
                Err(error) => {
                    warn!(tag = %record.tag, offset = record.offset, name = %record.name, %error, "Record handler failed");
                    report.failures.push(RecordFailure {
                        tag: record.tag,
                        offset: record.offset,
                        name: record.name,
                        error,
                    });
                }
            }
        }

        Ok(DispatchOutcome { collector, report })
    }
}
