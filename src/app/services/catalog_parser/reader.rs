//! Lazy catalog traversal with per-line error reporting
//!
//! This module provides the pull-based traversal over a catalog source:
//! each line is counted, parsed, and either yielded as an entry or reported
//! to an error sink and skipped. A traversal never ends early because of a
//! bad line; it ends at end-of-input, or when the sink or the underlying
//! source raises an error of its own.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use super::line_parser::parse_record;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{CatalogEntry, ProductRecord};
use crate::app::services::record_resolver;
use crate::{Error, Result};

/// Receives a report for every line that fails to parse
///
/// `cause` is `None` for an ordinary parse rejection and carries the fault
/// for an unexpected failure. Returning an error aborts the traversal
/// unchanged; the strict "abort on first error" policy is built exactly
/// this way on top of a sink that is, by default, log-and-continue.
pub trait ErrorSink {
    fn report(&mut self, line_number: u64, line: &str, cause: Option<&Error>) -> Result<()>;
}

impl<F> ErrorSink for F
where
    F: FnMut(u64, &str, Option<&Error>) -> Result<()>,
{
    fn report(&mut self, line_number: u64, line: &str, cause: Option<&Error>) -> Result<()> {
        self(line_number, line, cause)
    }
}

/// Default error sink: log each failure and keep going, or abort the
/// traversal on the first failure when strict
#[derive(Debug, Default)]
pub struct LoggingSink {
    strict: bool,
}

impl LoggingSink {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl ErrorSink for LoggingSink {
    fn report(&mut self, line_number: u64, _line: &str, cause: Option<&Error>) -> Result<()> {
        match cause {
            Some(cause) => warn!("unable to process line {}: {}", line_number, cause),
            None => warn!("unable to process line {}", line_number),
        }

        if self.strict {
            return Err(Error::parse_aborted(line_number));
        }
        Ok(())
    }
}

/// Reader over a repeatable catalog source
///
/// The factory is invoked once per [`entries`](CatalogReader::entries)
/// call, so independent traversals each re-read the source from the start.
#[derive(Debug)]
pub struct CatalogReader<F> {
    open: F,
}

impl<F, R> CatalogReader<F>
where
    F: Fn() -> io::Result<R>,
    R: BufRead,
{
    /// Create a reader over a repeatable line source
    pub fn new(open: F) -> Self {
        Self { open }
    }

    /// Begin a fresh traversal, acquiring a new underlying source
    pub fn entries<S: ErrorSink>(&self, sink: S) -> Result<Entries<R, S>> {
        let reader = (self.open)()
            .map_err(|e| Error::io("failed to open catalog source", e))?;
        Ok(Entries::new(reader, sink))
    }
}

/// Open a catalog file for repeatable traversal
pub fn open_catalog(path: &Path) -> CatalogReader<impl Fn() -> io::Result<BufReader<File>>> {
    let path = path.to_path_buf();
    CatalogReader::new(move || File::open(&path).map(BufReader::new))
}

/// One lazy, forward-only traversal of a catalog
///
/// Yields `Ok(entry)` for each line that parses. Malformed lines are
/// reported to the sink and skipped. An `Err` item (an I/O failure or an
/// error raised by the sink) terminates the traversal; the underlying
/// reader is owned by this value and released on drop regardless of how
/// the traversal ends.
#[derive(Debug)]
pub struct Entries<R: BufRead, S: ErrorSink> {
    lines: io::Lines<R>,
    sink: S,
    line_number: u64,
    stats: ParseStats,
    done: bool,
}

impl<R: BufRead, S: ErrorSink> Entries<R, S> {
    /// Begin a single traversal over an already-acquired reader
    pub fn new(reader: R, sink: S) -> Self {
        Self {
            lines: reader.lines(),
            sink,
            line_number: 0,
            stats: ParseStats::new(),
            done: false,
        }
    }

    /// Statistics accumulated so far in this traversal
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }
}

impl<R: BufRead, S: ErrorSink> Iterator for Entries<R, S> {
    type Item = Result<CatalogEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(Error::io("failed to read catalog line", e)));
                }
                Some(Ok(line)) => line,
            };

            self.line_number += 1;
            self.stats.total_lines += 1;

            match parse_record(&line) {
                Ok(entry) => {
                    self.stats.entries_parsed += 1;
                    return Some(Ok(entry));
                }
                Err(err) => {
                    debug!("skipped line {}: {}", self.line_number, err);
                    self.stats.lines_skipped += 1;
                    self.stats
                        .errors
                        .push(format!("line {}: {}", self.line_number, err));

                    // A parse rejection is reported without a cause; any
                    // other failure is an unexpected fault and is passed on.
                    let cause = match &err {
                        Error::MalformedRecord { .. } => None,
                        other => Some(other),
                    };
                    if let Err(fault) = self.sink.report(self.line_number, &line, cause) {
                        self.done = true;
                        return Some(Err(fault));
                    }
                }
            }
        }
    }
}

/// Read all entries from a catalog file, skipping malformed lines
///
/// With `strict` set, the first malformed line aborts the read with an
/// error instead. Traversing the returned values is cheaper through the
/// iterator API when the catalog is large; this is a convenience for
/// callers that want the whole catalog at once.
pub fn read_entries(path: &Path, strict: bool) -> Result<ParseResult<CatalogEntry>> {
    let reader = open_catalog(path);
    let mut entries = reader.entries(LoggingSink::new(strict))?;

    let mut values = Vec::new();
    while let Some(entry) = entries.next() {
        values.push(entry?);
    }

    Ok(ParseResult {
        values,
        stats: entries.stats().clone(),
    })
}

/// Read all product records resulting from the entries in a catalog file
///
/// Same error policy as [`read_entries`].
pub fn read_records(path: &Path, strict: bool) -> Result<ParseResult<ProductRecord>> {
    let result = read_entries(path, strict)?;

    let mut values = Vec::with_capacity(result.values.len());
    for entry in &result.values {
        values.push(record_resolver::derive(entry)?);
    }

    Ok(ParseResult {
        values,
        stats: result.stats,
    })
}
