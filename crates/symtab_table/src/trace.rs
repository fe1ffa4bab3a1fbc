//! The diagnostics boundary.
//!
//! A `TraceSink` observes structured events from the scope stack: frame
//! lifecycle, insert/lookup/remove outcomes with their bucket index and
//! 1-based chain position, and full table dumps. The sink is purely an
//! observational side channel — attaching one, swapping one, or running
//! silent never changes a logical result.

use std::cell::RefCell;
use std::io::Write;

/// Receiver for structured trace events.
///
/// Every method has an empty default body, so an implementation only picks
/// up the events it cares about.
pub trait TraceSink {
    fn frame_created(&self, _id: &str) {}
    fn frame_removed(&self, _id: &str) {}
    fn insert_ok(&self, _frame: &str, _name: &str, _bucket: usize, _position: usize) {}
    fn insert_duplicate(
        &self,
        _frame: &str,
        _name: &str,
        _existing_ty: &str,
        _bucket: usize,
        _position: usize,
    ) {
    }
    fn lookup_hit(&self, _frame: &str, _name: &str, _bucket: usize, _position: usize) {}
    fn lookup_miss(&self, _name: &str) {}
    fn remove_ok(&self, _frame: &str, _name: &str, _bucket: usize, _position: usize) {}
    fn remove_miss(&self, _name: &str) {}
    fn scope_underflow(&self) {}
    fn table_dump(&self, _text: &str) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {}

/// Renders events as tab-indented trace lines.
///
/// Write failures are swallowed: the sink is observational and must never
/// turn into a behavioral channel.
pub struct WriteSink<W> {
    out: RefCell<W>,
}

impl<W: Write> WriteSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Unwrap the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> TraceSink for WriteSink<W> {
    fn frame_created(&self, id: &str) {
        let _ = writeln!(self.out.borrow_mut(), "\tScopeTable# {id} created");
    }

    fn frame_removed(&self, id: &str) {
        let _ = writeln!(self.out.borrow_mut(), "\tScopeTable# {id} removed");
    }

    fn insert_ok(&self, frame: &str, _name: &str, bucket: usize, position: usize) {
        let _ = writeln!(
            self.out.borrow_mut(),
            "\tInserted in ScopeTable# {frame} at position {}, {position}",
            bucket + 1
        );
    }

    fn insert_duplicate(
        &self,
        frame: &str,
        name: &str,
        _existing_ty: &str,
        bucket: usize,
        position: usize,
    ) {
        let _ = writeln!(
            self.out.borrow_mut(),
            "\t'{name}' already exists in ScopeTable# {frame} at position {}, {position}",
            bucket + 1
        );
    }

    fn lookup_hit(&self, frame: &str, name: &str, bucket: usize, position: usize) {
        let _ = writeln!(
            self.out.borrow_mut(),
            "\t'{name}' found in ScopeTable# {frame} at position {}, {position}",
            bucket + 1
        );
    }

    fn lookup_miss(&self, name: &str) {
        let _ = writeln!(self.out.borrow_mut(), "\t'{name}' not found");
    }

    fn remove_ok(&self, frame: &str, name: &str, bucket: usize, position: usize) {
        let _ = writeln!(
            self.out.borrow_mut(),
            "\tDeleted '{name}' from ScopeTable# {frame} at position {}, {position}",
            bucket + 1
        );
    }

    fn remove_miss(&self, name: &str) {
        let _ = writeln!(self.out.borrow_mut(), "\t'{name}' not found");
    }

    fn scope_underflow(&self) {
        let _ = writeln!(self.out.borrow_mut(), "\tCannot exit the global scope");
    }

    fn table_dump(&self, text: &str) {
        let _ = self.out.borrow_mut().write_all(text.as_bytes());
    }
}
