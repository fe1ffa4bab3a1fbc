//! The scope stack.
//!
//! Owns the whole chain of scope frames as a growable vector indexed by
//! depth: the first entry is the global frame, the last is the innermost
//! live scope. Entering a scope pushes a frame; exiting pops one, which
//! releases its bindings and bucket array in the same breath. The global
//! frame can never be popped, so depth stays at least 1 for the stack's
//! whole lifetime.

use std::fmt;

use symtab_core::HashKind;

use crate::binding::Binding;
use crate::error::SymtabError;
use crate::frame::{InsertOutcome, RemoveOutcome, ScopeFrame};
use crate::trace::{NullSink, TraceSink};

/// A stack of scope bucket tables linked by lexical nesting.
///
/// The hash strategy and bucket count are fixed at construction and shared
/// by every frame the stack creates. The strategy is a per-instance value,
/// never global state, so independent stacks using different strategies can
/// be driven concurrently without interference.
pub struct ScopeStack {
    /// `frames[0]` is the global frame; `frames.last()` is current.
    frames: Vec<ScopeFrame>,
    bucket_count: usize,
    hash: HashKind,
    sink: Box<dyn TraceSink>,
}

impl ScopeStack {
    /// Create a stack with a silent sink.
    ///
    /// Fails with [`SymtabError::InvalidBucketCount`] when `bucket_count`
    /// is zero: a zero modulus is undefined and must be rejected here, not
    /// wrapped later.
    pub fn new(bucket_count: usize, hash: HashKind) -> Result<Self, SymtabError> {
        Self::with_sink(bucket_count, hash, Box::new(NullSink))
    }

    /// Create a stack that reports trace events to `sink`.
    pub fn with_sink(
        bucket_count: usize,
        hash: HashKind,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, SymtabError> {
        if bucket_count == 0 {
            return Err(SymtabError::InvalidBucketCount);
        }
        let root = ScopeFrame::new(String::from("1"), bucket_count, hash);
        sink.frame_created(root.id());
        Ok(Self {
            frames: vec![root],
            bucket_count,
            hash,
            sink,
        })
    }

    /// Swap the trace sink. Logical behavior is identical under any sink.
    pub fn set_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = sink;
    }

    /// Enter a nested scope. The new frame becomes current and gets the
    /// next hierarchical id under the enclosing frame.
    pub fn enter_scope(&mut self) {
        let id = self.current_mut().next_child_id();
        let frame = ScopeFrame::new(id, self.bucket_count, self.hash);
        self.sink.frame_created(frame.id());
        self.frames.push(frame);
    }

    /// Leave the current scope, releasing its bindings.
    ///
    /// Refused at the global scope: the stack is left unchanged and
    /// [`SymtabError::ScopeUnderflow`] is returned.
    pub fn exit_scope(&mut self) -> Result<(), SymtabError> {
        if self.frames.len() == 1 {
            self.sink.scope_underflow();
            return Err(SymtabError::ScopeUnderflow);
        }
        let frame = self.frames.pop().expect("depth checked above");
        self.sink.frame_removed(frame.id());
        Ok(())
    }

    /// Insert into the current scope only.
    ///
    /// Returns `false` when the name is already bound in the current scope;
    /// the existing binding is unchanged. Ancestor scopes are never
    /// consulted — shadowing an outer name is not a duplicate.
    pub fn insert(&mut self, name: &str, ty: &str) -> bool {
        // Borrow the frame through the field so the sink stays reachable.
        let frame = self
            .frames
            .last_mut()
            .expect("the global frame is never popped");
        match frame.insert(name, ty) {
            InsertOutcome::Inserted { bucket, position } => {
                self.sink.insert_ok(frame.id(), name, bucket, position);
                true
            }
            InsertOutcome::Duplicate {
                bucket,
                position,
                existing_ty,
            } => {
                self.sink
                    .insert_duplicate(frame.id(), name, &existing_ty, bucket, position);
                false
            }
        }
    }

    /// Remove from the current scope only.
    pub fn remove(&mut self, name: &str) -> bool {
        let frame = self
            .frames
            .last_mut()
            .expect("the global frame is never popped");
        match frame.remove(name) {
            RemoveOutcome::Removed { bucket, position } => {
                self.sink.remove_ok(frame.id(), name, bucket, position);
                true
            }
            RemoveOutcome::Missing => {
                self.sink.remove_miss(name);
                false
            }
        }
    }

    /// Shadowed lookup: innermost scope first, outward to the global scope,
    /// first match wins.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        for frame in self.frames.iter().rev() {
            if let Some(found) = frame.lookup(name) {
                self.sink
                    .lookup_hit(frame.id(), name, found.bucket, found.position);
                return Some(found.binding);
            }
        }
        self.sink.lookup_miss(name);
        None
    }

    /// Dump the current scope's table to the sink.
    pub fn print_current_scope(&self) {
        let mut text = String::new();
        self.current().write_table("\t", &mut text);
        self.sink.table_dump(&text);
    }

    /// Dump every live scope to the sink, innermost first, indented one
    /// further tab per step outward.
    pub fn print_all_scopes(&self) {
        let mut text = String::new();
        let mut indent = String::from("\t");
        for frame in self.frames.iter().rev() {
            frame.write_table(&indent, &mut text);
            indent.push('\t');
        }
        self.sink.table_dump(&text);
    }

    /// Arithmetic mean of the per-frame collision ratios over every live
    /// frame, unweighted by bucket or binding count.
    pub fn collision_ratio(&self) -> f64 {
        let total: f64 = self.frames.iter().map(ScopeFrame::collision_ratio).sum();
        total / self.frames.len() as f64
    }

    /// Current nesting depth; always at least 1.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn hash_kind(&self) -> HashKind {
        self.hash
    }

    /// Hierarchical id of the current scope.
    pub fn current_scope_id(&self) -> &str {
        self.current().id()
    }

    pub fn current_frame(&self) -> &ScopeFrame {
        self.current()
    }

    /// Live frames, innermost first.
    pub fn frames(&self) -> impl Iterator<Item = &ScopeFrame> {
        self.frames.iter().rev()
    }

    fn current(&self) -> &ScopeFrame {
        self.frames.last().expect("the global frame is never popped")
    }

    fn current_mut(&mut self) -> &mut ScopeFrame {
        self.frames
            .last_mut()
            .expect("the global frame is never popped")
    }
}

impl Drop for ScopeStack {
    fn drop(&mut self) {
        // Release innermost-out, announcing each frame like exit_scope does.
        while let Some(frame) = self.frames.pop() {
            self.sink.frame_removed(frame.id());
        }
    }
}

impl fmt::Debug for ScopeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeStack")
            .field("depth", &self.frames.len())
            .field("bucket_count", &self.bucket_count)
            .field("hash", &self.hash)
            .field("current", &self.current_scope_id())
            .finish()
    }
}
