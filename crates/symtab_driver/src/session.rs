//! Script sessions.
//!
//! A session reads a command script (bucket-count header, then one command
//! per line), drives a fresh scope stack, and interleaves a `Cmd N: <line>`
//! echo with the stack's own trace output on a single writer.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use symtab_core::HashKind;
use symtab_table::{ScopeStack, WriteSink};

use crate::command::Command;
use crate::error::DriverError;
use crate::format::format_type;

/// A cloneable writer handle, so the session echo and the stack's trace
/// sink can share one output stream.
pub struct SharedWriter<W>(Rc<RefCell<W>>);

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<W: Write> SharedWriter<W> {
    pub fn new(out: W) -> Self {
        Self(Rc::new(RefCell::new(out)))
    }

    /// Recover the writer once every other handle is gone.
    pub fn try_into_inner(self) -> Option<W> {
        Rc::try_unwrap(self.0).ok().map(RefCell::into_inner)
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// What a finished session reports back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionReport {
    /// Commands executed, counting the echoed lines.
    pub commands: usize,
    /// Scope depth left when the script ended.
    pub final_depth: usize,
    /// The stack-level collision ratio at end of script.
    pub collision_ratio: f64,
}

/// Run a command script against a fresh scope stack using `hash`.
///
/// The first non-blank line is the bucket count. Logical failures inside
/// the table (duplicates, misses, a refused exit) are outcomes, visible
/// only in the trace; an unreadable script or undecodable line is an error.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    hash: HashKind,
) -> Result<SessionReport, DriverError> {
    let mut lines = input.lines();

    let bucket_count = loop {
        let Some(line) = lines.next() else {
            return Err(DriverError::MissingHeader);
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        break trimmed
            .parse::<usize>()
            .map_err(|_| DriverError::BadBucketCount(trimmed.to_string()))?;
    };

    // The session buffers locally: the boxed sink must own its writer, so
    // echo and trace share an in-memory buffer that is copied to `out`
    // once the stack has been torn down.
    let mut writer = SharedWriter::new(Vec::new());
    let sink = WriteSink::new(writer.clone());
    let mut stack = ScopeStack::with_sink(bucket_count, hash, Box::new(sink))?;

    let mut commands = 0;
    for line in lines {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        commands += 1;
        writeln!(writer, "Cmd {commands}: {line}")?;

        let Some(cmd) = Command::parse(line)? else {
            continue;
        };
        match cmd {
            Command::Insert {
                name,
                base_type,
                params,
            } => {
                let ty = format_type(&base_type, &params);
                stack.insert(&name, &ty);
            }
            Command::Lookup { name } => {
                stack.lookup(&name);
            }
            Command::Delete { name } => {
                stack.remove(&name);
            }
            Command::EnterScope => stack.enter_scope(),
            Command::ExitScope => {
                // Refusal at the global scope is already traced by the sink.
                let _ = stack.exit_scope();
            }
            Command::PrintAll => stack.print_all_scopes(),
            Command::PrintCurrent => stack.print_current_scope(),
            Command::Quit => break,
        }
    }

    let report = SessionReport {
        commands,
        final_depth: stack.depth(),
        collision_ratio: stack.collision_ratio(),
    };

    // Tear the stack down first so the final frame-removed lines land in
    // the buffer, then flush everything to the caller's writer.
    drop(stack);
    let buf = writer
        .try_into_inner()
        .expect("the stack and its sink were just dropped");
    out.write_all(&buf)?;

    Ok(report)
}
