//! A single process-wide integer that is read, overwritten once, and read again.
//!
//! The integer lives in a plain `static` with a constant initializer, so it sits in the
//! binary's data section. Linked without PIE (see `build.rs`), its address is the same
//! on every run, which lets a debugger put a write watchpoint on it ahead of time.
//!
//! ```rust
//! let mut out = Vec::new();
//! write_to_global_var::run(&mut out).unwrap();
//! assert_eq!(out, b"before write: 5\nafter write: 15\n");
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicI32, Ordering};

pub mod symbols;

/// Value of the shared integer at process start.
pub const INITIAL_VALUE: i32 = 5;

/// Value stored by the entry sequence.
pub const WRITTEN_VALUE: i32 = 15;

/// The shared integer, exported as `a`.
#[export_name = "a"]
pub static A: AtomicI32 = AtomicI32::new(INITIAL_VALUE);

/// Current value of the shared integer.
pub fn value() -> i32 {
    A.load(Ordering::Relaxed)
}

/// Address of the shared integer. Stays fixed for the lifetime of the process.
pub fn address() -> usize {
    std::ptr::addr_of!(A) as usize
}

/// Stores `value` into the shared integer.
pub fn write(value: i32) {
    log::trace!("a <- {}", value);
    A.store(value, Ordering::Relaxed);
}

fn report(out: &mut dyn Write, label: &str, value: i32) -> io::Result<i32> {
    writeln!(out, "{}: {}", label, value)?;
    Ok(value)
}

/// Prints the current value as `before write: <value>` and returns it.
pub fn before_write(out: &mut dyn Write) -> io::Result<i32> {
    report(out, "before write", value())
}

/// Prints the current value as `after write: <value>` and returns it.
pub fn after_write(out: &mut dyn Write) -> io::Result<i32> {
    report(out, "after write", value())
}

/// Runs the whole sequence: report, write [`WRITTEN_VALUE`], report again.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    before_write(out)?;
    write(WRITTEN_VALUE);
    after_write(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    // The only test that touches the value of `A`; the rest of the suite runs in parallel.
    #[test]
    fn run_reads_written_value() {
        let addr = address();
        let mut out = Vec::new();

        assert_eq!(value(), INITIAL_VALUE);
        run(&mut out).unwrap();
        assert_eq!(value(), WRITTEN_VALUE);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "before write: 5\nafter write: 15\n"
        );
        assert_eq!(address(), addr);
    }

    #[test]
    fn report_formats_one_line() {
        let mut out = Vec::new();
        assert_eq!(report(&mut out, "before write", -3).unwrap(), -3);
        assert_eq!(out, b"before write: -3\n");
    }

    #[test]
    fn address_is_stable() {
        let first = address();
        for _ in 0..8 {
            assert_eq!(address(), first);
        }
        assert_eq!(first % std::mem::align_of::<i32>(), 0);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_propagates_write_errors() {
        let err = report(&mut Closed, "after write", 15).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    // Fails on the first line, before the write, so `A` is left alone.
    #[test]
    fn run_stops_at_first_failed_write() {
        let err = run(&mut Closed).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
