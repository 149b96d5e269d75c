//! Integration tests for the diagnostics emitted through `tracing`.
//!
//! Each test installs a scoped subscriber that writes formatted events into
//! a shared buffer, runs one operation, and inspects what was recorded.

use std::io;
use std::sync::{Arc, Mutex};

use fpbox::combinators::{Arity, Function, compose, curry};
use fpbox::sequence::{Array, Char, Dynamic};
use fpbox::stream::Stream;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|buffer| buffer.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(filter: &str, operation: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );
    tracing::subscriber::with_default(subscriber, operation);
    captured.contents()
}

// =============================================================================
// Contract violations
// =============================================================================

#[test]
fn test_type_mismatch_is_logged_at_debug() {
    let output = capture("fpbox=debug", || {
        let _ = Array::<i32>::from_dynamic(vec![Dynamic::new(1), Dynamic::new("x")]);
    });
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("type mismatch at index 1"), "{output}");
}

#[test]
fn test_invalid_char_is_logged() {
    let output = capture("fpbox=debug", || {
        let _ = Char::new("too long");
    });
    assert!(output.contains("invalid char"), "{output}");
}

#[test]
fn test_rejected_curry_and_compose_are_logged() {
    let output = capture("fpbox=debug", || {
        let _ = curry(Arity::Variadic, |xs: &[i32]| xs.len());
        let _ = compose(Vec::<Function<'_, i32>>::new());
    });
    assert!(output.contains("cannot curry a function with variadic arity"), "{output}");
    assert!(output.contains("no functions to compose"), "{output}");
}

// =============================================================================
// Materialization
// =============================================================================

#[test]
fn test_stream_materialization_is_traced() {
    let output = capture("fpbox=trace", || {
        let _ = Stream::new(1..=3).to_list();
    });
    assert!(output.contains("stream materialized"), "{output}");
    assert!(output.contains("length=3"), "{output}");
}

#[test]
fn test_successful_operations_are_quiet_at_debug() {
    let output = capture("fpbox=debug", || {
        let _ = Array::<i32>::from_dynamic(vec![Dynamic::new(1), Dynamic::new(2)]);
        let _ = Stream::new(1..=3).to_list();
    });
    assert!(output.is_empty(), "{output}");
}
