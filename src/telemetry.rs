//! Application telemetry events and sinks.
//!
//! Wayfarer has no backend, but structured events still help when debugging
//! a session: searches, filter changes, bookings and sign-ins are recorded
//! through a [`TelemetrySink`] chosen at startup.

use std::{fmt, io};

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Wayfarer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A search replaced the result set.
    SearchCompleted {
        /// Number of offers returned.
        result_count: usize,
    },
    /// Filter controls changed and the engine re-ran.
    FiltersApplied {
        /// Offers left after filtering.
        visible: usize,
        /// Offers in the unfiltered result set.
        total: usize,
    },
    /// A booking was added to the ledger.
    BookingConfirmed {
        /// Timestamp-derived booking identifier.
        booking_id: u64,
        /// Booked price.
        price: u32,
    },
    /// The simulated sign-in completed.
    SignedIn,
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: fmt::Debug + Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Redirect stderr to a file when running the TUI, otherwise the lines land
/// underneath the alternate screen.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test doubles for telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Drains and returns the recorded events.
        ///
        /// # Panics
        ///
        /// Panics if the events mutex is poisoned.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            #[expect(clippy::expect_used, reason = "test double; poisoning is a test bug")]
            let drained = self
                .events
                .lock()
                .expect("events mutex should be available")
                .drain(..)
                .collect();
            drained
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
