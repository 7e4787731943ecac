//! Transient notification state.
//!
//! Only one toast is visible at a time. Each toast gets a fresh generation
//! number so an expiry timer started for an older toast leaves a newer one
//! on screen.

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The action succeeded.
    Success,
    /// The action failed.
    Error,
    /// The input needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Returns the glyph shown before the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }

    /// Returns the ANSI foreground colour sequence for this severity.
    #[must_use]
    pub const fn ansi_colour(self) -> &'static str {
        match self {
            Self::Success => "\x1b[32m",
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
            Self::Info => "\x1b[36m",
        }
    }
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Text shown to the user.
    pub message: String,
    /// Visual weight.
    pub severity: Severity,
    /// Identifies which expiry timer may dismiss this toast.
    pub generation: u64,
}

/// The current toast and the generation counter.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    current: Option<Toast>,
    next_generation: u64,
}

impl ToastState {
    /// Replaces any visible toast and returns the new toast's generation.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.current = Some(Toast {
            message: message.into(),
            severity,
            generation,
        });
        generation
    }

    /// Dismisses the toast if it belongs to `generation`.
    ///
    /// Returns true when a toast was dismissed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| toast.generation == generation)
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Returns the visible toast, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_generation_dismisses_toast() {
        let mut state = ToastState::default();
        let generation = state.show("Saved", Severity::Success);

        assert!(state.expire(generation));
        assert!(state.current().is_none());
    }

    #[test]
    fn stale_generation_leaves_newer_toast() {
        let mut state = ToastState::default();
        let first = state.show("First", Severity::Info);
        let second = state.show("Second", Severity::Warning);

        assert!(!state.expire(first));
        assert_eq!(
            state.current().map(|toast| toast.message.as_str()),
            Some("Second")
        );
        assert!(state.expire(second));
    }
}
