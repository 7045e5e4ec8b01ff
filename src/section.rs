//! Section inference from sentinel "header" task names.
//!
//! A task whose name ends with `:` is not a real task: it declares the
//! section that subsequent tasks belong to, until another header appears.

/// Returns the section label when `name` is a header, `None` otherwise.
///
/// The label keeps only ASCII letters and digits, in order, so
/// `"Sub-tasks:"` becomes `"Subtasks"` and `"  :"` becomes `""`.
pub fn header_label(name: &str) -> Option<String> {
    if !name.ends_with(':') {
        return None;
    }
    Some(name.chars().filter(|c| c.is_ascii_alphanumeric()).collect())
}

/// Mutable section context threaded through task iteration.
///
/// Deliberately not reset between projects: a header declared in one
/// project labels tasks in following projects until overridden.
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: String,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the carried label if `name` is a header. Returns true when
    /// it was one (the caller must then skip emitting a task).
    pub fn observe(&mut self, name: &str) -> bool {
        match header_label(name) {
            Some(label) => {
                tracing::debug!(target: "taskpull", section = %label, "Entering section");
                self.current = label;
                true
            }
            None => false,
        }
    }

    /// The label in effect; empty until the first header is seen.
    pub fn current(&self) -> &str {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_label_strips_non_alphanumerics() {
        assert_eq!(header_label("Sub-tasks:"), Some("Subtasks".to_string()));
        assert_eq!(header_label("Q3 Goals:"), Some("Q3Goals".to_string()));
        assert_eq!(header_label("  :"), Some(String::new()));
    }

    #[test]
    fn header_label_ignores_ordinary_names() {
        assert_eq!(header_label("Write doc"), None);
        assert_eq!(header_label(""), None);
        assert_eq!(header_label("colon: inside"), None);
    }

    #[test]
    fn tracker_carries_label_until_next_header() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.current(), "");

        assert!(tracker.observe("Prep:"));
        assert_eq!(tracker.current(), "Prep");

        assert!(!tracker.observe("Write doc"));
        assert_eq!(tracker.current(), "Prep");

        assert!(tracker.observe("Review phase:"));
        assert_eq!(tracker.current(), "Reviewphase");
    }
}
