/// Page state definitions for tracking crawl progress
///
/// A URL is `Unseen` until it enters the frontier. From there it moves
/// `Queued → Fetched → Recorded`, or `Queued → Skipped` when the fetch fails
/// or the response is not HTML. A skipped page still gets a record; it just
/// contributes no links.
use std::fmt;

/// Represents the current state of a page in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// Never enqueued
    Unseen,

    /// Enqueued on the frontier and waiting for a worker
    Queued,

    /// Response received, text and links not yet processed
    Fetched,

    // ===== Terminal States =====
    /// HTML page recorded and its links harvested
    Recorded,

    /// Fetch failed or response was not HTML; recorded without links
    Skipped,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Recorded | Self::Skipped)
    }

    /// Returns true if moving from `self` to `next` is a legal transition
    pub fn can_transition_to(&self, next: PageState) -> bool {
        matches!(
            (self, next),
            (Self::Unseen, Self::Queued)
                | (Self::Queued, Self::Fetched)
                | (Self::Queued, Self::Skipped)
                | (Self::Fetched, Self::Recorded)
                | (Self::Fetched, Self::Skipped)
        )
    }

    /// Short lowercase label used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Queued => "queued",
            Self::Fetched => "fetched",
            Self::Recorded => "recorded",
            Self::Skipped => "skipped",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PageState::Recorded.is_terminal());
        assert!(PageState::Skipped.is_terminal());
        assert!(!PageState::Unseen.is_terminal());
        assert!(!PageState::Queued.is_terminal());
        assert!(!PageState::Fetched.is_terminal());
    }

    #[test]
    fn test_happy_path_transitions() {
        assert!(PageState::Unseen.can_transition_to(PageState::Queued));
        assert!(PageState::Queued.can_transition_to(PageState::Fetched));
        assert!(PageState::Fetched.can_transition_to(PageState::Recorded));
    }

    #[test]
    fn test_skip_transitions() {
        assert!(PageState::Queued.can_transition_to(PageState::Skipped));
        assert!(PageState::Fetched.can_transition_to(PageState::Skipped));
    }

    #[test]
    fn test_no_way_back() {
        assert!(!PageState::Recorded.can_transition_to(PageState::Queued));
        assert!(!PageState::Skipped.can_transition_to(PageState::Queued));
        assert!(!PageState::Queued.can_transition_to(PageState::Unseen));
        assert!(!PageState::Unseen.can_transition_to(PageState::Recorded));
    }

    #[test]
    fn test_display() {
        assert_eq!(PageState::Recorded.to_string(), "recorded");
        assert_eq!(format!("{}", PageState::Skipped), "skipped");
    }
}
