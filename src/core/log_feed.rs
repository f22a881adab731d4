//! # Activity Feed
//!
//! Append-only record of recent human-readable status messages ("switched
//! to calendar", and so on). Entries are owned strings, immutable once
//! appended. The store itself grows without bound for the life of the run;
//! only the *displayed* slice is capped, at [`MAX_LOG_MESSAGES`] rows.
//! See DESIGN.md for why the cap is on display rather than storage.

/// Maximum number of feed entries the activity panel will show at once.
pub const MAX_LOG_MESSAGES: usize = 10;

/// Ordered record of activity messages, append-at-tail.
#[derive(Debug, Default)]
pub struct LogFeed {
    entries: Vec<String>,
}

impl LogFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-formatted message as a new entry at the tail.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// Iterate at most `limit` entries, most recently appended first.
    ///
    /// Re-derived from the store on every call; no cursor survives between
    /// calls.
    pub fn iterate_recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(limit).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_of_empty_feed_is_empty() {
        let feed = LogFeed::new();
        assert!(feed.is_empty());
        assert_eq!(feed.iterate_recent(5).count(), 0);
    }

    #[test]
    fn test_recent_yields_newest_first() {
        let mut feed = LogFeed::new();
        feed.append("a");
        feed.append("b");
        feed.append("c");

        let recent: Vec<&str> = feed.iterate_recent(2).collect();
        assert_eq!(recent, vec!["c", "b"]);
    }

    #[test]
    fn test_recent_with_fewer_entries_than_limit() {
        let mut feed = LogFeed::new();
        feed.append("only");

        let recent: Vec<&str> = feed.iterate_recent(4).collect();
        assert_eq!(recent, vec!["only"]);
    }

    #[test]
    fn test_recent_is_restartable() {
        let mut feed = LogFeed::new();
        feed.append("a");
        feed.append("b");

        let first: Vec<&str> = feed.iterate_recent(2).collect();
        let second: Vec<&str> = feed.iterate_recent(2).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_storage_is_not_capped_at_display_budget() {
        let mut feed = LogFeed::new();
        for i in 0..MAX_LOG_MESSAGES + 5 {
            feed.append(format!("entry {i}"));
        }

        assert_eq!(feed.len(), MAX_LOG_MESSAGES + 5);
        assert_eq!(feed.iterate_recent(MAX_LOG_MESSAGES).count(), MAX_LOG_MESSAGES);
    }
}
