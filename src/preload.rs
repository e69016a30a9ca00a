use crate::catalog::{MediaKind, PortfolioItem};
use crate::Millis;

pub const PRELOAD_RELEASE_GRACE_MS: Millis = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreloadCommand {
    Insert { src: String, kind: MediaKind },
    Remove { src: String },
}

#[derive(Clone, Debug)]
struct PreloadHint {
    src: String,
    release_at: Option<Millis>,
}

/// Tracks `<link rel="preload">` hints. Hints are keyed by `src`, so asking for the
/// same asset twice never produces a second insert.
#[derive(Debug, Default)]
pub struct PreloadTracker {
    hints: Vec<PreloadHint>,
    commands: Vec<PreloadCommand>,
}

impl PreloadTracker {
    /// Makes `item` the wanted hint and starts the release grace period for the rest.
    pub fn request(&mut self, item: &PortfolioItem, now: Millis) {
        self.retire_except(Some(&item.src), now);

        if let Some(existing) = self.hints.iter_mut().find(|hint| hint.src == item.src) {
            existing.release_at = None;
            return;
        }

        self.hints.push(PreloadHint {
            src: item.src.clone(),
            release_at: None,
        });
        self.commands.push(PreloadCommand::Insert {
            src: item.src.clone(),
            kind: item.kind,
        });
    }

    /// Starts the grace period for every hint without dropping anything yet.
    pub fn retire_all(&mut self, now: Millis) {
        self.retire_except(None, now);
    }

    /// Drops every hint immediately and cancels pending release deadlines.
    pub fn release_all(&mut self) {
        for hint in self.hints.drain(..) {
            self.commands.push(PreloadCommand::Remove { src: hint.src });
        }
    }

    pub fn release_due(&mut self, now: Millis) {
        self.release_where(|release_at| release_at <= now);
    }

    /// Drops every hint already in its grace period, cancelling its release deadline.
    pub fn release_retired(&mut self) {
        self.release_where(|_| true);
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.hints.iter().filter_map(|hint| hint.release_at).min()
    }

    pub fn drain_commands(&mut self) -> Vec<PreloadCommand> {
        std::mem::take(&mut self.commands)
    }

    #[cfg(test)]
    pub(crate) fn pending_sources(&self) -> impl Iterator<Item = &str> {
        self.hints.iter().map(|hint| hint.src.as_str())
    }

    fn release_where(&mut self, due: impl Fn(Millis) -> bool) {
        let mut kept = Vec::with_capacity(self.hints.len());
        for hint in self.hints.drain(..) {
            match hint.release_at {
                Some(release_at) if due(release_at) => {
                    self.commands.push(PreloadCommand::Remove { src: hint.src });
                }
                _ => kept.push(hint),
            }
        }
        self.hints = kept;
    }

    fn retire_except(&mut self, keep: Option<&str>, now: Millis) {
        for hint in &mut self.hints {
            if hint.release_at.is_none() && keep != Some(hint.src.as_str()) {
                hint.release_at = Some(now + PRELOAD_RELEASE_GRACE_MS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::item;
    use crate::catalog::PortfolioCategory;

    #[test]
    fn repeated_request_inserts_once() {
        let mut tracker = PreloadTracker::default();
        let next = item(2, MediaKind::Video, PortfolioCategory::Widescreen);

        tracker.request(&next, 0);
        tracker.request(&next, 100);

        let inserts = tracker
            .drain_commands()
            .into_iter()
            .filter(|command| matches!(command, PreloadCommand::Insert { .. }))
            .count();
        assert_eq!(inserts, 1);
        assert_eq!(tracker.next_deadline(), None);
    }

    #[test]
    fn previous_hint_is_released_after_grace_period() {
        let mut tracker = PreloadTracker::default();
        let first = item(2, MediaKind::Image, PortfolioCategory::Square);
        let second = item(3, MediaKind::Image, PortfolioCategory::Square);

        tracker.request(&first, 1_000);
        tracker.request(&second, 2_000);
        tracker.drain_commands();

        assert_eq!(tracker.next_deadline(), Some(2_000 + PRELOAD_RELEASE_GRACE_MS));

        tracker.release_due(6_999);
        assert!(tracker.drain_commands().is_empty());

        tracker.release_due(7_000);
        assert_eq!(
            tracker.drain_commands(),
            vec![PreloadCommand::Remove { src: first.src.clone() }]
        );
        assert_eq!(tracker.pending_sources().collect::<Vec<_>>(), vec![second.src.as_str()]);
    }

    #[test]
    fn re_requesting_a_retiring_hint_keeps_it() {
        let mut tracker = PreloadTracker::default();
        let first = item(2, MediaKind::Image, PortfolioCategory::Square);
        let second = item(3, MediaKind::Image, PortfolioCategory::Square);

        tracker.request(&first, 0);
        tracker.request(&second, 10);
        tracker.request(&first, 20);
        tracker.drain_commands();

        tracker.release_due(20 + PRELOAD_RELEASE_GRACE_MS);
        let pending: Vec<&str> = tracker.pending_sources().collect();
        assert_eq!(pending, vec![first.src.as_str()]);
    }

    #[test]
    fn release_retired_keeps_the_wanted_hint() {
        let mut tracker = PreloadTracker::default();
        let first = item(2, MediaKind::Image, PortfolioCategory::Square);
        let second = item(3, MediaKind::Image, PortfolioCategory::Square);
        tracker.request(&first, 0);
        tracker.request(&second, 10);
        tracker.drain_commands();

        tracker.release_retired();

        assert_eq!(
            tracker.drain_commands(),
            vec![PreloadCommand::Remove { src: first.src.clone() }]
        );
        assert_eq!(tracker.next_deadline(), None);
        assert_eq!(tracker.pending_sources().collect::<Vec<_>>(), vec![second.src.as_str()]);
    }

    #[test]
    fn release_all_removes_everything_now() {
        let mut tracker = PreloadTracker::default();
        tracker.request(&item(2, MediaKind::Image, PortfolioCategory::Square), 0);
        tracker.retire_all(5);
        tracker.drain_commands();

        tracker.release_all();
        assert_eq!(tracker.drain_commands().len(), 1);
        assert_eq!(tracker.next_deadline(), None);
    }
}
