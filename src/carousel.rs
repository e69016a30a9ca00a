use crate::catalog::{filtered_view, Catalog, FilteredView, PortfolioCategory, PortfolioItem};
use crate::media::dwell;
use crate::modal::ModalKey;
use crate::preload::{PreloadCommand, PreloadTracker};
use crate::progress::{indicator_dots, IndicatorDot};
use crate::{Millis, Scheduled};
use log::debug;
use std::rc::Rc;

/// Matches the crossfade animation length so the outgoing item outlives its fade.
pub const SETTLE_DELAY_MS: Millis = 1_200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Index one step away from `index` in a ring of `len` items.
    pub fn step(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        Some(match self {
            Self::Next => (index + 1) % len,
            Self::Prev => (index + len - 1) % len,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Empty,
    Idle,
    Transitioning,
}

/// Portfolio slideshow state: the filtered view, the crossfade lock, the modal
/// cursor and the autoplay clock.
///
/// The engine never reads a clock. Callers pass `now` into every operation and
/// drive it through [`Scheduled`]; all pending timers are deadlines owned here,
/// so cancelling one is just clearing it.
#[derive(Debug)]
pub struct CarouselEngine {
    catalog: Rc<Catalog>,
    view: FilteredView,
    current_index: usize,
    outgoing_index: Option<usize>,
    transitioning: bool,
    selected_index: Option<usize>,
    hovered: bool,
    settle_at: Option<Millis>,
    autoplay_at: Option<Millis>,
    preload: PreloadTracker,
    torn_down: bool,
}

impl CarouselEngine {
    pub fn new(catalog: Rc<Catalog>, now: Millis) -> Self {
        let view = filtered_view(&catalog, PortfolioCategory::All);
        let mut engine = Self {
            catalog,
            view,
            current_index: 0,
            outgoing_index: None,
            transitioning: false,
            selected_index: None,
            hovered: false,
            settle_at: None,
            autoplay_at: None,
            preload: PreloadTracker::default(),
            torn_down: false,
        };

        engine.refresh_preload(now);
        engine.rearm_autoplay(now);
        engine
    }

    pub fn category(&self) -> PortfolioCategory {
        self.view.category()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn outgoing_index(&self) -> Option<usize> {
        self.outgoing_index
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected_index.is_some()
    }

    pub fn current_item(&self) -> Option<&PortfolioItem> {
        self.view.get(&self.catalog, self.current_index)
    }

    pub fn outgoing_item(&self) -> Option<&PortfolioItem> {
        self.outgoing_index
            .and_then(|index| self.view.get(&self.catalog, index))
    }

    pub fn selected_item(&self) -> Option<&PortfolioItem> {
        self.selected_index
            .and_then(|index| self.view.get(&self.catalog, index))
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.view.is_empty() {
            CarouselPhase::Empty
        } else if self.transitioning {
            CarouselPhase::Transitioning
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.selected_index.is_some() || self.transitioning
    }

    pub fn autoplay_enabled(&self) -> bool {
        !self.torn_down && !self.is_paused() && self.view.len() >= 2
    }

    /// The main view's video only plays while the modal is closed.
    pub fn main_video_active(&self) -> bool {
        self.selected_index.is_none()
    }

    pub fn indicator(&self) -> Vec<IndicatorDot> {
        indicator_dots(
            self.view.len(),
            self.current_index,
            self.is_paused(),
            self.current_item().map(|item| item.kind),
        )
    }

    pub fn autoplay_deadline(&self) -> Option<Millis> {
        self.autoplay_at
    }

    pub fn settle_deadline(&self) -> Option<Millis> {
        self.settle_at
    }

    pub fn set_category(&mut self, category: PortfolioCategory, now: Millis) {
        if self.torn_down {
            return;
        }

        if category == self.view.category() {
            self.preload.release_retired();
        } else {
            self.view = filtered_view(&self.catalog, category);
            self.preload.release_all();
        }
        self.current_index = 0;
        self.outgoing_index = None;
        self.transitioning = false;
        self.settle_at = None;
        self.selected_index = None;
        debug!("portfolio category {} ({} items)", category.label(), self.view.len());

        self.refresh_preload(now);
        self.rearm_autoplay(now);
    }

    /// Starts a crossfade to `index`. Returns `false` and leaves the state untouched
    /// when the index is current, out of range, or a crossfade is still running.
    pub fn go_to(&mut self, index: usize, now: Millis) -> bool {
        if self.torn_down
            || self.transitioning
            || index == self.current_index
            || index >= self.view.len()
        {
            return false;
        }

        debug!("portfolio transition {} -> {index}", self.current_index);
        self.outgoing_index = Some(self.current_index);
        self.current_index = index;
        self.transitioning = true;
        self.settle_at = Some(now + SETTLE_DELAY_MS);

        self.refresh_preload(now);
        self.rearm_autoplay(now);
        true
    }

    pub fn navigate(&mut self, direction: Direction, now: Millis) -> bool {
        if self.view.len() < 2 {
            return false;
        }

        match direction.step(self.current_index, self.view.len()) {
            Some(index) => self.go_to(index, now),
            None => false,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Millis) {
        if self.torn_down || self.hovered == hovered {
            return;
        }

        self.hovered = hovered;
        self.rearm_autoplay(now);
    }

    pub fn open_modal(&mut self, now: Millis) -> bool {
        self.open_modal_at(self.current_index, now)
    }

    pub fn open_modal_at(&mut self, index: usize, now: Millis) -> bool {
        if self.torn_down || self.selected_index.is_some() || index >= self.view.len() {
            return false;
        }

        self.selected_index = Some(index);
        self.rearm_autoplay(now);
        true
    }

    pub fn close_modal(&mut self, now: Millis) {
        if self.selected_index.take().is_some() {
            self.preload.release_retired();
            self.rearm_autoplay(now);
        }
    }

    /// Moves the modal cursor only; the main view keeps its own position.
    pub fn modal_navigate(&mut self, direction: Direction) {
        let Some(selected) = self.selected_index else {
            return;
        };

        if let Some(index) = direction.step(selected, self.view.len()) {
            self.selected_index = Some(index);
        }
    }

    pub fn handle_modal_key(&mut self, key: ModalKey, now: Millis) -> bool {
        if self.torn_down || self.selected_index.is_none() {
            return false;
        }

        match key {
            ModalKey::Close => self.close_modal(now),
            ModalKey::Step(direction) => self.modal_navigate(direction),
        }
        true
    }

    pub fn drain_preload_commands(&mut self) -> Vec<PreloadCommand> {
        self.preload.drain_commands()
    }

    /// Cancels every pending deadline and drops preload hints. Later calls are no-ops.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.settle_at = None;
        self.autoplay_at = None;
        self.preload.release_all();
    }

    fn settle(&mut self, at: Millis) {
        self.settle_at = None;
        self.outgoing_index = None;
        self.transitioning = false;
        self.rearm_autoplay(at);
    }

    fn autoplay_tick(&mut self, at: Millis) {
        self.autoplay_at = None;
        if !self.navigate(Direction::Next, at) {
            self.rearm_autoplay(at);
        }
    }

    fn rearm_autoplay(&mut self, now: Millis) {
        self.autoplay_at = if self.autoplay_enabled() {
            self.current_item().map(|item| now + dwell(item.kind))
        } else {
            None
        };
    }

    fn refresh_preload(&mut self, now: Millis) {
        if self.view.len() <= 1 {
            self.preload.retire_all(now);
            return;
        }

        let Some(next) = Direction::Next.step(self.current_index, self.view.len()) else {
            return;
        };
        if let Some(item) = self.view.get(&self.catalog, next) {
            debug!("portfolio preload {}", item.src);
            self.preload.request(item, now);
        }
    }
}

impl Scheduled for CarouselEngine {
    fn next_deadline(&self) -> Option<Millis> {
        [self.settle_at, self.autoplay_at, self.preload.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Each deadline fires at its own scheduled time so re-armed timers never drift.
    fn advance(&mut self, now: Millis) {
        while let Some(due) = self.next_deadline().filter(|deadline| *deadline <= now) {
            if self.settle_at == Some(due) {
                self.settle(due);
            } else if self.autoplay_at == Some(due) {
                self.autoplay_tick(due);
            } else {
                self.preload.release_due(due);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{item, mixed_catalog};
    use crate::catalog::MediaKind;
    use crate::media::{IMAGE_DWELL_MS, VIDEO_DWELL_MS};
    use crate::preload::PRELOAD_RELEASE_GRACE_MS;

    fn engine_with(kinds: &[MediaKind]) -> CarouselEngine {
        let items = kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| item(index as u32 + 1, *kind, PortfolioCategory::Widescreen))
            .collect();
        let catalog = Catalog::new(items).expect("ids are unique");
        CarouselEngine::new(Rc::new(catalog), 0)
    }

    fn images(count: usize) -> Vec<MediaKind> {
        vec![MediaKind::Image; count]
    }

    #[test]
    fn category_switch_filters_and_resets() {
        let mut engine = CarouselEngine::new(Rc::new(mixed_catalog()), 0);
        engine.navigate(Direction::Next, 0);
        engine.advance(SETTLE_DELAY_MS);
        assert_eq!(engine.current_index(), 1);

        engine.set_category(PortfolioCategory::Widescreen, 2_000);

        assert_eq!(engine.len(), 2);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.current_item().map(|item| item.id), Some(1));
        engine.navigate(Direction::Next, 2_000);
        assert_eq!(engine.current_item().map(|item| item.id), Some(4));
    }

    #[test]
    fn navigate_next_crossfades_then_settles() {
        let mut engine = engine_with(&images(3));

        assert!(engine.navigate(Direction::Next, 100));
        assert_eq!(engine.outgoing_index(), Some(0));
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_transitioning());
        assert_eq!(engine.phase(), CarouselPhase::Transitioning);

        engine.advance(100 + SETTLE_DELAY_MS - 1);
        assert!(engine.is_transitioning());

        engine.advance(100 + SETTLE_DELAY_MS);
        assert_eq!(engine.outgoing_index(), None);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn navigation_is_rejected_while_transitioning() {
        let mut engine = engine_with(&images(4));
        engine.go_to(2, 0);

        assert!(!engine.go_to(3, 10));
        assert!(!engine.navigate(Direction::Next, 10));
        assert!(!engine.navigate(Direction::Prev, 10));
        assert_eq!(engine.current_index(), 2);
        assert_eq!(engine.outgoing_index(), Some(0));
    }

    #[test]
    fn next_then_prev_round_trips() {
        let mut engine = engine_with(&images(5));
        engine.go_to(3, 0);
        engine.advance(SETTLE_DELAY_MS);

        engine.navigate(Direction::Next, 2_000);
        engine.advance(2_000 + SETTLE_DELAY_MS);
        engine.navigate(Direction::Prev, 4_000);
        engine.advance(4_000 + SETTLE_DELAY_MS);

        assert_eq!(engine.current_index(), 3);
        assert_eq!(engine.outgoing_index(), None);
    }

    #[test]
    fn navigation_wraps_around_both_ends() {
        let mut engine = engine_with(&images(3));

        engine.navigate(Direction::Prev, 0);
        assert_eq!(engine.current_index(), 2);
        engine.advance(SETTLE_DELAY_MS);

        engine.navigate(Direction::Next, 2_000);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn invalid_targets_are_no_ops() {
        let mut engine = engine_with(&images(3));

        assert!(!engine.go_to(0, 0));
        assert!(!engine.go_to(3, 0));
        assert_eq!(engine.current_index(), 0);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn set_category_resets_mid_transition_and_closes_modal() {
        let mut engine = CarouselEngine::new(Rc::new(mixed_catalog()), 0);
        engine.go_to(3, 0);
        engine.open_modal(10);

        engine.set_category(PortfolioCategory::Square, 20);

        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.outgoing_index(), None);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.settle_deadline(), None);
        assert!(!engine.is_modal_open());
    }

    #[test]
    fn reselecting_active_category_still_resets() {
        let mut engine = CarouselEngine::new(Rc::new(mixed_catalog()), 0);
        engine.go_to(2, 0);
        engine.open_modal(5);

        engine.set_category(PortfolioCategory::All, 10);

        assert_eq!(engine.len(), 4);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.outgoing_index(), None);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.settle_deadline(), None);
        assert!(!engine.is_modal_open());
        assert!(engine.go_to(1, 20));
    }

    #[test]
    fn video_dwells_eight_seconds() {
        let mut engine = engine_with(&[MediaKind::Video, MediaKind::Image, MediaKind::Image]);
        assert_eq!(engine.autoplay_deadline(), Some(VIDEO_DWELL_MS));

        engine.advance(VIDEO_DWELL_MS - 1);
        assert_eq!(engine.current_index(), 0);

        engine.advance(VIDEO_DWELL_MS);
        assert_eq!(engine.current_index(), 1);
        assert!(engine.is_transitioning());
    }

    #[test]
    fn image_dwells_five_seconds() {
        let mut engine = engine_with(&[MediaKind::Image, MediaKind::Video]);
        assert_eq!(engine.autoplay_deadline(), Some(IMAGE_DWELL_MS));

        engine.advance(IMAGE_DWELL_MS);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn dwell_follows_the_newly_active_item() {
        let mut engine = engine_with(&[MediaKind::Video, MediaKind::Image, MediaKind::Video]);

        engine.advance(VIDEO_DWELL_MS + SETTLE_DELAY_MS);
        assert_eq!(engine.current_index(), 1);
        assert_eq!(
            engine.autoplay_deadline(),
            Some(VIDEO_DWELL_MS + SETTLE_DELAY_MS + IMAGE_DWELL_MS)
        );
    }

    #[test]
    fn autoplay_never_fires_while_hovered() {
        let mut engine = engine_with(&images(3));
        engine.set_hovered(true, 100);

        assert_eq!(engine.autoplay_deadline(), None);
        engine.advance(60_000);
        assert_eq!(engine.current_index(), 0);

        engine.set_hovered(false, 60_000);
        assert_eq!(engine.autoplay_deadline(), Some(60_000 + IMAGE_DWELL_MS));
    }

    #[test]
    fn autoplay_is_suspended_while_modal_is_open() {
        let mut engine = engine_with(&images(3));
        engine.open_modal(0);

        engine.advance(60_000);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.autoplay_deadline(), None);

        engine.close_modal(60_000);
        assert_eq!(engine.autoplay_deadline(), Some(60_000 + IMAGE_DWELL_MS));
    }

    #[test]
    fn autoplay_is_disarmed_during_manual_transition() {
        let mut engine = engine_with(&images(3));
        engine.go_to(2, 1_000);

        assert_eq!(engine.autoplay_deadline(), None);
        engine.advance(1_000 + SETTLE_DELAY_MS);
        assert_eq!(
            engine.autoplay_deadline(),
            Some(1_000 + SETTLE_DELAY_MS + IMAGE_DWELL_MS)
        );
    }

    #[test]
    fn autoplay_transitions_never_overlap() {
        let mut engine = engine_with(&[
            MediaKind::Video,
            MediaKind::Image,
            MediaKind::Image,
            MediaKind::Video,
        ]);
        let mut changes: Vec<Millis> = Vec::new();
        let mut last_index = engine.current_index();

        let mut now = 0;
        while now <= 120_000 {
            engine.advance(now);
            if engine.current_index() != last_index {
                changes.push(now);
                last_index = engine.current_index();
            }
            now += 100;
        }

        assert!(changes.len() > 4);
        for pair in changes.windows(2) {
            assert!(pair[1] - pair[0] >= SETTLE_DELAY_MS + IMAGE_DWELL_MS);
        }
    }

    #[test]
    fn modal_cursor_is_independent_of_main_view() {
        let mut engine = engine_with(&images(5));
        assert!(engine.open_modal_at(2, 0));

        engine.handle_modal_key(ModalKey::Step(Direction::Next), 10);
        engine.handle_modal_key(ModalKey::Step(Direction::Next), 20);
        assert_eq!(engine.selected_index(), Some(4));
        assert_eq!(engine.current_index(), 0);
        assert!(!engine.is_transitioning());

        engine.handle_modal_key(ModalKey::Close, 30);
        assert_eq!(engine.selected_index(), None);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn modal_wraps_backwards() {
        let mut engine = engine_with(&images(3));
        engine.open_modal(0);

        engine.modal_navigate(Direction::Prev);
        assert_eq!(engine.selected_item().map(|item| item.id), Some(3));
    }

    #[test]
    fn modal_keys_are_ignored_when_closed() {
        let mut engine = engine_with(&images(3));
        assert!(!engine.handle_modal_key(ModalKey::Step(Direction::Next), 0));
        assert_eq!(engine.selected_index(), None);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut engine = engine_with(&images(3));
        engine.set_hovered(true, 0);

        assert!(engine.navigate(Direction::Next, 10));
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn empty_view_suspends_navigation() {
        let catalog = Catalog::new(vec![item(1, MediaKind::Image, PortfolioCategory::Square)])
            .expect("ids are unique");
        let mut engine = CarouselEngine::new(Rc::new(catalog), 0);

        engine.set_category(PortfolioCategory::Vertical, 0);

        assert_eq!(engine.phase(), CarouselPhase::Empty);
        assert_eq!(engine.current_item(), None);
        assert!(!engine.navigate(Direction::Next, 0));
        assert!(!engine.open_modal(0));
        assert_eq!(engine.autoplay_deadline(), None);
        assert!(engine.indicator().is_empty());
    }

    #[test]
    fn single_item_never_autoplays() {
        let mut engine = engine_with(&images(1));

        assert!(!engine.navigate(Direction::Next, 0));
        assert_eq!(engine.autoplay_deadline(), None);
    }

    #[test]
    fn next_item_is_preloaded() {
        let mut engine = engine_with(&images(3));

        let commands = engine.drain_preload_commands();
        assert_eq!(
            commands,
            vec![PreloadCommand::Insert {
                src: "/assets/test/2.png".to_string(),
                kind: MediaKind::Image,
            }]
        );

        engine.navigate(Direction::Next, 0);
        assert_eq!(
            engine.drain_preload_commands(),
            vec![PreloadCommand::Insert {
                src: "/assets/test/3.png".to_string(),
                kind: MediaKind::Image,
            }]
        );
    }

    #[test]
    fn former_neighbour_released_after_grace() {
        let mut engine = engine_with(&images(3));
        engine.set_hovered(true, 0);
        engine.drain_preload_commands();

        engine.navigate(Direction::Next, 0);
        engine.drain_preload_commands();

        engine.advance(PRELOAD_RELEASE_GRACE_MS - 1);
        assert!(engine.drain_preload_commands().is_empty());

        engine.advance(PRELOAD_RELEASE_GRACE_MS);
        assert_eq!(
            engine.drain_preload_commands(),
            vec![PreloadCommand::Remove {
                src: "/assets/test/2.png".to_string(),
            }]
        );
        assert_eq!(engine.next_deadline(), None);
    }

    #[test]
    fn category_switch_cancels_pending_release() {
        let mut engine = CarouselEngine::new(Rc::new(mixed_catalog()), 0);
        engine.navigate(Direction::Next, 0);
        engine.drain_preload_commands();

        engine.set_category(PortfolioCategory::Square, 100);

        let commands = engine.drain_preload_commands();
        assert!(commands.contains(&PreloadCommand::Remove {
            src: "/assets/test/2.png".to_string(),
        }));
        assert_eq!(engine.next_deadline(), None);
        engine.advance(100 + PRELOAD_RELEASE_GRACE_MS);
        assert!(engine.drain_preload_commands().is_empty());
    }

    #[test]
    fn closing_modal_releases_retired_hints() {
        let mut engine = engine_with(&images(3));
        engine.set_hovered(true, 0);
        engine.navigate(Direction::Next, 0);
        engine.advance(SETTLE_DELAY_MS);
        engine.drain_preload_commands();

        engine.open_modal(1_300);
        engine.close_modal(1_400);

        assert_eq!(
            engine.drain_preload_commands(),
            vec![PreloadCommand::Remove {
                src: "/assets/test/2.png".to_string(),
            }]
        );
        assert_eq!(engine.next_deadline(), None);
        engine.advance(PRELOAD_RELEASE_GRACE_MS);
        assert!(engine.drain_preload_commands().is_empty());
    }

    #[test]
    fn teardown_cancels_every_deadline() {
        let mut engine = engine_with(&images(3));
        engine.go_to(1, 0);
        engine.drain_preload_commands();

        engine.teardown();

        assert_eq!(engine.next_deadline(), None);
        assert!(!engine.go_to(2, 5_000));
        engine.advance(60_000);
        assert_eq!(engine.current_index(), 1);
        assert_eq!(engine.drain_preload_commands().len(), 2);
    }

    #[test]
    fn indicator_mirrors_pause_state() {
        let mut engine = engine_with(&[MediaKind::Video, MediaKind::Image]);
        assert!(engine.indicator()[0].running);

        engine.set_hovered(true, 0);
        let dots = engine.indicator();
        assert!(dots[0].active);
        assert!(!dots[0].running);
        assert_eq!(dots[0].duration_class, "duration-video");
    }
}
