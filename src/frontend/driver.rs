use super::dom::now_ms;
use crate::{Millis, Scheduled};
use gloo_timers::callback::Timeout;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use yew::Callback;

/// Runs a [`Scheduled`] state machine on real browser timers.
///
/// After every change the single pending `Timeout` is replaced by one aimed at the
/// machine's earliest deadline; dropping the old one cancels it. Timer callbacks
/// hold a weak handle, so an unmounted component never gets touched.
pub struct Driver<T: Scheduled> {
    state: RefCell<T>,
    timer: RefCell<Option<Timeout>>,
    flush: Box<dyn Fn(&mut T)>,
    on_change: Callback<()>,
}

impl<T: Scheduled + 'static> Driver<T> {
    pub fn new(state: T, on_change: Callback<()>) -> Self {
        Self::with_flush(state, on_change, |_| {})
    }

    /// `flush` runs after every change, before the timer is re-armed, to push side
    /// effects the machine queued out to the page.
    pub fn with_flush(
        state: T,
        on_change: Callback<()>,
        flush: impl Fn(&mut T) + 'static,
    ) -> Self {
        Self {
            state: RefCell::new(state),
            timer: RefCell::new(None),
            flush: Box::new(flush),
            on_change,
        }
    }

    pub fn state(&self) -> Ref<'_, T> {
        self.state.borrow()
    }

    pub fn update<R>(self: &Rc<Self>, change: impl FnOnce(&mut T, Millis) -> R) -> R {
        let result = change(&mut *self.state.borrow_mut(), now_ms());
        self.sync();
        self.on_change.emit(());
        result
    }

    pub fn sync(self: &Rc<Self>) {
        let deadline = {
            let mut state = self.state.borrow_mut();
            (self.flush)(&mut *state);
            state.next_deadline()
        };

        let timer = deadline.map(|deadline| {
            let delay = deadline.saturating_sub(now_ms()).min(Millis::from(u32::MAX)) as u32;
            let driver = Rc::downgrade(self);
            Timeout::new(delay, move || {
                if let Some(driver) = driver.upgrade() {
                    driver.update(|state, now| state.advance(now));
                }
            })
        });

        *self.timer.borrow_mut() = timer;
    }

    /// Cancels the pending timer and lets `finish` release whatever the machine holds.
    pub fn stop(&self, finish: impl FnOnce(&mut T)) {
        self.timer.borrow_mut().take();
        let mut state = self.state.borrow_mut();
        finish(&mut *state);
        (self.flush)(&mut *state);
    }
}
