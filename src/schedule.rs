/// Milliseconds on whatever clock the caller drives the state machines with.
pub type Millis = u64;

/// State machines that own their pending timers as deadlines.
///
/// Nothing here reads a clock: the host asks for the earliest deadline, waits
/// until then with whatever timer it has, and calls `advance` with the time it
/// woke up.
pub trait Scheduled {
    fn next_deadline(&self) -> Option<Millis>;

    /// Fires every deadline that is due by `now`.
    fn advance(&mut self, now: Millis);
}
