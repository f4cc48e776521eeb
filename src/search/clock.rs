use std::time::Instant;

/// Source of the current instant for deadline checks.
///
/// The engine only polls the clock between temperature levels, so a clock
/// never preempts a running level.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time via `Instant::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
