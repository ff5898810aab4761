//! # Deferred value
//!
//! Keystrokes land in [`Deferred::set`] immediately, but the value the form renders and
//! validates against is only replaced once the typing settles. Each `set` bumps a
//! generation counter; a timer started for that generation calls
//! [`Deferred::commit`], which is a no-op if a newer keystroke arrived meanwhile.
//! The timer itself belongs to the caller, so the policy does not depend on any
//! rendering cadence.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deferred<T> {
    latest: T,
    settled: T,
    generation: u64,
}

impl<T: Clone> Deferred<T> {
    pub fn new(value: T) -> Self {
        Self {
            latest: value.clone(),
            settled: value,
            generation: 0,
        }
    }

    /// Record a new pending value and return its generation.
    pub fn set(&mut self, value: T) -> u64 {
        self.latest = value;
        self.generation += 1;
        self.generation
    }

    /// Modify the pending value in place.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> u64 {
        f(&mut self.latest);
        self.generation += 1;
        self.generation
    }

    /// Publish the pending value if `generation` is still the newest one.
    pub fn commit(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.settled = self.latest.clone();
        true
    }

    /// Publish the pending value unconditionally.
    pub fn flush(&mut self) -> &T {
        self.settled = self.latest.clone();
        &self.settled
    }

    /// Replace both values at once, dropping anything pending.
    pub fn reset(&mut self, value: T) {
        self.latest = value.clone();
        self.settled = value;
        self.generation += 1;
    }

    pub fn latest(&self) -> &T {
        &self.latest
    }

    pub fn settled(&self) -> &T {
        &self.settled
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: Clone + PartialEq> Deferred<T> {
    pub fn is_pending(&self) -> bool {
        self.latest != self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_generation_commits() {
        let mut value = Deferred::new(String::new());

        let first = value.set("a".to_string());
        let second = value.set("ab".to_string());
        assert!(value.is_pending());
        assert_eq!(value.settled(), "");

        // The timer of the first keystroke fires late and is ignored.
        assert!(!value.commit(first));
        assert_eq!(value.settled(), "");

        assert!(value.commit(second));
        assert_eq!(value.settled(), "ab");
        assert!(!value.is_pending());
    }

    #[test]
    fn test_flush_publishes_pending_value() {
        let mut value = Deferred::new(0);
        value.update(|v| *v += 5);
        assert_eq!(*value.flush(), 5);
        assert_eq!(*value.settled(), 5);
    }

    #[test]
    fn test_reset_invalidates_pending_timers() {
        let mut value = Deferred::new(1);
        let generation = value.set(2);
        value.reset(0);

        assert!(!value.commit(generation));
        assert_eq!(*value.latest(), 0);
        assert_eq!(*value.settled(), 0);
    }
}
