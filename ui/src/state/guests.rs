pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;

/// Guest count that can never leave `[MIN_GUESTS, MAX_GUESTS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestCounter {
    value: u8,
}

impl Default for GuestCounter {
    fn default() -> Self {
        Self { value: MIN_GUESTS }
    }
}

impl GuestCounter {
    pub fn new(initial: u8) -> Self {
        Self {
            value: initial.clamp(MIN_GUESTS, MAX_GUESTS),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn increment(&mut self) {
        self.set_exact(self.value.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_exact(self.value.saturating_sub(1));
    }

    pub fn set_exact(&mut self, n: u8) {
        self.value = n.clamp(MIN_GUESTS, MAX_GUESTS);
    }

    pub fn can_increment(&self) -> bool {
        self.value < MAX_GUESTS
    }

    pub fn can_decrement(&self) -> bool {
        self.value > MIN_GUESTS
    }

    pub fn options() -> impl Iterator<Item = u8> + Clone {
        MIN_GUESTS..=MAX_GUESTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_stops_at_one() {
        let mut g = GuestCounter::new(1);
        g.decrement();
        assert_eq!(g.value(), 1);
        assert!(!g.can_decrement());
    }

    #[test]
    fn increment_stops_at_max() {
        let mut g = GuestCounter::new(MAX_GUESTS);
        g.increment();
        assert_eq!(g.value(), MAX_GUESTS);
        assert!(!g.can_increment());
    }

    #[test]
    fn steps_inside_bounds() {
        let mut g = GuestCounter::new(2);
        g.increment();
        g.increment();
        assert_eq!(g.value(), 4);
        g.decrement();
        assert_eq!(g.value(), 3);
        assert!(g.can_increment() && g.can_decrement());
    }

    #[test]
    fn exact_values_are_clamped() {
        let mut g = GuestCounter::default();
        g.set_exact(0);
        assert_eq!(g.value(), MIN_GUESTS);
        g.set_exact(200);
        assert_eq!(g.value(), MAX_GUESTS);
        g.set_exact(5);
        assert_eq!(g.value(), 5);
        assert_eq!(GuestCounter::new(0).value(), MIN_GUESTS);
    }

    #[test]
    fn options_cover_the_whole_range() {
        let opts: Vec<u8> = GuestCounter::options().collect();
        assert_eq!(opts.first(), Some(&MIN_GUESTS));
        assert_eq!(opts.last(), Some(&MAX_GUESTS));
        assert_eq!(opts.len(), usize::from(MAX_GUESTS - MIN_GUESTS + 1));
    }
}
