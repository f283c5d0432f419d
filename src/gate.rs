#[derive(Clone, Debug)]
pub struct ThrottleGate {
    limit_ms: f64,
    reopens_at: Option<f64>,
}

impl ThrottleGate {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms: f64::from(limit_ms),
            reopens_at: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        if self.reopens_at.is_some_and(|reopens_at| now_ms < reopens_at) {
            return false;
        }
        self.reopens_at = Some(now_ms + self.limit_ms);
        true
    }
}

/// Trailing debounce bookkeeping. Every call supersedes the pending one; only the
/// ticket of the most recent call may settle, and only once.
#[derive(Clone, Debug, Default)]
pub struct DebounceGate {
    latest: u64,
    pending: bool,
}

impl DebounceGate {
    pub fn call(&mut self) -> u64 {
        self.latest += 1;
        self.pending = true;
        self.latest
    }

    pub fn settle(&mut self, ticket: u64) -> bool {
        if ticket != self.latest || !self.pending {
            return false;
        }
        self.pending = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_fires_on_the_leading_call() {
        let mut gate = ThrottleGate::new(16);
        assert!(gate.admit(1_000.0));
    }

    #[test]
    fn throttle_drops_calls_inside_the_window_and_reopens_after() {
        let mut gate = ThrottleGate::new(16);

        assert!(gate.admit(0.0));
        assert!(!gate.admit(5.0));
        assert!(!gate.admit(15.9));
        assert!(gate.admit(16.0));
        assert!(!gate.admit(20.0));
        assert!(gate.admit(40.0));
    }

    #[test]
    fn zero_limit_throttle_never_drops() {
        let mut gate = ThrottleGate::new(0);
        assert!(gate.admit(3.0));
        assert!(gate.admit(3.0));
    }

    #[test]
    fn last_call_in_a_burst_wins() {
        let mut gate = DebounceGate::default();

        let first = gate.call();
        let second = gate.call();
        let last = gate.call();

        assert!(!gate.settle(first));
        assert!(!gate.settle(second));
        assert!(gate.settle(last));
        assert!(!gate.settle(last));
    }

    #[test]
    fn debounce_settles_again_after_a_new_call() {
        let mut gate = DebounceGate::default();

        let ticket = gate.call();
        assert!(gate.settle(ticket));

        let next = gate.call();
        assert!(!gate.settle(ticket));
        assert!(gate.settle(next));
    }
}
