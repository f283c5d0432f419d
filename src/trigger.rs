#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const ANY_VISIBILITY: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
    };

    /// A section counts as current once it reaches the band just below the top 20%.
    pub const SCROLL_SPY: Self = Self {
        threshold: 0.3,
        root_margin: "-20% 0px -70% 0px",
    };

    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "-80px 0px -50% 0px",
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub target: usize,
    /// Position of the entry inside the batch that fired it.
    pub position: usize,
}

#[derive(Clone, Debug)]
pub struct OneShotLedger {
    fired: Vec<bool>,
}

impl OneShotLedger {
    pub fn new(targets: usize) -> Self {
        Self {
            fired: vec![false; targets],
        }
    }

    /// Feeds one observer batch of `(target, intersecting)` entries, in batch order,
    /// and returns the targets firing for the first time.
    pub fn admit<I>(&mut self, batch: I) -> Vec<Trigger>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        let mut triggers = Vec::new();

        for (position, (target, intersecting)) in batch.into_iter().enumerate() {
            if !intersecting {
                continue;
            }
            let Some(fired) = self.fired.get_mut(target) else {
                continue;
            };
            if *fired {
                continue;
            }
            *fired = true;
            triggers.push(Trigger { target, position });
        }

        triggers
    }

    pub fn fired_count(&self) -> usize {
        self.fired.iter().filter(|fired| **fired).count()
    }

    pub fn is_exhausted(&self) -> bool {
        self.fired.iter().all(|fired| *fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::stagger_delay;

    #[test]
    fn positions_follow_batch_order() {
        let mut ledger = OneShotLedger::new(4);

        let triggers = ledger.admit([(2, true), (0, false), (3, true)]);

        assert_eq!(
            triggers,
            vec![
                Trigger { target: 2, position: 0 },
                Trigger { target: 3, position: 2 },
            ]
        );
        let delays = triggers
            .iter()
            .map(|trigger| stagger_delay(trigger.position, 100))
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 200]);
    }

    #[test]
    fn targets_fire_at_most_once() {
        let mut ledger = OneShotLedger::new(2);

        assert_eq!(ledger.admit([(0, true)]).len(), 1);
        assert!(ledger.admit([(0, true), (0, true)]).is_empty());
        assert_eq!(ledger.fired_count(), 1);
        assert!(!ledger.is_exhausted());

        ledger.admit([(1, true)]);
        assert!(ledger.is_exhausted());
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut ledger = OneShotLedger::new(1);

        assert!(ledger.admit([(5, true)]).is_empty());
        assert_eq!(ledger.fired_count(), 0);
    }
}
