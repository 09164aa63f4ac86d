//! Single-flight refresh gate.
//!
//! The first caller to `enter` becomes the refresher; everyone arriving while
//! it runs gets a receiver that resolves with the refresher's outcome.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;

use crate::ClientError;

pub(crate) type Outcome = Result<String, ClientError>;

pub(crate) enum Ticket {
    Refresher,
    Waiter(oneshot::Receiver<Outcome>),
}

#[derive(Default)]
struct GateState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Outcome>>,
}

#[derive(Default)]
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_refreshing(&self) -> bool {
        self.lock().in_flight
    }

    pub fn waiting(&self) -> usize {
        self.lock().waiters.len()
    }

    pub(crate) fn enter(&self) -> Ticket {
        let mut state = self.lock();
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            Ticket::Waiter(rx)
        } else {
            state.in_flight = true;
            Ticket::Refresher
        }
    }

    /// Closes the cycle and hands `outcome` to every parked waiter.
    pub(crate) fn finish(&self, outcome: &Outcome) {
        let waiters = {
            let mut state = self.lock();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            // A dropped receiver means the caller went away
            let _ = waiter.send(outcome.clone());
        }
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_second_entrant_waits_for_refresher() {
        let gate = RefreshGate::new();

        assert!(matches!(gate.enter(), Ticket::Refresher));
        let Ticket::Waiter(rx) = gate.enter() else {
            panic!("second entrant must wait");
        };
        assert!(gate.is_refreshing());
        assert_eq!(gate.waiting(), 1);

        gate.finish(&Ok("fresh".to_string()));

        assert_eq!(block_on(rx).unwrap(), Ok("fresh".to_string()));
        assert!(!gate.is_refreshing());
        assert_eq!(gate.waiting(), 0);
    }

    #[test]
    fn test_failure_reaches_every_waiter() {
        let gate = RefreshGate::new();
        let _refresher = gate.enter();
        let receivers: Vec<_> = (0..3)
            .map(|_| match gate.enter() {
                Ticket::Waiter(rx) => rx,
                Ticket::Refresher => panic!("only one refresher per cycle"),
            })
            .collect();

        gate.finish(&Err(ClientError::SessionExpired));

        for rx in receivers {
            assert_eq!(block_on(rx).unwrap(), Err(ClientError::SessionExpired));
        }
    }

    #[test]
    fn test_new_cycle_after_finish() {
        let gate = RefreshGate::new();
        let _ = gate.enter();
        gate.finish(&Ok("a".into()));
        assert!(matches!(gate.enter(), Ticket::Refresher));
    }
}
