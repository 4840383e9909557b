// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::ActionError;

/// In-flight flag for one control. While a guard is alive the control is
/// disabled; dropping the guard re-enables it on every exit path.
#[derive(Debug, Clone, Default)]
pub struct ActionGate {
    in_flight: Arc<AtomicBool>,
}

impl ActionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn try_acquire(&self) -> Result<GateGuard, ActionError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ActionError::Busy)?;
        Ok(GateGuard {
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

#[derive(Debug)]
pub struct GateGuard {
    in_flight: Arc<AtomicBool>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_busy_until_release() {
        let gate = ActionGate::new();
        let guard = gate.try_acquire().expect("first");
        assert!(gate.is_in_flight());
        assert_eq!(gate.try_acquire().map(|_| ()), Err(ActionError::Busy));
        drop(guard);
        assert!(!gate.is_in_flight());
        assert!(gate.try_acquire().is_ok());
    }

    #[test]
    fn clones_share_the_flag() {
        let gate = ActionGate::new();
        let observer = gate.clone();
        let _guard = gate.try_acquire().expect("acquire");
        assert!(observer.is_in_flight());
    }
}
