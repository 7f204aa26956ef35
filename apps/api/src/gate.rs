//! Rewarded-view gate for premium actions (export/share).
//!
//! The old app kept a module-level `adWatched` flag and a DOM countdown.
//! Here the gate is an explicit service: `start_view` issues a ticket with
//! an unlock time, `redeem` consumes it exactly once and answers
//! `Ok(Grant)` or a denial carrying the remaining seconds. The clock is
//! injected so the countdown is testable without sleeping.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Injected time source.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A started rewarded view, waiting out its countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewTicket {
    pub id: Uuid,
    pub unlock_at: DateTime<Utc>,
    pub countdown_secs: i64,
}

/// Countdown progress for a pending ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewStatus {
    pub unlocked: bool,
    pub remaining_secs: i64,
}

/// Proof that a view ran to completion. Single use — redeeming removes
/// the ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub ticket_id: Uuid,
    pub granted_at: DateTime<Utc>,
}

pub struct RewardGate {
    clock: Box<dyn Clock>,
    countdown: Duration,
    tickets: Mutex<HashMap<Uuid, DateTime<Utc>>>,
}

impl RewardGate {
    pub fn new(clock: Box<dyn Clock>, countdown_secs: i64) -> Self {
        RewardGate {
            clock,
            countdown: Duration::seconds(countdown_secs),
            tickets: Mutex::new(HashMap::new()),
        }
    }

    /// Starts a rewarded view and returns its ticket.
    pub fn start_view(&self) -> ViewTicket {
        let id = Uuid::new_v4();
        let unlock_at = self.clock.now() + self.countdown;
        self.tickets
            .lock()
            .expect("gate mutex poisoned")
            .insert(id, unlock_at);
        ViewTicket {
            id,
            unlock_at,
            countdown_secs: self.countdown.num_seconds(),
        }
    }

    /// Non-consuming countdown check, for the "Continue" button.
    pub fn status(&self, id: Uuid) -> Result<ViewStatus, AppError> {
        let tickets = self.tickets.lock().expect("gate mutex poisoned");
        let unlock_at = tickets
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Gate ticket {id} not found")))?;
        let remaining = remaining_secs(*unlock_at, self.clock.now());
        Ok(ViewStatus {
            unlocked: remaining == 0,
            remaining_secs: remaining,
        })
    }

    /// Consumes the ticket if its countdown has elapsed. A denied redeem
    /// leaves the ticket in place so the user can retry after waiting.
    pub fn redeem(&self, id: Uuid) -> Result<Grant, AppError> {
        let mut tickets = self.tickets.lock().expect("gate mutex poisoned");
        let unlock_at = tickets
            .get(&id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Gate ticket {id} not found")))?;

        let now = self.clock.now();
        let remaining = remaining_secs(unlock_at, now);
        if remaining > 0 {
            return Err(AppError::GateDenied {
                remaining_secs: remaining,
            });
        }

        tickets.remove(&id);
        Ok(Grant {
            ticket_id: id,
            granted_at: now,
        })
    }
}

/// Whole seconds left, rounded up, never negative.
fn remaining_secs(unlock_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (unlock_at - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + 999) / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Manually advanced clock.
    struct TestClock {
        epoch: DateTime<Utc>,
        offset_secs: AtomicI64,
    }

    impl TestClock {
        fn new() -> Self {
            TestClock {
                epoch: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                    .unwrap()
                    .with_timezone(&Utc),
                offset_secs: AtomicI64::new(0),
            }
        }
    }

    impl Clock for &'static TestClock {
        fn now(&self) -> DateTime<Utc> {
            self.epoch + Duration::seconds(self.offset_secs.load(Ordering::SeqCst))
        }
    }

    fn gate_with_clock() -> (&'static TestClock, RewardGate) {
        let clock: &'static TestClock = Box::leak(Box::new(TestClock::new()));
        let gate = RewardGate::new(Box::new(clock), 5);
        (clock, gate)
    }

    #[test]
    fn test_redeem_before_countdown_is_denied_with_remaining_secs() {
        let (clock, gate) = gate_with_clock();
        let ticket = gate.start_view();

        clock.offset_secs.store(2, Ordering::SeqCst);
        match gate.redeem(ticket.id) {
            Err(AppError::GateDenied { remaining_secs }) => assert_eq!(remaining_secs, 3),
            other => panic!("expected denial, got {other:?}"),
        }
    }

    #[test]
    fn test_redeem_after_countdown_grants_exactly_once() {
        let (clock, gate) = gate_with_clock();
        let ticket = gate.start_view();

        clock.offset_secs.store(5, Ordering::SeqCst);
        let grant = gate.redeem(ticket.id).expect("elapsed ticket must grant");
        assert_eq!(grant.ticket_id, ticket.id);

        // Single use: the ticket is gone.
        assert!(matches!(gate.redeem(ticket.id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_denied_redeem_keeps_the_ticket() {
        let (clock, gate) = gate_with_clock();
        let ticket = gate.start_view();

        assert!(gate.redeem(ticket.id).is_err());
        clock.offset_secs.store(6, Ordering::SeqCst);
        assert!(gate.redeem(ticket.id).is_ok(), "ticket survives a denied redeem");
    }

    #[test]
    fn test_status_counts_down_without_consuming() {
        let (clock, gate) = gate_with_clock();
        let ticket = gate.start_view();

        let s = gate.status(ticket.id).unwrap();
        assert!(!s.unlocked);
        assert_eq!(s.remaining_secs, 5);

        clock.offset_secs.store(5, Ordering::SeqCst);
        let s = gate.status(ticket.id).unwrap();
        assert!(s.unlocked);
        assert_eq!(s.remaining_secs, 0);

        // status never consumes
        assert!(gate.status(ticket.id).is_ok());
    }

    #[test]
    fn test_unknown_ticket_is_not_found() {
        let (_clock, gate) = gate_with_clock();
        assert!(matches!(gate.redeem(Uuid::new_v4()), Err(AppError::NotFound(_))));
        assert!(matches!(gate.status(Uuid::new_v4()), Err(AppError::NotFound(_))));
    }
}
