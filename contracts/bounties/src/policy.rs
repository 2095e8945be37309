//! # Ledger Policies
//!
//! Who may release escrow, and when a contribution becomes refundable, are
//! kept out of the ledger core behind two small traits:
//!
//! - [`PayoutAuthority`] decides whether a caller may authorize payouts.
//!   [`OwnerArbiter`] grants it to the configured owner only. A multisig or
//!   contributor-vote policy is another implementation of the same trait.
//! - [`RefundWindow`] compares the current ledger clock against the moment a
//!   contribution was made. [`RefundTimeout`] implements it for both ledger
//!   sequence numbers and ledger timestamps.

use soroban_sdk::{Address, Env};

use crate::types::{Contribution, LedgerConfig, RefundTimeout};
use crate::Error;

/// Capability to authorize a payout out of bounty escrow.
pub trait PayoutAuthority {
    /// Returns `Ok(())` when `caller` may release funds.
    ///
    /// Implementations must call `require_auth` on every address whose
    /// signature they rely on.
    fn authorize(&self, env: &Env, caller: &Address) -> Result<(), Error>;
}

/// Single trusted arbiter: the ledger owner.
pub struct OwnerArbiter {
    owner: Address,
}

impl OwnerArbiter {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.owner.clone())
    }
}

impl PayoutAuthority for OwnerArbiter {
    fn authorize(&self, _env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

/// Clock comparison deciding whether a contribution may be refunded.
pub trait RefundWindow {
    /// `min_elapsed` is a caller-supplied lower bound in the window's own
    /// unit. The effective window is the larger of the two.
    fn has_elapsed(&self, env: &Env, contribution: &Contribution, min_elapsed: u64) -> bool;
}

impl RefundWindow for RefundTimeout {
    fn has_elapsed(&self, env: &Env, contribution: &Contribution, min_elapsed: u64) -> bool {
        let (required, elapsed) = match *self {
            RefundTimeout::Ledgers(ledgers) => (
                u64::from(ledgers),
                u64::from(env.ledger().sequence().saturating_sub(contribution.ledger)),
            ),
            RefundTimeout::Seconds(seconds) => (
                seconds,
                env.ledger().timestamp().saturating_sub(contribution.timestamp),
            ),
        };
        elapsed >= required.max(min_elapsed)
    }
}
