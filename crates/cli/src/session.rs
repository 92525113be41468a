// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parent authentication for the admin commands.
//!
//! A [`ParentSession`] can only be obtained by presenting the household PIN.
//! Admin handlers take one by reference, so an unauthenticated call does not
//! type-check. The session lives for one command invocation.

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

/// Proof that the parent PIN was checked for this invocation.
#[derive(Debug)]
pub struct ParentSession {
    _private: (),
}

impl ParentSession {
    /// Checks `pin` against the configured parent PIN.
    ///
    /// # Errors
    ///
    /// [`Error::PinRequired`] when no PIN was supplied, [`Error::IncorrectPin`]
    /// when it does not match.
    pub fn login(config: &Config, pin: Option<&str>) -> Result<Self> {
        let pin = pin.map(str::trim).filter(|p| !p.is_empty());
        let Some(pin) = pin else {
            return Err(Error::PinRequired);
        };
        if pin != config.parent_pin {
            warn!("admin login refused: incorrect PIN");
            return Err(Error::IncorrectPin);
        }
        debug!("admin session opened");
        Ok(ParentSession { _private: () })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        ParentSession { _private: () }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
