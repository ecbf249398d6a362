//! Auth feature covering login, the forced password-rotation interstitial,
//! and session gating. The session token lives in the durable browser tier;
//! the reset stash lives in the transient tier and must never outlast the
//! interstitial. This module touches security boundaries and must avoid
//! logging credential material.
//!
//! Flow overview: login exchanges credentials for a token (after the
//! anti-forgery cookie is in place) and persists the session. A 403 carrying
//! the reset-required flag diverts into the interstitial instead, stashing
//! the submitted credentials for the set-password screen to replay.

pub(crate) mod client;
pub(crate) mod csrf;
mod guards;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;

pub(crate) use guards::{ProtectedRoute, PublicRoute};
