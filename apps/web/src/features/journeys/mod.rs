//! Journey-template feature. Wire types and draft validation live in the
//! `journey_forms` crate; this module adds the API client.

pub(crate) mod client;
