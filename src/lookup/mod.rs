//! Background lookup plumbing: the blocking HTTP client, the record payload,
//! and the worker thread the UI talks to over channels.

mod client;
mod commands;
mod record;
mod worker;

pub use client::{LookupClient, LookupError};
pub use record::{AvatarDecoration, LookupRecord, NO_BIO_FALLBACK};

pub(crate) use commands::{LookupCommand, LookupResponse};
pub(crate) use worker::spawn;
