//! Data models for the user record cache
//!
//! The cache itself is generic over the record type; [`UserRecord`] is the
//! concrete snapshot type the authentication layer stores in it.

pub mod record;

pub use record::UserRecord;
