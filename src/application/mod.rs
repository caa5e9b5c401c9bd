//! Application layer orchestrating calls to the payments service.
//!
//! `Dispatcher` turns one operator action into the one or two HTTP calls it
//! needs, through whatever `PaymentsTransport` it was given.

pub mod dispatcher;
