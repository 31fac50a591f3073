//! Inbound adapters translating external protocols into domain port calls.

pub mod http;
