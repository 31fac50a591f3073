//! Backend library modules.
//!
//! The crate follows a hexagonal layout: the `domain` module owns entities,
//! ports, and application services; `inbound` and `outbound` adapters
//! translate between those ports and the outside world.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
