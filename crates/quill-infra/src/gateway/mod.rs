//! Post store gateways - in-memory and timeout-bounded wrappers.

mod memory;
mod timeout;

pub use memory::InMemoryPostGateway;
pub use timeout::TimeoutGateway;
