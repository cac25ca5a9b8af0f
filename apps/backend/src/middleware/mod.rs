pub mod request_trace;
pub mod structured_logger;

pub use request_trace::{RequestId, RequestTrace};
pub use structured_logger::{ActingUser, StructuredLogger};
