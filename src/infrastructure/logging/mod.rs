pub mod boundary_logger;
pub mod subscriber;
pub mod trace_context;

pub use boundary_logger::{BoundaryLogger, Timer};
pub use subscriber::{init_file_logging, init_stderr_logging};
pub use trace_context::TraceContext;
