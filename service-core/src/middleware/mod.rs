pub mod metrics;
pub mod tracing;

pub use metrics::http_metrics_middleware;
pub use tracing::{REQUEST_ID_HEADER, request_id_middleware};
