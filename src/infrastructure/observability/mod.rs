mod init_tracing;
mod request_id;

pub use init_tracing::{TracingConfig, init_tracing};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
