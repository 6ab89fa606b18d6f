pub mod http;
pub mod probe;

pub use http::HttpTransport;
pub use probe::{RemoteProber, RemoteResult};
