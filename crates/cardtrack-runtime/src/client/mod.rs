mod metrics;
mod routes;

pub use metrics::MetricsClient;
pub use routes::Route;
