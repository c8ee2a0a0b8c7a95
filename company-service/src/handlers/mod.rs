pub mod companies;
pub mod health;

pub use companies::{add_company, get_companies};
pub use health::{health_check, metrics_endpoint, readiness_check, root};
