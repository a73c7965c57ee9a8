pub mod error;
pub mod resource_service;
pub mod user_service;
pub mod week_service;

pub use error::ServiceError;

use serde::Deserialize;

/// Query-string options shared by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}
