use common::validation::lenient_string;
use serde::Deserialize;
use services::ListParams;

use crate::response::ApiError;
use crate::routes::common::discriminator;

/// Query string accepted by `/api/resources`.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    pub action: Option<String>,
    pub id: Option<String>,
    pub resource_id: Option<String>,
    pub comment_id: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ResourceQuery {
    pub fn action(&self) -> Option<&str> {
        discriminator(self.action.as_deref())
    }

    pub fn list_params(&self) -> ListParams {
        ListParams {
            search: self.search.clone(),
            sort: self.sort.clone(),
            order: self.order.clone(),
        }
    }
}

/// `DELETE` body; ids may also be given in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub comment_id: Option<String>,
}

pub fn unknown_action(action: &str) -> ApiError {
    ApiError::BadRequest(format!("Unknown action '{action}'"))
}
