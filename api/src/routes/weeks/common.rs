use common::validation::lenient_string;
use serde::Deserialize;
use services::ListParams;

use crate::response::ApiError;
use crate::routes::common::discriminator;

/// Which table a `/api/weeks` request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekResource {
    Weeks,
    Comments,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeekQuery {
    pub resource: Option<String>,
    pub week_id: Option<String>,
    pub id: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl WeekQuery {
    /// Missing or blank `resource` means `weeks`.
    pub fn resource(&self) -> Result<WeekResource, ApiError> {
        match discriminator(self.resource.as_deref()) {
            None | Some("weeks") => Ok(WeekResource::Weeks),
            Some("comments") => Ok(WeekResource::Comments),
            Some(_) => Err(ApiError::BadRequest(
                "Invalid resource. Use 'weeks' or 'comments'".into(),
            )),
        }
    }

    pub fn list_params(&self) -> ListParams {
        ListParams {
            search: self.search.clone(),
            sort: self.sort.clone(),
            order: self.order.clone(),
        }
    }
}

/// `DELETE` body; each id may also come from the query string.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub week_id: Option<String>,
    #[serde(default, alias = "commentId", deserialize_with = "lenient_string")]
    pub id: Option<String>,
}
