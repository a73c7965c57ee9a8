use chrono::Utc;
use common::validation::{lenient_string, numeric_id, required, trimmed, url};
use db::listing::{list_query, SortOrder, SortSpec};
use db::models::{
    resource::{ActiveModel, Column, Entity, Model},
    resource_comment,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, EntityTrait,
    TransactionTrait,
};
use serde::Deserialize;

use crate::{ListParams, ServiceError};

pub const RESOURCE_SORT: SortSpec<Column> = SortSpec {
    fields: &[("title", Column::Title), ("created_at", Column::CreatedAt)],
    default_field: Column::CreatedAt,
    default_order: SortOrder::Desc,
};

const SEARCH_COLUMNS: [Column; 2] = [Column::Title, Column::Description];

/// Request body for resource create and update. `id` is only read on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceCommentInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub resource_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

pub struct ResourceService;

impl ResourceService {
    pub async fn list(
        db: &DatabaseConnection,
        params: &ListParams,
    ) -> Result<Vec<Model>, ServiceError> {
        let query = list_query::<Entity>(
            &RESOURCE_SORT,
            &SEARCH_COLUMNS,
            params.search.as_deref(),
            params.sort.as_deref(),
            params.order.as_deref(),
        );
        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, raw_id: Option<&str>) -> Result<Model, ServiceError> {
        let id = numeric_id(raw_id, "Invalid resource ID")?;
        Self::find(db, id).await
    }

    async fn find(db: &DatabaseConnection, id: i64) -> Result<Model, ServiceError> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Resource not found"))
    }

    /// Validates `title` and `link` (presence first, then URL format) and inserts.
    pub async fn create(db: &DatabaseConnection, input: ResourceInput) -> Result<Model, ServiceError> {
        let (title, link) = match (trimmed(input.title.as_deref()), trimmed(input.link.as_deref())) {
            (Some(title), Some(link)) => (title, link),
            _ => return Err(ServiceError::validation("Title and link are required")),
        };
        let link = url(&link, "Invalid URL format")?;
        let description = input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let now = Utc::now();
        let created = ActiveModel {
            title: Set(title),
            description: Set(description),
            link: Set(link),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!(resource_id = created.id, "Resource created");
        Ok(created)
    }

    /// Sparse update: only fields present in the payload are written.
    pub async fn update(db: &DatabaseConnection, input: ResourceInput) -> Result<Model, ServiceError> {
        let id = numeric_id(input.id.as_deref(), "Valid Resource ID required")?;
        Self::find(db, id).await?;

        let mut active = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(title) = input.title.as_deref() {
            active.title = Set(required(Some(title), "Title cannot be empty")?);
            changed = true;
        }
        if let Some(description) = input.description.as_deref() {
            active.description = Set(description.trim().to_string());
            changed = true;
        }
        if let Some(link) = input.link.as_deref() {
            active.link = Set(url(link.trim(), "Invalid URL format")?);
            changed = true;
        }

        if !changed {
            return Err(ServiceError::validation("No fields to update"));
        }

        active.updated_at = Set(Utc::now());
        active.update(db).await?;

        Self::find(db, id).await
    }

    /// Deletes the resource and its comments atomically.
    pub async fn delete(db: &DatabaseConnection, raw_id: Option<&str>) -> Result<(), ServiceError> {
        if trimmed(raw_id).is_none() {
            return Err(ServiceError::validation("Resource ID is required"));
        }
        let id = numeric_id(raw_id, "Invalid resource ID")?;
        Self::find(db, id).await?;

        let txn = db.begin().await?;
        let comments = resource_comment::Model::delete_all_for_resource(&txn, id).await?;
        Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(resource_id = id, comments, "Resource deleted");
        Ok(())
    }

    /// Comments of a resource, oldest first. An unknown resource has no comments.
    pub async fn list_comments(
        db: &DatabaseConnection,
        raw_resource_id: Option<&str>,
    ) -> Result<Vec<resource_comment::Model>, ServiceError> {
        if trimmed(raw_resource_id).is_none() {
            return Err(ServiceError::validation("resource_id parameter is required"));
        }
        let resource_id = numeric_id(raw_resource_id, "Invalid resource ID")?;
        Ok(resource_comment::Model::find_all_for_resource(db, resource_id).await?)
    }

    pub async fn create_comment(
        db: &DatabaseConnection,
        input: ResourceCommentInput,
    ) -> Result<resource_comment::Model, ServiceError> {
        let missing = "resource_id, author and text are required";
        let raw_resource_id = required(input.resource_id.as_deref(), missing)?;
        let author = required(input.author.as_deref(), missing)?;
        let text = required(input.text.as_deref(), missing)?;

        let resource_id = numeric_id(Some(&raw_resource_id), "Invalid resource ID")?;
        Self::find(db, resource_id).await?;

        let comment = resource_comment::Model::create(db, resource_id, &author, &text).await?;
        tracing::info!(resource_id, comment_id = comment.id, "Resource comment created");
        Ok(comment)
    }

    pub async fn delete_comment(
        db: &DatabaseConnection,
        raw_comment_id: Option<&str>,
    ) -> Result<(), ServiceError> {
        if trimmed(raw_comment_id).is_none() {
            return Err(ServiceError::validation("comment_id parameter is required"));
        }
        let comment_id = numeric_id(raw_comment_id, "Invalid comment ID")?;

        resource_comment::Entity::find_by_id(comment_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment not found"))?;
        resource_comment::Entity::delete_by_id(comment_id).exec(db).await?;

        Ok(())
    }
}
