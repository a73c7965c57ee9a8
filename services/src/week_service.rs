use chrono::Utc;
use common::validation::{date, lenient_string, numeric_id, required, trimmed};
use db::listing::{list_query, SortOrder, SortSpec};
use db::models::{
    week::{ActiveModel, Column, Entity, Model},
    week_comment,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, EntityTrait,
    TransactionTrait,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{ListParams, ServiceError};

pub const WEEK_SORT: SortSpec<Column> = SortSpec {
    fields: &[
        ("title", Column::Title),
        ("start_date", Column::StartDate),
        ("created_at", Column::CreatedAt),
    ],
    default_field: Column::StartDate,
    default_order: SortOrder::Asc,
};

const SEARCH_COLUMNS: [Column; 2] = [Column::Title, Column::Description];

const MISSING_FIELDS: &str = "Missing required fields";
const WEEK_ID_REQUIRED: &str = "week_id is required";
const INVALID_DATE: &str = "Invalid start_date format";

/// Request body for week create and update; on update `week_id` selects the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub week_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub links: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekCommentInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub week_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
}

pub struct WeekService;

impl WeekService {
    pub async fn list(
        db: &DatabaseConnection,
        params: &ListParams,
    ) -> Result<Vec<Model>, ServiceError> {
        let query = list_query::<Entity>(
            &WEEK_SORT,
            &SEARCH_COLUMNS,
            params.search.as_deref(),
            params.sort.as_deref(),
            params.order.as_deref(),
        );
        Ok(query.all(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, raw_week_id: Option<&str>) -> Result<Model, ServiceError> {
        let week_id = required(raw_week_id, WEEK_ID_REQUIRED)?;
        Self::find(db, &week_id).await
    }

    async fn find(db: &DatabaseConnection, week_id: &str) -> Result<Model, ServiceError> {
        Entity::find_by_id(week_id.to_owned())
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Week not found"))
    }

    /// Required fields, then date format, then key uniqueness.
    ///
    /// `links` is stored as given when it is an array and as `[]` otherwise.
    pub async fn create(db: &DatabaseConnection, input: WeekInput) -> Result<Model, ServiceError> {
        let week_id = required(input.week_id.as_deref(), MISSING_FIELDS)?;
        let title = required(input.title.as_deref(), MISSING_FIELDS)?;
        let start_date = required(input.start_date.as_deref(), MISSING_FIELDS)?;
        let description = required(input.description.as_deref(), MISSING_FIELDS)?;

        let start_date = date(&start_date, INVALID_DATE)?;

        if Entity::find_by_id(week_id.clone()).one(db).await?.is_some() {
            return Err(ServiceError::Conflict("week_id already exists".into()));
        }

        let links = match input.links {
            Some(links @ Value::Array(_)) => links,
            _ => Value::Array(Vec::new()),
        };

        let now = Utc::now();
        let created = ActiveModel {
            week_id: Set(week_id),
            title: Set(title),
            start_date: Set(start_date),
            description: Set(description),
            links: Set(links),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .map_err(|err| ServiceError::conflict_on_unique(err, "week_id already exists"))?;

        tracing::info!(week_id = %created.week_id, "Week created");
        Ok(created)
    }

    /// Sparse update keyed by `week_id`; the refreshed row is returned.
    pub async fn update(db: &DatabaseConnection, input: WeekInput) -> Result<Model, ServiceError> {
        let week_id = required(input.week_id.as_deref(), WEEK_ID_REQUIRED)?;
        Self::find(db, &week_id).await?;

        let mut active = ActiveModel {
            week_id: Unchanged(week_id.clone()),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(title) = input.title.as_deref() {
            active.title = Set(required(Some(title), "Title cannot be empty")?);
            changed = true;
        }
        if let Some(start_date) = input.start_date.as_deref() {
            active.start_date = Set(date(start_date.trim(), INVALID_DATE)?);
            changed = true;
        }
        if let Some(description) = input.description.as_deref() {
            active.description = Set(required(Some(description), "Description cannot be empty")?);
            changed = true;
        }
        if let Some(links) = input.links {
            if !links.is_array() {
                return Err(ServiceError::validation("links must be an array"));
            }
            active.links = Set(links);
            changed = true;
        }

        if !changed {
            return Err(ServiceError::validation("No fields to update"));
        }

        active.updated_at = Set(Utc::now());
        active.update(db).await?;

        Self::find(db, &week_id).await
    }

    /// Deletes the week and its comments atomically.
    pub async fn delete(db: &DatabaseConnection, raw_week_id: Option<&str>) -> Result<(), ServiceError> {
        let week_id = required(raw_week_id, WEEK_ID_REQUIRED)?;
        Self::find(db, &week_id).await?;

        let txn = db.begin().await?;
        let comments = week_comment::Model::delete_all_for_week(&txn, &week_id).await?;
        Entity::delete_by_id(week_id.clone()).exec(&txn).await?;
        txn.commit().await?;

        tracing::info!(week_id = %week_id, comments, "Week deleted");
        Ok(())
    }

    /// Comments of a week, oldest first. An unknown week has no comments.
    pub async fn list_comments(
        db: &DatabaseConnection,
        raw_week_id: Option<&str>,
    ) -> Result<Vec<week_comment::Model>, ServiceError> {
        let week_id = required(raw_week_id, WEEK_ID_REQUIRED)?;
        Ok(week_comment::Model::find_all_for_week(db, &week_id).await?)
    }

    pub async fn create_comment(
        db: &DatabaseConnection,
        input: WeekCommentInput,
    ) -> Result<week_comment::Model, ServiceError> {
        let week_id = required(input.week_id.as_deref(), MISSING_FIELDS)?;
        let author = required(input.author.as_deref(), MISSING_FIELDS)?;
        let text = required(input.text.as_deref(), MISSING_FIELDS)?;

        Self::find(db, &week_id).await?;

        let comment = week_comment::Model::create(db, &week_id, &author, &text).await?;
        tracing::info!(week_id = %week_id, comment_id = comment.id, "Week comment created");
        Ok(comment)
    }

    pub async fn delete_comment(
        db: &DatabaseConnection,
        raw_comment_id: Option<&str>,
    ) -> Result<(), ServiceError> {
        if trimmed(raw_comment_id).is_none() {
            return Err(ServiceError::validation("commentId is required"));
        }
        let comment_id = numeric_id(raw_comment_id, "Invalid comment ID")?;

        week_comment::Entity::find_by_id(comment_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment not found"))?;
        week_comment::Entity::delete_by_id(comment_id).exec(db).await?;

        Ok(())
    }
}
