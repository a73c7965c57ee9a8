use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "resource_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub resource_id: i64,
    pub author: String,
    pub text: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource::Entity",
        from = "Column::ResourceId",
        to = "super::resource::Column::Id",
        on_delete = "Cascade"
    )]
    Resource,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        resource_id: i64,
        author: &str,
        text: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            resource_id: Set(resource_id),
            author: Set(author.to_owned()),
            text: Set(text.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Comments of one resource, oldest first.
    pub async fn find_all_for_resource<C: ConnectionTrait>(
        db: &C,
        resource_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::ResourceId.eq(resource_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn delete_all_for_resource<C: ConnectionTrait>(
        db: &C,
        resource_id: i64,
    ) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::ResourceId.eq(resource_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
