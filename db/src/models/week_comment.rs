use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "week_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub week_id: String,
    pub author: String,
    pub text: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::week::Entity",
        from = "Column::WeekId",
        to = "super::week::Column::WeekId",
        on_delete = "Cascade"
    )]
    Week,
}

impl Related<super::week::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Week.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        week_id: &str,
        author: &str,
        text: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            week_id: Set(week_id.to_owned()),
            author: Set(author.to_owned()),
            text: Set(text.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Comments of one week, oldest first.
    pub async fn find_all_for_week<C: ConnectionTrait>(
        db: &C,
        week_id: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::WeekId.eq(week_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn delete_all_for_week<C: ConnectionTrait>(
        db: &C,
        week_id: &str,
    ) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::WeekId.eq(week_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
