use crate::seed::Seeder;
use crate::seeds::student::ignore_conflict;
use chrono::{Duration, NaiveDate};
use fake::{
    Fake,
    faker::{lorem::en::Sentence, name::en::FirstName},
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use services::{
    ServiceError,
    week_service::{WeekCommentInput, WeekInput, WeekService},
};

const TOPICS: [&str; 6] = [
    "Getting started",
    "Ownership and borrowing",
    "Structs and enums",
    "Error handling",
    "Traits and generics",
    "Concurrency",
];

pub struct WeekSeeder;

#[async_trait::async_trait]
impl Seeder for WeekSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let first_monday = NaiveDate::from_ymd_opt(2025, 2, 3)
            .ok_or_else(|| ServiceError::Internal("invalid seed date".into()))?;

        for (n, topic) in TOPICS.iter().enumerate() {
            let week_id = format!("week-{}", n + 1);
            let start = first_monday + Duration::weeks(n as i64);

            ignore_conflict(
                WeekService::create(
                    db,
                    WeekInput {
                        week_id: Some(week_id.clone()),
                        title: Some((*topic).into()),
                        start_date: Some(start.format("%Y-%m-%d").to_string()),
                        description: Some(Sentence(6..14).fake()),
                        links: Some(json!([format!("https://example.com/slides/{week_id}")])),
                    },
                )
                .await,
            )?;

            for _ in 0..fastrand::usize(0..3) {
                WeekService::create_comment(
                    db,
                    WeekCommentInput {
                        week_id: Some(week_id.clone()),
                        author: Some(FirstName().fake()),
                        text: Some(Sentence(3..12).fake()),
                    },
                )
                .await?;
            }
        }
        Ok(())
    }
}
