use crate::seed::Seeder;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    user_service::{CreateStudent, UserService},
};

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        // Fixed student
        let fixed = CreateStudent {
            name: Some("Demo Student".into()),
            student_id: Some("u00000002".into()),
            email: Some("student@example.com".into()),
            password: Some("password123".into()),
        };
        ignore_conflict(UserService::create_student(db, fixed).await)?;

        // Random students
        for _ in 0..10 {
            let input = CreateStudent {
                name: Some(Name().fake()),
                student_id: Some(format!("u{:08}", fastrand::u32(..100_000_000))),
                email: Some(SafeEmail().fake()),
                password: Some("password123".into()),
            };
            ignore_conflict(UserService::create_student(db, input).await)?;
        }
        Ok(())
    }
}

/// Re-running the seeder must not fail on rows that already exist.
pub fn ignore_conflict<T>(result: Result<T, ServiceError>) -> Result<(), ServiceError> {
    match result {
        Ok(_) | Err(ServiceError::Conflict(_)) => Ok(()),
        Err(err) => Err(err),
    }
}
