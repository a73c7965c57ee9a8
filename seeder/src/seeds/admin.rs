use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::{ServiceError, user_service::UserService};
use util::config;

/// The initial admin from `ADMIN_NAME` / `ADMIN_EMAIL` / `ADMIN_PASSWORD`.
/// Does nothing once any admin exists.
pub struct AdminSeeder;

#[async_trait::async_trait]
impl Seeder for AdminSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let email = config::admin_email();
        match UserService::ensure_admin(
            db,
            &config::admin_name(),
            &email,
            &config::admin_password(),
        )
        .await?
        {
            Some(admin) => tracing::info!(user_id = admin.id, email = %email, "Seeded admin"),
            None => tracing::info!("Admin already present, skipping"),
        }
        Ok(())
    }
}
