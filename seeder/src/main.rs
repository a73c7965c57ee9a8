use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    admin::AdminSeeder, resource::ResourceSeeder, student::StudentSeeder, week::WeekSeeder,
};
use anyhow::Context;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

/// `seeder` creates the initial admin. `seeder --demo` also fills the database with
/// sample students, resources and weeks.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let demo = std::env::args().skip(1).any(|arg| arg == "--demo");

    let db = db::connect().await.context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to apply migrations")?;

    let mut seeders: Vec<(Box<dyn Seeder + Send + Sync>, &str)> =
        vec![(Box::new(AdminSeeder), "Admin")];
    if demo {
        seeders.push((Box::new(StudentSeeder), "Student"));
        seeders.push((Box::new(ResourceSeeder), "Resource"));
        seeders.push((Box::new(WeekSeeder), "Week"));
    }

    for (seeder, name) in &seeders {
        run_seeder(seeder.as_ref(), name, &db).await?;
    }
    Ok(())
}
