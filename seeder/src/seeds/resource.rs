use crate::seed::Seeder;
use fake::{
    Fake,
    faker::{lorem::en::Sentence, name::en::FirstName},
};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    resource_service::{ResourceCommentInput, ResourceInput, ResourceService},
};

const RESOURCES: [(&str, &str); 5] = [
    ("The Rust Programming Language", "https://doc.rust-lang.org/book/"),
    ("Rust by Example", "https://doc.rust-lang.org/rust-by-example/"),
    ("Rustlings", "https://github.com/rust-lang/rustlings"),
    ("The Cargo Book", "https://doc.rust-lang.org/cargo/"),
    ("Asynchronous Programming in Rust", "https://rust-lang.github.io/async-book/"),
];

pub struct ResourceSeeder;

#[async_trait::async_trait]
impl Seeder for ResourceSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        for (title, link) in RESOURCES {
            let resource = ResourceService::create(
                db,
                ResourceInput {
                    id: None,
                    title: Some(title.into()),
                    description: Some(Sentence(4..10).fake()),
                    link: Some(link.into()),
                },
            )
            .await?;

            for _ in 0..fastrand::usize(0..4) {
                ResourceService::create_comment(
                    db,
                    ResourceCommentInput {
                        resource_id: Some(resource.id.to_string()),
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
