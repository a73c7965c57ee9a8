use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use common::validation::{self, lenient_string, numeric_id, required, trimmed};
use db::listing::{list_query, SortOrder, SortSpec};
use db::models::user::{ActiveModel, Column, Entity, Model, Role};
use rand::rngs::OsRng;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};
use serde::Deserialize;
use validator::Validate;

use crate::{ListParams, ServiceError};

pub const STUDENT_SORT: SortSpec<Column> = SortSpec {
    fields: &[
        ("name", Column::Name),
        ("email", Column::Email),
        ("created_at", Column::CreatedAt),
    ],
    default_field: Column::CreatedAt,
    default_order: SortOrder::Desc,
};

const SEARCH_COLUMNS: [Column; 3] = [Column::Name, Column::Email, Column::StudentId];

const EMAIL_TAKEN: &str = "Email already exists";
const STUDENT_NOT_FOUND: &str = "Student not found";
const INVALID_STUDENT_ID: &str = "Invalid student ID";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateStudent {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(required(message = "Missing required fields"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(
        required(message = "Missing required fields"),
        email(message = "Invalid email")
    )]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(required(message = "Missing required fields"))]
    pub password: Option<String>,
}

impl CreateStudent {
    /// Trims every text field and turns blank values into `None` so that
    /// `required` also rejects whitespace-only input. Passwords are kept verbatim.
    fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name.as_deref()),
            student_id: trimmed(self.student_id.as_deref()),
            email: trimmed(self.email.as_deref()),
            password: self.password.filter(|p| !p.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub student_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(email(message = "Invalid email"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPassword {
    #[serde(default, deserialize_with = "lenient_string")]
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangePassword {
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_password: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub new_password: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub confirm_password: Option<String>,
}

pub struct UserService;

impl UserService {
    pub fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))
    }

    pub fn verify_password(user: &Model, password: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    pub async fn list_students(
        db: &DatabaseConnection,
        params: &ListParams,
    ) -> Result<Vec<Model>, ServiceError> {
        let query = list_query::<Entity>(
            &STUDENT_SORT,
            &SEARCH_COLUMNS,
            params.search.as_deref(),
            params.sort.as_deref(),
            params.order.as_deref(),
        )
        .filter(Column::Role.eq(Role::Student));

        Ok(query.all(db).await?)
    }

    pub async fn get_student(db: &DatabaseConnection, raw_id: &str) -> Result<Model, ServiceError> {
        let id = numeric_id(Some(raw_id), INVALID_STUDENT_ID)?;
        Self::find_student(db, id).await
    }

    async fn find_student(db: &DatabaseConnection, id: i64) -> Result<Model, ServiceError> {
        Model::find_student(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(STUDENT_NOT_FOUND))
    }

    pub async fn create_student(
        db: &DatabaseConnection,
        input: CreateStudent,
    ) -> Result<Model, ServiceError> {
        let input = input.normalized();
        input.validate()?;

        let (Some(name), Some(email), Some(password)) = (input.name, input.email, input.password)
        else {
            return Err(ServiceError::validation("Missing required fields"));
        };

        if Model::find_by_email(db, &email).await?.is_some() {
            return Err(ServiceError::Conflict(EMAIL_TAKEN.into()));
        }

        let hash = Self::hash_password(&password)?;
        let student = Model::create(
            db,
            &name,
            input.student_id.as_deref(),
            &email,
            &hash,
            Role::Student,
        )
        .await
        .map_err(|err| ServiceError::conflict_on_unique(err, EMAIL_TAKEN))?;

        tracing::info!(user_id = student.id, "Student created");
        Ok(student)
    }

    /// Sparse update of profile fields. A blank `student_id` clears it.
    pub async fn update_student(
        db: &DatabaseConnection,
        raw_id: &str,
        input: UpdateStudent,
    ) -> Result<Model, ServiceError> {
        let id = numeric_id(Some(raw_id), INVALID_STUDENT_ID)?;
        let existing = Self::find_student(db, id).await?;

        let input = UpdateStudent {
            email: input.email.map(|e| e.trim().to_string()),
            ..input
        };
        input.validate()?;

        let mut active = ActiveModel {
            id: Unchanged(id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(name) = input.name.as_deref() {
            active.name = Set(required(Some(name), "Name cannot be empty")?);
            changed = true;
        }
        if let Some(student_id) = input.student_id.as_deref() {
            active.student_id = Set(trimmed(Some(student_id)));
            changed = true;
        }
        if let Some(email) = input.email {
            if email != existing.email && Model::find_by_email(db, &email).await?.is_some() {
                return Err(ServiceError::Conflict(EMAIL_TAKEN.into()));
            }
            active.email = Set(email);
            changed = true;
        }

        if !changed {
            return Err(ServiceError::validation("No fields to update"));
        }

        active.updated_at = Set(Utc::now());
        active
            .update(db)
            .await
            .map_err(|err| ServiceError::conflict_on_unique(err, EMAIL_TAKEN))?;

        Self::find_student(db, id).await
    }

    /// Admin password reset; the current password is not required.
    pub async fn reset_password(
        db: &DatabaseConnection,
        raw_id: &str,
        input: ResetPassword,
    ) -> Result<(), ServiceError> {
        let id = numeric_id(Some(raw_id), INVALID_STUDENT_ID)?;
        let new_password = input
            .new_password
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ServiceError::validation("new_password is required"))?;
        Self::find_student(db, id).await?;

        Self::store_password(db, id, &new_password).await
    }

    pub async fn delete_student(db: &DatabaseConnection, raw_id: &str) -> Result<(), ServiceError> {
        let id = numeric_id(Some(raw_id), INVALID_STUDENT_ID)?;
        Self::find_student(db, id).await?;

        Entity::delete_by_id(id).exec(db).await?;
        tracing::info!(user_id = id, "Student deleted");
        Ok(())
    }

    /// Checks credentials. Unknown email and wrong password are indistinguishable.
    pub async fn login(db: &DatabaseConnection, input: LoginRequest) -> Result<Model, ServiceError> {
        let email = trimmed(input.email.as_deref());
        let password = input.password.filter(|p| !p.is_empty());
        let (Some(email), Some(password)) = (email, password) else {
            return Err(ServiceError::validation("Missing email or password"));
        };
        let email = validation::email(&email, "Invalid email")?;

        match Model::find_by_email(db, &email).await? {
            Some(user) if Self::verify_password(&user, &password) => Ok(user),
            _ => {
                tracing::warn!(email = %email, "Failed login attempt");
                Err(ServiceError::Unauthorized("Invalid credentials".into()))
            }
        }
    }

    pub async fn find_user(db: &DatabaseConnection, id: i64) -> Result<Model, ServiceError> {
        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))
    }

    /// Self-service password change for the authenticated user.
    pub async fn change_password(
        db: &DatabaseConnection,
        user_id: i64,
        input: ChangePassword,
    ) -> Result<(), ServiceError> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());
        let (Some(current), Some(new), Some(confirm)) = (
            present(input.current_password),
            present(input.new_password),
            present(input.confirm_password),
        ) else {
            return Err(ServiceError::validation("Missing required fields"));
        };

        if new != confirm {
            return Err(ServiceError::validation("Passwords do not match"));
        }

        let user = Self::find_user(db, user_id).await?;
        if !Self::verify_password(&user, &current) {
            return Err(ServiceError::Unauthorized("Current password is incorrect".into()));
        }

        Self::store_password(db, user_id, &new).await
    }

    async fn store_password(db: &DatabaseConnection, id: i64, password: &str) -> Result<(), ServiceError> {
        let hash = Self::hash_password(password)?;
        ActiveModel {
            id: Unchanged(id),
            password_hash: Set(hash),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(db)
        .await?;

        tracing::info!(user_id = id, "Password updated");
        Ok(())
    }

    /// Creates the initial admin unless one already exists. Returns the new admin, or
    /// `None` when nothing had to be done.
    pub async fn ensure_admin(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<Model>, ServiceError> {
        if Model::admin_exists(db).await? {
            return Ok(None);
        }

        let hash = Self::hash_password(password)?;
        let admin = Model::create(db, name, None, email, &hash, Role::Admin)
            .await
            .map_err(|err| ServiceError::conflict_on_unique(err, EMAIL_TAKEN))?;

        tracing::info!(user_id = admin.id, "Admin account created");
        Ok(Some(admin))
    }
}
