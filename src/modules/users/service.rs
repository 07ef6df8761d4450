use anyhow::{Context, anyhow};
use tillpoint_core::AppError;
use tillpoint_db::Session;
use tillpoint_models::{CreateUserDto, User, UserId};
use tracing::instrument;

pub struct UserService;

impl UserService {
    /// Only the name is recorded on the span; the email stays out of logs.
    #[instrument(skip_all, fields(name = %dto.name))]
    pub async fn create_user(session: &mut Session, dto: CreateUserDto) -> Result<User, AppError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&dto.name)
            .bind(&dto.email)
            .execute(&mut **session)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return AppError::conflict(anyhow!("A user with this email already exists"));
                }
                AppError::database(anyhow::Error::new(e).context("Failed to insert user"))
            })?;

        let id = UserId::new(result.last_insert_id());

        Self::get_user(session, id)
            .await?
            .ok_or_else(|| AppError::internal(anyhow!("User {} missing after insert", id)))
    }

    /// Returns `None` when no user has this ID.
    #[instrument(skip(session))]
    pub async fn get_user(session: &mut Session, id: UserId) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, created_at
               FROM users
               WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&mut **session)
        .await
        .context("Failed to fetch user by ID")
        .map_err(AppError::database)?;

        Ok(user)
    }
}
