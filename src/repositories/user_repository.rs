//! Repositorio de usuarios

use sqlx::PgPool;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::models::user::{User, UserFilters};
use crate::utils::errors::AppError;
use crate::utils::query::{self, Page, Paginated, QueryFilter};

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &UserFilters) -> Result<Paginated<User>, AppError> {
        let mut filter = QueryFilter::new();
        filter
            .search(
                &["user_name_new", "user_full_name"],
                filters.search.as_deref(),
            )
            .eq("user_active", filters.user_active)
            .eq("read_only", filters.read_only);

        let page = Page::new(filters.page, filters.per_page);
        let result = query::paginate(&self.pool, "users", &filter, "oid DESC", page).await?;
        Ok(result)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE oid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Busca un usuario activo por nombre (login)
    pub async fn find_active_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE user_name_new = $1 AND user_active = 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn username_exists(
        &self,
        username: &str,
        exclude_oid: Option<i64>,
    ) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE user_name_new = $1 AND oid <> COALESCE($2, -1))",
        )
        .bind(username)
        .bind(exclude_oid)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// La contraseña llega ya hasheada desde el controller
    pub async fn create(
        &self,
        request: &CreateUserRequest,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                user_name_new, user_password, user_ssn, user_full_name,
                user_active, read_only
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.user_name_new)
        .bind(password_hash)
        .bind(request.user_ssn)
        .bind(&request.user_full_name)
        .bind(request.user_active.map(i64::from).unwrap_or(0))
        .bind(request.read_only.map(i64::from).unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateUserRequest,
        password_hash: Option<String>,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                user_name_new = COALESCE($2, user_name_new),
                user_password = COALESCE($3, user_password),
                user_ssn = COALESCE($4, user_ssn),
                user_full_name = COALESCE($5, user_full_name),
                user_active = COALESCE($6, user_active),
                read_only = COALESCE($7, read_only)
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.user_name_new)
        .bind(password_hash)
        .bind(request.user_ssn)
        .bind(&request.user_full_name)
        .bind(request.user_active.map(i64::from))
        .bind(request.read_only.map(i64::from))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE oid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    /// Invierte el flag de usuario activo
    pub async fn toggle_status(&self, id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET user_active = CASE WHEN user_active = 1 THEN 0 ELSE 1 END
            WHERE oid = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }
}
