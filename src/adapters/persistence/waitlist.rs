use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::{WaitlistEntry, WaitlistInsert},
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist row as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct WaitlistDb {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<WaitlistDb> for WaitlistEntry {
    fn from(row: WaitlistDb) -> Self {
        WaitlistEntry {
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn insert(&self, email: &str, created_at: DateTime<Utc>) -> AppResult<WaitlistInsert> {
        // ON CONFLICT leaves the existing row untouched and returns nothing.
        let res = sqlx::query_as::<_, WaitlistDb>(
            r#"
                INSERT INTO waitlist (email, created_at)
                VALUES ($1, $2)
                ON CONFLICT (email) DO NOTHING
                RETURNING email, created_at
            "#,
        )
        .bind(email)
        .bind(created_at)
        .fetch_optional(&self.pool)
        .await;

        insert_outcome(res)
    }
}

fn insert_outcome(res: Result<Option<WaitlistDb>, sqlx::Error>) -> AppResult<WaitlistInsert> {
    match res {
        Ok(Some(row)) => Ok(WaitlistInsert::Inserted(row.into())),
        Ok(None) => Ok(WaitlistInsert::AlreadyListed),
        // Unique violation can still surface if the constraint is not the conflict target.
        Err(err)
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation()) =>
        {
            Ok(WaitlistInsert::AlreadyListed)
        }
        Err(err) => Err(AppError::from(err)),
    }
}
