//! Waitlist persistence.

use pandas_core::WaitlistSignup;
use sqlx::PgPool;

/// Record a signup in `waitlist_signups`, returning the new row id.
pub async fn insert(pool: &PgPool, signup: &WaitlistSignup) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO waitlist_signups (name, email, phone, company, user_type, region)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(&signup.name)
    .bind(signup.email.as_str())
    .bind(signup.phone.as_deref())
    .bind(signup.company.as_deref())
    .bind(signup.user_type_or_default())
    .bind(signup.region.as_deref())
    .fetch_one(pool)
    .await
}
