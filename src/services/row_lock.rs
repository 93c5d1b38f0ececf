//! Write-first transactions.
//!
//! A transaction that reads before it writes has to upgrade its lock later,
//! and SQLite fails that upgrade with `SQLITE_BUSY` instead of waiting when
//! another connection is writing. Touching the target row first takes the
//! write lock up front (a row lock on PostgreSQL), so every read that follows
//! sees data no concurrent writer can change before commit.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Bump `updated_at` on the row whose `id` column equals `key`.
///
/// Returns whether the row exists.
pub async fn claim_row<E, C>(
    db: &C,
    id: E::Column,
    updated_at: E::Column,
    key: &str,
) -> Result<bool, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(updated_at, Expr::value(Utc::now()))
        .filter(id.eq(key))
        .exec(db)
        .await?;

    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::clusters;
    use crate::database::test_utils::setup_test_db;
    use sea_orm::{ActiveModelTrait, Set};

    #[tokio::test]
    async fn test_claim_row_reports_existence() {
        let db = setup_test_db().await;
        let created = clusters::ActiveModel {
            id: Set("c-1".to_string()),
            name: Set("North".to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
        }
        .insert(&db)
        .await
        .unwrap();

        let claimed = claim_row::<clusters::Entity, _>(
            &db,
            clusters::Column::Id,
            clusters::Column::UpdatedAt,
            "c-1",
        )
        .await
        .unwrap();
        assert!(claimed);

        let missing = claim_row::<clusters::Entity, _>(
            &db,
            clusters::Column::Id,
            clusters::Column::UpdatedAt,
            "c-2",
        )
        .await
        .unwrap();
        assert!(!missing);

        let reloaded = clusters::Entity::find_by_id("c-1")
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert!(reloaded.updated_at >= created.updated_at);
    }
}
