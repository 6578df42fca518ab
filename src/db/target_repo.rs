use crate::models::TargetKind;
use sqlx::{PgPool, Row};

/// Resolves a generic (kind, id) reference to a concrete row. Engagement
/// tables carry no foreign key on `target_id`, so existence is checked here
/// at write time instead.
pub async fn target_exists(
    pool: &PgPool,
    kind: TargetKind,
    target_id: i64,
) -> Result<bool, sqlx::Error> {
    let sql = match kind {
        TargetKind::Post => "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1) AS found",
        TargetKind::Comment => "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1) AS found",
        TargetKind::Story => "SELECT EXISTS(SELECT 1 FROM stories WHERE id = $1) AS found",
    };

    let row = sqlx::query(sql).bind(target_id).fetch_one(pool).await?;

    Ok(row.get::<bool, _>("found"))
}
