//! Reference Data Repository
//!
//! One set of CRUD functions serves all reference kinds. The kind is a
//! closed enum whose table names are compile-time constants; the SQL below
//! only ever interpolates those fixed identifiers, never caller input.

use super::{RepoError, RepoResult};
use shared::models::{ReferenceItem, ReferenceItemCreate, ReferenceItemUpdate, ReferenceKind};
use sqlx::SqlitePool;

/// The employee FK column guarding deletion, if the kind is linked
const fn employee_fk_column(kind: ReferenceKind) -> Option<&'static str> {
    match kind {
        ReferenceKind::Nationality => Some("nationality_id"),
        ReferenceKind::Unit => Some("unit_id"),
        ReferenceKind::Rank => Some("rank_id"),
        ReferenceKind::Sponsor => Some("sponsor_id"),
        ReferenceKind::JobTitle => Some("job_title_id"),
        ReferenceKind::Item => None,
    }
}

pub async fn find_all(pool: &SqlitePool, kind: ReferenceKind) -> RepoResult<Vec<ReferenceItem>> {
    let sql = format!(r#"SELECT id, name FROM "{}" ORDER BY name"#, kind.table());
    let items = sqlx::query_as::<_, ReferenceItem>(&sql).fetch_all(pool).await?;
    Ok(items)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    kind: ReferenceKind,
    id: i64,
) -> RepoResult<Option<ReferenceItem>> {
    let sql = format!(r#"SELECT id, name FROM "{}" WHERE id = ?"#, kind.table());
    let item = sqlx::query_as::<_, ReferenceItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn find_by_name(
    pool: &SqlitePool,
    kind: ReferenceKind,
    name: &str,
) -> RepoResult<Option<ReferenceItem>> {
    let sql = format!(
        r#"SELECT id, name FROM "{}" WHERE name = ? LIMIT 1"#,
        kind.table()
    );
    let item = sqlx::query_as::<_, ReferenceItem>(&sql)
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(
    pool: &SqlitePool,
    kind: ReferenceKind,
    data: ReferenceItemCreate,
) -> RepoResult<ReferenceItem> {
    if find_by_name(pool, kind, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "{kind} '{}' already exists",
            data.name
        )));
    }

    let sql = format!(
        r#"INSERT INTO "{}" (name) VALUES (?) RETURNING id"#,
        kind.table()
    );
    let id: i64 = sqlx::query_scalar(&sql).bind(&data.name).fetch_one(pool).await?;

    find_by_id(pool, kind, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to create {kind}")))
}

pub async fn update(
    pool: &SqlitePool,
    kind: ReferenceKind,
    id: i64,
    data: ReferenceItemUpdate,
) -> RepoResult<ReferenceItem> {
    let existing = find_by_id(pool, kind, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("{kind} {id} not found")))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, kind, new_name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "{kind} '{new_name}' already exists"
        )));
    }

    let sql = format!(
        r#"UPDATE "{}" SET name = COALESCE(?1, name) WHERE id = ?2"#,
        kind.table()
    );
    sqlx::query(&sql).bind(&data.name).bind(id).execute(pool).await?;

    find_by_id(pool, kind, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("{kind} {id} not found")))
}

pub async fn delete(pool: &SqlitePool, kind: ReferenceKind, id: i64) -> RepoResult<bool> {
    let existing = find_by_id(pool, kind, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("{kind} {id} not found")))?;

    if let Some(column) = employee_fk_column(kind) {
        let sql = format!("SELECT COUNT(*) FROM employee WHERE {column} = ?");
        let count: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(pool).await?;
        if count > 0 {
            return Err(RepoError::Validation(format!(
                "{kind} '{}' is referenced by {count} employee(s)",
                existing.name
            )));
        }
    }

    let sql = format!(r#"DELETE FROM "{}" WHERE id = ?"#, kind.table());
    sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(true)
}
