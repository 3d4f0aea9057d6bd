//! Department Repository

use super::{RepoError, RepoResult};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let departments =
        sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY name")
            .fetch_all(pool)
            .await?;
    Ok(departments)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Department>> {
    let department =
        sqlx::query_as::<_, Department>("SELECT id, name FROM department WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(department)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Department>> {
    let department =
        sqlx::query_as::<_, Department>("SELECT id, name FROM department WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(pool)
            .await?;
    Ok(department)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Department '{}' already exists",
            data.name
        )));
    }

    let id: i64 = sqlx::query_scalar("INSERT INTO department (name) VALUES (?) RETURNING id")
        .bind(&data.name)
        .fetch_one(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: DepartmentUpdate) -> RepoResult<Department> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))?;

    if let Some(ref new_name) = data.name
        && new_name != &existing.name
        && find_by_name(pool, new_name).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Department '{new_name}' already exists"
        )));
    }

    sqlx::query("UPDATE department SET name = COALESCE(?1, name) WHERE id = ?2")
        .bind(&data.name)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {id} not found")))?;

    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user WHERE department_id = ?")
        .bind(id)
        .fetch_one(pool)
        .await?;
    if user_count > 0 {
        return Err(RepoError::Validation(format!(
            "Department '{}' is referenced by {user_count} user(s)",
            existing.name
        )));
    }

    sqlx::query("DELETE FROM department WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}
