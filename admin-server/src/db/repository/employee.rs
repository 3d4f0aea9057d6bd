//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, employee_no, first_name, second_name, third_name, last_name, gender, \
     dob, citizenship, national_id, medical_record_no, card_expires_at, \
     nationality_id, unit_id, rank_id, sponsor_id, job_title_id, is_active";

/// Width of the generated employee number
const EMPLOYEE_NO_WIDTH: usize = 6;

/// Compute the next employee number from the current maximum.
///
/// No employees yet -> "000001"; otherwise max + 1, zero-padded.
fn increment_employee_no(last: Option<&str>) -> String {
    match last.and_then(|n| n.parse::<u64>().ok()) {
        Some(n) => format!("{:0width$}", n + 1, width = EMPLOYEE_NO_WIDTH),
        None => format!("{:0width$}", 1, width = EMPLOYEE_NO_WIDTH),
    }
}

/// Next free employee number.
///
/// Numbers are zero-padded to a fixed width, so the lexicographic MAX is
/// also the numeric maximum.
pub async fn next_employee_no(pool: &SqlitePool) -> RepoResult<String> {
    let last: Option<String> = sqlx::query_scalar("SELECT MAX(employee_no) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(increment_employee_no(last.as_deref()))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE is_active = 1 ORDER BY first_name, last_name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_all_with_inactive(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee ORDER BY first_name, last_name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee =
        sqlx::query_as::<_, Employee>(&format!("SELECT {COLUMNS} FROM employee WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(employee)
}

pub async fn find_by_employee_no(pool: &SqlitePool, no: &str) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {COLUMNS} FROM employee WHERE employee_no = ? LIMIT 1"
    ))
    .bind(no)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let employee_no = next_employee_no(pool).await?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO employee (employee_no, first_name, second_name, third_name, last_name, \
            gender, dob, citizenship, national_id, medical_record_no, card_expires_at, \
            nationality_id, unit_id, rank_id, sponsor_id, job_title_id, is_active) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1) RETURNING id",
    )
    .bind(&employee_no)
    .bind(&data.first_name)
    .bind(&data.second_name)
    .bind(&data.third_name)
    .bind(&data.last_name)
    .bind(&data.gender)
    .bind(data.dob)
    .bind(&data.citizenship)
    .bind(&data.national_id)
    .bind(&data.medical_record_no)
    .bind(data.card_expires_at)
    .bind(data.nationality_id)
    .bind(data.unit_id)
    .bind(data.rank_id)
    .bind(data.sponsor_id)
    .bind(data.job_title_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employee SET \
            first_name = COALESCE(?1, first_name), \
            second_name = COALESCE(?2, second_name), \
            third_name = COALESCE(?3, third_name), \
            last_name = COALESCE(?4, last_name), \
            gender = COALESCE(?5, gender), \
            dob = COALESCE(?6, dob), \
            citizenship = COALESCE(?7, citizenship), \
            national_id = COALESCE(?8, national_id), \
            medical_record_no = COALESCE(?9, medical_record_no), \
            card_expires_at = COALESCE(?10, card_expires_at), \
            nationality_id = COALESCE(?11, nationality_id), \
            unit_id = COALESCE(?12, unit_id), \
            rank_id = COALESCE(?13, rank_id), \
            sponsor_id = COALESCE(?14, sponsor_id), \
            job_title_id = COALESCE(?15, job_title_id), \
            is_active = COALESCE(?16, is_active) \
         WHERE id = ?17",
    )
    .bind(&data.first_name)
    .bind(&data.second_name)
    .bind(&data.third_name)
    .bind(&data.last_name)
    .bind(&data.gender)
    .bind(data.dob)
    .bind(&data.citizenship)
    .bind(&data.national_id)
    .bind(&data.medical_record_no)
    .bind(data.card_expires_at)
    .bind(data.nationality_id)
    .bind(data.unit_id)
    .bind(data.rank_id)
    .bind(data.sponsor_id)
    .bind(data.job_title_id)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Soft-deactivate an employee (employees are never hard-deleted).
pub async fn deactivate(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    let rows = sqlx::query("UPDATE employee SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_employee_no_starts_at_one() {
        assert_eq!(increment_employee_no(None), "000001");
    }

    #[test]
    fn employee_no_increments_with_padding() {
        assert_eq!(increment_employee_no(Some("000047")), "000048");
        assert_eq!(increment_employee_no(Some("000099")), "000100");
        assert_eq!(increment_employee_no(Some("099999")), "100000");
    }

    #[test]
    fn garbage_max_restarts_sequence() {
        // A non-numeric stored maximum falls back to the sequence start
        assert_eq!(increment_employee_no(Some("EMP-1")), "000001");
    }
}
