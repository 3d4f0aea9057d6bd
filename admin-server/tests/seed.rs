//! Seed provisioning and identity-store integration tests (in-memory SQLite)

use admin_server::auth::credentials;
use admin_server::db::repository::{employee, permission, role};
use admin_server::db::seed::{self, SeedOptions};
use admin_server::db::DbService;
use shared::models::{EmployeeCreate, RoleCreate};
use sqlx::SqlitePool;

async fn seeded_pool() -> SqlitePool {
    let db = DbService::in_memory().await.expect("open in-memory db");
    seed::run(&db.pool, &SeedOptions::default())
        .await
        .expect("seed");
    db.pool
}

/// Full (role name, permission code) mapping, sorted for comparison
async fn mapping(pool: &SqlitePool) -> Vec<(String, String)> {
    sqlx::query_as::<_, (String, String)>(
        "SELECT r.name, p.code FROM role_permission rp \
         JOIN role r ON r.id = rp.role_id \
         JOIN permission p ON p.id = rp.permission_id \
         ORDER BY r.name, p.code",
    )
    .fetch_all(pool)
    .await
    .expect("fetch mapping")
}

#[tokio::test]
async fn seed_creates_static_mapping() {
    let pool = seeded_pool().await;

    let links = mapping(&pool).await;
    assert_eq!(
        links,
        vec![
            ("ADMIN".to_string(), "admin:all".to_string()),
            ("EMPLOYEE".to_string(), "manage:employees".to_string()),
            ("EMPLOYEE".to_string(), "manage:reports".to_string()),
        ]
    );
}

#[tokio::test]
async fn seed_is_idempotent() {
    let pool = seeded_pool().await;
    let first = mapping(&pool).await;

    seed::run(&pool, &SeedOptions::default())
        .await
        .expect("second seed");
    let second = mapping(&pool).await;

    assert_eq!(first, second);

    // Upserted entities did not duplicate
    let roles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(roles, 2);
    let departments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(departments, 2);
}

#[tokio::test]
async fn reseed_removes_manual_grants() {
    let pool = seeded_pool().await;
    let baseline = mapping(&pool).await;

    // Grant manage:users to EMPLOYEE outside the static table
    let employee_role = role::find_by_name(&pool, "EMPLOYEE")
        .await
        .unwrap()
        .expect("EMPLOYEE role");
    let manage_users = permission::find_by_code(&pool, "manage:users")
        .await
        .unwrap()
        .expect("manage:users permission");
    sqlx::query("INSERT INTO role_permission (role_id, permission_id) VALUES (?, ?)")
        .bind(employee_role.id)
        .bind(manage_users.id)
        .execute(&pool)
        .await
        .unwrap();

    let granted = permission::resolve_effective_permissions(&pool, employee_role.id)
        .await
        .unwrap();
    assert!(granted.contains("manage:users"));

    // The destructive replace recreates exactly the static table
    seed::run(&pool, &SeedOptions::default())
        .await
        .expect("re-seed");

    let granted = permission::resolve_effective_permissions(&pool, employee_role.id)
        .await
        .unwrap();
    assert!(!granted.contains("manage:users"));
    assert_eq!(mapping(&pool).await, baseline);
}

#[tokio::test]
async fn resolver_returns_empty_set_for_unlinked_role() {
    let pool = seeded_pool().await;

    let bare = role::create(
        &pool,
        RoleCreate {
            name: "AUDITOR".to_string(),
            description: None,
            permissions: vec![],
        },
    )
    .await
    .expect("create role");

    let granted = permission::resolve_effective_permissions(&pool, bare.id)
        .await
        .unwrap();
    assert!(granted.is_empty());

    // Unknown role ids resolve to the empty set as well
    let granted = permission::resolve_effective_permissions(&pool, 9999)
        .await
        .unwrap();
    assert!(granted.is_empty());
}

#[tokio::test]
async fn resolver_deduplicates_codes() {
    let pool = seeded_pool().await;

    let employee_role = role::find_by_name(&pool, "EMPLOYEE")
        .await
        .unwrap()
        .expect("EMPLOYEE role");
    let granted = permission::resolve_effective_permissions(&pool, employee_role.id)
        .await
        .unwrap();

    assert_eq!(granted.len(), 2);
    assert!(granted.contains("manage:employees"));
    assert!(granted.contains("manage:reports"));
}

#[tokio::test]
async fn authenticate_resolves_principal() {
    let pool = seeded_pool().await;

    let auth = credentials::authenticate(&pool, "admin@example.com", "adminpassword")
        .await
        .expect("store ok")
        .expect("credentials accepted");

    assert_eq!(auth.user.email, "admin@example.com");
    assert_eq!(auth.role.name, "ADMIN");
    assert_eq!(auth.permissions, vec!["admin:all".to_string()]);
}

#[tokio::test]
async fn authenticate_fails_uniformly() {
    let pool = seeded_pool().await;

    // Wrong password for an existing account
    let wrong_password = credentials::authenticate(&pool, "admin@example.com", "nope-nope-nope")
        .await
        .expect("store ok");
    // Unknown email entirely
    let unknown_email = credentials::authenticate(&pool, "ghost@example.com", "adminpassword")
        .await
        .expect("store ok");

    // Both are observably identical to the caller
    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
}

fn minimal_employee(first: &str, last: &str) -> EmployeeCreate {
    EmployeeCreate {
        first_name: first.to_string(),
        second_name: None,
        third_name: None,
        last_name: last.to_string(),
        gender: None,
        dob: None,
        citizenship: None,
        national_id: None,
        medical_record_no: None,
        card_expires_at: None,
        nationality_id: None,
        unit_id: None,
        rank_id: None,
        sponsor_id: None,
        job_title_id: None,
    }
}

#[tokio::test]
async fn employee_numbers_are_sequential_and_padded() {
    let pool = seeded_pool().await;

    assert_eq!(employee::next_employee_no(&pool).await.unwrap(), "000001");

    let first = employee::create(&pool, minimal_employee("Aisha", "Hassan"))
        .await
        .unwrap();
    assert_eq!(first.employee_no, "000001");

    let second = employee::create(&pool, minimal_employee("Omar", "Said"))
        .await
        .unwrap();
    assert_eq!(second.employee_no, "000002");
}

#[tokio::test]
async fn employee_number_continues_from_existing_maximum() {
    let pool = seeded_pool().await;

    sqlx::query(
        "INSERT INTO employee (employee_no, first_name, last_name, is_active) VALUES (?, ?, ?, 1)",
    )
    .bind("000047")
    .bind("Maria")
    .bind("Lopez")
    .execute(&pool)
    .await
    .unwrap();

    assert_eq!(employee::next_employee_no(&pool).await.unwrap(), "000048");
}

#[tokio::test]
async fn file_database_initializes_and_reseeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("admin.db");
    let db_path = db_path.to_str().expect("utf8 path");

    let db = DbService::new(db_path).await.expect("open file db");
    seed::run(&db.pool, &SeedOptions::default())
        .await
        .expect("seed");

    // Reopen the same file: migrations are recorded, seed converges
    drop(db);
    let db = DbService::new(db_path).await.expect("reopen file db");
    seed::run(&db.pool, &SeedOptions::default())
        .await
        .expect("re-seed");

    let links = mapping(&db.pool).await;
    assert_eq!(links.len(), 3);
}
