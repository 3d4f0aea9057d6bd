//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee record
///
/// `employee_no` is a zero-padded six-digit string assigned by the server
/// at creation. Employees are deactivated, never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub employee_no: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub third_name: Option<String>,
    pub last_name: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub citizenship: Option<String>,
    pub national_id: Option<String>,
    pub medical_record_no: Option<String>,
    pub card_expires_at: Option<NaiveDate>,
    pub nationality_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub rank_id: Option<i64>,
    pub sponsor_id: Option<i64>,
    pub job_title_id: Option<i64>,
    pub is_active: bool,
}

/// Create employee payload (`employee_no` is generated server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub first_name: String,
    pub second_name: Option<String>,
    pub third_name: Option<String>,
    pub last_name: String,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub citizenship: Option<String>,
    pub national_id: Option<String>,
    pub medical_record_no: Option<String>,
    pub card_expires_at: Option<NaiveDate>,
    pub nationality_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub rank_id: Option<i64>,
    pub sponsor_id: Option<i64>,
    pub job_title_id: Option<i64>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
    pub third_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub citizenship: Option<String>,
    pub national_id: Option<String>,
    pub medical_record_no: Option<String>,
    pub card_expires_at: Option<NaiveDate>,
    pub nationality_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub rank_id: Option<i64>,
    pub sponsor_id: Option<i64>,
    pub job_title_id: Option<i64>,
    pub is_active: Option<bool>,
}
