use crate::auth::JwtConfig;
use crate::db::seed::SeedOptions;

/// Server configuration, loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory (database + logs)
    pub work_dir: String,
    pub http_port: u16,
    pub jwt: JwtConfig,
    pub environment: String,

    /// Bootstrap account credentials applied by the seed
    pub admin_email: String,
    pub admin_password: String,
    pub hr_email: String,
    pub hr_password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            admin_email: std::env::var("SEED_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".into()),
            admin_password: std::env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "adminpassword".into()),
            hr_email: std::env::var("SEED_HR_EMAIL").unwrap_or_else(|_| "hr@example.com".into()),
            hr_password: std::env::var("SEED_HR_PASSWORD")
                .unwrap_or_else(|_| "adminpassword".into()),
        }
    }

    /// Path of the SQLite database file
    pub fn db_path(&self) -> String {
        format!("{}/admin.db", self.work_dir)
    }

    /// Seed options derived from this configuration
    pub fn seed_options(&self) -> SeedOptions {
        SeedOptions {
            admin_email: self.admin_email.clone(),
            admin_password: self.admin_password.clone(),
            hr_email: self.hr_email.clone(),
            hr_password: self.hr_password.clone(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
