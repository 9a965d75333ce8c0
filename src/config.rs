use std::env;

/// Placeholder signing secret shipped for local development only.
pub const INSECURE_DEFAULT_SECRET: &str = "change-me-to-a-secure-random-string";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub app_env: String,
    pub cors_origins: Vec<String>,
    pub jwt: JwtConfig,
    pub tenant: TenantConfig,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub session_expiry_secs: i64,
}

#[derive(Clone, Debug)]
pub struct TenantConfig {
    pub header_name: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env_or_parse("PORT", 3000),
            app_env: env_or("APP_ENV", "development"),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:3000,http://localhost:8080")
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            jwt: JwtConfig {
                secret: env_or("JWT_SECRET", INSECURE_DEFAULT_SECRET),
                session_expiry_secs: parse_duration_to_secs(&env_or("JWT_EXPIRY", "8h")),
            },
            tenant: TenantConfig {
                header_name: env_or("TENANT_HEADER", "x-business-id"),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Refuses the known-insecure signing secret in production.
    pub fn validate(&self) -> Result<(), String> {
        if self.is_production() && self.jwt.secret == INSECURE_DEFAULT_SECRET {
            return Err(
                "JWT_SECRET is still the insecure default; set a real secret before running in production"
                    .to_string(),
            );
        }
        Ok(())
    }
}

fn parse_duration_to_secs(s: &str) -> i64 {
    let s = s.trim();
    if s.is_empty() {
        return 8 * 3600;
    }
    let (num_str, unit) = s.split_at(s.len() - 1);
    let num: i64 = num_str.parse().unwrap_or(1);
    match unit {
        "s" => num,
        "m" => num * 60,
        "h" => num * 3600,
        "d" => num * 86400,
        _ => s.parse().unwrap_or(8 * 3600),
    }
}
