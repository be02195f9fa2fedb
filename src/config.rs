use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
    pub secret_key: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            db_url: Self::get_env("DATABASE_URL"),
            // the signing secret must outlive every token issued under it,
            // so it is read once here and handed to TokenIssuer explicitly
            secret_key: Self::get_env("SECRET_KEY"),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_both_values() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/warden");
        std::env::set_var("SECRET_KEY", "s3cret");
        let cfg = EnvConfig::from_env();
        assert_eq!(cfg.db_url, "postgres://localhost/warden");
        assert_eq!(cfg.secret_key, "s3cret");
    }
}
