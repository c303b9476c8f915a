use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub upload_dir: String,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "public/uploads".to_string());
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());

        Self {
            database_url,
            jwt_secret,
            upload_dir,
            app_env,
        }
    }

    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}
