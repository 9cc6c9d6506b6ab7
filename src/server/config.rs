use crate::server::error::Error;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub upload_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| Error::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("expected a port number, got {:?}", value),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| Error::MissingEnvVar("DATABASE_URL".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
        })
    }
}
