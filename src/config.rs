use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub ai_service_url: String,
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Self {
        let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");
        // Cookie key derivation needs at least 32 bytes of input.
        if session_secret.len() < 32 {
            panic!("SESSION_SECRET must be at least 32 bytes");
        }

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            ai_service_url: env::var("AI_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8001".into()),
            session_secret,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
