use anyhow::Context;

const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:5173",
    "http://localhost:4200",
];

#[derive(Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub allowed_origins: Vec<String>,
    pub log_filter: String,
}

#[derive(Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

impl ApplicationSettings {
    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// `.env` 를 읽은 뒤 프로세스 환경 변수로부터 설정을 만든다.
pub fn get_configuration() -> anyhow::Result<Settings> {
    dotenv::dotenv().ok();
    Settings::from_lookup(|key| std::env::var(key).ok())
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APP_PORT 값이 올바르지 않습니다: {raw}"))?,
            None => 8080,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS 값이 올바르지 않습니다: {raw}"))?,
            None => 10,
        };

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            application: ApplicationSettings {
                host: lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port,
            },
            database: DatabaseSettings {
                url: lookup("DATABASE_URL")
                    .unwrap_or_else(|| "sqlite://support_tickets.db?mode=rwc".to_string()),
                max_connections,
            },
            allowed_origins,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| "info,sqlx=warn".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_local_sqlite_file() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.application.address(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(settings.database.url, "sqlite://support_tickets.db?mode=rwc");
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.allowed_origins.len(), 4);
        assert!(settings.allowed_origins.contains(&"http://localhost:5173".to_string()));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let settings = settings_from(&[
            ("CORS_ALLOWED_ORIGINS", "https://desk.example.com, https://admin.example.com,,"),
            ("APP_PORT", "9000"),
        ])
        .unwrap();

        assert_eq!(
            settings.allowed_origins,
            vec!["https://desk.example.com".to_string(), "https://admin.example.com".to_string()]
        );
        assert_eq!(settings.application.port, 9000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = settings_from(&[("APP_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }
}
