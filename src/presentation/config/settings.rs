use std::path::PathBuf;

/// Immutable process configuration, read from the environment once at
/// startup. Components receive the slice they need by value; nothing
/// reads the environment after construction.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub inference: InferenceSettings,
    pub media: MediaSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct InferenceSettings {
    /// Absent key means the inference capability is not configured; the
    /// pipeline then produces fixed "unavailable" placeholders instead of
    /// calling out.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub output_dir: PathBuf,
    pub ytdlp_path: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8090),
            },
            database: DatabaseSettings {
                url: env_or("DATABASE_URL", "sqlite://transcription_db.sqlite?mode=rwc"),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            },
            inference: InferenceSettings {
                api_key: std::env::var("GOOGLE_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
                base_url: env_or("GEMINI_BASE_URL", "https://generativelanguage.googleapis.com"),
            },
            media: MediaSettings {
                output_dir: PathBuf::from(env_or("UPLOAD_DIRECTORY", "./uploads")),
                ytdlp_path: env_or("YTDLP_PATH", "yt-dlp"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
