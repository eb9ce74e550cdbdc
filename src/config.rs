//! Service configuration
//!
//! Built once at startup and shared with every handler through `web::Data`.

use std::env;

use crate::excel::constants::EXCEL_URL;

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
}

/// Address the HTTP server binds to
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the spreadsheet is downloaded from
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub excel_url: String,
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, falling back to `0.0.0.0:5000`.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
            },
            source: SourceConfig {
                excel_url: EXCEL_URL.to_string(),
            },
        }
    }

    /// Default server settings pointed at a different spreadsheet.
    pub fn with_source(excel_url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            source: SourceConfig {
                excel_url: excel_url.into(),
            },
        }
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.server.host.as_str(), self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_source_keeps_default_binding() {
        let config = AppConfig::with_source("http://localhost/sheet.xlsx");
        assert_eq!(config.bind_addr(), ("0.0.0.0", 5000));
        assert_eq!(config.source.excel_url, "http://localhost/sheet.xlsx");
    }
}
