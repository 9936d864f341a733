use chrono::FixedOffset;
use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    summit: Summit,
    database: Database,
    reporting: Reporting,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn summit(&self) -> &Summit {
        &self.summit
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn reporting(&self) -> &Reporting {
        &self.reporting
    }
}

#[derive(Debug, Deserialize)]
pub struct Summit {
    url: String,
    app_id: String,
    app_secret: String,
}

impl Summit {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_secret(&self) -> &str {
        &self.app_secret
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    url: String,
}

impl Database {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Reporting {
    utc_offset_hours: i32,
}

impl Reporting {
    /// Fixed offset of the reference time zone the as-of window is computed in.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600)
            .unwrap_or_else(|| panic!("invalid utc offset '{}'", self.utc_offset_hours))
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                summit: Summit {
                    url: "https://summit.url".to_string(),
                    app_id: "app-id".to_string(),
                    app_secret: "app-secret".to_string(),
                },
                database: Database {
                    url: "postgres://localhost/harvest".to_string(),
                },
                reporting: Reporting { utc_offset_hours: -8 },
            },
        }
    }

    pub fn summit_url(mut self, url: String) -> Self {
        self.config.summit.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
