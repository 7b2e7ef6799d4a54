use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub event_file: Option<String>,
    pub standards_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            event_file: std::env::var("EVENT_FILE").ok(),
            standards_file: std::env::var("STANDARDS_FILE").ok(),
        })
    }
}
