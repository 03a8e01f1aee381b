use crate::application::calendar::Calendar;
use crate::domain::trend::{Granularity, Polarity, SummaryMode, TrendOptions};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    pub server: ServerSettings,
    pub calendar: CalendarSettings,
    pub defaults: DefaultsSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarSettings {
    pub utc_offset_minutes: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsSettings {
    pub granularity: Granularity,
    pub summary_mode: SummaryMode,
    pub polarity: Polarity,
    pub comparison_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BatchSettings {
    pub max_widgets: usize,
}

impl EngineConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.bind '{}': {}", self.server.bind, e))
    }

    pub fn calendar(&self) -> anyhow::Result<Calendar> {
        let minutes = self.calendar.utc_offset_minutes;
        Calendar::from_offset_minutes(minutes).ok_or_else(|| {
            anyhow::anyhow!("calendar.utc_offset_minutes must be within one day, got {}", minutes)
        })
    }

    pub fn trend_defaults(&self) -> TrendOptions {
        TrendOptions {
            granularity: self.defaults.granularity,
            summary_mode: self.defaults.summary_mode,
            polarity: self.defaults.polarity,
            comparison_enabled: self.defaults.comparison_enabled,
        }
    }
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("calendar.utc_offset_minutes", 0)?
        .set_default("defaults.granularity", "auto")?
        .set_default("defaults.summary_mode", "sum")?
        .set_default("defaults.polarity", "higherIsBetter")?
        .set_default("defaults.comparison_enabled", true)?
        .set_default("batch.max_widgets", 64)?)
}

/// Load `config/engine.*` (optional) with `TREND__SECTION__KEY` environment overrides
pub fn load_engine_config() -> anyhow::Result<EngineConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/engine").required(false))
        .add_source(config::Environment::with_prefix("TREND").separator("__"))
        .build()?;

    let engine: EngineConfig = settings.try_deserialize()?;
    engine.calendar()?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<EngineConfig> {
        let settings = builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults_when_nothing_configured() {
        let engine = from_toml("").unwrap();
        assert_eq!(engine.bind_addr().unwrap().port(), 8080);
        assert_eq!(engine.calendar().unwrap(), Calendar::utc());
        assert_eq!(engine.trend_defaults(), TrendOptions::default());
        assert_eq!(engine.batch.max_widgets, 64);
    }

    #[test]
    fn test_overrides() {
        let engine = from_toml(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [calendar]
            utc_offset_minutes = -300

            [defaults]
            granularity = "weekly"
            polarity = "lowerIsBetter"
            "#,
        )
        .unwrap();

        assert_eq!(engine.bind_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(engine.calendar().unwrap(), Calendar::from_offset_minutes(-300).unwrap());

        let defaults = engine.trend_defaults();
        assert_eq!(defaults.granularity, Granularity::Weekly);
        assert_eq!(defaults.polarity, Polarity::LowerIsBetter);
        assert_eq!(defaults.summary_mode, SummaryMode::Sum);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let engine = from_toml("[calendar]\nutc_offset_minutes = 1440").unwrap();
        assert!(engine.calendar().is_err());

        let engine = from_toml("[server]\nbind = \"not-an-address\"").unwrap();
        assert!(engine.bind_addr().is_err());

        assert!(from_toml("[defaults]\nsummary_mode = \"median\"").is_err());
    }
}
