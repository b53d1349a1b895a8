use std::fs;
use std::io;
use std::path::PathBuf;

use log::{error, info};
use thiserror::Error;

use crate::weather::WeatherReport;

const MOCK_WEATHER: &str = include_str!("../data/mock_weather.json");

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed weather data: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid weather data: {message}")]
    Invalid { message: String },
}

impl DataError {
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Anything that can hand the screen a full report.
pub trait WeatherSource {
    fn describe(&self) -> String;

    fn load(&self) -> Result<WeatherReport, DataError>;
}

fn parse(json: &str) -> Result<WeatherReport, DataError> {
    let report: WeatherReport = serde_json::from_str(json)?;
    report.validate()?;
    Ok(report)
}

/// The built-in demonstration dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockSource;

impl WeatherSource for MockSource {
    fn describe(&self) -> String {
        "built-in mock data".to_string()
    }

    fn load(&self) -> Result<WeatherReport, DataError> {
        parse(MOCK_WEATHER)
    }
}

/// A JSON file with the same layout as the built-in dataset.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WeatherSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<WeatherReport, DataError> {
        let json = fs::read_to_string(&self.path).map_err(|source| DataError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse(&json)
    }
}

/// What the screen has to show: a report, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum DataState {
    Loaded(WeatherReport),
    Unavailable { reason: String },
}

impl DataState {
    pub fn load(source: &dyn WeatherSource) -> Self {
        info!("loading weather data from {}", source.describe());
        match source.load() {
            Ok(report) => DataState::Loaded(report),
            Err(err) => {
                error!("weather data unavailable: {err}");
                DataState::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            DataState::Loaded(report) => Some(report),
            DataState::Unavailable { .. } => None,
        }
    }
}
