use serde::Deserialize;

use crate::icon::{resolve, Icon, SizeTier};
use crate::source::DataError;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,

    #[serde(alias = "state")]
    pub region: String,
}

impl Location {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: i32,

    pub condition: String,

    pub description: String,

    pub high: i32,

    pub low: i32,

    pub humidity: u8,

    #[serde(rename = "windSpeed")]
    pub wind_speed: String,

    pub pressure: String,

    pub visibility: String,

    #[serde(default)]
    pub icon: Option<String>,
}

impl CurrentConditions {
    pub fn icon(&self, tier: SizeTier) -> Icon {
        resolve(self.icon.as_deref(), tier)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    pub time: String,

    pub temperature: i32,

    #[serde(default)]
    pub icon: Option<String>,
}

impl HourlyPoint {
    pub fn icon(&self, tier: SizeTier) -> Icon {
        resolve(self.icon.as_deref(), tier)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub name: String,

    pub high: i32,

    pub low: i32,

    pub precipitation: String,

    pub description: String,

    #[serde(default)]
    pub icon: Option<String>,
}

/// A daily forecast as laid out on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow<'a> {
    pub forecast: &'a DailyForecast,
    pub is_today: bool,
    pub icon: Icon,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,

    pub current: CurrentConditions,

    pub hourly: Vec<HourlyPoint>,

    #[serde(alias = "weekly")]
    pub daily: Vec<DailyForecast>,
}

impl WeatherReport {
    /// Only the first entry is today, whatever its label says.
    pub fn daily_rows(&self) -> Vec<DailyRow<'_>> {
        self.daily
            .iter()
            .enumerate()
            .map(|(idx, forecast)| DailyRow {
                forecast,
                is_today: idx == 0,
                icon: resolve(forecast.icon.as_deref(), SizeTier::Medium),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.current.humidity > 100 {
            return Err(DataError::invalid(format!(
                "humidity {}% is out of range",
                self.current.humidity
            )));
        }
        if self.daily.is_empty() {
            return Err(DataError::invalid("daily forecast is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Glyph;

    fn report(json: &str) -> WeatherReport {
        serde_json::from_str(json).unwrap()
    }

    const SMALL: &str = r#"{
        "location": {"city": "Madison", "state": "WI"},
        "current": {
            "temperature": 40, "condition": "Cloudy", "description": "Gray",
            "high": 44, "low": 31, "humidity": 80, "windSpeed": "12 mph",
            "pressure": "29.90 in", "visibility": "6 mi", "icon": "cloud"
        },
        "hourly": [{"time": "1 PM", "temperature": 41}],
        "weekly": [
            {"name": "Wed", "high": 44, "low": 31, "precipitation": "5%", "description": "Gray", "icon": "cloud"},
            {"name": "Today", "high": 40, "low": 30, "precipitation": "60%", "description": "Snow", "icon": "cloud-snow"}
        ]
    }"#;

    #[test]
    fn test_deserialize_aliases_and_defaults() {
        let r = report(SMALL);
        assert_eq!(r.location.display_name(), "Madison, WI");
        assert_eq!(r.current.wind_speed, "12 mph");
        assert_eq!(r.hourly[0].icon, None);
        assert_eq!(r.hourly[0].icon(SizeTier::Medium).glyph, Glyph::Sun);
        assert_eq!(r.current.icon(SizeTier::Large).glyph, Glyph::Cloud);
        assert_eq!(r.daily.len(), 2);
    }

    #[test]
    fn test_today_is_positional() {
        let r = report(SMALL);
        let rows = r.daily_rows();
        assert!(rows[0].is_today);
        assert_eq!(rows[0].forecast.name, "Wed");
        assert!(!rows[1].is_today);
        assert_eq!(rows[1].icon.glyph, Glyph::Snow);
        assert_eq!(rows[1].icon.size, 32);
    }

    #[test]
    fn test_null_and_unknown_icons_fall_back_to_sun() {
        let json = SMALL
            .replacen("\"icon\": \"cloud\"", "\"icon\": null", 1)
            .replace("\"cloud-snow\"", "\"tornado\"");
        let r = report(&json);
        assert_eq!(r.current.icon, None);
        assert_eq!(r.current.icon(SizeTier::Large).glyph, Glyph::Sun);

        let rows = r.daily_rows();
        assert_eq!(rows[0].icon.glyph, Glyph::Cloud);
        assert_eq!(rows[1].forecast.icon.as_deref(), Some("tornado"));
        assert_eq!(rows[1].icon.glyph, Glyph::Sun);
    }

    #[test]
    fn test_validate() {
        let mut r = report(SMALL);
        assert!(r.validate().is_ok());

        r.current.humidity = 101;
        assert!(matches!(r.validate(), Err(DataError::Invalid { .. })));

        r.current.humidity = 100;
        r.daily.clear();
        assert!(matches!(r.validate(), Err(DataError::Invalid { .. })));
    }
}
