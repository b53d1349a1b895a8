use std::fmt::Display;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use log::debug;

pub const DEFAULT_REFRESH: Duration = Duration::from_secs(60);

/// Longest supported refresh period.
pub const MAX_REFRESH: Duration = Duration::from_secs(86_400);

const MIN_PERIOD: Duration = Duration::from_millis(1);

const SEPARATOR: &str = " • ";

/// Where the screen reads wall-clock time from.
pub trait TimeSource {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// "Monday, October 19, 2026 • 3:05 PM"
pub fn format_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%A, %B %-d, %Y • %-I:%M %p").to_string()
}

/// The clock portion of a formatted timestamp, empty if there is none.
pub fn time_part(timestamp: &str) -> &str {
    timestamp
        .split_once(SEPARATOR)
        .map(|(_, time)| time)
        .unwrap_or_default()
}

/// A recurring schedule. Missed periods are coalesced into a single firing.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: TimeDelta,
    next_due: DateTime<Local>,
}

impl Ticker {
    pub fn start(period: Duration, now: DateTime<Local>) -> Self {
        let period = period.clamp(MIN_PERIOD, MAX_REFRESH);
        let period = TimeDelta::from_std(period).unwrap_or(TimeDelta::days(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn fire(&mut self, now: DateTime<Local>) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.period;
        }
        true
    }

    pub fn remaining(&self, now: DateTime<Local>) -> Duration {
        (self.next_due - now).to_std().unwrap_or(Duration::ZERO)
    }
}

/// The header clock string and the schedule that keeps it current.
#[derive(Debug)]
pub struct ClockDisplay<C> {
    source: C,
    period: Duration,
    text: String,
    ticker: Option<Ticker>,
    refreshes: usize,
}

impl<C: TimeSource> ClockDisplay<C> {
    pub fn new(source: C, period: Duration) -> Self {
        Self {
            source,
            period,
            text: String::new(),
            ticker: None,
            refreshes: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn last_updated(&self) -> &str {
        time_part(&self.text)
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Number of times the string has been recomputed.
    #[cfg(test)]
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn refresh(&mut self) {
        self.text = format_timestamp(&self.source.now());
        self.refreshes += 1;
        debug!("clock refresh #{}: {}", self.refreshes, self.text);
    }

    /// Refresh now and schedule further refreshes. Does nothing if already
    /// running, so repeated starts never stack schedules.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        self.refresh();
        self.ticker = Some(Ticker::start(self.period, self.source.now()));
        debug!("clock ticker started, every {:?}", self.period);
    }

    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("clock ticker stopped");
        }
    }

    /// Run the refresh if a tick is due. Returns whether the text changed.
    pub fn poll(&mut self) -> bool {
        let now = self.source.now();
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.fire(now),
            None => false,
        };
        if due {
            self.refresh();
        }
        due
    }

    pub fn until_next_tick(&self) -> Option<Duration> {
        self.ticker
            .as_ref()
            .map(|ticker| ticker.remaining(self.source.now()))
    }
}
