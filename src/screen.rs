use std::ops::{Deref, DerefMut};
use std::time::Duration;

use log::debug;

use crate::clock::{ClockDisplay, TimeSource};
use crate::source::DataState;

/// Everything the weather screen shows, plus the hourly strip's scroll
/// position.
#[derive(Debug)]
pub struct Screen<C> {
    pub data: DataState,
    pub clock: ClockDisplay<C>,
    hourly_offset: usize,
}

impl<C: TimeSource> Screen<C> {
    pub fn new(data: DataState, clock: C, refresh: Duration) -> Self {
        Self {
            data,
            clock: ClockDisplay::new(clock, refresh),
            hourly_offset: 0,
        }
    }

    /// Start the clock. It keeps ticking until the returned session is
    /// dropped.
    pub fn activate(&mut self) -> Session<'_, C> {
        debug!("screen activated");
        self.clock.start();
        Session { screen: self }
    }

    pub fn hourly_offset(&self) -> usize {
        self.hourly_offset
    }

    pub fn scroll_hourly_left(&mut self) {
        self.hourly_offset = self.hourly_offset.saturating_sub(1);
    }

    pub fn scroll_hourly_right(&mut self) {
        let len = self.data.report().map_or(0, |r| r.hourly.len());
        if self.hourly_offset + 1 < len {
            self.hourly_offset += 1;
        }
    }

    pub fn reset_hourly_scroll(&mut self) {
        self.hourly_offset = 0;
    }
}

/// An active screen. Dropping it stops the clock schedule.
pub struct Session<'a, C: TimeSource> {
    screen: &'a mut Screen<C>,
}

impl<C: TimeSource> Deref for Session<'_, C> {
    type Target = Screen<C>;

    fn deref(&self) -> &Self::Target {
        self.screen
    }
}

impl<C: TimeSource> DerefMut for Session<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.screen
    }
}

impl<C: TimeSource> Drop for Session<'_, C> {
    fn drop(&mut self) {
        self.screen.clock.stop();
        debug!("screen deactivated");
    }
}
