use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Periodic trigger for autoplay. Holds at most one live interval.
#[derive(Debug)]
pub struct AutoplayTimer {
    period: Duration,
    interval: Option<Interval>,
}

impl AutoplayTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            // A zero period would make tokio's interval panic
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Arm the timer; the first tick lands one full period from now.
    /// Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.interval.is_some() {
            return false;
        }
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        true
    }

    /// Cancel the timer. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        self.interval.take().is_some()
    }

    /// Resolve on the next tick; pends forever while stopped
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
