use std::time::{Duration, Instant};

/// Wall-clock bookkeeping for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatistic {
    started: Instant,
    ended: Option<Instant>,
}

impl GameStatistic {
    pub fn start() -> Self {
        GameStatistic {
            started: Instant::now(),
            ended: None,
        }
    }

    pub fn finish(&mut self) {
        if self.ended.is_none() {
            self.ended = Some(Instant::now());
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ended.is_some()
    }

    /// Elapsed time, frozen once the game is finished.
    pub fn duration(&self) -> Duration {
        self.ended
            .unwrap_or_else(Instant::now)
            .saturating_duration_since(self.started)
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration())
    }
}

/// `HH:MM:SS`
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00:00");
        assert_eq!(format_duration(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_duration(Duration::from_secs(61)), "00:01:01");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600 + 25 * 60 + 7)), "03:25:07");
    }

    #[test]
    fn test_finish_freezes_duration() {
        let mut statistic = GameStatistic::start();
        assert!(!statistic.is_finished());
        statistic.finish();
        assert!(statistic.is_finished());
        let frozen = statistic.duration();
        statistic.finish();
        assert_eq!(statistic.duration(), frozen);
    }
}
