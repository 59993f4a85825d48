//! In-memory play statistics
//!
//! Lives for the process only; nothing is written to disk.

use super::session::Outcome;

/// Tally of finished rounds
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses used (index 0 unused)
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished round
    pub fn record(&mut self, outcome: Outcome, attempts: usize) {
        self.total_games += 1;

        match outcome {
            Outcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                if self.guess_distribution.len() <= attempts {
                    self.guess_distribution.resize(attempts + 1, 0);
                }
                self.guess_distribution[attempts] += 1;
            }
            Outcome::Lost => self.current_streak = 0,
        }
    }

    /// Win rate in percent
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_build_streak_and_distribution() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 3);
        stats.record(Outcome::Won, 4);
        stats.record(Outcome::Won, 3);

        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[4], 1);
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::default();
        stats.record(Outcome::Won, 2);
        stats.record(Outcome::Won, 5);
        stats.record(Outcome::Lost, 6);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }
}
