//! Play statistics
//!
//! A fixed-shape record updated once per finished game. Loading and saving
//! it is the caller's business.

/// Attempts allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Solved on guess number `attempts` (1-based)
    Won { attempts: usize },
    Lost,
}

/// Aggregate statistics across games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by attempt count; index 0 holds wins on the first guess
    pub guess_distribution: [u32; MAX_ATTEMPTS],
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game
    ///
    /// A win outside `1..=MAX_ATTEMPTS` still counts toward games won and the
    /// streak, but has no distribution bucket.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games_played += 1;

        match outcome {
            GameOutcome::Won { attempts } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                match attempts.checked_sub(1).and_then(|i| self.guess_distribution.get_mut(i)) {
                    Some(bucket) => *bucket += 1,
                    None => log::warn!("Win after {attempts} attempts has no distribution bucket"),
                }
            }
            GameOutcome::Lost => self.current_streak = 0,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }

    /// Wins that took exactly `attempts` guesses
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> Option<u32> {
        attempts
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get(i))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_statistics_are_zeroed() {
        let stats = Statistics::new();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.guess_distribution, [0; MAX_ATTEMPTS]);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn wins_build_streak_and_distribution() {
        let mut stats = Statistics::new();
        stats.record(GameOutcome::Won { attempts: 3 });
        stats.record(GameOutcome::Won { attempts: 3 });
        stats.record(GameOutcome::Won { attempts: 6 });

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.wins_in(3), Some(2));
        assert_eq!(stats.wins_in(6), Some(1));
        assert_eq!(stats.wins_in(1), Some(0));
    }

    #[test]
    fn loss_resets_current_streak_only() {
        let mut stats = Statistics::new();
        stats.record(GameOutcome::Won { attempts: 2 });
        stats.record(GameOutcome::Won { attempts: 4 });
        stats.record(GameOutcome::Lost);
        stats.record(GameOutcome::Won { attempts: 1 });

        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_attempts_are_not_bucketed() {
        let mut stats = Statistics::new();
        stats.record(GameOutcome::Won { attempts: 0 });
        stats.record(GameOutcome::Won { attempts: 7 });

        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution.iter().sum::<u32>(), 0);
        assert_eq!(stats.wins_in(0), None);
        assert_eq!(stats.wins_in(7), None);
    }
}
