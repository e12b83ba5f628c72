//! Level-to-level progression
//!
//! A session owns the current level and its kill tracking. Levels are
//! generated from RNG streams derived from the session seed, so a whole run
//! is reproducible from one number.

use log::info;

use crate::maze::{Corner, Level};
use crate::rng::GameRng;
use crate::world::errors::LevelError;
use crate::world::options::GenerationOptions;
use crate::world::progress::{ArenaProgress, KillOutcome};

#[derive(Debug, Clone)]
pub struct Session {
    options: GenerationOptions,
    root: GameRng,
    /// Incremented on game over so a new run gets fresh mazes
    run: u32,
    level: Level,
    progress: ArenaProgress,
}

impl Session {
    /// Start a run on level 1
    pub fn new(options: GenerationOptions, root: GameRng) -> Result<Self, LevelError> {
        Self::start_at(options, root, 1)
    }

    /// Start a run on an arbitrary level
    pub fn start_at(
        options: GenerationOptions,
        root: GameRng,
        number: u32,
    ) -> Result<Self, LevelError> {
        let level = Level::setup(number, &options, level_rng(&root, 0, number))?;
        let progress = ArenaProgress::new(level.total_hostiles(), options.key_divisor);
        Ok(Self {
            options,
            root,
            run: 0,
            level,
            progress,
        })
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn level_number(&self) -> u32 {
        self.level.number()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn progress(&self) -> &ArenaProgress {
        &self.progress
    }

    /// Count a hostile kill on the current level
    pub fn record_kill(&mut self) -> Option<KillOutcome> {
        self.progress.record_kill()
    }

    /// A key was picked up: open an exit
    pub fn collect_key(&mut self) -> Result<Corner, LevelError> {
        self.level.open_random_corner()
    }

    /// Move on to the next level
    ///
    /// Allowed once an exit is open or the arena is cleared.
    pub fn advance(&mut self) -> Result<u32, LevelError> {
        if !self.level.has_open_exit() && !self.progress.is_cleared() {
            return Err(LevelError::LevelNotFinished);
        }
        let next = self.level_number() + 1;
        self.load(next)?;
        Ok(next)
    }

    /// The player died: report nights survived and restart from level 1
    pub fn game_over(&mut self) -> Result<u32, LevelError> {
        let survived = self.level_number() - 1;
        info!("game over on level {}, survived {survived}", self.level_number());
        self.run += 1;
        self.load(1)?;
        Ok(survived)
    }

    fn load(&mut self, number: u32) -> Result<(), LevelError> {
        let level = Level::setup(number, &self.options, level_rng(&self.root, self.run, number))?;
        self.progress = ArenaProgress::new(level.total_hostiles(), self.options.key_divisor);
        self.level = level;
        Ok(())
    }
}

fn level_rng(root: &GameRng, run: u32, number: u32) -> GameRng {
    root.derive(((run as u64) << 32) | number as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> Session {
        Session::new(GenerationOptions::default(), GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_starts_on_level_one() {
        let s = session(1);
        assert_eq!(s.level_number(), 1);
        assert_eq!(s.level().dimension(), 5);
        assert_eq!(s.progress().total_hostiles(), s.level().total_hostiles());
    }

    #[test]
    fn test_cannot_advance_closed_level() {
        let mut s = session(2);
        assert_eq!(s.advance(), Err(LevelError::LevelNotFinished));
        assert_eq!(s.level_number(), 1);
    }

    #[test]
    fn test_key_opens_exit_and_advance() {
        let mut s = session(3);
        let corner = s.collect_key().unwrap();
        assert!(s.level().grid().is_exit(corner.cell_index(5)));
        assert_eq!(s.advance(), Ok(2));
        assert_eq!(s.level().dimension(), 7);
        assert!(!s.level().has_open_exit());
        assert_eq!(s.progress().killed(), 0);
    }

    #[test]
    fn test_clearing_arena_allows_advance() {
        let mut s = session(4);
        while let Some(outcome) = s.record_kill() {
            if outcome.cleared {
                break;
            }
        }
        assert!(s.progress().is_cleared());
        assert_eq!(s.advance(), Ok(2));
    }

    #[test]
    fn test_game_over_resets() {
        let mut s = session(5);
        s.collect_key().unwrap();
        s.advance().unwrap();
        s.collect_key().unwrap();
        s.advance().unwrap();
        let first_run_level_one = Session::new(GenerationOptions::default(), GameRng::new(5))
            .unwrap()
            .level()
            .grid()
            .clone();

        assert_eq!(s.game_over(), Ok(2));
        assert_eq!(s.level_number(), 1);
        // A new run does not replay the previous run's maze seed
        assert_ne!(s.level().grid(), &first_run_level_one);
    }

    #[test]
    fn test_runs_reproducible() {
        let a = session(6);
        let b = session(6);
        assert_eq!(a.level().grid(), b.level().grid());
        assert_eq!(a.level().population(), b.level().population());
    }
}
