use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Pause between lighting the last cell and declaring the game over.
pub const COMPLETION_DELAY_MS: Millis = 1000;

/// Refresh period of the wall clock, which runs regardless of the game.
pub const CLOCK_INTERVAL_MS: Millis = 1000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Completing,
}

impl Phase {
    /// Mode, name and the start action are frozen while locked.
    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Running | Self::Completing)
    }
}

/// Ties a scheduled timer to the session that scheduled it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(u32);

impl SessionToken {
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// The one timer the current phase needs the host to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Schedule {
    Repeating {
        token: SessionToken,
        interval_ms: Millis,
    },
    Once {
        token: SessionToken,
        delay_ms: Millis,
    },
}

impl Schedule {
    pub const fn token(self) -> SessionToken {
        match self {
            Self::Repeating { token, .. } | Self::Once { token, .. } => token,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Revealed(CellIndex),
    AllRevealed(CellIndex),
}

impl TickOutcome {
    pub const fn cell(self) -> CellIndex {
        match self {
            Self::Revealed(index) | Self::AllRevealed(index) => index,
        }
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::AllRevealed(_))
    }
}

/// Idle → Running → Completing → Idle.
///
/// The machine never reads a clock or runs a timer itself. Callers pass `now` into the transitions that record
/// a timestamp and drive [`GameMachine::tick`] and [`GameMachine::complete`] from whatever timers
/// [`GameMachine::schedule`] asks for, handing back the token the timer was created with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameMachine {
    mode: Mode,
    player_name: String,
    phase: Phase,
    grid: Option<Grid>,
    session: Option<GameSession>,
    token: SessionToken,
}

impl GameMachine {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Absent until the first game starts.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// The running session, or the last finished one kept for the summary.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.is_locked() || self.mode == mode {
            return false;
        }

        self.mode = mode;
        // the board left over from the last game follows the selector
        if let Some(grid) = self.grid.as_mut() {
            *grid = Grid::for_mode(mode);
        }
        true
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }

        let name = name.into();
        if self.player_name == name {
            return false;
        }
        self.player_name = name;
        true
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<SessionToken> {
        if self.is_locked() {
            return Err(GameError::SessionLocked);
        }
        if self.player_name.trim().is_empty() {
            return Err(GameError::BlankPlayerName);
        }

        log::info!(
            "Game is started in {} mode. Player: {}",
            self.mode,
            self.player_name
        );

        self.grid = Some(Grid::for_mode(self.mode));
        self.session = Some(GameSession::new(
            self.mode,
            self.player_name.clone(),
            now,
        ));
        self.token = self.token.next();
        self.phase = Phase::Running;
        Ok(self.token)
    }

    pub fn tick(&mut self, token: SessionToken, picker: &mut impl CellPicker) -> Result<TickOutcome> {
        self.check_token(token)?;
        if self.phase != Phase::Running {
            return Err(GameError::NotRunning);
        }

        let grid = self.grid.as_ref().ok_or(GameError::NotRunning)?;
        let index = picker.pick(grid).ok_or(GameError::NotRunning)?;
        let next = grid.with_revealed(index)?;
        let done = next.is_fully_revealed();
        log::trace!(
            "revealed cell {} ({}/{})",
            index,
            next.revealed_count(),
            next.len()
        );
        self.grid = Some(next);

        if done {
            log::debug!("all cells revealed, waiting {}ms", COMPLETION_DELAY_MS);
            self.phase = Phase::Completing;
            Ok(TickOutcome::AllRevealed(index))
        } else {
            Ok(TickOutcome::Revealed(index))
        }
    }

    pub fn complete(&mut self, token: SessionToken, now: DateTime<Utc>) -> Result<GameSession> {
        self.check_token(token)?;
        if self.phase != Phase::Completing {
            return Err(GameError::NotCompleting);
        }

        let session = self.session.as_mut().ok_or(GameError::NotCompleting)?;
        session.finish(now);
        let summary = session.clone();

        if let Some(grid) = self.grid.as_mut() {
            *grid = grid.cleared();
        }
        self.phase = Phase::Idle;
        Ok(summary)
    }

    pub fn schedule(&self) -> Option<Schedule> {
        let token = self.token;
        match self.phase {
            Phase::Idle => None,
            Phase::Running => Some(Schedule::Repeating {
                token,
                interval_ms: self.mode.reveal_interval_ms(),
            }),
            Phase::Completing => Some(Schedule::Once {
                token,
                delay_ms: COMPLETION_DELAY_MS,
            }),
        }
    }

    fn check_token(&self, token: SessionToken) -> Result<()> {
        if token == self.token {
            Ok(())
        } else {
            Err(GameError::StaleTimer)
        }
    }
}
