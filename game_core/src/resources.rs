/// The two competitors in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human player, defending the right wall
    Player,
    /// Computer opponent, defending the left wall
    Cpu,
}

impl Side {
    /// Display name used for the winner banner
    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Cpu => "CPU",
        }
    }
}

/// Match score, owned by the session (no globals)
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u32,
    pub cpu: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Cpu => self.cpu += 1,
        }
    }

    /// First side at or past the threshold. The player is checked
    /// before the CPU, so on a simultaneous threshold the player wins.
    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.cpu >= win_score {
            Some(Side::Cpu)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.cpu = 0;
    }
}

/// One frame's worth of input and timing, polled by the adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Confirm key went down this frame (edge, not level)
    pub confirm_pressed: bool,
    /// Move-up key currently held
    pub move_up: bool,
    /// Move-down key currently held
    pub move_down: bool,
    /// Wall-clock time in seconds, used only for elapsed comparisons
    pub now: f64,
}

/// Random number generator, injected so tests can fix the seed
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
