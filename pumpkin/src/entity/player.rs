use crossbeam::atomic::AtomicCell;
use pumpkin_util::GameMode;

/// A connected player, as far as the creative menu is concerned.
pub struct Player {
    pub name: String,
    /// The player's current gamemode (e.g., Survival, Creative, Adventure).
    pub gamemode: AtomicCell<GameMode>,
}

impl Player {
    pub fn new(name: impl Into<String>, gamemode: GameMode) -> Self {
        Self {
            name: name.into(),
            gamemode: AtomicCell::new(gamemode),
        }
    }

    pub fn set_gamemode(&self, gamemode: GameMode) {
        let previous = self.gamemode.swap(gamemode);
        if previous != gamemode {
            log::debug!("{} changed gamemode: {previous} -> {gamemode}", self.name);
        }
    }

    /// Spectators are never shown the creative menu.
    pub fn is_spectator(&self) -> bool {
        self.gamemode.load().is_spectator()
    }
}
