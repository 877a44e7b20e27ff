//! Client shell: routes terminal input into a game session and decides when
//! the view needs redrawing.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::config::Config;
use crate::core::{GameObserver, GameSnapshot, Session};
use crate::input::{handle_key_event, Gesture, InputAction, SwipeDetector};
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::Command;

/// Observer that keeps what the view needs between frames
#[derive(Debug, Default)]
pub struct Presenter {
    snapshot: GameSnapshot,
    dirty: bool,
    final_score: Option<u32>,
}

impl Presenter {
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }
}

impl GameObserver for Presenter {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.snapshot = *snapshot;
        self.dirty = true;
    }

    fn score_changed(&mut self, score: u32, level: u32) {
        log::debug!("score {} level {}", score, level);
    }

    fn game_over(&mut self, final_score: u32) {
        self.final_score = Some(final_score);
        self.dirty = true;
    }
}

pub struct App {
    config: Config,
    session: Session<Presenter>,
    view: GameView,
    swipes: SwipeDetector,
    paused: bool,
    episode: u32,
    quit: bool,
    redraw: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let session = Session::start(config.game_config(0), Presenter::default());
        Self {
            swipes: SwipeDetector::new(config.swipe_threshold_px),
            config,
            session,
            view: GameView::default(),
            paused: false,
            episode: 0,
            quit: false,
            redraw: true,
        }
    }

    pub fn session(&self) -> &Session<Presenter> {
        &self.session
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        self.session.observer().snapshot()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Final score of the current game once it has ended
    pub fn final_score(&self) -> Option<u32> {
        self.session.observer().final_score()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = handle_key_event(key) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Game(command) => self.command(command),
            InputAction::TogglePause => self.toggle_pause(),
            InputAction::Restart => self.restart(),
            InputAction::Quit => self.quit = true,
        }
    }

    /// Swipes become commands; a tap presses the on-screen button under it.
    pub fn handle_mouse(&mut self, event: MouseEvent, viewport: Viewport) {
        match self.swipes.handle_mouse_event(event) {
            Some(Gesture::Swipe(command)) => self.command(command),
            Some(Gesture::Tap { column, row }) => {
                if let Some(command) = self.view.button_at(viewport, column, row) {
                    self.command(command);
                }
            }
            None => {}
        }
    }

    fn command(&mut self, command: Command) {
        if self.paused {
            return;
        }
        self.session.handle(command);
    }

    pub fn toggle_pause(&mut self) {
        if self.session.is_game_over() {
            return;
        }
        self.paused = !self.paused;
        self.redraw = true;
        log::info!("{}", if self.paused { "paused" } else { "resumed" });
    }

    /// Start a fresh game with the next episode's seed
    pub fn restart(&mut self) {
        self.episode = self.episode.wrapping_add(1);
        let game = self.config.game_config(self.episode);
        self.session = Session::start(game, Presenter::default());
        log::info!(
            "restart: episode {} seed {} randomizer {}",
            self.episode,
            game.seed,
            self.session.state().randomizer().as_str()
        );
        self.paused = false;
        self.redraw = true;
    }

    /// Feed frame time to the game; paused games do not advance.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.paused {
            self.session.advance(elapsed_ms);
        }
    }

    /// Force a redraw on the next frame (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.redraw = true;
    }

    /// Draw into `fb` if anything changed since the last call.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) -> bool {
        let presenter = self.session.observer_mut();
        if !std::mem::take(&mut presenter.dirty) && !std::mem::take(&mut self.redraw) {
            return false;
        }
        self.redraw = false;
        let snapshot = *self.session.observer().snapshot();
        self.view.render_into(&snapshot, self.paused, viewport, fb);
        true
    }
}
