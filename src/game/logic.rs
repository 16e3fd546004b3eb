//! The frame loop: input, game flow, simulation, and scene output.

use super::collision::{resolve_pipes, touches_ground};
use super::input::FrameInput;
use super::obstacles::ObstacleGenerator;
use super::types::{GameState, Phase};
use crate::audio::{AudioSink, SoundId, SoundQueue};
use crate::config::GameConfig;
use crate::constants::{GAME_OVER_CONFETTI_CHANCE, LOWER_WORLD_BOUND};
use crate::entities::{Background, Drawable, Ground, Pipe, Player, Scroll};
use crate::geometry::Vec2;
use crate::particles::Particles;
use crate::render::{DrawSink, Viewport};
use crate::score::ScoreStore;
use rand::Rng;

/// One game session.
///
/// Owns every entity, the particle pool, and the injected collaborators.
/// Call [`Game::frame`] once per rendered frame, then [`Game::render`] and
/// [`Game::flush_audio`].
pub struct Game<R: Rng> {
    pub state: GameState,
    pub player: Player,
    pub pipes: Vec<Pipe>,
    pub grounds: [Ground; 2],
    pub backgrounds: [Background; 3],
    pub particles: Particles,
    pub viewport: Viewport,
    generator: ObstacleGenerator,
    config: GameConfig,
    sounds: SoundQueue,
    store: Box<dyn ScoreStore>,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>, rng: R) -> Self {
        let best = store.load_best();
        Self {
            state: GameState::new(best),
            player: Player::new(&config),
            pipes: Vec::new(),
            grounds: Ground::pair(),
            backgrounds: Background::layers(),
            particles: Particles::new(config.particle_capacity),
            viewport: Viewport::default(),
            generator: ObstacleGenerator::new(&config),
            config,
            sounds: SoundQueue::default(),
            store,
            rng,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Sounds requested since the last flush.
    pub fn pending_sounds(&self) -> &[SoundId] {
        self.sounds.pending()
    }

    /// Hand queued sounds to the audio collaborator without waiting on it.
    pub fn flush_audio(&mut self, audio: &dyn AudioSink) {
        for sound in self.sounds.drain() {
            audio.play(sound);
        }
    }

    pub fn drain_sounds(&mut self) -> Vec<SoundId> {
        self.sounds.drain()
    }

    /// The game-over screen has been up long enough to accept a restart.
    pub fn can_restart(&self) -> bool {
        self.state.is_game_over() && self.state.game_over_ms > self.config.game_over_delay_ms
    }

    /// Advance one frame of `dt` milliseconds with this frame's input edges.
    pub fn frame(&mut self, dt: f64, input: FrameInput) {
        let dt = dt.max(0.0);

        if input.debug {
            self.state.debug = !self.state.debug;
        }

        if input.pause {
            match self.state.phase {
                Phase::Playing => self.state.phase = Phase::Paused,
                Phase::Paused => self.state.phase = Phase::Playing,
                Phase::Title | Phase::GameOver => {}
            }
        }

        match self.state.phase {
            Phase::Title => {
                if input.jump {
                    self.begin_round();
                }
            }
            Phase::Playing => self.simulate(dt, input.jump),
            Phase::Paused => {}
            Phase::GameOver => {
                if input.jump && self.can_restart() {
                    self.begin_round();
                } else {
                    self.simulate(dt, false);
                    self.state.game_over_ms += dt;
                    self.confetti_shower();
                }
            }
        }

        self.particles.update(dt);
        self.state.advance_banner(dt);
    }

    /// Start (or restart) a round from the origin.
    fn begin_round(&mut self) {
        let restarting = self.state.phase == Phase::GameOver;

        self.state.score = 0;
        self.state.timer = 0.0;
        self.state.spawns = 0;
        self.state.game_over_ms = 0.0;
        self.state.new_best = false;
        self.pipes.clear();

        self.player.position = Vec2::ZERO;
        self.player.reset();

        self.state.phase = Phase::Playing;
        if restarting {
            log::info!("round reset");
        } else {
            log::info!("round started");
        }
    }

    /// Run the simulation blocks. Each block re-checks the phase, so a hit
    /// in one block freezes the blocks after it in the same frame.
    fn simulate(&mut self, dt: f64, jump: bool) {
        if self.state.is_playing() {
            let spawn = self.generator.tick(
                &mut self.state.timer,
                dt,
                &mut self.pipes,
                &self.viewport,
                &mut self.rng,
            );
            if spawn.is_some() {
                self.state.spawns += 1;
            }
        }

        if self.state.is_playing() {
            for pipe in &mut self.pipes {
                pipe.update(dt);
                if pipe.is_off_screen(&self.viewport) {
                    pipe.removed = true;
                }
            }
            self.pipes.retain(|pipe| !pipe.removed);
        }

        if self.state.is_playing() && !self.pipes.is_empty() {
            let outcome = resolve_pipes(&self.player, &mut self.pipes);
            for _ in 0..outcome.scored {
                self.state.score += 1;
                self.sounds.push(SoundId::Score);
            }
            if outcome.hit {
                self.end_round();
            }
        }

        if self.state.is_playing() {
            for ground in &mut self.grounds {
                ground.update(dt);
            }
        }

        // A long frame can carry the player past the whole ground strip, so
        // anything below the lower bound counts as contact.
        if !self.player.hitted
            && (touches_ground(&self.player, &self.grounds)
                || self.player.position.y <= LOWER_WORLD_BOUND)
        {
            self.end_round();
        }

        if self.state.is_playing() {
            for background in &mut self.backgrounds {
                background.update(dt);
            }
        }

        if self.player.position.y > LOWER_WORLD_BOUND {
            self.player.update(dt, &mut self.particles, &mut self.rng);
        }

        if self.state.is_playing() && jump {
            self.player.jump(1.0, &mut self.particles, &mut self.rng);
            self.sounds.push(SoundId::Jump);
        }
    }

    /// Hit sequence: knock the player out, settle the best score, and switch
    /// to the game-over screen. Runs once per round.
    fn end_round(&mut self) {
        self.sounds.push(SoundId::Hit);
        self.player.hit(&mut self.particles, &mut self.rng);
        self.save_score();
        self.state.phase = Phase::GameOver;
        self.state.game_over_ms = 0.0;
        log::info!(
            "game over: score {} (best {})",
            self.state.score,
            self.state.best
        );
    }

    fn save_score(&mut self) {
        let best = self.store.load_best().max(self.state.best);
        if self.state.score > best {
            if let Err(e) = self.store.store_best(self.state.score) {
                log::warn!("could not persist best score: {}", e);
            }
            self.state.best = self.state.score;
            self.state.new_best = true;
            self.sounds.push(SoundId::Confetti);
            let Vec2 { x, y } = self.player.position;
            self.particles.confetti(&mut self.rng, x, y);
            log::info!("new best score: {}", self.state.score);
        } else {
            self.state.best = best;
        }
    }

    /// Random confetti bursts while a new best is on screen.
    fn confetti_shower(&mut self) {
        if !self.state.new_best || !self.rng.gen_bool(GAME_OVER_CONFETTI_CHANCE) {
            return;
        }
        let half_w = self.viewport.width / 2.0;
        let half_h = self.viewport.height / 2.0;
        let x = self.rng.gen_range(-half_w..=half_w);
        let y = self.rng.gen_range(-half_h..=half_h);
        self.particles.confetti(&mut self.rng, x, y);
    }

    /// Emit the scene, back to front.
    pub fn render(&self, sink: &mut dyn DrawSink) {
        let viewport = &self.viewport;

        for background in &self.backgrounds {
            background.draw(sink, viewport);
        }
        for pipe in &self.pipes {
            pipe.draw(sink, viewport);
        }
        for ground in &self.grounds {
            ground.draw(sink, viewport);
        }
        self.player.draw(sink, viewport);
        self.particles.render(sink);

        if self.state.debug {
            for background in &self.backgrounds {
                background.debug_draw(sink);
            }
            for pipe in &self.pipes {
                pipe.debug_draw(sink);
            }
            for ground in &self.grounds {
                ground.debug_draw(sink);
            }
            self.player.debug_draw(sink);
        }
    }
}
