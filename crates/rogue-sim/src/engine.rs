//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing for a seed.
//!
//! Progression and config live outside the engine. Each tick receives them
//! explicitly, re-reads them at the point of use, and writes outcomes back
//! through their update methods.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use rogue_core::commands::PlayerCommand;
use rogue_core::config::GameConfig;
use rogue_core::constants::REFERENCE_FPS;
use rogue_core::enums::{GameMode, TutorialStep, WeaponKind};
use rogue_core::events::GameEvent;
use rogue_core::input::InputFrame;
use rogue_core::progression::{ProgressPatch, Progression};
use rogue_core::state::{CardOffer, FrameSnapshot};
use rogue_core::types::{Arena, Position, SimTime};

use crate::cards::{self, RunBonus};
use crate::delayed::{DelayedAction, DelayedQueue};
use crate::systems;
use crate::systems::snapshot::SnapshotSource;
use crate::systems::wave_spawner::{SpawnContext, WaveTimers};
use crate::weapons::fire::FireContext;
use crate::weapons::Roster;
use crate::world_setup;

/// Configuration for creating an engine.
pub struct SimConfig {
    /// RNG seed. Same seed and inputs give the same run on one machine.
    pub seed: u64,
    pub arena: Arena,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all per-run state.
pub struct SimulationEngine {
    world: World,
    arena: Arena,
    time: SimTime,
    mode: GameMode,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    player: Option<Entity>,
    roster: Roster,
    delayed: DelayedQueue,
    timers: WaveTimers,
    card_offers: Vec<CardOffer>,
    run_bonus: RunBonus,
    tutorial_sent: Vec<TutorialStep>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            arena: config.arena,
            time: SimTime::default(),
            mode: GameMode::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: None,
            roster: Roster::new(),
            delayed: DelayedQueue::new(),
            timers: WaveTimers::default(),
            card_offers: Vec::new(),
            run_bonus: RunBonus::default(),
            tutorial_sent: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one host frame and return the snapshot.
    ///
    /// `delta` is the elapsed time normalized to a 60 Hz frame (1.0 is one
    /// frame). Commands are handled first; the rest of the tick is skipped
    /// while no run is active or the progression store is paused or over.
    pub fn tick(
        &mut self,
        progression: &mut Progression,
        config: &GameConfig,
        input: &InputFrame,
        delta: f32,
    ) -> FrameSnapshot {
        self.process_commands(progression, config);

        let running = self.player.is_some() && !progression.is_paused && !progression.is_game_over;
        if running {
            self.run_systems(progression, config, input, delta * config.game_speed);
            if progression.is_game_over {
                self.drop_delayed("game over");
            }
        }
        self.refresh_card_offers(progression, config);

        let events = std::mem::take(&mut self.events);
        let source = SnapshotSource {
            time: self.time,
            mode: self.mode,
            progression,
            player: self.player,
            roster: &self.roster,
            card_offers: &self.card_offers,
            wave_progress: self.timers.wave_progress(),
        };
        systems::snapshot::build_snapshot(&self.world, &source, events)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn card_offers(&self) -> &[CardOffer] {
        &self.card_offers
    }

    pub fn run_bonus(&self) -> RunBonus {
        self.run_bonus
    }

    /// Number of staggered actions still waiting on the virtual clock.
    pub fn pending_delayed(&self) -> usize {
        self.delayed.len()
    }

    /// Fraction of the current wave elapsed. Zero before a run starts.
    pub fn wave_progress(&self) -> f32 {
        self.timers.wave_progress()
    }

    /// Current player position, `None` until a run has started.
    pub fn player_position(&self) -> Option<Position> {
        let player = self.player?;
        self.world.get::<&Position>(player).ok().map(|pos| *pos)
    }

    /// Player entity handle, for tests that build worlds by hand.
    #[cfg(test)]
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    #[cfg(test)]
    pub fn run_bonus_mut(&mut self) -> &mut RunBonus {
        &mut self.run_bonus
    }

    #[cfg(test)]
    pub fn timers_mut(&mut self) -> &mut WaveTimers {
        &mut self.timers
    }

    /// Start a run immediately, without waiting for a tick.
    #[cfg(test)]
    pub fn start_run_now(&mut self, progression: &mut Progression, config: &GameConfig) {
        self.start_run(progression, config);
    }

    /// Spawn an enemy chasing the player (for tests needing exact placement).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: rogue_core::enums::EnemyKind,
        position: Position,
        wave: u32,
        config: &GameConfig,
    ) -> Entity {
        world_setup::spawn_enemy(
            &mut self.world,
            kind,
            position,
            wave,
            config,
            self.player,
            self.mode,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self, progression: &mut Progression, config: &GameConfig) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, progression, config);
        }
    }

    /// Handle a single player command.
    fn handle_command(
        &mut self,
        command: PlayerCommand,
        progression: &mut Progression,
        config: &GameConfig,
    ) {
        match command {
            PlayerCommand::StartRun => self.start_run(progression, config),
            PlayerCommand::Pause => progression.toggle_pause(Some(true)),
            PlayerCommand::Resume => {
                if !progression.is_level_up && !progression.is_game_over {
                    progression.toggle_pause(Some(false));
                }
            }
            PlayerCommand::TogglePause => {
                if !progression.is_level_up && !progression.is_game_over {
                    progression.toggle_pause(None);
                }
            }
            PlayerCommand::ChooseCard { index } => {
                if let Some(offer) = self.card_offers.get(index).copied() {
                    cards::apply_offer(
                        offer,
                        &mut self.roster,
                        progression,
                        config,
                        &mut self.run_bonus,
                    );
                    self.card_offers.clear();
                    progression.set_level_up(false);
                }
            }
            PlayerCommand::SwitchMode { mode } => {
                info!(from = ?self.mode, to = ?mode, "switching mode");
                progression.set_game_mode(mode);
                self.start_run(progression, config);
            }
        }
    }

    /// Begin (or continue) a run in the progression's current mode. Progress
    /// resets after a game over, on a dead slot, or when nothing was gained yet.
    fn start_run(&mut self, progression: &mut Progression, config: &GameConfig) {
        let fresh = progression.is_game_over
            || progression.progress.hp <= 0.0
            || progression.progress.is_pristine();
        if fresh {
            progression.reset_game();
            progression.set_game_over(false);
            progression.patch(ProgressPatch {
                hp: Some(config.player_health),
                max_hp: Some(config.player_health),
                ..Default::default()
            });
        }
        progression.set_level_up(false);

        self.drop_delayed("run restart");
        world_setup::clear_world(&mut self.world);
        self.mode = progression.current_mode;
        self.time = SimTime::default();
        self.timers = WaveTimers::default();
        self.card_offers.clear();
        self.run_bonus = RunBonus::default();
        self.tutorial_sent.clear();
        self.events.clear();

        self.player = Some(world_setup::spawn_player(
            &mut self.world,
            &self.arena,
            self.mode,
            config,
        ));
        self.roster.clear();
        self.roster.add(WeaponKind::MagicWand);

        info!(
            mode = ?self.mode,
            fresh,
            wave = progression.progress.wave,
            level = progression.progress.level,
            "run started"
        );
    }

    fn drop_delayed(&mut self, reason: &str) {
        let dropped = self.delayed.clear();
        if dropped > 0 {
            debug!(dropped, reason, "dropped delayed actions");
        }
    }

    /// Damage multiplier at the current level, including card bonuses.
    fn damage_multiplier(&self, progression: &Progression, config: &GameConfig) -> f32 {
        config.damage_multiplier_at(progression.progress.level) + self.run_bonus.damage
    }

    fn player_speed(&self, progression: &Progression, config: &GameConfig) -> f32 {
        let multiplier =
            config.speed_multiplier_at(progression.progress.level) + self.run_bonus.speed;
        config.player_speed * multiplier
    }

    /// Emit a tutorial milestone once, and only if the host has not recorded it.
    fn note_tutorial(&mut self, config: &GameConfig, step: TutorialStep) {
        if config.tutorial_done(step) || self.tutorial_sent.contains(&step) {
            return;
        }
        self.tutorial_sent.push(step);
        self.events.push(GameEvent::TutorialStep { step });
    }

    /// Roll offers when the level-up gate is open and none are pending.
    fn refresh_card_offers(&mut self, progression: &Progression, config: &GameConfig) {
        if self.player.is_none() || !progression.is_level_up || !self.card_offers.is_empty() {
            return;
        }
        self.card_offers = cards::roll_offers(&mut self.rng, &self.roster, config);
        info!(level = progression.progress.level, offers = self.card_offers.len(), "level up");
    }

    /// Run all systems in order.
    fn run_systems(
        &mut self,
        progression: &mut Progression,
        config: &GameConfig,
        input: &InputFrame,
        delta: f32,
    ) {
        let Some(player) = self.player else {
            return;
        };
        let dt_secs = delta / REFERENCE_FPS;
        self.time.advance(f64::from(dt_secs));

        // 1. Staggered shots that came due
        self.run_delayed_actions(player);

        // 2. Player input and movement
        let player_speed = self.player_speed(progression, config);
        let moved = systems::player::run(
            &mut self.world,
            player,
            input,
            player_speed,
            config,
            progression,
            self.mode,
            &self.arena,
            delta,
        );
        if moved {
            self.note_tutorial(config, TutorialStep::HasMoved);
        }

        // 3. Gravity and ground contact
        if self.mode == GameMode::Platformer {
            systems::physics::run(&mut self.world, &self.arena, delta);
        }

        // 4. Wave and spawn timers
        let spawn_ctx = SpawnContext {
            config,
            arena: &self.arena,
            mode: self.mode,
            player: self.player,
        };
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timers,
            progression,
            &spawn_ctx,
            &mut self.events,
            dt_secs,
        );

        // 5. Weapons
        let mut kills = Vec::new();
        if let Some(player_pos) = self.player_position() {
            let mut ctx = FireContext {
                rng: &mut self.rng,
                delayed: &mut self.delayed,
                events: &mut self.events,
                kills: &mut kills,
                player_pos,
                now_secs: self.time.elapsed_secs,
                bullet_damage: config.bullet_damage,
            };
            self.roster.update(&mut self.world, &mut ctx, delta);
        }
        self.award_kills(&mut kills, progression);

        // 6. Enemy AI, movement and contact damage
        systems::enemy_ai::run(&mut self.world, self.mode, delta);
        systems::combat::contact_damage(
            &mut self.world,
            player,
            progression,
            config,
            &mut self.events,
            delta,
        );
        if progression.is_game_over {
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.player);
            return;
        }

        // 7. Projectiles
        systems::projectiles::run(&mut self.world, &self.arena, delta);
        let damage_multiplier = self.damage_multiplier(progression, config);
        let hits = systems::combat::resolve_projectile_hits(
            &mut self.world,
            &mut self.rng,
            damage_multiplier,
            &mut self.events,
            &mut kills,
        );
        if hits > 0 {
            self.note_tutorial(config, TutorialStep::HasAttacked);
        }
        self.award_kills(&mut kills, progression);

        // 8. Pickups
        let collected = systems::pickups::run(
            &mut self.world,
            player,
            player_speed,
            config.magnet_radius,
            progression,
            &mut self.events,
            delta,
        );
        if collected > 0 {
            self.note_tutorial(config, TutorialStep::HasCollectedGem);
        }

        // 9. Purge everything that died this tick
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, self.player);
    }

    fn award_kills(&mut self, kills: &mut Vec<Entity>, progression: &mut Progression) {
        for enemy in kills.drain(..) {
            systems::combat::award_kill(
                &mut self.world,
                enemy,
                progression,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    /// Release due staggered shots. They are dropped if the player is gone.
    fn run_delayed_actions(&mut self, player: Entity) {
        let due = self.delayed.drain_due(self.time.elapsed_secs);
        if due.is_empty() {
            return;
        }
        let from = match self.player_position() {
            Some(pos) if world_setup::is_alive(&self.world, player) => pos,
            _ => {
                debug!(dropped = due.len(), "player gone, dropping delayed actions");
                return;
            }
        };
        for action in due {
            match action {
                DelayedAction::SpawnBolt {
                    target,
                    last_known,
                    speed,
                    damage,
                } => {
                    let aim = if world_setup::is_alive(&self.world, target) {
                        self.world
                            .get::<&Position>(target)
                            .map(|pos| *pos)
                            .unwrap_or(last_known)
                    } else {
                        last_known
                    };
                    world_setup::spawn_bolt(&mut self.world, from, aim, speed, damage);
                }
            }
        }
    }
}
