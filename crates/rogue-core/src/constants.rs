//! Simulation constants and tuning parameters.
//!
//! Motion is expressed per reference frame: a delta of 1.0 is one frame at
//! 60 Hz. Timers are seconds, advanced by `delta / 60`.

/// Reference frame rate the delta is normalized against.
pub const REFERENCE_FPS: f32 = 60.0;

/// Largest delta a host should feed in one tick (a stalled frame is capped).
pub const MAX_FRAME_DELTA: f32 = 4.0;

// --- Arena ---

pub const DEFAULT_ARENA_WIDTH: f32 = 1280.0;
pub const DEFAULT_ARENA_HEIGHT: f32 = 720.0;

/// Distance from the bottom of the arena to the platformer ground line.
pub const GROUND_MARGIN: f32 = 50.0;

/// Spawned enemies appear this far beyond the arena edge.
pub const SPAWN_EDGE_OFFSET: f32 = 20.0;

/// Straight projectiles this far outside the arena are culled.
pub const OUT_OF_BOUNDS_MARGIN: f32 = 100.0;

// --- Player ---

pub const PLAYER_RADIUS: f32 = 15.0;

/// Player hp lost per unit delta while touching an enemy (30 hp/s).
pub const CONTACT_DAMAGE_PER_FRAME: f32 = 0.5;

// --- Platformer physics ---

/// Downward acceleration per frame.
pub const GRAVITY: f32 = 0.5;

/// Vertical velocity applied on a grounded jump.
pub const JUMP_IMPULSE: f32 = -12.0;

/// Vertical input below this value requests a jump.
pub const JUMP_INPUT_THRESHOLD: f32 = -0.5;

// --- Waves and spawning ---

pub const WAVE_DURATION_SECS: f32 = 60.0;
pub const WAVE_CLEAR_BONUS: u32 = 500;

/// Spawn interval never drops below this many seconds.
pub const MIN_SPAWN_INTERVAL_SECS: f32 = 0.2;

/// Spawn interval shrinks by this much per wave above 1.
pub const SPAWN_INTERVAL_STEP_PER_WAVE: f32 = 0.1;

/// Max hp growth per wave above 1.
pub const ENEMY_HP_SCALE_PER_WAVE: f32 = 0.2;

/// Speed growth per wave above 1.
pub const ENEMY_SPEED_SCALE_PER_WAVE: f32 = 0.05;

/// First wave that can roll rushers.
pub const RUSHER_MIN_WAVE: u32 = 3;

/// First wave that can roll tanks.
pub const TANK_MIN_WAVE: u32 = 5;

pub const RUSHER_SPAWN_CHANCE: f64 = 0.2;
pub const TANK_SPAWN_CHANCE: f64 = 0.2;

// --- Enemy AI ---

/// Rusher starts winding up inside this distance.
pub const RUSH_TRIGGER_DISTANCE: f32 = 200.0;

/// In platformer mode the rusher also needs the target within this vertical band.
pub const RUSH_VERTICAL_BAND: f32 = 60.0;

pub const RUSH_WINDUP_SECS: f32 = 0.5;
pub const RUSH_COOLDOWN_SECS: f32 = 1.0;

/// Charge velocity as a multiple of base speed.
pub const RUSH_SPEED_MULTIPLIER: f32 = 6.0;

/// Per-tick velocity decay during the post-charge cooldown.
pub const RUSH_COOLDOWN_DECAY: f32 = 0.95;

// --- Combat ---

pub const CRIT_CHANCE: f64 = 0.1;
pub const CRIT_MULTIPLIER: f32 = 2.0;

/// Particles emitted when an enemy dies.
pub const DEATH_PARTICLE_COUNT: u32 = 8;

// --- Projectiles ---

pub const BOLT_RADIUS: f32 = 4.0;
pub const BOLT_LIFETIME_FRAMES: f32 = 100.0;

/// Delay between consecutive wand shots in one volley.
pub const WAND_STAGGER_SECS: f32 = 0.1;

pub const AXE_RADIUS: f32 = 8.0;
pub const AXE_GRAVITY: f32 = 0.5;
pub const AXE_SPIN_PER_FRAME: f32 = 0.2;

/// Axes spawn this far above the player.
pub const AXE_SPAWN_LIFT: f32 = 20.0;
pub const AXE_BASE_UPWARD_IMPULSE: f32 = -12.0;
pub const AXE_UPWARD_JITTER: f32 = 2.0;

/// Horizontal separation between axes in one throw.
pub const AXE_SPREAD_STEP: f32 = 2.0;

/// Axes are culled after falling this far below their spawn height.
pub const AXE_CULL_DROP: f32 = 1000.0;

// --- Orbit shield ---

pub const ORBIT_HIT_RADIUS: f32 = 15.0;
pub const ORBIT_KNOCKBACK: f32 = 10.0;

// --- Weapons ---

pub const WEAPON_MAX_LEVEL: u32 = 5;
pub const ROSTER_CAPACITY: usize = 4;

// --- Pickups ---

pub const GEM_RADIUS: f32 = 6.0;

/// Homing speed a gem snaps to when first attracted.
pub const GEM_SNAP_SPEED: f32 = 5.0;

/// Homing speed gained per frame.
pub const GEM_ACCELERATION: f32 = 0.5;

/// Idle bob phase advance per frame.
pub const GEM_WOBBLE_RATE: f32 = 0.05;

// --- Progression ---

pub const START_MAX_EXP: f32 = 100.0;

/// `maxExp` growth factor on level-up, floored.
pub const EXP_GROWTH: f32 = 1.5;

// --- Level-up cards ---

pub const CARD_OFFER_COUNT: usize = 3;
pub const HEAL_CARD_AMOUNT: f32 = 30.0;
