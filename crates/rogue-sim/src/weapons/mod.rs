//! Weapons: per-kind stat tables, cooldown gating and level upgrades.
//!
//! A weapon is a closed sum over `WeaponKind`; firing behavior lives in
//! `fire`, ownership and dispatch in `roster`.

pub mod fire;
pub mod roster;

use rogue_core::constants::WEAPON_MAX_LEVEL;
use rogue_core::enums::WeaponKind;
use rogue_core::types::WeaponStats;

pub use roster::Roster;

/// An equipped weapon. Upgrades mutate it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub level: u32,
    pub stats: WeaponStats,
    /// Seconds until the next fire. Starts at zero so a fresh weapon fires
    /// on its first tick.
    pub cooldown_timer: f32,
    /// Ring rotation in radians. Only the orbit shield advances it.
    pub orbit_angle: f32,
}

/// Level-1 stats for a weapon kind.
pub fn base_stats(kind: WeaponKind) -> WeaponStats {
    match kind {
        WeaponKind::MagicWand => WeaponStats {
            damage: 15.0,
            cooldown: 1.0,
            range: 400.0,
            speed: 8.0,
            amount: 1,
            area: 1.0,
            duration: None,
        },
        WeaponKind::OrbitShield => WeaponStats {
            damage: 10.0,
            cooldown: 0.5,
            range: 80.0,
            speed: 2.0,
            amount: 1,
            area: 1.0,
            duration: None,
        },
        WeaponKind::Axe => WeaponStats {
            damage: 40.0,
            cooldown: 1.5,
            range: 0.0,
            speed: 5.0,
            amount: 1,
            area: 1.0,
            duration: None,
        },
    }
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind,
            level: 1,
            stats: base_stats(kind),
            cooldown_timer: 0.0,
            orbit_angle: 0.0,
        }
    }

    pub fn max_level(&self) -> u32 {
        WEAPON_MAX_LEVEL
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= WEAPON_MAX_LEVEL
    }

    /// Count the cooldown down by `dt_secs`. Returns true when the weapon
    /// should fire this tick. At most one fire per call: an overshoot is
    /// discarded and the timer resets to the nominal cooldown.
    pub fn tick_cooldown(&mut self, dt_secs: f32) -> bool {
        self.cooldown_timer -= dt_secs;
        if self.cooldown_timer <= 0.0 {
            self.cooldown_timer = self.stats.cooldown;
            return true;
        }
        false
    }

    /// Advance one level. Even levels add a projectile or orb, odd levels
    /// add damage (and size for the shield and axe). The wand also fires
    /// 10% faster on every level. No-op at max level; returns whether the
    /// weapon changed.
    pub fn upgrade(&mut self) -> bool {
        if self.is_max_level() {
            return false;
        }
        self.level += 1;
        let even = self.level % 2 == 0;
        let s = &mut self.stats;
        match self.kind {
            WeaponKind::MagicWand => {
                if even {
                    s.amount += 1;
                } else {
                    s.damage += 5.0;
                }
                s.cooldown *= 0.9;
            }
            WeaponKind::OrbitShield => {
                if even {
                    s.amount += 1;
                } else {
                    s.damage += 5.0;
                    s.range += 10.0;
                    s.area *= 1.2;
                }
            }
            WeaponKind::Axe => {
                if even {
                    s.amount += 1;
                } else {
                    s.damage += 20.0;
                    s.area *= 1.5;
                }
            }
        }
        true
    }
}
