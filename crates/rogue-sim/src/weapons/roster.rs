//! The player's equipped weapons.

use hecs::World;
use tracing::debug;

use rogue_core::constants::{REFERENCE_FPS, ROSTER_CAPACITY};
use rogue_core::enums::WeaponKind;

use super::fire::{self, FireContext};
use super::Weapon;

/// Ordered, capacity-bounded weapon list with uniqueness by kind.
#[derive(Debug, Clone)]
pub struct Roster {
    weapons: Vec<Weapon>,
    capacity: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::with_capacity(ROSTER_CAPACITY)
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weapons: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Equip a new weapon. Fails when the roster is full or already holds
    /// this kind.
    pub fn add(&mut self, kind: WeaponKind) -> bool {
        if self.is_full() || self.has(kind) {
            return false;
        }
        debug!(weapon = kind.id(), "weapon added");
        self.weapons.push(Weapon::new(kind));
        true
    }

    /// Level up an owned weapon. No-op if absent or maxed.
    pub fn upgrade(&mut self, kind: WeaponKind) -> bool {
        let Some(weapon) = self.get_mut(kind) else {
            return false;
        };
        let upgraded = weapon.upgrade();
        if upgraded {
            debug!(weapon = kind.id(), level = weapon.level, "weapon upgraded");
        }
        upgraded
    }

    pub fn get(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.kind == kind)
    }

    pub fn get_mut(&mut self, kind: WeaponKind) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.kind == kind)
    }

    pub fn has(&self, kind: WeaponKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn is_full(&self) -> bool {
        self.weapons.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    pub fn clear(&mut self) {
        self.weapons.clear();
    }

    /// Advance every weapon by `delta` frames, firing those whose cooldown
    /// expired. Returns how many weapons fired.
    pub fn update(&mut self, world: &mut World, ctx: &mut FireContext<'_>, delta: f32) -> usize {
        let dt_secs = delta / REFERENCE_FPS;
        let mut fired = 0;
        for weapon in &mut self.weapons {
            if weapon.kind == WeaponKind::OrbitShield {
                weapon.orbit_angle += weapon.stats.speed * dt_secs;
            }
            if weapon.tick_cooldown(dt_secs) {
                fire::fire(weapon, world, ctx);
                fired += 1;
            }
        }
        fired
    }
}
