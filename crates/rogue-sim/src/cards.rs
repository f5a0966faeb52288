//! Level-up card offers.
//!
//! When the level-up gate opens the engine rolls up to three distinct
//! offers. Choosing one applies it and closes the gate.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use rogue_core::config::GameConfig;
use rogue_core::constants::{CARD_OFFER_COUNT, HEAL_CARD_AMOUNT};
use rogue_core::enums::WeaponKind;
use rogue_core::progression::{ProgressPatch, Progression};
use rogue_core::state::CardOffer;

use crate::weapons::Roster;

/// Boosts granted by cards for the rest of the current run. Added on top
/// of the config's level-scaled multipliers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunBonus {
    pub damage: f32,
    pub speed: f32,
}

/// Every offer currently eligible.
pub fn candidate_pool(roster: &Roster, config: &GameConfig) -> Vec<CardOffer> {
    let mut pool: Vec<CardOffer> = roster
        .iter()
        .filter(|w| !w.is_max_level())
        .map(|w| CardOffer::Upgrade {
            weapon: w.kind,
            next_level: w.level + 1,
        })
        .collect();
    if !roster.is_full() {
        pool.extend(
            WeaponKind::ALL
                .into_iter()
                .filter(|k| !roster.has(*k))
                .map(|weapon| CardOffer::NewWeapon { weapon }),
        );
    }
    pool.push(CardOffer::Might {
        bonus: config.card_damage_boost,
    });
    pool.push(CardOffer::Haste {
        bonus: config.card_speed_boost,
    });
    pool
}

/// Draw up to three offers without replacement, padding with heals.
pub fn roll_offers(rng: &mut ChaCha8Rng, roster: &Roster, config: &GameConfig) -> Vec<CardOffer> {
    let mut pool = candidate_pool(roster, config);
    pool.shuffle(rng);
    pool.truncate(CARD_OFFER_COUNT);
    while pool.len() < CARD_OFFER_COUNT {
        pool.push(CardOffer::Heal {
            amount: HEAL_CARD_AMOUNT,
        });
    }
    pool
}

/// Apply a chosen offer to the run.
pub fn apply_offer(
    offer: CardOffer,
    roster: &mut Roster,
    progression: &mut Progression,
    config: &GameConfig,
    bonus: &mut RunBonus,
) {
    debug!(?offer, "card chosen");
    match offer {
        CardOffer::Upgrade { weapon, .. } => {
            roster.upgrade(weapon);
        }
        CardOffer::NewWeapon { weapon } => {
            roster.add(weapon);
        }
        CardOffer::Might { bonus: amount } => bonus.damage += amount,
        CardOffer::Haste { bonus: amount } => bonus.speed += amount,
        CardOffer::Heal { amount } => {
            let hp = (progression.progress.hp + amount).min(config.player_health);
            progression.patch(ProgressPatch {
                hp: Some(hp),
                ..Default::default()
            });
        }
    }
}
