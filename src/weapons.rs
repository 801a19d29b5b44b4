/// The weapon catalog: a fixed table of tiers, ordered by power.
///
/// Read-only at runtime.  The player's `weapon_level` indexes into it;
/// every third kill advances the index until the last tier is reached.

use crate::entities::Tint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponTier {
    /// Projectile speed in playfield units per step.
    pub speed: f32,
    pub damage: i32,
    /// Color stamped onto bullets fired with this tier.
    pub color: Tint,
}

pub static WEAPONS: [WeaponTier; 3] = [
    WeaponTier { speed: 5.0, damage: 1, color: Tint::White },
    WeaponTier { speed: 6.0, damage: 2, color: Tint::Yellow },
    WeaponTier { speed: 7.0, damage: 3, color: Tint::Red },
];

/// Tier lookup, clamped to the last entry.  An over-range level is a
/// valid transient, not an error.
pub fn tier(level: usize) -> &'static WeaponTier {
    &WEAPONS[level.min(WEAPONS.len() - 1)]
}
