/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{Bullet, Enemy, GameState, MoveIntent, Player, Tint};
use crate::weapons::{self, WEAPONS};

// ── Tuning constants ─────────────────────────────────────────────────────────

pub const PLAYER_RADIUS: f32 = 20.0;
pub const PLAYER_SPEED: f32 = 3.0;
pub const ENEMY_RADIUS: f32 = 20.0;
pub const ENEMY_HP: i32 = 3;

/// Steps between accepted shots.
pub const SHOOT_COOLDOWN: u32 = 15;

/// Kills needed per weapon upgrade.
pub const KILLS_PER_UPGRADE: u32 = 3;

/// The spawner keeps at least this many enemies alive, topping up by one
/// per step while below it.
pub const MIN_ENEMIES: usize = 5;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a playfield of the given logical size.
///
/// Panics if the weapon catalog is empty: weapon progression is
/// meaningless without at least one tier, so that is a startup
/// precondition rather than a runtime case.
pub fn init_state(width: f32, height: f32) -> GameState {
    assert!(!WEAPONS.is_empty(), "weapon catalog must hold at least one tier");
    GameState {
        player: Player {
            x: width / 2.0,
            y: height / 2.0,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            color: Tint::Cyan,
            kills: 0,
            weapon_level: 0,
            shoot_cooldown: 0,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        frame: 0,
        width,
        height,
    }
}

// ── Fire action (pure) ───────────────────────────────────────────────────────

/// Fire a bullet from the player toward `(target_x, target_y)`.
///
/// Silently rejected while the cooldown is running.  The bullet takes the
/// speed, damage and color of the tier at the player's current weapon
/// level and flies in a straight line until it leaves the playfield or
/// hits an enemy.
pub fn fire(state: &GameState, target_x: f32, target_y: f32) -> GameState {
    if state.player.shoot_cooldown > 0 {
        return state.clone();
    }

    let angle = (target_y - state.player.y).atan2(target_x - state.player.x);
    let tier = weapons::tier(state.player.weapon_level);

    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        x: state.player.x,
        y: state.player.y,
        dx: angle.cos() * tier.speed,
        dy: angle.sin() * tier.speed,
        damage: tier.damage,
        color: tier.color,
    });

    GameState {
        player: Player {
            shoot_cooldown: SHOOT_COOLDOWN,
            ..state.player.clone()
        },
        bullets,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one step.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Fixed order: player movement, cooldown decrement, bullet pass
/// (advance, bounds check, collision), spawn floor.
pub fn tick(state: &GameState, intent: MoveIntent, rng: &mut impl Rng) -> GameState {
    let frame = state.frame + 1;

    // ── 1. Move the player ───────────────────────────────────────────────────
    // Held keys stack per axis and nothing clamps to the playfield: the
    // player may wander off-screen, and a held diagonal moves at full
    // speed on both axes.
    let mut player = state.player.clone();
    if intent.up {
        player.y -= player.speed;
    }
    if intent.down {
        player.y += player.speed;
    }
    if intent.left {
        player.x -= player.speed;
    }
    if intent.right {
        player.x += player.speed;
    }

    // ── 2. Cooldown ──────────────────────────────────────────────────────────
    player.shoot_cooldown = player.shoot_cooldown.saturating_sub(1);

    // ── 3. Bullet pass: advance, cull, collide ───────────────────────────────
    // The pass rebuilds the bullet list from a snapshot instead of
    // removing elements mid-iteration; enemies are scanned in insertion
    // order, so a bullet overlapping several enemies hits the oldest one.
    let mut enemies = state.enemies.clone();
    let mut bullets: Vec<Bullet> = Vec::with_capacity(state.bullets.len());
    let mut kills = player.kills;
    let mut weapon_level = player.weapon_level;

    for bullet in &state.bullets {
        let b = Bullet {
            x: bullet.x + bullet.dx,
            y: bullet.y + bullet.dy,
            ..bullet.clone()
        };

        // Discard bullets that leave the playfield on either axis.
        if b.x < 0.0 || b.x > state.width || b.y < 0.0 || b.y > state.height {
            continue;
        }

        match enemies
            .iter()
            .position(|e| (b.x - e.x).hypot(b.y - e.y) < e.radius)
        {
            Some(i) => {
                // One hit consumes the bullet, so each bullet damages at
                // most one enemy per step.
                enemies[i].hp -= b.damage;
                if enemies[i].hp <= 0 {
                    enemies.remove(i);
                    kills += 1;
                    if kills % KILLS_PER_UPGRADE == 0 && weapon_level < WEAPONS.len() - 1 {
                        weapon_level += 1;
                    }
                }
            }
            None => bullets.push(b),
        }
    }

    player.kills = kills;
    player.weapon_level = weapon_level;

    // ── 4. Spawn floor ───────────────────────────────────────────────────────
    // One enemy per step while under the minimum; the population climbs
    // back gradually after a wave of kills rather than snapping to 5.
    if enemies.len() < MIN_ENEMIES {
        enemies.push(spawn_enemy(rng, state.width, state.height));
    }

    GameState {
        player,
        bullets,
        enemies,
        frame,
        ..state.clone()
    }
}

/// A fresh enemy at a position uniform over the playfield.
fn spawn_enemy(rng: &mut impl Rng, width: f32, height: f32) -> Enemy {
    Enemy {
        x: rng.gen_range(0.0..width),
        y: rng.gen_range(0.0..height),
        radius: ENEMY_RADIUS,
        hp: ENEMY_HP,
        color: Tint::Green,
    }
}
