/// All game entity types — pure data, no logic.

/// Palette token stored on entities.  The display layer owns the mapping
/// to actual terminal colors; game logic only ever compares these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tint {
    Cyan,
    Green,
    White,
    Yellow,
    Red,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Displacement applied per held direction key, per step.
    pub speed: f32,
    pub color: Tint,
    pub kills: u32,
    /// 0-based index into the weapon catalog.
    pub weapon_level: usize,
    /// Steps remaining until the next shot is accepted.
    pub shoot_cooldown: u32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Velocity added each step.
    pub dx: f32,
    pub dy: f32,
    pub damage: i32,
    /// Captured from the weapon tier at fire time; a later upgrade does
    /// not recolor bullets already in flight.
    pub color: Tint,
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// May dip below zero within the step that kills the enemy; the enemy
    /// is removed before that step ends.
    pub hp: i32,
    pub color: Tint,
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Directional key state sampled once per step.  Axes stack: holding a
/// horizontal and a vertical key moves at full speed on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub frame: u64,
    /// Logical playfield dimensions.  Entity coordinates live in this
    /// space; the display layer scales it to whatever surface it has.
    pub width: f32,
    pub height: f32,
}
