use arena_shooter::entities::*;

#[test]
fn tint_equality() {
    // Tint derives PartialEq; the display layer and tests compare it
    assert_eq!(Tint::Cyan, Tint::Cyan);
    assert_ne!(Tint::White, Tint::Yellow);
    let t = Tint::Red;
    assert_eq!(t, Tint::Red); // Copy
}

#[test]
fn move_intent_defaults_to_no_movement() {
    let intent = MoveIntent::default();
    assert!(!intent.up && !intent.down && !intent.left && !intent.right);
    assert_eq!(intent, MoveIntent { up: false, down: false, left: false, right: false });
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            x: 400.0,
            y: 300.0,
            radius: 20.0,
            speed: 3.0,
            color: Tint::Cyan,
            kills: 0,
            weapon_level: 0,
            shoot_cooldown: 0,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        frame: 0,
        width: 800.0,
        height: 600.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.player.kills = 7;
    cloned.enemies.push(Enemy {
        x: 10.0,
        y: 10.0,
        radius: 20.0,
        hp: 3,
        color: Tint::Green,
    });

    assert_eq!(original.player.x, 400.0);
    assert_eq!(original.player.kills, 0);
    assert!(original.enemies.is_empty());
}
