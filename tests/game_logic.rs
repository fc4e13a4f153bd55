/// Integration tests for game logic
///
/// These tests drive whole frames through the public [`Game`] API and verify
/// the interactions between formation movement, combat resolution, the phase
/// machine and the score ledger.
use planet_invaders::{FrameInput, Game, Phase, ScoreBoard, Wave};

const IDLE: FrameInput = FrameInput {
    left: false,
    right: false,
    up: false,
    down: false,
    fire: false,
};

fn new_game() -> Game {
    Game::new(ScoreBoard::new())
}

/// Moves every relevant enemy well away from the player and the breach line
/// so frames advance without incidental collisions.
fn park_enemies(game: &mut Game) {
    for enemy in game.enemies.relevant_slots_mut() {
        enemy.hitbox.x = 400.0;
        enemy.hitbox.y = 100.0;
        enemy.heal = false;
    }
}

/// Runs one formation tick per call by feeding exactly the current threshold.
fn tick_formation(game: &mut Game) {
    let dt = game.formation.progression;
    game.update(dt, &IDLE);
}

#[test]
fn test_last_hit_point_ends_run_and_ranks_score() {
    let mut game = new_game();
    park_enemies(&mut game);
    game.player.hp = 1;
    game.score = 400;
    game.scores.insert("ACE", 300);

    // Ram one enemy into the ship.
    let player_box = game.player.hitbox;
    let enemy = &mut game.enemies.relevant_slots_mut()[0];
    enemy.hitbox.x = player_box.x;
    enemy.hitbox.y = player_box.y;

    game.update(0.016, &IDLE);

    assert_eq!(game.phase, Phase::GameOver);
    assert_eq!(game.scores.entries()[0].name, "IRRA");
    assert_eq!(game.scores.entries()[0].score, 400);
    assert_eq!(game.scores.entries()[1].score, 300);
}

#[test]
fn test_full_ledger_evicts_minimum_on_game_over() {
    let mut game = new_game();
    park_enemies(&mut game);
    game.player.hp = 1;
    game.score = 400;
    for score in [1200, 1100, 1000, 900, 800, 700, 600, 500, 350, 300] {
        game.scores.insert("ACE", score);
    }

    let player_box = game.player.hitbox;
    let enemy = &mut game.enemies.relevant_slots_mut()[0];
    enemy.hitbox.x = player_box.x;
    enemy.hitbox.y = player_box.y;

    game.update(0.016, &IDLE);

    assert_eq!(game.phase, Phase::GameOver);
    let scores: Vec<u32> = game.scores.entries().iter().map(|e| e.score).collect();
    assert!(scores.contains(&400));
    // The previous minimum was evicted; order stays descending.
    assert!(!scores.contains(&300));
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_heal_kill_at_two_thirds_restores_cap() {
    let mut game = new_game();
    park_enemies(&mut game);
    game.player.hp = 2;
    game.enemies.relevant_slots_mut()[0].heal = true;
    for enemy in &mut game.enemies.relevant_slots_mut()[1..] {
        enemy.hitbox.x = 50.0;
    }

    // A shot one advance step below the heal carrier.
    assert!(game.projectiles.spawn_at(400.0, 105.0));
    let events = game.update(0.016, &IDLE);

    assert_eq!(events.kills, 1);
    assert_eq!(game.kills, 1);
    assert_eq!(game.score, 100);
    assert_eq!(game.player.hp, 3);
    assert!(game.enemies.slots()[0].dead);
}

#[test]
fn test_formation_cycle_introduces_one_row_per_reentry() {
    let mut game = new_game();
    park_enemies(&mut game);
    let initial = game.enemies.relevant();

    // Leftward flip at tick 30: no new row yet.
    for _ in 0..30 {
        tick_formation(&mut game);
    }
    assert_eq!(game.enemies.relevant(), initial);

    // Rightward re-entry at tick 60: exactly one row of 15 joins.
    for _ in 0..30 {
        tick_formation(&mut game);
    }
    assert_eq!(game.enemies.relevant(), initial + 15);

    // And again on the next full cycle.
    for _ in 0..60 {
        tick_formation(&mut game);
    }
    assert_eq!(game.enemies.relevant(), initial + 30);
}

#[test]
fn test_progression_shrinks_across_descents() {
    let mut game = new_game();
    park_enemies(&mut game);
    let mut last = game.formation.progression;

    for _ in 0..4 {
        for _ in 0..30 {
            tick_formation(&mut game);
        }
        assert!(game.formation.progression < last);
        last = game.formation.progression;
    }
}

#[test]
fn test_continuous_fire_with_full_pool_adds_nothing() {
    let mut game = new_game();
    park_enemies(&mut game);
    let firing = FrameInput {
        fire: true,
        ..IDLE
    };

    // Park a full pool of shots mid-field, clear of every enemy.
    while game.projectiles.spawn_at(200.0, 590.0) {}
    let full = game.projectiles.active_count();

    for _ in 0..20 {
        let events = game.update(0.0, &firing);
        assert!(!events.shot_fired);
    }
    assert_eq!(game.projectiles.active_count(), full);
}

#[test]
fn test_soft_reset_resumes_current_wave() {
    let mut game = new_game();
    park_enemies(&mut game);
    game.score = 900;
    game.kills = 9;
    game.wave = Wave::Third;
    game.enemies.reset(Wave::Third);
    park_enemies(&mut game);

    let player_box = game.player.hitbox;
    let enemy = &mut game.enemies.relevant_slots_mut()[0];
    enemy.hitbox.x = player_box.x;
    enemy.hitbox.y = player_box.y;

    game.update(0.016, &IDLE);
    assert_eq!(game.phase, Phase::HitPause);

    game.confirm();
    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.wave, Wave::Third);
    assert_eq!(game.score, 900);
    assert_eq!(game.kills, 9);
    assert_eq!(game.player.hp, 2);
    assert_eq!(game.enemies.relevant(), Wave::Third.initial_count());
}

#[test]
fn test_waves_progress_to_victory() {
    let mut game = new_game();

    for expected in [Wave::Second, Wave::Third] {
        park_enemies(&mut game);
        for enemy in game.enemies.relevant_slots_mut() {
            enemy.active = false;
            enemy.dead = true;
        }
        game.update(0.016, &IDLE);
        assert_eq!(game.wave, expected);
        assert!(!game.victory);
    }

    park_enemies(&mut game);
    for enemy in game.enemies.relevant_slots_mut() {
        enemy.active = false;
        enemy.dead = true;
    }
    game.update(0.016, &IDLE);
    assert!(game.victory);
    assert_eq!(game.phase, Phase::Playing);
}

#[test]
fn test_hit_points_always_within_bounds() {
    let mut game = new_game();
    park_enemies(&mut game);

    // A long stretch of frames with periodic ramming and confirming.
    for frame in 0..200 {
        if frame % 40 == 0 && game.phase == Phase::Playing {
            let player_box = game.player.hitbox;
            if let Some(enemy) = game
                .enemies
                .relevant_slots_mut()
                .iter_mut()
                .find(|e| e.active)
            {
                enemy.hitbox.x = player_box.x;
                enemy.hitbox.y = player_box.y;
            }
        }
        game.update(0.016, &IDLE);
        assert!(game.player.hp <= 3);
        if game.phase == Phase::HitPause {
            game.confirm();
            park_enemies(&mut game);
        }
        if game.phase == Phase::GameOver {
            break;
        }
    }
}

#[test]
fn test_ledger_round_trip_preserves_order() {
    use std::io::Cursor;

    let mut board = ScoreBoard::new();
    for (name, score) in [("IRRA", 400), ("ACE", 900), ("BOB", 650)] {
        board.insert(name, score);
    }

    let mut buffer = Vec::new();
    board.to_writer(&mut buffer).unwrap();
    let reloaded = ScoreBoard::from_reader(Cursor::new(buffer));

    assert_eq!(reloaded, board);
    let names: Vec<&str> = reloaded.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(&names[..3], &["ACE", "BOB", "IRRA"]);
}
