use std::time::Duration;

use flappy_bird::config::GameConfig;
use flappy_bird::controller::{Game, Progress};
use flappy_bird::entities::GameStatus;
use flappy_bird::input::Command;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game() -> Game<StdRng> {
    Game::new(GameConfig::default(), StdRng::seed_from_u64(42))
}

/// One 60 Hz frame, rounded up so every frame covers at least one tick.
const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Let the bird fall until the run ends.
fn crash(game: &mut Game<StdRng>) {
    game.advance(Duration::from_secs(1));
    assert_eq!(game.state().status, GameStatus::GameOver);
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_game_is_playing_with_drivers_running() {
    let game = new_game();
    assert_eq!(game.state().status, GameStatus::Playing);
    assert!(game.drivers_running());
    assert_eq!(game.now(), Duration::ZERO);
    assert!(game.state().pipes.is_empty());
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_runs_sixty_ticks_per_second() {
    let mut game = new_game();
    let progress = game.advance(Duration::from_millis(100));
    assert_eq!(progress, Progress { ticks: 6, spawns: 0 });
    assert_eq!(game.state().bird.velocity, 6);
    assert_eq!(game.now(), Duration::from_millis(100));
}

#[test]
fn advance_without_enough_time_does_nothing() {
    let mut game = new_game();
    let progress = game.advance(Duration::from_millis(10));
    assert_eq!(progress, Progress::default());
    assert_eq!(game.state().bird.y, 180);
}

#[test]
fn small_frames_accumulate() {
    let mut game = new_game();
    let mut ticks = 0;
    for _ in 0..10 {
        ticks += game.advance(Duration::from_millis(5)).ticks;
    }
    // 50 ms holds three whole ticks
    assert_eq!(ticks, 3);
}

#[test]
fn falling_bird_stops_the_drivers() {
    let mut game = new_game();
    let progress = game.advance(Duration::from_secs(1));

    // 180 + 30·31/2 > 640
    assert_eq!(progress, Progress { ticks: 30, spawns: 0 });
    assert_eq!(game.state().status, GameStatus::GameOver);
    assert!(!game.drivers_running());

    let later = game.advance(Duration::from_secs(5));
    assert_eq!(later, Progress::default());
    assert_eq!(game.now(), Duration::from_secs(6));
}

#[test]
fn flapping_keeps_the_bird_alive_and_pipes_arrive() {
    let mut game = new_game();
    let mut total = Progress::default();

    for _ in 0..100 {
        if game.state().bird.y > 200 {
            game.on_input(Command::Flap);
        }
        let p = game.advance(FRAME);
        total.ticks += p.ticks;
        total.spawns += p.spawns;
    }

    assert_eq!(game.state().status, GameStatus::Playing);
    assert!(total.ticks >= 99);
    assert_eq!(total.spawns, 1);
    assert_eq!(game.state().pipes.len(), 2);
    assert!(game.state().pipes.iter().all(|p| p.x < 360));
}

#[test]
fn same_seed_and_inputs_give_same_run() {
    let mut a = new_game();
    let mut b = new_game();
    for i in 0..200 {
        for game in [&mut a, &mut b] {
            if i % 20 == 0 {
                game.on_input(Command::Flap);
            }
            game.advance(FRAME);
        }
    }
    assert_eq!(a.state(), b.state());
}

// ── commands ──────────────────────────────────────────────────────────────────

#[test]
fn flap_command_sets_velocity() {
    let mut game = new_game();
    game.advance(Duration::from_millis(100));
    game.on_input(Command::Flap);
    assert_eq!(game.state().bird.velocity, -9);
}

#[test]
fn flap_ignored_after_game_over() {
    let mut game = new_game();
    crash(&mut game);
    let before = game.state().clone();
    game.on_input(Command::Flap);
    assert_eq!(game.state(), &before);
}

#[test]
fn restart_ignored_while_playing() {
    let mut game = new_game();
    game.advance(Duration::from_millis(100));
    let before = game.state().clone();

    game.on_input(Command::Restart);
    assert_eq!(game.state(), &before);
    assert_eq!(game.advance(Duration::from_millis(50)).ticks, 3);
}

#[test]
fn restart_resets_run_and_resumes_drivers() {
    let mut game = new_game();
    game.spawn();
    crash(&mut game);
    let high_score = game.state().high_score;

    game.on_input(Command::Restart);
    assert_eq!(game.state().status, GameStatus::Playing);
    assert!(game.drivers_running());
    assert!(game.state().pipes.is_empty());
    assert_eq!(game.state().score, 0.0);
    assert_eq!(game.state().bird.y, 180);
    assert_eq!(game.state().bird.velocity, 0);
    assert_eq!(game.state().high_score, high_score);

    // First tick lands one full period after the restart.
    let period = GameConfig::default().tick_interval();
    assert_eq!(game.advance(period - Duration::from_nanos(1)).ticks, 0);
    assert_eq!(game.advance(Duration::from_nanos(1)).ticks, 1);
}

#[test]
fn spawn_timer_restarts_from_the_restart_instant() {
    let mut game = new_game();
    crash(&mut game);
    game.on_input(Command::Restart);

    // Keep the bird up until just past the first spawn.
    let mut spawns = 0;
    for _ in 0..95 {
        if game.state().bird.y > 200 {
            game.on_input(Command::Flap);
        }
        spawns += game.advance(FRAME).spawns;
    }
    assert_eq!(spawns, 1);
}

#[test]
fn high_score_survives_runs() {
    let mut game = new_game();
    crash(&mut game);
    game.on_input(Command::Restart);
    crash(&mut game);
    assert_eq!(game.state().high_score, 0);
    assert_eq!(game.frame().high_score, 0);
}

// ── manual drivers ────────────────────────────────────────────────────────────

#[test]
fn manual_spawn_appends_a_pair() {
    let mut game = new_game();
    game.spawn();
    let pipes = &game.state().pipes;
    assert_eq!(pipes.len(), 2);
    assert_eq!(pipes[1].y - pipes[0].y, 512 + 160);
}

#[test]
fn manual_step_is_frozen_after_game_over() {
    let mut game = new_game();
    crash(&mut game);
    let before = game.state().clone();
    game.step();
    assert_eq!(game.state(), &before);
}

// ── frame ─────────────────────────────────────────────────────────────────────

#[test]
fn frame_reflects_state() {
    let mut game = new_game();
    game.spawn();
    let frame = game.frame();
    assert_eq!(frame.bird.y, game.state().bird.y);
    assert_eq!(frame.pipes.len(), 2);
    assert!(!frame.game_over);

    crash(&mut game);
    assert!(game.frame().game_over);
}
