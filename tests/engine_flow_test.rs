//! End-to-end engine flows through the public facade.

use tektris::core::{EngineConfig, Tektris};
use tektris::session::Session;
use tektris::term::render_lines;
use tektris::types::{GameAction, GameEvent, ShapeKind};

/// Begin a game whose first falling shape is of `kind`.
fn game_starting_with(kind: ShapeKind) -> Tektris {
    for seed in 1..10_000 {
        let mut game = Tektris::new(EngineConfig::default(), seed);
        game.begin_game();
        game.new_shape();
        if game.falling_shape().map(|s| s.kind()) == Some(kind) {
            game.drain_events();
            return game;
        }
    }
    panic!("no seed produced {:?}", kind);
}

#[test]
fn horizontal_line_falls_nineteen_rows_and_lands() {
    let mut game = game_starting_with(ShapeKind::Line);

    game.apply_action(GameAction::Rotate);
    assert_eq!(game.drain_events(), vec![GameEvent::ShapeDidMove]);
    let cells = game.falling_shape().unwrap().cells();
    assert!(cells.iter().all(|&(_, row)| row == 0));

    for _ in 0..18 {
        game.apply_action(GameAction::Fall);
        assert_eq!(game.drain_events(), vec![GameEvent::ShapeDidMove]);
    }
    game.apply_action(GameAction::Fall);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::ShapeDidMove, GameEvent::ShapeDidLand]
    );

    assert!(game.falling_shape().is_none());
    for (column, _) in cells {
        assert!(game.block_at(column, 19).is_some());
    }
    assert_eq!(game.grid().count(), 4);
}

#[test]
fn drop_leaves_shape_resting_without_settling() {
    let mut game = game_starting_with(ShapeKind::T);
    game.apply_action(GameAction::Drop);
    assert_eq!(game.drain_events(), vec![GameEvent::ShapeDidDrop]);
    assert!(game.grid().is_empty());
    assert!(!game.detect_illegal_placement());
    assert!(game.detect_touch());

    // One more row down would be illegal, so the next fall settles in place.
    let resting = game.falling_shape().unwrap().cells();
    game.apply_action(GameAction::Fall);
    assert_eq!(game.drain_events(), vec![GameEvent::ShapeDidLand]);
    for (column, row) in resting {
        assert!(game.block_at(column, row).is_some());
    }
}

#[test]
fn remove_all_blocks_returns_every_settled_block() {
    let mut game = Tektris::new(EngineConfig::default(), 99);
    game.begin_game();
    for _ in 0..3 {
        game.new_shape();
        game.apply_action(GameAction::Drop);
        game.apply_action(GameAction::Fall);
    }
    let settled = game.grid().count();
    assert!(settled > 0);

    let removed = game.remove_all_blocks();
    assert_eq!(removed.len(), 20);
    assert_eq!(removed.iter().map(Vec::len).sum::<usize>(), settled);
    assert!(game.grid().is_empty());
}

#[test]
fn session_game_over_and_restart_renders() {
    let mut session = Session::new(EngineConfig::default(), 21);
    while !session.is_game_over() {
        session.apply(GameAction::Drop);
        session.tick();
    }

    let lines = render_lines(session.game());
    assert!(lines.iter().any(|line| line.contains("GAME OVER")));
    // The board is emptied; only the preview panel still shows blocks.
    assert!(lines[..20].iter().all(|line| !line[..22].contains("[]")));

    assert!(session.restart());
    let lines = render_lines(session.game());
    assert!(lines.iter().all(|line| !line.contains("GAME OVER")));
    assert!(lines[6].ends_with("Score: 0"));
}

#[test]
fn same_seed_replays_same_shapes() {
    let kinds = |seed: u32| {
        let mut game = Tektris::new(EngineConfig::default(), seed);
        game.begin_game();
        (0..10)
            .filter_map(|_| {
                let kind = game.new_shape().0.map(|s| s.kind());
                game.apply_action(GameAction::Drop);
                game.apply_action(GameAction::Fall);
                game.remove_all_blocks();
                kind
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(kinds(4242), kinds(4242));
    assert_eq!(kinds(4242).len(), 10);
}
