use vp_core::maze::{setup_level, Corner, Direction, EntityKind, Level, LevelEvent};
use vp_core::{GameRng, GenerationOptions, LevelError, Session};

#[test]
fn test_first_night_arena() {
    for seed in [42, 123, 999, 1337, 2026] {
        let level = setup_level(1, GameRng::new(seed)).unwrap();
        let grid = level.grid();

        assert_eq!(level.dimension(), 5);
        assert_eq!(grid.total_cells(), 25);
        assert_eq!(grid.removed_interior_walls(), 24);
        assert_eq!(grid.reachable_from(0), 25);
        assert_eq!(grid.center(), 12);
        for dir in Direction::ALL {
            assert!(!grid.has_wall(12, dir));
        }

        let population = level.population();
        let pickups = population.count(EntityKind::Pickup);
        let hostiles = population.count(EntityKind::Hostile);
        assert!((2..5).contains(&pickups), "seed {seed}: {pickups} pickups");
        assert!((3..8).contains(&hostiles), "seed {seed}: {hostiles} hostiles");
        assert!(population.at(12).is_none());
    }
}

#[test]
fn test_dimensions_grow_per_night() {
    let dims: Vec<usize> = (1..=6)
        .map(|n| setup_level(n, GameRng::new(n as u64)).unwrap().dimension())
        .collect();
    assert_eq!(dims, vec![5, 7, 9, 11, 13, 15]);
}

#[test]
fn test_all_corners_then_exhausted() {
    let mut level = setup_level(1, GameRng::new(31)).unwrap();
    let mut opened = Vec::new();
    for _ in 0..4 {
        opened.push(level.open_random_corner().unwrap());
    }
    opened.sort_by_key(|c| *c as u8);
    assert_eq!(opened, Corner::ALL.to_vec());
    assert_eq!(
        level.open_random_corner(),
        Err(LevelError::NoCornersRemaining)
    );

    let events = level.take_events();
    assert_eq!(events.len(), 4);
    for corner in Corner::ALL {
        assert!(events.contains(&LevelEvent::ExitOpened(corner)));
        assert!(level.grid().is_exit(corner.cell_index(5)));
    }
}

#[test]
fn test_single_cell_level() {
    let options = GenerationOptions {
        base_dimension: 1,
        ..GenerationOptions::default()
    };
    let level = Level::setup(1, &options, GameRng::new(3)).unwrap();
    assert_eq!(level.grid().total_cells(), 1);
    assert_eq!(level.population().start_cell, 0);
    assert!(level.population().placements.is_empty());
    assert_eq!(level.total_hostiles(), 0);
}

#[test]
fn test_invalid_dimensions_rejected() {
    let zero = GenerationOptions {
        base_dimension: 0,
        dimension_step: 0,
        ..GenerationOptions::default()
    };
    assert!(matches!(
        Level::setup(1, &zero, GameRng::new(1)),
        Err(LevelError::InvalidDimension { dimension: 0, .. })
    ));

    let err = setup_level(500, GameRng::new(1)).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_crowded_options_fail_cleanly() {
    // Pickups alone would need every cell on a 3x3 grid
    let options = GenerationOptions {
        base_dimension: 3,
        pickup_min_divisor: 1,
        pickup_max_divisor: 1,
        ..GenerationOptions::default()
    };
    assert!(matches!(
        Level::setup(1, &options, GameRng::new(5)),
        Err(LevelError::InsufficientFreeCells { requested, available: 8 }) if requested >= 9
    ));
}

#[test]
fn test_snapshot_json_shape() {
    let level = setup_level(2, GameRng::new(2026)).unwrap();
    let json: serde_json::Value = serde_json::to_value(level.snapshot()).unwrap();
    assert_eq!(json["dimension"], 7);
    assert_eq!(json["cells"].as_array().unwrap().len(), 49);
    assert_eq!(json["corners"].as_array().unwrap().len(), 4);
    assert_eq!(json["start_cell"], 24);
    assert_eq!(json["seed"], 2026);
}

#[test]
fn test_level_save_roundtrip() {
    let mut level = setup_level(3, GameRng::new(8)).unwrap();
    level.open_random_corner().unwrap();

    let json = serde_json::to_string(&level).unwrap();
    let restored: Level = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.grid(), level.grid());
    assert_eq!(restored.exits(), level.exits());
    assert_eq!(restored.seed(), level.seed());
    assert!(restored.has_open_exit());
}

#[test]
fn test_session_playthrough() {
    let mut session = Session::new(GenerationOptions::default(), GameRng::new(77)).unwrap();

    // Kill until a key drops, pick it up, escape
    for night in 1..=3u32 {
        assert_eq!(session.level_number(), night);
        assert_eq!(session.advance(), Err(LevelError::LevelNotFinished));
        loop {
            let outcome = session.record_kill().unwrap();
            if outcome.key_dropped {
                break;
            }
        }
        session.collect_key().unwrap();
        assert_eq!(session.advance(), Ok(night + 1));
    }

    assert_eq!(session.level().dimension(), 11);
    assert_eq!(session.game_over(), Ok(3));
    assert_eq!(session.level_number(), 1);
    assert_eq!(session.level().dimension(), 5);
}
