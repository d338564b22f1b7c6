mod test {
    use crate::config::RulesConfig;
    use crate::console_interface::{load_level, parse_level, render_game_to_string};
    use crate::core::*;
    use crate::error::LoadError;

    fn parse(level: &str) -> Result<Level, LoadError> {
        parse_level(level, &Legend::default(), 5)
    }

    #[test]
    fn parses_stats_tiles_and_entities() {
        let level = parse(
            "4 12\n\
             WWWWWW\n\
             WP3SGW\n\
             W$M*XW\n\
             WWWWWW\n",
        )
        .unwrap();

        assert_eq!(level.strength, 4);
        assert_eq!(level.moves, 12);
        assert_eq!(level.player_start, Vec2::new(1, 1));
        assert_eq!((level.grid.height(), level.grid.width()), (4, 6));

        assert_eq!(level.grid[&Vec2::new(1, 1)], Tile::Floor);
        assert_eq!(level.grid[&Vec2::new(1, 4)], Tile::Goal { filled: false });
        assert_eq!(level.grid[&Vec2::new(2, 4)], Tile::Goal { filled: true });
        assert_eq!(level.grid[&Vec2::new(0, 0)], Tile::Wall);

        let entities: Vec<(Vec2, Entity)> =
            level.entities.iter().map(|(pos, entity)| (*pos, *entity)).collect();
        assert_eq!(
            entities,
            vec![
                (Vec2::new(1, 2), Entity::Crate { strength_requirement: 3 }),
                (Vec2::new(1, 3), Entity::Potion(PotionKind::Strength)),
                (Vec2::new(2, 1), Entity::Coin { value: 5 }),
                (Vec2::new(2, 2), Entity::Potion(PotionKind::Move)),
                (Vec2::new(2, 3), Entity::Potion(PotionKind::Fancy)),
            ]
        );
        // entities stand on floor
        assert_eq!(level.grid[&Vec2::new(1, 2)], Tile::Floor);
    }

    #[test]
    fn floor_symbol_is_a_bare_floor_tile() {
        let level = parse("3 5\nWWWWW\nWPFGW\nWWWWW\n").unwrap();

        assert_eq!(level.grid[&Vec2::new(1, 2)], Tile::Floor);
        assert_eq!(level.entities.get(&Vec2::new(1, 2)), None);
        assert!(level.entities.is_empty());
    }

    #[test]
    fn render_reproduces_the_maze_rows() {
        let text = "2 3\nWWWWW\nWPF0W\nWFGXW\nWWWWW\n";
        let level = parse(text).unwrap();
        let model = GameModel::new(level, RulesConfig::default());

        assert_eq!(
            render_game_to_string(&Legend::default(), model.state()),
            "WWWWW\nWPF0W\nWFGXW\nWWWWW\n"
        );
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let level = parse("1 1\r\nWPW\r\nWFW\r\n").unwrap();
        assert_eq!((level.grid.height(), level.grid.width()), (2, 3));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(parse(""), Err(LoadError::Empty)));
    }

    #[test]
    fn bad_stats_line_is_rejected() {
        assert!(matches!(parse("x 3\nWPW\n"), Err(LoadError::InvalidStats { .. })));
        assert!(matches!(parse("3\nWPW\n"), Err(LoadError::InvalidStats { .. })));
        assert!(matches!(parse("3 -1\nWPW\n"), Err(LoadError::InvalidStats { .. })));
        assert!(matches!(parse("3 4 5\nWPW\n"), Err(LoadError::InvalidStats { .. })));
    }

    #[test]
    fn maze_without_rows_is_rejected() {
        assert!(matches!(parse("3 4\n"), Err(LoadError::NoRows)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = parse("1 1\nWPW\nWW\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::NonRectangular { row: 1, expected: 3, found: 2 }
        ));
    }

    #[test]
    fn player_marker_must_appear_exactly_once() {
        assert!(matches!(parse("1 1\nWFW\n"), Err(LoadError::MissingPlayer)));
        assert!(matches!(
            parse("1 1\nWPPW\n"),
            Err(LoadError::MultiplePlayers { row: 0, col: 2 })
        ));
    }

    #[test]
    fn unknown_symbol_reports_its_location() {
        let err = parse("1 1\nWPW\nW?W\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownSymbol { symbol: '?', row: 1, col: 1 }
        ));
        assert_eq!(err.to_string(), "unknown symbol '?' at row 1, column 1");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_level(
            std::path::Path::new("/definitely/not/here/maze.txt"),
            &Legend::default(),
            5,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
