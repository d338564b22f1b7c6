mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    const LEVEL: &str = r#"
2 10
WWWWWW
WP1FGW
WFSFFW
WMF1GW
WWWWWW
"#;

    #[test]
    fn undo_on_fresh_game_is_a_no_op() {
        let mut game = GameTestState::new(LEVEL);
        let before = game.state().clone();

        game.model.undo();

        assert_eq!(&before, game.state());
        assert!(!game.model.can_undo());
    }

    #[test]
    fn undo_after_step_restores_position_and_moves() {
        let mut game = GameTestState::new(LEVEL);
        let before = game.state().clone();

        game.assert_move(Down);
        assert_eq!(game.model.history_len(), 1);
        game.model.undo();

        assert_eq!(&before, game.state());
        assert_eq!(game.model.get_player_moves_remaining(), 10);
        assert_eq!(game.model.history_len(), 0);
    }

    #[test]
    fn undo_after_goal_push_unfills_goal_and_restores_crate() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_move(Right);
        let before = game.state().clone();

        let outcome = game.assert_move(Right);
        assert!(matches!(outcome, MoveOutcome::Push { filled_goal: true, .. }));
        assert!(game.model.get_maze()[&Vec2::new(1, 4)].is_filled());

        game.model.undo();

        assert_eq!(&before, game.state());
        assert!(!game.model.get_maze()[&Vec2::new(1, 4)].is_filled());
        assert_eq!(
            game.model.get_entities().get(&Vec2::new(1, 3)),
            Some(&Entity::Crate { strength_requirement: 1 })
        );
        game.assert_matches(r#"
WWWWWW
WFP1GW
WFSFFW
WMF1GW
WWWWWW
"#);
    }

    #[test]
    fn undo_after_potion_restores_stats_and_potion() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_move(Down);
        let before = game.state().clone();

        game.assert_move(Right);
        assert_eq!(game.model.get_player_strength(), 4);

        game.model.undo();

        assert_eq!(&before, game.state());
        assert_eq!(game.model.get_player_strength(), 2);
        assert_eq!(
            game.model.get_entities().get(&Vec2::new(2, 2)),
            Some(&Entity::Potion(PotionKind::Strength))
        );
    }

    #[test]
    fn undo_walks_back_through_every_move() {
        let mut game = GameTestState::new(LEVEL);
        let mut states = vec![game.state().clone()];
        for direction in [Right, Right, Down, Left, Down, Left] {
            if game.model.attempt_move_direction(direction).is_some() {
                states.push(game.state().clone());
            }
        }
        assert_eq!(game.model.history_len(), states.len() - 1);

        states.pop();
        while let Some(expected) = states.pop() {
            game.model.undo();
            assert_eq!(&expected, game.state());
        }
        assert!(!game.model.can_undo());
    }

    #[test]
    fn rejected_moves_do_not_record_history() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_rejected(Up);
        game.assert_rejected(Left);
        assert!(!game.model.can_undo());
    }

    #[test]
    fn snapshots_are_not_aliased_by_later_moves() {
        let mut game = GameTestState::new(LEVEL);
        game.assert_move(Right);
        let after_first = game.state().clone();

        // fills a goal and removes a crate in the live state
        game.assert_move(Right);
        game.assert_move(Down);
        game.assert_move(Left);

        game.model.undo();
        game.model.undo();
        game.model.undo();
        assert_eq!(&after_first, game.state());
        assert!(!game.model.get_maze()[&Vec2::new(1, 4)].is_filled());
    }

    #[test]
    fn reset_restores_load_state_and_clears_history() {
        let mut game = GameTestState::new(LEVEL);
        let initial = game.state().clone();
        game.assert_moves(&[Right, Right, Down]);

        game.model.reset();

        assert_eq!(&initial, game.state());
        assert!(!game.model.can_undo());

        // the game is fully playable again
        game.assert_moves(&[Right, Right]);
        assert!(game.model.get_maze()[&Vec2::new(1, 4)].is_filled());
    }
}
