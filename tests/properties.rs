//! Property tests for turn order and scoring bookkeeping.

use proptest::prelude::*;
use trivia::{DeckOptions, Game, PlayerRegistry, QuestionDeck, SilentPresenter, StandardBoard};

proptest! {
    #[test]
    fn ordinals_are_dense_and_zero_based(names in prop::collection::vec(".*", 0..20)) {
        let mut registry = PlayerRegistry::new();
        for (index, name) in names.iter().enumerate() {
            prop_assert_eq!(registry.add(name.as_str()), index);
            prop_assert_eq!(registry.count(), index + 1);
        }
        for (index, player) in registry.players().iter().enumerate() {
            prop_assert_eq!(player.ordinal(), index);
        }
    }

    #[test]
    fn adding_players_never_changes_the_current_player(count in 1usize..20, turns in 0usize..40) {
        let mut registry = PlayerRegistry::new();
        registry.add("first");
        for _ in 0..turns {
            registry.give_turn_to_next_player().unwrap();
        }
        let before = registry.current().unwrap().clone();
        for index in 0..count {
            registry.add(format!("late {index}"));
            prop_assert_eq!(registry.current().unwrap(), &before);
        }
    }

    #[test]
    fn full_cycle_returns_to_the_same_player(count in 1usize..20, start in 0usize..20) {
        let mut registry = PlayerRegistry::new();
        for index in 0..count {
            registry.add(format!("player {index}"));
        }
        for _ in 0..start {
            registry.give_turn_to_next_player().unwrap();
        }
        let origin = registry.current().unwrap().ordinal();
        prop_assert_eq!(origin, start % count);

        let mut seen = vec![false; count];
        for _ in 0..count {
            let ordinal = registry.current().unwrap().ordinal();
            prop_assert!(!seen[ordinal]);
            seen[ordinal] = true;
            registry.give_turn_to_next_player().unwrap();
        }
        prop_assert!(seen.iter().all(|&visited| visited));
        prop_assert_eq!(registry.current().unwrap().ordinal(), origin);
    }

    #[test]
    fn moves_add_exactly_the_offset(offsets in prop::collection::vec(1i32..1000, 1..20)) {
        let mut registry = PlayerRegistry::new();
        registry.add("mover");
        let mut expected = 0usize;
        for offset in offsets {
            expected += offset as usize;
            prop_assert_eq!(registry.move_current(offset).unwrap(), expected);
        }
        prop_assert_eq!(registry.current().unwrap().location(), expected);
    }

    #[test]
    fn non_positive_moves_fail(offset in i32::MIN..=0) {
        let mut registry = PlayerRegistry::new();
        registry.add("mover");
        prop_assert!(registry.move_current(offset).is_err());
        prop_assert_eq!(registry.current().unwrap().location(), 0);
    }

    #[test]
    fn queries_are_pure(count in 0usize..10) {
        let mut game = Game::new(
            StandardBoard,
            QuestionDeck::new(DeckOptions::default()),
            SilentPresenter,
        );
        for index in 0..count {
            game.add_player(format!("player {index}"));
        }
        let playable = game.is_playable();
        for _ in 0..3 {
            prop_assert_eq!(game.is_playable(), playable);
            prop_assert_eq!(game.player_count(), count);
        }
        prop_assert_eq!(playable, count >= 2);
    }
}
