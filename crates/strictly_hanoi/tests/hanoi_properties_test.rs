//! Properties that hold for every reachable session state.

use proptest::prelude::*;
use strictly_hanoi::{
    BackgroundClick, Board, BoardInvariants, DiskCount, GameSession, HanoiInvariants,
    Interaction, InvariantSet, LayoutMetrics, MoveValidator, PegId, Phase, SelectionAction,
};

fn peg() -> impl Strategy<Value = PegId> {
    prop::sample::select(PegId::ALL.to_vec())
}

fn interaction() -> impl Strategy<Value = Interaction> {
    prop_oneof![
        proptest::option::of(peg()).prop_map(Interaction::PointerDown),
        proptest::option::of(peg()).prop_map(Interaction::PointerClick),
    ]
}

fn policy() -> impl Strategy<Value = BackgroundClick> {
    prop_oneof![Just(BackgroundClick::Keep), Just(BackgroundClick::Cancel)]
}

fn stacks(board: &Board) -> Vec<Vec<u8>> {
    board
        .pegs()
        .iter()
        .map(|peg| peg.disks().iter().map(|d| d.id()).collect())
        .collect()
}

fn play(
    n: u8,
    background_click: BackgroundClick,
    interactions: &[Interaction],
) -> (GameSession, u32) {
    let mut session = GameSession::with_options(
        DiskCount::new(n).unwrap(),
        LayoutMetrics::default(),
        background_click,
    );
    let mut moves = 0;
    for interaction in interactions {
        let outcome = session.handle_interaction(*interaction).unwrap();
        if outcome.action().moved().is_some() {
            moves += 1;
        }
    }
    (session, moves)
}

proptest! {
    #[test]
    fn stacks_ordered_and_disks_conserved(
        n in 1u8..=6,
        background_click in policy(),
        interactions in proptest::collection::vec(interaction(), 0..200),
    ) {
        let mut session = GameSession::with_options(
            DiskCount::new(n).unwrap(),
            LayoutMetrics::default(),
            background_click,
        );
        for interaction in interactions {
            prop_assert!(session.handle_interaction(interaction).is_ok());
            prop_assert!(BoardInvariants::check_all(session.board()).is_ok());
            prop_assert!(HanoiInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn move_count_matches_moves(
        n in 1u8..=5,
        interactions in proptest::collection::vec(interaction(), 0..150),
    ) {
        let (session, moves) = play(n, BackgroundClick::Keep, &interactions);
        prop_assert_eq!(session.move_count(), moves);
    }

    #[test]
    fn same_peg_and_empty_source_never_legal(
        n in 1u8..=5,
        interactions in proptest::collection::vec(interaction(), 0..100),
        to in peg(),
    ) {
        let (session, _) = play(n, BackgroundClick::Keep, &interactions);
        let board = session.board();
        for p in PegId::ALL {
            prop_assert!(!MoveValidator::is_legal(board, p, p));
            if board.peg(p).is_empty() {
                prop_assert!(!MoveValidator::is_legal(board, p, to));
            }
        }
    }

    #[test]
    fn completed_session_is_frozen(
        extra in proptest::collection::vec(interaction(), 1..50),
    ) {
        let mut session = GameSession::new(DiskCount::new(2).unwrap());
        for (from, to) in [
            (PegId::Left, PegId::Middle),
            (PegId::Left, PegId::Right),
            (PegId::Middle, PegId::Right),
        ] {
            session.handle_interaction(Interaction::PointerClick(Some(from))).unwrap();
            session.handle_interaction(Interaction::PointerClick(Some(to))).unwrap();
        }
        prop_assert!(session.is_completed());
        let before = stacks(session.board());

        for interaction in extra {
            let outcome = session.handle_interaction(interaction).unwrap();
            prop_assert_eq!(*outcome.action(), SelectionAction::Ignored);
        }
        prop_assert_eq!(stacks(session.board()), before);
        prop_assert_eq!(session.move_count(), 3);
        prop_assert!(session.is_completed());
    }

    #[test]
    fn select_then_reselect_is_idempotent(
        n in 1u8..=5,
        interactions in proptest::collection::vec(interaction(), 0..100),
        origin in peg(),
    ) {
        let (mut session, _) = play(n, BackgroundClick::Keep, &interactions);
        // Settle into Idle through a fresh session if play left a selection.
        if session.selection().phase() != Phase::Idle {
            session.reset(session.num_disks());
        }
        prop_assume!(!session.board().peg(origin).is_empty());
        prop_assume!(!session.is_completed());

        let before = stacks(session.board());
        let count = session.move_count();

        session.handle_interaction(Interaction::PointerDown(Some(origin))).unwrap();
        session.handle_interaction(Interaction::PointerClick(Some(origin))).unwrap();
        prop_assert_eq!(session.selection().phase(), Phase::Selected);
        session.handle_interaction(Interaction::PointerClick(Some(origin))).unwrap();

        prop_assert_eq!(session.selection().phase(), Phase::Idle);
        prop_assert_eq!(stacks(session.board()), before);
        prop_assert_eq!(session.move_count(), count);
        prop_assert!(session.board().disks().all(|d| !d.is_selected()));
    }
}
