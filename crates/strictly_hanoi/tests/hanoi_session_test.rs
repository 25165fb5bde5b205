//! Tests for full play-throughs of a game session.

use std::time::{Duration, Instant};
use strictly_hanoi::{
    BackgroundClick, DiskCount, Elapsed, GameSession, Interaction, LayoutMetrics, PegId, Phase,
    SelectionAction, SessionStatus, SoundEffect,
};

fn stacks(session: &GameSession) -> Vec<Vec<u8>> {
    session
        .board()
        .pegs()
        .iter()
        .map(|peg| peg.disks().iter().map(|d| d.id()).collect())
        .collect()
}

fn down(session: &mut GameSession, peg: PegId) -> SelectionAction {
    *session
        .handle_interaction(Interaction::PointerDown(Some(peg)))
        .unwrap()
        .action()
}

fn click(session: &mut GameSession, peg: PegId) -> SelectionAction {
    *session
        .handle_interaction(Interaction::PointerClick(Some(peg)))
        .unwrap()
        .action()
}

/// Optimal solution as (from, to) pairs.
fn solution(n: u8, from: PegId, to: PegId, via: PegId, out: &mut Vec<(PegId, PegId)>) {
    if n == 0 {
        return;
    }
    solution(n - 1, from, via, to, out);
    out.push((from, to));
    solution(n - 1, via, to, from, out);
}

#[test]
fn test_three_disk_walkthrough() {
    let mut session = GameSession::new(DiskCount::new(3).unwrap());
    assert_eq!(stacks(&session), vec![vec![3, 2, 1], vec![], vec![]]);

    down(&mut session, PegId::Left);
    click(&mut session, PegId::Left);
    assert_eq!(session.selection().phase(), Phase::Selected);
    assert_eq!(session.selection().selection().map(|s| s.disk), Some(1));
    assert_eq!(session.move_count(), 0);

    assert!(matches!(
        click(&mut session, PegId::Right),
        SelectionAction::Moved(_)
    ));
    assert_eq!(stacks(&session), vec![vec![3, 2], vec![], vec![1]]);
    assert_eq!(session.move_count(), 1);

    down(&mut session, PegId::Left);
    click(&mut session, PegId::Left);
    assert_eq!(session.selection().selection().map(|s| s.disk), Some(2));

    assert!(matches!(
        click(&mut session, PegId::Right),
        SelectionAction::Rejected { .. }
    ));
    assert_eq!(session.selection().phase(), Phase::Selected);

    assert!(matches!(
        click(&mut session, PegId::Left),
        SelectionAction::Deselected(_)
    ));
    assert_eq!(stacks(&session), vec![vec![3, 2], vec![], vec![1]]);
    assert_eq!(session.move_count(), 1);
    assert!(session.board().disks().all(|d| !d.is_selected()));
}

#[test]
fn test_optimal_solution_completes_every_size() {
    for n in 1..=6 {
        let mut session = GameSession::new(DiskCount::new(n).unwrap());
        let mut moves = Vec::new();
        solution(n, PegId::Left, PegId::Right, PegId::Middle, &mut moves);

        for (i, (from, to)) in moves.iter().enumerate() {
            assert!(!session.is_completed(), "completed early at move {i}");
            down(&mut session, *from);
            click(&mut session, *from);
            click(&mut session, *to);
        }

        assert!(session.is_completed());
        assert_eq!(session.status(), SessionStatus::Completed);
        assert_eq!(u64::from(session.move_count()), session.optimal_moves());
    }
}

#[test]
fn test_completing_move_requests_both_sounds() {
    let mut session = GameSession::new(DiskCount::new(1).unwrap());
    down(&mut session, PegId::Left);
    click(&mut session, PegId::Left);
    let outcome = session
        .handle_interaction(Interaction::PointerClick(Some(PegId::Right)))
        .unwrap();
    assert_eq!(
        outcome.sounds(),
        &vec![SoundEffect::Move, SoundEffect::Completion]
    );
    assert!(*outcome.completed());
}

#[test]
fn test_clock_frozen_after_completion() {
    let t0 = Instant::now();
    let mut session = GameSession::new(DiskCount::new(1).unwrap());
    session
        .handle_interaction_at(Interaction::PointerDown(Some(PegId::Left)), t0)
        .unwrap();
    session
        .handle_interaction_at(
            Interaction::PointerClick(Some(PegId::Right)),
            t0 + Duration::from_secs(125),
        )
        .unwrap();
    assert!(session.is_completed());
    let shown = session.elapsed(t0 + Duration::from_secs(900));
    assert_eq!(
        shown,
        Elapsed {
            minutes: 2,
            seconds: 5
        }
    );
    assert_eq!(shown.to_string(), "02:05");
}

#[test]
fn test_background_click_policies() {
    for (policy, expected) in [
        (BackgroundClick::Keep, Phase::Selected),
        (BackgroundClick::Cancel, Phase::Idle),
    ] {
        let mut session = GameSession::with_options(
            DiskCount::default(),
            LayoutMetrics::default(),
            policy,
        );
        down(&mut session, PegId::Left);
        click(&mut session, PegId::Left);
        session
            .handle_interaction(Interaction::PointerClick(None))
            .unwrap();
        assert_eq!(session.selection().phase(), expected, "{policy}");
    }
}

#[test]
fn test_pointer_resolution_through_hit_regions() {
    let mut session = GameSession::new(DiskCount::new(3).unwrap());
    let left = *session.board().peg(PegId::Left).region();
    let right = *session.board().peg(PegId::Right).region();

    let peg = session.board().peg_at(left.x0, left.y1);
    session
        .handle_interaction(Interaction::PointerDown(peg))
        .unwrap();
    session
        .handle_interaction(Interaction::PointerClick(peg))
        .unwrap();
    let target = session.board().peg_at(right.x1, right.y0);
    session
        .handle_interaction(Interaction::PointerClick(target))
        .unwrap();

    assert_eq!(stacks(&session), vec![vec![3, 2], vec![], vec![1]]);
}

#[test]
fn test_sessions_are_independent() {
    let mut first = GameSession::new(DiskCount::new(2).unwrap());
    let second = GameSession::new(DiskCount::new(2).unwrap());
    down(&mut first, PegId::Left);
    assert_eq!(first.selection().phase(), Phase::Armed);
    assert_eq!(second.selection().phase(), Phase::Idle);
    assert!(second.board().disks().all(|d| !d.is_selected()));
}

#[test]
fn test_reset_after_completion_allows_play() {
    let mut session = GameSession::new(DiskCount::new(1).unwrap());
    down(&mut session, PegId::Left);
    click(&mut session, PegId::Right);
    assert!(session.is_completed());

    session.reset(DiskCount::new(2).unwrap());
    assert!(!session.is_completed());
    assert_eq!(stacks(&session), vec![vec![2, 1], vec![], vec![]]);
    assert!(matches!(
        down(&mut session, PegId::Left),
        SelectionAction::Armed(_)
    ));
}
