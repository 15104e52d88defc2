//! Taxi movement and collision tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use taxi_sim::simulation::{
    any_collision, Block, BlockId, BlockedReason, Color, MoveOutcome, Orientation, Rect, Vehicle,
};

fn block(id: usize, rect: Rect) -> Block {
    Block::new(BlockId(id), rect, Color::BLACK)
}

fn taxi() -> Vehicle {
    Vehicle::new(4, 9, 12, 21, Orientation::Vertical, 5)
}

fn snapshot(v: &Vehicle) -> (i32, i32, i32, i32, Orientation) {
    (v.x, v.y, v.width, v.height, v.orientation)
}

#[test]
fn test_intersects_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let a = Rect::new(
            rng.random_range(0..100),
            rng.random_range(0..100),
            rng.random_range(1..40),
            rng.random_range(1..40),
        );
        let b = Rect::new(
            rng.random_range(0..100),
            rng.random_range(0..100),
            rng.random_range(1..40),
            rng.random_range(1..40),
        );
        assert_eq!(a.intersects(&b), b.intersects(&a), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_touching_edges_do_not_collide() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
}

#[test]
fn test_any_collision_reports_block() {
    let blocks = vec![block(0, Rect::new(0, 0, 10, 10)), block(1, Rect::new(50, 50, 10, 10))];
    assert_eq!(any_collision(&Rect::new(55, 55, 2, 2), &blocks), Some(BlockId(1)));
    assert_eq!(any_collision(&Rect::new(20, 20, 2, 2), &blocks), None);
}

#[test]
fn test_perpendicular_request_turns_in_place() {
    let mut v = taxi();
    let outcome = v.try_move(5, 0, &[], 800, 600);

    assert_eq!(outcome, MoveOutcome::Turned);
    assert_eq!(snapshot(&v), (4, 9, 21, 12, Orientation::Horizontal));
}

#[test]
fn test_turn_then_move_along_new_axis() {
    let mut v = taxi();
    v.try_move(5, 0, &[], 800, 600);
    let outcome = v.try_move(5, 0, &[], 800, 600);

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(snapshot(&v), (9, 9, 21, 12, Orientation::Horizontal));

    // Vertical request while horizontal flips back
    let outcome = v.try_move(0, -5, &[], 800, 600);
    assert_eq!(outcome, MoveOutcome::Turned);
    assert_eq!(snapshot(&v), (9, 9, 12, 21, Orientation::Vertical));
}

#[test]
fn test_same_axis_requests_accumulate() {
    let mut v = taxi();
    assert_eq!(v.try_move(0, 5, &[], 800, 600), MoveOutcome::Moved);
    assert_eq!(snapshot(&v), (4, 14, 12, 21, Orientation::Vertical));
    assert_eq!(v.try_move(0, 5, &[], 800, 600), MoveOutcome::Moved);
    assert_eq!(snapshot(&v), (4, 19, 12, 21, Orientation::Vertical));
}

#[test]
fn test_zero_request_is_idle() {
    let mut v = taxi();
    assert_eq!(v.try_move(0, 0, &[], 800, 600), MoveOutcome::Idle);
    assert_eq!(snapshot(&v), (4, 9, 12, 21, Orientation::Vertical));
}

#[test]
fn test_collision_blocks_move_and_turn() {
    let blocks = vec![block(0, Rect::new(20, 0, 10, 100))];
    let mut v = taxi();

    // Candidate x 9..21 overlaps the block starting at 20
    let outcome = v.try_move(5, 0, &blocks, 100, 100);
    assert_eq!(
        outcome,
        MoveOutcome::Blocked(BlockedReason::Collision(BlockId(0)))
    );
    assert_eq!(snapshot(&v), (4, 9, 12, 21, Orientation::Vertical));
}

#[test]
fn test_candidate_touching_block_is_allowed() {
    let blocks = vec![block(0, Rect::new(20, 0, 10, 100))];
    let mut v = Vehicle::new(3, 9, 12, 21, Orientation::Vertical, 5);

    // Candidate x 8..20 only touches the block
    assert_eq!(v.try_move(5, 0, &blocks, 100, 100), MoveOutcome::Turned);
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut v = Vehicle::new(0, 0, 12, 21, Orientation::Vertical, 5);
    assert_eq!(
        v.try_move(0, -5, &[], 100, 100),
        MoveOutcome::Blocked(BlockedReason::OutOfBounds)
    );
    assert_eq!(
        v.try_move(-5, 0, &[], 100, 100),
        MoveOutcome::Blocked(BlockedReason::OutOfBounds)
    );
    assert_eq!(snapshot(&v), (0, 0, 12, 21, Orientation::Vertical));

    let mut v = Vehicle::new(10, 79, 12, 21, Orientation::Vertical, 5);
    assert_eq!(
        v.try_move(0, 5, &[], 100, 100),
        MoveOutcome::Blocked(BlockedReason::OutOfBounds)
    );
    assert_eq!(snapshot(&v), (10, 79, 12, 21, Orientation::Vertical));
}

#[test]
fn test_move_up_to_map_edge() {
    let mut v = Vehicle::new(10, 74, 12, 21, Orientation::Vertical, 5);
    assert_eq!(v.try_move(0, 5, &[], 100, 100), MoveOutcome::Moved);
    assert_eq!(v.rect().bottom(), 100);
}
