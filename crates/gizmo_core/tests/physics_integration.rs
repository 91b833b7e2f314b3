//! Integration tests for the gizmo pipeline
//!
//! These tests drive real boards through the physics engine:
//! 1. Factory output lands where the grid coordinates say
//! 2. Balls fall and collide
//! 3. Absorbers swallow energy, elastic squares keep it
//! 4. Entities and bodies stay paired one to one

use std::collections::HashSet;

use gizmo_core::{
    Board, BodyType, Color, GizmoTemplate, PhysicsConfig, Scale, Scene, ShapeKind, Vec2,
};
use gizmo_math::units::DEFAULT_RATE;

const STEP: f32 = 1.0 / 60.0;

fn zero_gravity_board() -> Board {
    Board::new(Scale::default(), PhysicsConfig::new(Vec2::ZERO))
}

/// Fire a ball straight down into a target gizmo and return (speed before, velocity after)
fn collide_with(target: ShapeKind) -> (f32, Vec2) {
    let mut board = zero_gravity_board();
    board
        .spawn(&GizmoTemplate::new(target, Vec2::new(0.0, 40.0), 20.0).with_name("target"))
        .expect("target should be created");
    let ball = board
        .spawn(&GizmoTemplate::new(ShapeKind::Ball, Vec2::new(0.0, 0.0), 10.0))
        .expect("ball should be created");
    let body = board.get_entity(ball).unwrap().body();

    let incoming = Vec2::new(0.0, 5.0);
    board.physics_mut().set_linear_velocity(body, incoming).unwrap();

    for _ in 0..120 {
        board.step(STEP);
    }

    (incoming.length(), board.physics().linear_velocity(body).unwrap())
}

// ==================== Placement Tests ====================

#[test]
fn test_static_square_position_and_material() {
    let mut board = Board::default();
    let key = board
        .spawn(&GizmoTemplate::new(ShapeKind::Square, Vec2::new(0.0, 0.0), 20.0))
        .unwrap();
    let entity = board.get_entity(key).unwrap();
    let half = 20.0 / 2.0 / DEFAULT_RATE;

    let position = board.physics().position(entity.body()).unwrap();
    assert!((position.x - half).abs() < 1e-6);
    assert!((position.y - half).abs() < 1e-6);

    let fixtures = board.physics().fixtures(entity.body()).unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].material.density, 0.0);
    assert_eq!(fixtures[0].material.friction, 1.0);
    assert_eq!(fixtures[0].material.restitution, 1.0);
}

#[test]
fn test_every_kind_has_one_fixture_and_finite_material() {
    let mut board = Board::default();
    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
        board
            .spawn(&GizmoTemplate::new(kind, Vec2::new(2.0 * i as f32, 2.0), 1.0))
            .unwrap();
    }

    for (_, entity) in board.iter() {
        let fixtures = board.physics().fixtures(entity.body()).unwrap();
        assert_eq!(fixtures.len(), 1, "{} should have exactly one fixture", entity.kind());
        let material = fixtures[0].material;
        assert!(material.density >= 0.0 && material.density.is_finite());
        assert!((0.0..=1.0).contains(&material.friction));
        assert!((0.0..=1.0).contains(&material.restitution));
    }
}

// ==================== Physics Simulation Tests ====================

#[test]
fn test_ball_falls_monotonically() {
    let mut board = Board::default();
    let key = board
        .spawn(&GizmoTemplate::new(ShapeKind::Ball, Vec2::new(10.0, 0.0), 0.5))
        .unwrap();
    let body = board.get_entity(key).unwrap().body();

    let mut last_y = board.physics().position(body).unwrap().y;
    for step in 0..30 {
        board.step(STEP);
        let y = board.physics().position(body).unwrap().y;
        assert!(y > last_y, "ball should keep falling at step {step}: {y} <= {last_y}");
        last_y = y;
    }
}

#[test]
fn test_static_gizmos_do_not_move() {
    let mut board = Board::default();
    let keys: Vec<_> = [ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Trapezoid, ShapeKind::Absorber]
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            board
                .spawn(
                    &GizmoTemplate::new(kind, Vec2::new(3.0 * i as f32, 5.0), 2.0)
                        .with_body_type(BodyType::Static),
                )
                .unwrap()
        })
        .collect();
    let before: Vec<_> = keys
        .iter()
        .map(|k| board.physics().snapshot(board.get_entity(*k).unwrap().body()).unwrap())
        .collect();

    for _ in 0..60 {
        board.step(STEP);
    }

    for (key, snapshot) in keys.iter().zip(before) {
        let body = board.get_entity(*key).unwrap().body();
        assert_eq!(board.physics().position(body), Some(snapshot.position));
        assert_eq!(board.physics().angle(body), Some(snapshot.angle));
    }
}

// ==================== Contact Tests ====================

#[test]
fn test_absorber_kills_bounce() {
    let (before, after) = collide_with(ShapeKind::Absorber);
    assert!(
        after.length() < 0.5 * before,
        "absorber should eat most of the energy: {} vs {}",
        after.length(),
        before
    );
}

#[test]
fn test_advance_square_bounces_ball_back() {
    let (before, after) = collide_with(ShapeKind::AdvanceSquare);
    assert!(after.y < 0.0, "ball should travel back up, got {:?}", after);
    assert!(
        after.length() > 0.8 * before,
        "elastic square should keep most of the energy: {} vs {}",
        after.length(),
        before
    );
}

#[test]
fn test_ball_settles_on_absorber_floor() {
    let mut board = Board::default();
    board
        .spawn(&GizmoTemplate::new(ShapeKind::Absorber, Vec2::new(0.0, 19.0), 20.0).with_name("floor"))
        .unwrap();
    let ball = board
        .spawn(&GizmoTemplate::new(ShapeKind::Ball, Vec2::new(0.0, 0.0), 5.0))
        .unwrap();
    let body = board.get_entity(ball).unwrap().body();

    for _ in 0..300 {
        board.step(STEP);
    }

    // Floor top is at 1.9 in simulation space, ball radius 0.5
    let position = board.physics().position(body).unwrap();
    assert!((position.y - 1.4).abs() < 0.05, "ball should rest on the floor, y = {}", position.y);
    assert!(board.physics().linear_velocity(body).unwrap().length() < 0.1);
}

#[test]
fn test_ball_keeps_bouncing_on_one_cell_square() {
    // One grid cell at the bottom row of the default board
    let mut board = Board::default();
    board
        .spawn(
            &GizmoTemplate::new(ShapeKind::Square, Vec2::new(10.0, 19.0), 1.0)
                .with_body_type(BodyType::Static),
        )
        .unwrap();
    let ball = board
        .spawn(&GizmoTemplate::new(ShapeKind::Ball, Vec2::new(10.25, 1.0), 0.5))
        .unwrap();
    let body = board.get_entity(ball).unwrap().body();
    let cell_top = 19.0 / DEFAULT_RATE;

    let mut bounces = 0;
    let mut previous = board.physics().linear_velocity(body).unwrap();
    for step in 0..600 {
        board.step(STEP);
        let snapshot = board.physics().snapshot(body).unwrap();
        assert!(
            snapshot.position.y < cell_top,
            "ball passed into the square at step {step}: y = {}",
            snapshot.position.y
        );
        if previous.y > 0.0 && snapshot.velocity.y < 0.0 {
            bounces += 1;
        }
        previous = snapshot.velocity;
    }

    assert!(bounces >= 2, "ball should keep bouncing, saw {bounces} bounce(s)");
}

// ==================== Pairing Tests ====================

#[test]
fn test_entities_map_to_distinct_bodies() {
    let scene = Scene::new("pairs")
        .with_gizmo(GizmoTemplate::new(ShapeKind::Circle, Vec2::new(1.0, 1.0), 1.0))
        .with_gizmo(GizmoTemplate::new(ShapeKind::Circle, Vec2::new(1.0, 1.0), 1.0))
        .with_gizmo(GizmoTemplate::new(ShapeKind::Square, Vec2::new(5.0, 1.0), 2.0))
        .with_gizmo(GizmoTemplate::new(ShapeKind::Ball, Vec2::new(9.0, 1.0), 0.5).with_color(Color::BLUE));
    let board = scene.instantiate(Scale::default(), PhysicsConfig::default()).unwrap();

    let bodies: HashSet<_> = board.iter().map(|(_, e)| e.body()).collect();
    assert_eq!(bodies.len(), board.entity_count());
    assert_eq!(board.physics().body_count(), board.entity_count());
    for body in bodies {
        let tag = board.physics().user_data(body).unwrap();
        assert!(ShapeKind::from_tag(tag).is_some());
    }
}

#[test]
fn test_despawn_releases_body() {
    let mut board = Board::default();
    let key = board
        .spawn(&GizmoTemplate::new(ShapeKind::Trapezoid, Vec2::new(4.0, 4.0), 2.0))
        .unwrap();
    let body = board.get_entity(key).unwrap().body();

    board.despawn(key);
    for _ in 0..5 {
        board.step(STEP);
    }

    assert_eq!(board.physics().body_count(), 0);
    assert!(board.physics().position(body).is_none());
}
