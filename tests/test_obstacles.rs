use space_garbage::collision::Rect;
use space_garbage::obstacles::*;

#[test]
fn add_assigns_distinct_ids() {
    let mut registry = ObstacleRegistry::new();
    let a = registry.add(0.0, 0.0, 2, 2);
    let b = registry.add(0.0, 0.0, 2, 2);
    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
}

#[test]
fn remove_happens_exactly_once() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.add(1.0, 1.0, 3, 3);
    assert!(registry.remove(id).is_some());
    assert!(registry.remove(id).is_none());
    assert!(registry.is_empty());
}

#[test]
fn removed_id_is_never_reused() {
    let mut registry = ObstacleRegistry::new();
    let first = registry.add(1.0, 1.0, 3, 3);
    registry.remove(first);
    let second = registry.add(1.0, 1.0, 3, 3);
    assert_ne!(first, second);
    assert!(registry.get(first).is_none());
}

#[test]
fn frame_hitbox_is_shrunk_by_margin() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.add_frame(4.0, 10.0, 6, 8);
    let obstacle = registry.get(id).unwrap();
    let m = HITBOX_MARGIN;
    assert_eq!(obstacle.row, 4.0 + f64::from(m));
    assert_eq!(obstacle.column, 10.0 + f64::from(m));
    assert_eq!(obstacle.height, 6 - 2 * m);
    assert_eq!(obstacle.width, 8 - 2 * m);
}

#[test]
fn tiny_frame_never_collides() {
    let mut registry = ObstacleRegistry::new();
    registry.add_frame(0.0, 0.0, 1, 1);
    for row in -2..3 {
        for column in -2..3 {
            let cell = Rect::point(f64::from(row), f64::from(column));
            assert!(registry.first_collision(&cell).is_none());
        }
    }
}

#[test]
fn move_frame_keeps_margin() {
    let mut registry = ObstacleRegistry::new();
    let id = registry.add_frame(0.0, 5.0, 4, 4);
    registry.move_frame(id, 2.5, 5.0);
    let obstacle = registry.get(id).unwrap();
    assert_eq!(obstacle.row, 2.5 + f64::from(HITBOX_MARGIN));
}

// ── destroy_first_hit ─────────────────────────────────────────────────────────

#[test]
fn first_match_in_registry_order_wins() {
    let mut registry = ObstacleRegistry::new();
    let older = registry.add(0.0, 0.0, 5, 5);
    let newer = registry.add(0.0, 0.0, 5, 5);

    let hit = registry.destroy_first_hit(&Rect::point(2.0, 2.0)).unwrap();
    assert_eq!(hit.id, older);
    assert!(hit.destroyed);
    assert!(!registry.get(newer).unwrap().destroyed);
}

#[test]
fn destroyed_obstacle_cannot_be_hit_again() {
    let mut registry = ObstacleRegistry::new();
    let only = registry.add(0.0, 0.0, 5, 5);

    assert!(registry.destroy_first_hit(&Rect::point(1.0, 1.0)).is_some());
    assert!(registry.destroy_first_hit(&Rect::point(1.0, 1.0)).is_none());
    // Still registered until its fall task removes it
    assert!(registry.get(only).is_some());
    assert_eq!(registry.live().count(), 0);
}

#[test]
fn miss_changes_nothing() {
    let mut registry = ObstacleRegistry::new();
    registry.add(0.0, 0.0, 2, 2);
    assert!(registry.destroy_first_hit(&Rect::point(10.0, 10.0)).is_none());
    assert!(registry.iter().all(|o| !o.destroyed));
}
