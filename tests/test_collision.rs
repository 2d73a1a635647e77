use proptest::prelude::*;

use space_garbage::collision::*;

#[test]
fn point_inside_obstacle_collides() {
    let obstacle = Rect::new(5.0, 10.0, 4.0, 6.0);
    assert!(has_collision(&obstacle, &Rect::point(7.0, 12.0)));
}

#[test]
fn point_below_obstacle_misses() {
    let obstacle = Rect::new(5.0, 10.0, 4.0, 6.0);
    assert!(!has_collision(&obstacle, &Rect::point(10.0, 12.0)));
}

#[test]
fn far_edge_is_exclusive() {
    let obstacle = Rect::new(5.0, 10.0, 4.0, 6.0);
    assert!(!has_collision(&obstacle, &Rect::point(9.0, 12.0)));
    assert!(!has_collision(&obstacle, &Rect::point(6.0, 16.0)));
    assert!(has_collision(&obstacle, &Rect::point(8.0, 15.0)));
}

#[test]
fn overlapping_boxes_collide() {
    let ship = Rect::new(30.0, 50.0, 9.0, 5.0);
    let garbage = Rect::new(36.0, 53.0, 4.0, 10.0);
    assert!(has_collision(&ship, &garbage));
}

#[test]
fn empty_boxes_never_collide() {
    let point = Rect::point(5.0, 5.0);
    assert!(!has_collision(&Rect::new(5.0, 5.0, 0.0, 3.0), &point));
    assert!(!has_collision(&Rect::new(4.0, 4.0, -1.0, 3.0), &point));
    assert!(!has_collision(&point, &Rect::new(4.0, 4.0, 3.0, -2.0)));
}

#[test]
fn center_of_box() {
    assert_eq!(Rect::new(2.0, 4.0, 4.0, 6.0).center(), (4.0, 7.0));
}

fn any_rect() -> impl Strategy<Value = Rect> {
    (-20.0f64..20.0, -20.0f64..20.0, -3.0f64..10.0, -3.0f64..10.0)
        .prop_map(|(row, column, height, width)| Rect::new(row, column, height, width))
}

proptest! {
    #[test]
    fn collision_is_symmetric(a in any_rect(), b in any_rect()) {
        prop_assert_eq!(has_collision(&a, &b), has_collision(&b, &a));
    }

    #[test]
    fn box_collides_with_its_own_corner(a in any_rect()) {
        let corner = Rect::point(a.row, a.column);
        prop_assert_eq!(has_collision(&a, &corner), !a.is_empty());
    }
}
