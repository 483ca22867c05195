use glam::{Mat4, Vec3};
use super::*;

// ============================================================================
// ActorBox
// ============================================================================

#[test]
fn test_actor_box_dimensions() {
    let b = ActorBox::new(10.0, 20.0, 40.0, 30.0);
    assert_eq!(b.width(), 30.0);
    assert_eq!(b.height(), 10.0);
    assert_eq!(b.area(), 300.0);
}

#[test]
fn test_clamp_to_pixel_grows_outward() {
    let mut b = ActorBox::new(1.2, -0.5, 9.1, 4.0);
    b.clamp_to_pixel();
    assert_eq!(b, ActorBox::new(1.0, -1.0, 10.0, 4.0));
}

// ============================================================================
// PaintVolume::bounding_box
// ============================================================================

#[test]
fn test_bounding_box_of_aligned_volume() {
    let mut volume = PaintVolume::new(None);
    volume.set_origin(Vec3::new(5.0, 6.0, 0.0)).unwrap();
    volume.set_width(10.0).unwrap();
    volume.set_height(4.0).unwrap();

    assert_eq!(volume.bounding_box(), ActorBox::new(5.0, 6.0, 15.0, 10.0));
}

#[test]
fn test_bounding_box_ignores_depth() {
    let mut volume = PaintVolume::new(None);
    volume.set_width(2.0).unwrap();
    volume.set_height(3.0).unwrap();
    volume.set_depth(100.0).unwrap();

    assert_eq!(volume.bounding_box(), ActorBox::new(0.0, 0.0, 2.0, 3.0));
}

#[test]
fn test_bounding_box_of_rotated_volume() {
    let mut volume = PaintVolume::new(None);
    volume.set_width(2.0).unwrap();
    volume.set_height(2.0).unwrap();
    volume.transform(&Mat4::from_rotation_z(std::f32::consts::FRAC_PI_4));

    let b = volume.bounding_box();
    let half_diagonal = std::f32::consts::SQRT_2;
    assert!((b.x1 + half_diagonal).abs() < 1e-5);
    assert!((b.x2 - half_diagonal).abs() < 1e-5);
    assert!(b.y1.abs() < 1e-5);
    assert!((b.y2 - 2.0 * half_diagonal).abs() < 1e-5);
}

#[test]
fn test_bounding_box_of_empty_volume_is_a_point() {
    let mut volume = PaintVolume::new(None);
    volume.set_origin(Vec3::new(3.0, 4.0, 5.0)).unwrap();

    let b = volume.bounding_box();
    assert_eq!(b, ActorBox::new(3.0, 4.0, 3.0, 4.0));
    assert_eq!(b.area(), 0.0);
}
