use glam::{Mat4, Vec3};
use super::*;

fn rect(width: f32, height: f32) -> PaintVolume {
    let mut volume = PaintVolume::new(None);
    volume.set_width(width).unwrap();
    volume.set_height(height).unwrap();
    volume
}

struct PassThrough;

impl PaintEffect for PassThrough {}

// ============================================================================
// PaintEffect default
// ============================================================================

#[test]
fn test_default_hook_keeps_volume() {
    let mut volume = rect(10.0, 10.0);
    let before = volume.clone();

    assert!(PassThrough.modify_paint_volume(&mut volume));
    assert_eq!(volume, before);
}

// ============================================================================
// PaddingEffect
// ============================================================================

#[test]
fn test_uniform_padding_grows_every_side() {
    let mut volume = rect(10.0, 10.0);
    assert!(PaddingEffect::uniform(2.0).modify_paint_volume(&mut volume));

    assert_eq!(volume.origin(), Vec3::new(-2.0, -2.0, 0.0));
    assert_eq!(volume.width().unwrap(), 14.0);
    assert_eq!(volume.height().unwrap(), 14.0);
}

#[test]
fn test_asymmetric_padding() {
    let mut volume = rect(10.0, 20.0);
    let shadow = PaddingEffect::new(0.0, 0.0, 4.0, 6.0);
    assert!(shadow.modify_paint_volume(&mut volume));

    assert_eq!(volume.origin(), Vec3::ZERO);
    assert_eq!(volume.width().unwrap(), 14.0);
    assert_eq!(volume.height().unwrap(), 26.0);
}

#[test]
fn test_padding_keeps_depth() {
    let mut volume = rect(10.0, 10.0);
    volume.set_depth(3.0).unwrap();
    PaddingEffect::uniform(1.0).modify_paint_volume(&mut volume);

    assert_eq!(volume.depth().unwrap(), 3.0);
}

#[test]
fn test_padding_skips_empty_volume() {
    let mut volume = PaintVolume::new(None);
    assert!(PaddingEffect::uniform(5.0).modify_paint_volume(&mut volume));
    assert!(volume.is_empty());
}

#[test]
fn test_padding_cannot_bound_rotated_volume() {
    let mut volume = rect(10.0, 10.0);
    volume.transform(&Mat4::from_rotation_z(0.4));

    assert!(!PaddingEffect::uniform(1.0).modify_paint_volume(&mut volume));
}

// ============================================================================
// UnboundedEffect
// ============================================================================

#[test]
fn test_unbounded_effect_vetoes() {
    let mut volume = rect(10.0, 10.0);
    assert!(!UnboundedEffect.modify_paint_volume(&mut volume));
}
