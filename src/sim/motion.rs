//! Bubble motion and wall bounce
//!
//! Straight-line integration, then a boundary check. Any wall contact flips
//! both velocity components, and the bubble is pushed back inside so it
//! never tunnels out on a long frame. Bubbles pass through each other.

use glam::Vec2;

use super::pool::{Bubble, BubblePool};
use super::state::PlayArea;

/// Whether the bubble touches a wall it is moving into
fn wall_contact(bubble: &Bubble, area: &PlayArea) -> bool {
    let r = bubble.radius;
    let p = bubble.pos;
    let v = bubble.vel;
    (p.x - r <= area.min.x && v.x < 0.0)
        || (p.x + r >= area.max.x && v.x > 0.0)
        || (p.y - r <= area.min.y && v.y < 0.0)
        || (p.y + r >= area.max.y && v.y > 0.0)
}

/// Move one bubble by `dt`, returning true if it bounced
pub fn step_bubble(bubble: &mut Bubble, dt: f32, area: &PlayArea) -> bool {
    bubble.pos += bubble.vel * dt;

    if !wall_contact(bubble, area) {
        return false;
    }

    bubble.vel = -bubble.vel;
    if let Some((lo, hi)) = area.inset(bubble.radius) {
        bubble.pos = bubble.pos.clamp(lo, hi);
    } else {
        bubble.pos = (area.min + area.max) * 0.5;
        bubble.vel = Vec2::ZERO;
    }
    true
}

/// Advance every live bubble, returning the number of bounces
pub fn advance(pool: &mut BubblePool, dt: f32, area: &PlayArea) -> usize {
    pool.iter_mut()
        .map(|bubble| step_bubble(bubble, dt, area))
        .filter(|&bounced| bounced)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pool::BubbleColor;
    use proptest::prelude::*;

    fn area() -> PlayArea {
        PlayArea::new(Vec2::ZERO, Vec2::new(400.0, 500.0)).unwrap()
    }

    fn bubble(pos: Vec2, vel: Vec2) -> Bubble {
        Bubble {
            id: 1,
            pos,
            vel,
            radius: BUBBLE_RADIUS,
            color: BubbleColor::Blue,
        }
    }

    #[test]
    fn test_free_flight() {
        let mut b = bubble(Vec2::new(200.0, 200.0), Vec2::new(600.0, -500.0));
        assert!(!step_bubble(&mut b, 0.1, &area()));
        assert!((b.pos - Vec2::new(260.0, 150.0)).length() < 1e-3);
        assert_eq!(b.vel, Vec2::new(600.0, -500.0));
    }

    #[test]
    fn test_wall_flips_both_axes() {
        // Heading into the right wall
        let mut b = bubble(Vec2::new(370.0, 200.0), Vec2::new(800.0, 700.0));
        assert!(step_bubble(&mut b, 1.0 / 60.0, &area()));
        assert_eq!(b.vel, Vec2::new(-800.0, -700.0));
        assert!(area().contains_circle(b.pos, b.radius));
        assert!((b.pos.x - 375.0).abs() < 1e-3);
    }

    #[test]
    fn test_no_double_flip_while_resting_on_wall() {
        let mut b = bubble(Vec2::new(25.0, 200.0), Vec2::new(-500.0, 500.0));
        assert!(step_bubble(&mut b, 1.0 / 60.0, &area()));
        // Now moving away from the wall; a zero-length frame must not flip again
        assert!(!step_bubble(&mut b, 0.0, &area()));
        assert_eq!(b.vel, Vec2::new(500.0, -500.0));
    }

    #[test]
    fn test_long_frame_does_not_tunnel() {
        let mut b = bubble(Vec2::new(200.0, 250.0), Vec2::new(-1000.0, 1000.0));
        step_bubble(&mut b, 5.0, &area());
        assert!(area().contains_circle(b.pos, b.radius));
    }

    #[test]
    fn test_advance_counts_bounces() {
        let mut pool = BubblePool::new();
        pool.insert(bubble(Vec2::new(200.0, 250.0), Vec2::new(500.0, 500.0)));
        pool.insert(bubble(Vec2::new(30.0, 250.0), Vec2::new(-600.0, 500.0)));
        assert_eq!(advance(&mut pool, 1.0 / 60.0, &area()), 1);
    }

    proptest! {
        #[test]
        fn prop_bubbles_stay_in_bounds(
            x in 25.0f32..375.0,
            y in 25.0f32..475.0,
            vx in -1000.0f32..1000.0,
            vy in -1000.0f32..1000.0,
            dts in prop::collection::vec(0.0f32..0.25, 1..60),
        ) {
            let area = area();
            let mut b = bubble(Vec2::new(x, y), Vec2::new(vx, vy));
            for dt in dts {
                step_bubble(&mut b, dt, &area);
                prop_assert!(area.contains_circle(b.pos, b.radius), "escaped to {:?}", b.pos);
            }
        }
    }
}
