//! Ball vs arena wall bounce

use super::state::{Arena, Ball};

/// Which velocity axes a wall check reversed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall, `dx` reversed
    pub horizontal: bool,
    /// Top or bottom wall, `dy` reversed
    pub vertical: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Reverse each velocity axis whose next position would leave the arena.
///
/// Only velocity changes; the caller integrates position afterwards.
pub fn check_wall_collision(ball: &mut Ball, arena: &Arena) -> WallContact {
    let r = arena.ball_radius();
    let next = ball.pos + ball.vel;
    let mut contact = WallContact::default();

    if next.x > arena.width - r || next.x < r {
        ball.vel.x = -ball.vel.x;
        contact.horizontal = true;
    }
    if next.y > arena.height - r || next.y < r {
        ball.vel.y = -ball.vel.y;
        contact.vertical = true;
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PaletteColor;
    use glam::Vec2;

    fn arena() -> Arena {
        Arena::from_surface(600, 400, 25)
    }

    fn ball(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(pos, vel, PaletteColor::DarkBall, PaletteColor::Light)
    }

    #[test]
    fn test_left_wall_reverses_dx_only() {
        let mut b = ball(Vec2::new(11.5, 200.0), Vec2::new(-3.0, 6.0));
        let contact = check_wall_collision(&mut b, &arena());
        assert_eq!(b.vel, Vec2::new(3.0, 6.0));
        assert_eq!(b.pos, Vec2::new(11.5, 200.0));
        assert!(contact.horizontal);
        assert!(!contact.vertical);
    }

    #[test]
    fn test_bottom_wall_reverses_dy() {
        let mut b = ball(Vec2::new(300.0, 385.0), Vec2::new(5.0, 5.0));
        let contact = check_wall_collision(&mut b, &arena());
        assert_eq!(b.vel, Vec2::new(5.0, -5.0));
        assert!(contact.vertical && !contact.horizontal);
    }

    #[test]
    fn test_corner_reverses_both() {
        let mut b = ball(Vec2::new(590.0, 15.0), Vec2::new(8.0, -8.0));
        let contact = check_wall_collision(&mut b, &arena());
        assert_eq!(b.vel, Vec2::new(-8.0, 8.0));
        assert!(contact.horizontal && contact.vertical);
    }

    #[test]
    fn test_landing_exactly_on_bound_is_allowed() {
        // 577.5 + 10 = 587.5 = width - r; strict comparison keeps dx
        let mut b = ball(Vec2::new(577.5, 200.0), Vec2::new(10.0, 5.0));
        let contact = check_wall_collision(&mut b, &arena());
        assert!(!contact.any());
        assert_eq!(b.vel, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn test_interior_untouched() {
        let mut b = ball(Vec2::new(300.0, 200.0), Vec2::new(-7.0, 7.0));
        let contact = check_wall_collision(&mut b, &arena());
        assert_eq!(contact, WallContact::default());
        assert_eq!(b.vel, Vec2::new(-7.0, 7.0));
    }
}
