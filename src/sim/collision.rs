//! Geometric overlap tests between the bird and the world.
//!
//! Everything here works on numeric positions only, so it can be tested
//! without a display.

use super::types::{Bird, Pipe, Rect};

/// A collision that ends the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Collision {
    Ground,
    /// Hit the top or bottom rectangle of the pipe with this id.
    Pipe(String),
}

/// Circle vs axis-aligned rectangle.
///
/// Clamps the circle center onto the rectangle on each axis to find the
/// closest point, then compares squared distances. Touching counts as
/// overlap.
pub fn circle_rect_overlap(cx: f64, cy: f64, radius: f64, rect: &Rect) -> bool {
    // Inverted rects are tolerated, so no f64::clamp here.
    let closest_x = cx.max(rect.x).min(rect.right());
    let closest_y = cy.max(rect.y).min(rect.bottom());
    let dx = cx - closest_x;
    let dy = cy - closest_y;
    dx * dx + dy * dy <= radius * radius
}

pub fn hits_ceiling(bird: &Bird) -> bool {
    bird.top() < 0.0
}

pub fn hits_ground(bird: &Bird, floor_y: f64) -> bool {
    bird.bottom() > floor_y
}

pub fn hits_pipe(bird: &Bird, pipe: &Pipe, floor_y: f64) -> bool {
    circle_rect_overlap(bird.x, bird.y, bird.radius, &pipe.top_rect())
        || circle_rect_overlap(bird.x, bird.y, bird.radius, &pipe.bottom_rect(floor_y))
}

/// Push the bird back below the ceiling and stop it. Returns whether it
/// was touching the ceiling. Not terminal.
pub fn resolve_ceiling(bird: &mut Bird) -> bool {
    if hits_ceiling(bird) {
        bird.y = bird.radius;
        bird.velocity = 0.0;
        true
    } else {
        false
    }
}

/// First terminal collision, checking the ground before the pipes.
pub fn detect_terminal(bird: &Bird, pipes: &[Pipe], floor_y: f64) -> Option<Collision> {
    if hits_ground(bird, floor_y) {
        return Some(Collision::Ground);
    }
    pipes
        .iter()
        .find(|pipe| hits_pipe(bird, pipe, floor_y))
        .map(|pipe| Collision::Pipe(pipe.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn bird_at(x: f64, y: f64) -> Bird {
        Bird {
            x,
            y,
            radius: 16.0,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_circle_inside_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(circle_rect_overlap(50.0, 50.0, 5.0, &rect));
    }

    #[test]
    fn test_circle_beside_rect() {
        let rect = Rect::new(100.0, 0.0, 60.0, 200.0);
        assert!(!circle_rect_overlap(80.0, 100.0, 16.0, &rect));
        assert!(circle_rect_overlap(85.0, 100.0, 16.0, &rect));
        // Exactly touching
        assert!(circle_rect_overlap(84.0, 100.0, 16.0, &rect));
    }

    #[test]
    fn test_circle_near_corner_uses_distance() {
        let rect = Rect::new(100.0, 100.0, 50.0, 50.0);
        // dx = dy = 12 -> distance ~16.97 > 16
        assert!(!circle_rect_overlap(88.0, 88.0, 16.0, &rect));
        // dx = dy = 11 -> distance ~15.56 < 16
        assert!(circle_rect_overlap(89.0, 89.0, 16.0, &rect));
    }

    #[test]
    fn test_ground_threshold() {
        // floor at 600 - 100 = 500, radius 16 -> fires when y > 484
        assert!(!hits_ground(&bird_at(100.0, 300.0), 500.0));
        assert!(!hits_ground(&bird_at(100.0, 484.0), 500.0));
        assert!(hits_ground(&bird_at(100.0, 484.5), 500.0));
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let mut bird = bird_at(100.0, 10.0);
        bird.velocity = -400.0;
        assert!(resolve_ceiling(&mut bird));
        assert!((bird.y - 16.0).abs() < f64::EPSILON);
        assert_eq!(bird.velocity, 0.0);

        let mut bird = bird_at(100.0, 16.0);
        bird.velocity = -400.0;
        assert!(!resolve_ceiling(&mut bird));
        assert!((bird.velocity + 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bird_at_gap_top_edge_hits_top_pipe() {
        let pipe = Pipe::new("p".into(), 80.0, 60.0, 300.0, 150.0);
        let bird = bird_at(100.0, 225.0);
        assert!(bird.bottom() > pipe.top_end);
        assert!(hits_pipe(&bird, &pipe, 500.0));
    }

    #[test]
    fn test_bird_centered_in_gap_is_safe() {
        let pipe = Pipe::new("p".into(), 80.0, 60.0, 300.0, 150.0);
        assert!(!hits_pipe(&bird_at(100.0, 300.0), &pipe, 500.0));
    }

    #[test]
    fn test_bird_hits_bottom_pipe() {
        let pipe = Pipe::new("p".into(), 80.0, 60.0, 300.0, 150.0);
        assert!(hits_pipe(&bird_at(100.0, 365.0), &pipe, 500.0));
    }

    #[test]
    fn test_detect_terminal_reports_pipe_id() {
        let config = GameConfig::default();
        let pipes = vec![
            Pipe::new("far".into(), 300.0, 60.0, 300.0, 150.0),
            Pipe::new("near".into(), 90.0, 60.0, 100.0, 150.0),
        ];
        let bird = bird_at(100.0, 300.0);
        assert_eq!(
            detect_terminal(&bird, &pipes, config.floor_y()),
            Some(Collision::Pipe("near".into()))
        );
    }

    #[test]
    fn test_detect_terminal_ground_first() {
        let pipes = vec![Pipe::new("p".into(), 90.0, 60.0, 100.0, 150.0)];
        let bird = bird_at(100.0, 490.0);
        assert_eq!(
            detect_terminal(&bird, &pipes, 500.0),
            Some(Collision::Ground)
        );
    }

    #[test]
    fn test_inverted_rect_does_not_panic() {
        // height -65, as from a gap centered above the top margin
        let rect = Rect::new(90.0, 0.0, 60.0, -65.0);
        assert!(!circle_rect_overlap(100.0, 300.0, 16.0, &rect));
        assert!(!circle_rect_overlap(100.0, 10.0, 16.0, &rect));
    }

    #[test]
    fn test_detect_terminal_clear() {
        let pipes = vec![Pipe::new("p".into(), 200.0, 60.0, 300.0, 150.0)];
        assert_eq!(detect_terminal(&bird_at(100.0, 300.0), &pipes, 500.0), None);
    }
}
