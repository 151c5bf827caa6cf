use glam::Vec2;
use winit::keyboard::KeyCode;

/// Turns raw device motion into look deltas.
///
/// The first sample after creation or `reset` is dropped, so motion queued
/// while the cursor was being grabbed does not jerk the view.
#[derive(Debug, Default, Clone)]
pub struct MouseTracker {
    seeded: bool,
}

impl MouseTracker {
    /// Returns `(dx, dy)` with `dy` positive when the mouse moves up.
    pub fn delta(&mut self, motion: Vec2) -> Vec2 {
        if !self.seeded {
            self.seeded = true;
            return Vec2::ZERO;
        }
        Vec2::new(motion.x, -motion.y)
    }

    pub fn reset(&mut self) {
        self.seeded = false;
    }
}

/// Key latches and mouse motion collected between two frames.
#[derive(Debug, Default)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub quit: bool,
    mouse_delta: Vec2,
    mouse: MouseTracker,
}

impl PlayerInput {
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::ShiftLeft => self.sprint = pressed,
            KeyCode::Escape => self.quit |= pressed,
            _ => {}
        }
    }

    /// Raw pointer motion in device units, `y` growing downward.
    pub fn handle_mouse_motion(&mut self, motion: Vec2) {
        self.mouse_delta += self.mouse.delta(motion);
    }

    /// Mouse motion since the last call, in pixels.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Drops held keys and reseeds the mouse, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        let quit = self.quit;
        *self = Self::default();
        self.quit = quit;
    }

    pub fn wants_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_dropped() {
        let mut tracker = MouseTracker::default();
        assert_eq!(tracker.delta(Vec2::new(40.0, 3.0)), Vec2::ZERO);
        assert_eq!(tracker.delta(Vec2::new(10.0, -4.0)), Vec2::new(10.0, 4.0));
        tracker.reset();
        assert_eq!(tracker.delta(Vec2::new(7.0, 7.0)), Vec2::ZERO);
    }

    #[test]
    fn test_motion_is_not_bounded_by_a_window() {
        let mut tracker = MouseTracker::default();
        tracker.delta(Vec2::ZERO);
        // The same push keeps producing motion, as with a locked cursor.
        for _ in 0..1000 {
            assert_eq!(tracker.delta(Vec2::new(25.0, 0.0)), Vec2::new(25.0, 0.0));
        }
    }

    #[test]
    fn test_mouse_delta_accumulates_until_taken() {
        let mut input = PlayerInput::default();
        input.handle_mouse_motion(Vec2::new(1.0, 1.0));
        input.handle_mouse_motion(Vec2::new(3.0, 0.0));
        input.handle_mouse_motion(Vec2::new(2.0, -10.0));

        assert_eq!(input.take_mouse_delta(), Vec2::new(5.0, 10.0));
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);
    }

    #[test]
    fn test_key_latches() {
        let mut input = PlayerInput::default();
        input.handle_key(KeyCode::KeyW, true);
        input.handle_key(KeyCode::ShiftLeft, true);
        assert!(input.forward && input.sprint);

        input.handle_key(KeyCode::KeyW, false);
        assert!(!input.forward);

        input.handle_key(KeyCode::Escape, true);
        input.handle_key(KeyCode::Escape, false);
        assert!(input.wants_quit());
    }

    #[test]
    fn test_release_all_keeps_quit() {
        let mut input = PlayerInput::default();
        input.handle_key(KeyCode::KeyD, true);
        input.handle_key(KeyCode::Escape, true);
        input.handle_mouse_motion(Vec2::ZERO);
        input.handle_mouse_motion(Vec2::new(4.0, 0.0));

        input.release_all();
        assert!(!input.right);
        assert!(input.wants_quit());
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);

        // Focus regained: the first motion only reseeds.
        input.handle_mouse_motion(Vec2::new(50.0, 50.0));
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);
    }
}
