use glam::{Vec3, Vec3Swizzles};

pub const ALARM_RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const ALARM_BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
/// Seconds for one red + blue cycle.
pub const ALARM_PERIOD: f64 = 1.0;

/// Distance between two points on the floor plane, ignoring height.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    a.xz().distance(b.xz())
}

/// The siren runs while the camera stands within `radius` of `trigger_point`.
pub fn is_triggered(camera: Vec3, trigger_point: Vec3, radius: f32) -> bool {
    horizontal_distance(camera, trigger_point) < radius
}

/// Red for the first half of every period, blue for the second.
pub fn alarm_color(time: f64) -> Vec3 {
    if time.rem_euclid(ALARM_PERIOD) < ALARM_PERIOD / 2.0 {
        ALARM_RED
    } else {
        ALARM_BLUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_color_alternates() {
        assert_eq!(alarm_color(0.0), ALARM_RED);
        assert_eq!(alarm_color(0.49), ALARM_RED);
        assert_eq!(alarm_color(0.5), ALARM_BLUE);
        assert_eq!(alarm_color(0.99), ALARM_BLUE);
        assert_eq!(alarm_color(7.25), ALARM_RED);
        assert_eq!(alarm_color(1234.75), ALARM_BLUE);
    }

    #[test]
    fn test_alarm_color_is_one_of_two() {
        for step in 0..1000 {
            let color = alarm_color(step as f64 * 0.013);
            assert!(color == ALARM_RED || color == ALARM_BLUE);
        }
    }

    #[test]
    fn test_trigger_ignores_height() {
        let table = Vec3::new(0.0, -9.925, 0.0);
        assert!(is_triggered(Vec3::new(1.0, 0.3, 1.0), table, 1.5));
        assert!(!is_triggered(Vec3::new(1.5, 0.3, 0.0), table, 1.5));
        assert!(!is_triggered(Vec3::new(0.0, 0.3, -20.0), table, 3.5));
    }
}
