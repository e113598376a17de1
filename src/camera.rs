//! Orbit Camera
//!
//! Yaw/pitch/distance orbit around a look-at target, plus the screen-UV
//! to world-ray construction the picking path needs. Window-system
//! agnostic: the host feeds orbit/zoom deltas and reads the position.

use glam::Vec3;

use crate::pick::Ray;

/// Orbit camera state.
///
/// The camera sits at `distance` from `target` along the direction given
/// by `yaw` (around Y) and `pitch` (above the horizon), always looking at
/// the target.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Horizontal angle in radians.
    pub yaw: f32,
    /// Vertical angle in radians, clamped to `pitch_limits`.
    pub pitch: f32,
    /// Distance from the target in world units.
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Pitch limits (min, max) in radians.
    pub pitch_limits: (f32, f32),
    /// Orbit sensitivity in radians per unit of input delta.
    pub look_sensitivity: f32,
    /// Zoom sensitivity in world units per scroll line.
    pub zoom_sensitivity: f32,
    /// Distance limits (min, max).
    pub distance_limits: (f32, f32),
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            yaw: 0.35,
            pitch: 0.5,
            distance: 24.0,
            fov: 45f32.to_radians(),
            aspect: 16.0 / 9.0,
            pitch_limits: (-1.55, 1.55),
            look_sensitivity: 0.005,
            zoom_sensitivity: 1.5,
            distance_limits: (2.0, 200.0),
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera position in world space, derived from the orbit angles.
    pub fn position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        ) * self.distance;
        self.target + offset
    }

    /// Apply an orbit delta (e.g. from mouse drag).
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.look_sensitivity;
        self.pitch = (self.pitch + dy * self.look_sensitivity)
            .clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Apply a zoom delta (e.g. from the scroll wheel; positive zooms in).
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * self.zoom_sensitivity)
            .clamp(self.distance_limits.0, self.distance_limits.1);
    }

    /// Set the viewport aspect ratio on resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the world-space picking ray through a screen point.
    ///
    /// `uv` is normalized to (0..1, 0..1) with (0,0) at the bottom-left,
    /// Y increasing upward.
    pub fn screen_ray(&self, uv: (f32, f32)) -> Ray {
        let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);
        let half_fov = (self.fov * 0.5).tan();

        let position = self.position();
        let forward = (self.target - position).normalize();
        let up_world = Vec3::Y;

        // Looking straight up or down leaves no stable horizon; fall back
        // to world X as the right vector.
        let (right, up) = if forward.y.abs() > 0.999 {
            let right = Vec3::X;
            let up = forward.cross(right).normalize();
            (right, up)
        } else {
            let right = forward.cross(up_world).normalize();
            let up = right.cross(forward);
            (right, up)
        };

        let direction = (forward
            + right * ndc.0 * self.aspect * half_fov
            + up * ndc.1 * half_fov)
            .normalize();
        Ray::new(position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_on_orbit_sphere() {
        let camera = OrbitCamera::default();
        let position = camera.position();
        assert!(((position - camera.target).length() - camera.distance).abs() < 1e-4);
        // Positive pitch puts the camera above the target.
        assert!(position.y > camera.target.y);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = OrbitCamera::default();
        let ray = camera.screen_ray((0.5, 0.5));
        let to_target = (camera.target - camera.position()).normalize();
        assert!((ray.direction - to_target).length() < 1e-4);
    }

    #[test]
    fn test_screen_rays_normalized() {
        let camera = OrbitCamera::default();
        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for y in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let ray = camera.screen_ray((x, y));
                assert!((ray.direction.length() - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 10_000.0);
        assert!(camera.pitch <= camera.pitch_limits.1);
        camera.orbit(0.0, -100_000.0);
        assert!(camera.pitch >= camera.pitch_limits.0);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(10_000.0);
        assert_eq!(camera.distance, camera.distance_limits.0);
        camera.zoom(-100_000.0);
        assert_eq!(camera.distance, camera.distance_limits.1);
    }

    #[test]
    fn test_straight_down_ray_is_stable() {
        let mut camera = OrbitCamera::default();
        camera.pitch = camera.pitch_limits.1;
        let ray = camera.screen_ray((0.5, 0.5));
        assert!(ray.direction.y < -0.9);
    }
}
