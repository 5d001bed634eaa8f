//! Pinhole camera for primary ray generation.

use crate::Ray;
use folio_core::CameraDescription;
use folio_math::{Vec3, Vec3Ext};

/// Pinhole camera with a vertical field of view.
///
/// The view basis is computed once at construction; the camera is
/// immutable afterwards, so `generate_ray` is a pure function of the pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    position: Vec3,
    target: Vec3,
    fov: f32, // Vertical field of view in degrees

    // Image settings
    width: u32,
    height: u32,

    // Cached basis and projection
    forward: Vec3,
    right: Vec3,
    true_up: Vec3,
    aspect: f32,
    scale: f32,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, target: Vec3, up: Vec3, fov: f32, width: u32, height: u32) -> Self {
        let forward = (target - position).normalize_guarded();
        let right = forward.cross(up).normalize_guarded();
        let true_up = right.cross(forward).normalize_guarded();

        Self {
            position,
            target,
            fov,
            width,
            height,
            forward,
            right,
            true_up,
            aspect: width as f32 / height as f32,
            scale: (fov * 0.5).to_radians().tan(),
        }
    }

    /// Build a camera from a description.
    pub fn from_description(description: &CameraDescription) -> Self {
        Self::new(
            description.position,
            description.target,
            description.up,
            description.fov,
            description.width,
            description.height,
        )
    }

    /// Generate the ray through the center of pixel (x, y).
    ///
    /// Row 0 is the top of the image.
    pub fn generate_ray(&self, x: u32, y: u32) -> Ray {
        let px = (2.0 * (x as f32 + 0.5) / self.width as f32 - 1.0) * self.aspect * self.scale;
        let py = (1.0 - 2.0 * (y as f32 + 0.5) / self.height as f32) * self.scale;

        let direction = (self.forward + self.right * px + self.true_up * py).normalize_guarded();
        Ray::new(self.position, direction)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Unit right vector of the view basis.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector of the view basis, orthogonal to `forward`.
    ///
    /// Not necessarily equal to the `up` hint passed at construction.
    pub fn up(&self) -> Vec3 {
        self.true_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z(width: u32, height: u32) -> Camera {
        Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0, width, height)
    }

    #[test]
    fn test_camera_basis() {
        let camera = looking_down_z(100, 100);

        assert!((camera.forward() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((camera.right() - Vec3::X).length() < 1e-6);
        assert!((camera.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthonormal_for_skewed_up() {
        let camera = Camera::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-2.0, 0.5, -4.0),
            Vec3::new(0.3, 1.0, 0.2),
            45.0,
            320,
            240,
        );

        let (f, r, u) = (camera.forward(), camera.right(), camera.up());
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!(r.dot(u).abs() < 1e-5);
        assert!((r.cross(u) - (-f)).length() < 1e-5);
    }

    #[test]
    fn test_center_ray_is_forward() {
        // Odd size so the center pixel's center is the exact image center
        let camera = looking_down_z(101, 101);
        let ray = camera.generate_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - camera.forward()).length() < 1e-6);
    }

    #[test]
    fn test_edge_rays_follow_right_vector() {
        let camera = looking_down_z(101, 101);

        let left = camera.generate_ray(0, 50);
        let right = camera.generate_ray(100, 50);

        assert!(left.direction().dot(camera.right()) < 0.0);
        assert!(right.direction().dot(camera.right()) > 0.0);
        // Mirror images of each other
        assert!((left.direction().x + right.direction().x).abs() < 1e-6);
        assert!((left.direction().z - right.direction().z).abs() < 1e-6);
    }

    #[test]
    fn test_top_row_points_up() {
        let camera = looking_down_z(64, 48);

        assert!(camera.generate_ray(32, 0).direction().y > 0.0);
        assert!(camera.generate_ray(32, 47).direction().y < 0.0);
    }

    #[test]
    fn test_rays_are_unit_and_deterministic() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, 800, 600);

        for (x, y) in [(0, 0), (799, 599), (400, 300), (123, 456)] {
            let a = camera.generate_ray(x, y);
            let b = camera.generate_ray(x, y);
            assert_eq!(a, b);
            assert!((a.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_from_description() {
        let description = CameraDescription::default();
        let camera = Camera::from_description(&description);
        assert_eq!(camera.width(), 800);
        assert_eq!(camera.height(), 600);
        assert_eq!(camera.fov(), 60.0);
        assert_eq!(camera.target(), description.target);
    }
}
