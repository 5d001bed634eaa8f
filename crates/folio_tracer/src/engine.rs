//! Top-level renderer.
//!
//! One primary ray per pixel, no bounces:
//! - Camera ray through the pixel center
//! - Nearest hit across the scene
//! - Ambient + Lambertian shading, or the background on a miss

use std::time::Instant;

use thiserror::Error;

use crate::{color_to_rgb8, Camera, Color, Scene, ShadingConfig};
use folio_core::SceneDescription;

/// Errors that can occur while rendering.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Pixel buffer has {actual} bytes, expected {expected} (width * height * 3)")]
    BufferSize { expected: usize, actual: usize },
}

/// 8-bit RGB output image, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGB, pixel (x, y) at `(y * width + x) * 3`
    pub pixels: Vec<u8>,
}

impl ImageBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; byte_len(width, height)],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = pixel_offset(self.width, x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Consume the buffer and return the raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    (y as usize * width as usize + x as usize) * 3
}

/// Owns a scene and a camera and turns them into pixels.
#[derive(Debug, Clone)]
pub struct RayTracingEngine {
    scene: Scene,
    camera: Camera,
    shading: ShadingConfig,
}

impl RayTracingEngine {
    /// Create an engine with default shading.
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self {
            scene,
            camera,
            shading: ShadingConfig::default(),
        }
    }

    /// Build the scene and camera from a description.
    pub fn from_description(description: &SceneDescription) -> Self {
        Self::new(
            Scene::from_description(description),
            Camera::from_description(&description.camera),
        )
    }

    /// Replace the shading configuration.
    pub fn with_shading(mut self, shading: ShadingConfig) -> Self {
        self.shading = shading;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn shading(&self) -> &ShadingConfig {
        &self.shading
    }

    /// Compute the color of pixel (x, y).
    pub fn render_pixel(&self, x: u32, y: u32) -> Color {
        let ray = self.camera.generate_ray(x, y);

        match self.scene.trace_ray(&ray) {
            Some(hit) => self.shading.shade(&hit),
            None => self.scene.background(),
        }
    }

    /// Render every pixel into a caller-provided RGB buffer.
    ///
    /// The buffer must hold exactly `width * height * 3` bytes.
    pub fn render_into(&self, buffer: &mut [u8]) -> Result<(), RenderError> {
        let width = self.camera.width();
        let height = self.camera.height();

        let expected = byte_len(width, height);
        if buffer.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }

        log::info!(
            "Rendering {}x{} ({} shapes)",
            width,
            height,
            self.scene.shape_count()
        );
        let start = Instant::now();

        for y in 0..height {
            for x in 0..width {
                let rgb = color_to_rgb8(self.render_pixel(x, y));
                let i = pixel_offset(width, x, y);
                buffer[i..i + 3].copy_from_slice(&rgb);
            }
        }

        log::info!("Rendered in {:?}", start.elapsed());
        Ok(())
    }

    /// Render the full image into a new buffer.
    pub fn render(&self) -> ImageBuffer {
        let mut image = ImageBuffer::new(self.camera.width(), self.camera.height());
        // Sized from the camera, so the length always matches
        if let Err(e) = self.render_into(&mut image.pixels) {
            log::error!("Render failed: {}", e);
        }
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Vec3};

    const BACKGROUND: Color = Color::new(0.1, 0.1, 0.15);

    fn single_sphere_engine(width: u32, height: u32, albedo: Color) -> RayTracingEngine {
        let mut scene = Scene::new(BACKGROUND);
        scene.add_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::new(albedo));

        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, width, height);
        RayTracingEngine::new(scene, camera)
    }

    #[test]
    fn test_center_pixel_scenario() {
        let albedo = Color::new(0.2, 0.2, 0.8);
        let engine = single_sphere_engine(800, 600, albedo);

        let ray = engine.camera().generate_ray(400, 300);
        let hit = engine.scene().trace_ray(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 0.01, "t = {}", hit.t);

        let color = engine.render_pixel(400, 300);
        // Lambertian term is neither zero nor maximal here
        assert!(color.z > BACKGROUND.z && color.z < albedo.z);
        assert!(color.x > 0.3 * albedo.x && color.x < albedo.x);
        assert_ne!(color, BACKGROUND);
        assert_ne!(color, albedo);
    }

    #[test]
    fn test_miss_returns_background_exactly() {
        let engine = single_sphere_engine(800, 600, Color::ONE);
        // Corner pixel looks well outside the sphere
        assert_eq!(engine.render_pixel(0, 0), BACKGROUND);
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y, 60.0, 4, 3);
        let engine = RayTracingEngine::new(Scene::new(Color::new(1.0, 0.0, 0.5)), camera);

        let image = engine.render();
        assert_eq!(image.pixels.len(), 4 * 3 * 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(image.get(x, y), [255, 0, 127]);
            }
        }
    }

    #[test]
    fn test_render_into_layout() {
        let engine = single_sphere_engine(40, 30, Color::new(0.9, 0.9, 0.9));
        let mut buffer = vec![0u8; 40 * 30 * 3];
        engine.render_into(&mut buffer).unwrap();

        for (x, y) in [(0, 0), (20, 15), (39, 29), (5, 17)] {
            let i = ((y * 40 + x) * 3) as usize;
            let expected = color_to_rgb8(engine.render_pixel(x, y));
            assert_eq!(&buffer[i..i + 3], &expected);
        }

        // Background corner, sphere in the middle
        assert_eq!(&buffer[0..3], &color_to_rgb8(BACKGROUND));
        let center = ((15 * 40 + 20) * 3) as usize;
        assert_ne!(&buffer[center..center + 3], &color_to_rgb8(BACKGROUND));
    }

    #[test]
    fn test_render_into_rejects_wrong_size() {
        let engine = single_sphere_engine(8, 8, Color::ONE);
        let mut buffer = vec![0u8; 8 * 8 * 3 - 1];

        assert_eq!(
            engine.render_into(&mut buffer),
            Err(RenderError::BufferSize {
                expected: 192,
                actual: 191
            })
        );
    }

    #[test]
    fn test_custom_shading() {
        let engine = single_sphere_engine(9, 9, Color::ONE).with_shading(ShadingConfig {
            ambient: 1.0,
            diffuse: 0.0,
            light_direction: Vec3::Y,
        });
        assert_eq!(engine.render_pixel(4, 4), Color::ONE);
    }

    #[test]
    fn test_demo_description() {
        let engine = RayTracingEngine::from_description(&SceneDescription::demo());
        assert_eq!(engine.scene().shape_count(), 4);

        // Center pixel lands on the blue sphere
        let color = engine.render_pixel(400, 300);
        assert!(color.z > color.x && color.z > color.y);

        // Left and right quarter pixels land on the red and green spheres
        let left = engine.render_pixel(200, 300);
        assert!(left.x > left.y && left.x > left.z);
        let right = engine.render_pixel(600, 300);
        assert!(right.y > right.x && right.y > right.z);
    }
}
