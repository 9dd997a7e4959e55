//! Per-frame uniforms: camera, wheel transform and lights

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::camera::Camera;
use super::vertex::{colors, hex_color};

const AMBIENT_INTENSITY: f32 = 0.6;
const KEY_LIGHT_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);
const KEY_LIGHT_INTENSITY: f32 = 0.8;
const FILL_LIGHT_POS: Vec3 = Vec3::new(-5.0, 3.0, 5.0);
const FILL_LIGHT_INTENSITY: f32 = 0.4;
const POINT_LIGHT_POS: Vec3 = Vec3::new(0.0, 0.0, 5.0);
const POINT_LIGHT_RANGE: f32 = 100.0;
const POINT_LIGHT_INTENSITY: f32 = 1.0;

// ============================================================================
// GPU DATA STRUCTURES (must match wheel.wgsl)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Globals {
    view_proj: [[f32; 4]; 4],    // offset 0
    model: [[f32; 4]; 4],        // offset 64
    camera_pos: [f32; 4],        // offset 128
    ambient: [f32; 4],           // offset 144 - rgb, intensity
    light_dirs: [[f32; 4]; 2],   // offset 160 - xyz toward light, intensity
    light_colors: [[f32; 4]; 2], // offset 192
    point_pos: [f32; 4],         // offset 224 - xyz, range
    point_color: [f32; 4],       // offset 240 - rgb, intensity
}

impl Globals {
    /// Uniforms for the wheel rotated by `orientation` about its axle
    pub fn new(camera: &Camera, orientation: f32) -> Self {
        let rgb = |hex: u32| {
            let c = hex_color(hex);
            [c[0], c[1], c[2]]
        };
        let with_w = |v: [f32; 3], w: f32| [v[0], v[1], v[2], w];
        let direction = |pos: Vec3, intensity: f32| with_w(pos.normalize().to_array(), intensity);

        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: Mat4::from_rotation_z(orientation).to_cols_array_2d(),
            camera_pos: with_w(camera.eye.to_array(), 1.0),
            ambient: with_w([1.0, 1.0, 1.0], AMBIENT_INTENSITY),
            light_dirs: [
                direction(KEY_LIGHT_POS, KEY_LIGHT_INTENSITY),
                direction(FILL_LIGHT_POS, FILL_LIGHT_INTENSITY),
            ],
            light_colors: [
                with_w(rgb(colors::KEY_LIGHT), 1.0),
                with_w(rgb(colors::FILL_LIGHT), 1.0),
            ],
            point_pos: with_w(POINT_LIGHT_POS.to_array(), POINT_LIGHT_RANGE),
            point_color: with_w(rgb(colors::POINT_LIGHT), POINT_LIGHT_INTENSITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_globals_layout() {
        assert_eq!(std::mem::size_of::<Globals>(), 256);
    }

    #[test]
    fn test_model_rotates_about_z() {
        let camera = Camera::new(640, 480);
        let g = Globals::new(&camera, std::f32::consts::FRAC_PI_2);
        let model = Mat4::from_cols_array_2d(&g.model);
        let p = model.transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_light_directions_normalized() {
        let g = Globals::new(&Camera::new(640, 480), 0.0);
        for dir in g.light_dirs {
            let len = Vec3::new(dir[0], dir[1], dir[2]).length();
            assert!((len - 1.0).abs() < 1e-5);
        }
        assert_eq!(g.light_dirs[0][3], KEY_LIGHT_INTENSITY);
        assert_eq!(g.point_pos[3], POINT_LIGHT_RANGE);
    }
}
