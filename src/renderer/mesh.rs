//! Wheel geometry
//!
//! Builds the wheel as one triangle list: base disc, colored wedges,
//! a marker dot per wedge, the hub and the outer rim. The wheel lies in
//! the XY plane and spins about +Z.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec3;

use super::vertex::{Vertex, colors, hex_color};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Wedges stand slightly proud of the base disc
const WEDGE_BEVEL: f32 = 0.05;
/// Markers float just above the wedge faces
const MARKER_LIFT: f32 = 0.05;
const HUB_EXTRA_DEPTH: f32 = 0.2;

const BASE_SEGMENTS: u32 = 64;
const WEDGE_ARC_SEGMENTS: u32 = 16;
const MARKER_SEGMENTS: u32 = 32;
const HUB_SEGMENTS: u32 = 32;
const RIM_RADIAL_SEGMENTS: u32 = 16;
const RIM_TUBULAR_SEGMENTS: u32 = 100;

const MARKER_EMISSIVE: f32 = 0.3;
const HUB_EMISSIVE: f32 = 0.3;

/// Named parts of the wheel mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Base,
    Wedge(usize),
    Marker(usize),
    Hub,
    Rim,
}

/// A vertex range belonging to one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub kind: PartKind,
    pub range: Range<u32>,
}

/// Complete wheel mesh
#[derive(Debug, Clone, Default)]
pub struct WheelMesh {
    pub vertices: Vec<Vertex>,
    pub parts: Vec<Part>,
}

impl WheelMesh {
    fn push_part(&mut self, kind: PartKind, vertices: Vec<Vertex>) {
        let start = self.vertices.len() as u32;
        self.vertices.extend(vertices);
        let end = self.vertices.len() as u32;
        self.parts.push(Part {
            kind,
            range: start..end,
        });
    }

    pub fn part(&self, kind: PartKind) -> Option<&[Vertex]> {
        self.parts
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| &self.vertices[p.range.start as usize..p.range.end as usize])
    }

    pub fn count(&self, pred: impl Fn(PartKind) -> bool) -> usize {
        self.parts.iter().filter(|p| pred(p.kind)).count()
    }
}

/// Angular extent of wedge `index`
pub fn wedge_angles(index: usize) -> (f32, f32) {
    let step = TAU / WHEEL_SEGMENTS as f32;
    (step * index as f32, step * (index + 1) as f32)
}

/// Center of the marker dot on wedge `index`
pub fn marker_center(index: usize) -> Vec3 {
    let (start, end) = wedge_angles(index);
    let mid = start + (end - start) / 2.0;
    let p = polar_to_cartesian(WHEEL_OUTER_RADIUS * WHEEL_MARKER_DISTANCE, mid);
    Vec3::new(p.x, p.y, WHEEL_DEPTH / 2.0 + WEDGE_BEVEL + MARKER_LIFT)
}

/// Build the full wheel
pub fn build_wheel() -> WheelMesh {
    let mut mesh = WheelMesh::default();
    let half = WHEEL_DEPTH / 2.0;

    mesh.push_part(
        PartKind::Base,
        cylinder(
            WHEEL_OUTER_RADIUS,
            WHEEL_DEPTH,
            BASE_SEGMENTS,
            hex_color(colors::BASE),
            0.0,
        ),
    );

    for i in 0..WHEEL_SEGMENTS {
        let (start, end) = wedge_angles(i);
        let color = hex_color(colors::SEGMENTS[i % colors::SEGMENTS.len()]);
        mesh.push_part(
            PartKind::Wedge(i),
            wedge(
                WHEEL_OUTER_RADIUS,
                start,
                end,
                -half - WEDGE_BEVEL,
                half + WEDGE_BEVEL,
                color,
            ),
        );
    }

    for i in 0..WHEEL_SEGMENTS {
        mesh.push_part(
            PartKind::Marker(i),
            disc(
                marker_center(i),
                WHEEL_MARKER_RADIUS,
                MARKER_SEGMENTS,
                hex_color(colors::MARKER),
                MARKER_EMISSIVE,
            ),
        );
    }

    mesh.push_part(
        PartKind::Hub,
        cylinder(
            WHEEL_HUB_RADIUS,
            WHEEL_DEPTH + HUB_EXTRA_DEPTH,
            HUB_SEGMENTS,
            hex_color(colors::GOLD),
            HUB_EMISSIVE,
        ),
    );

    mesh.push_part(
        PartKind::Rim,
        torus(
            WHEEL_OUTER_RADIUS,
            WHEEL_RIM_TUBE,
            RIM_RADIAL_SEGMENTS,
            RIM_TUBULAR_SEGMENTS,
            hex_color(colors::GOLD),
        ),
    );

    log::debug!(
        "Wheel mesh: {} vertices in {} parts",
        mesh.vertices.len(),
        mesh.parts.len()
    );
    mesh
}

/// Point on a circle of radius `r` in the XY plane at height `z`
#[inline]
fn ring_point(r: f32, theta: f32, z: f32) -> Vec3 {
    let p = polar_to_cartesian(r, theta);
    Vec3::new(p.x, p.y, z)
}

/// Two triangles for quad a-b-c-d (in order around the edge)
fn push_quad(
    out: &mut Vec<Vertex>,
    corners: [Vec3; 4],
    normals: [Vec3; 4],
    color: [f32; 4],
    emissive: f32,
) {
    for i in [0, 1, 2, 2, 1, 3] {
        out.push(Vertex::new(corners[i], normals[i], color, emissive));
    }
}

/// Closed cylinder about the Z axis, centered on the origin
pub fn cylinder(
    radius: f32,
    depth: f32,
    segments: u32,
    color: [f32; 4],
    emissive: f32,
) -> Vec<Vertex> {
    let half = depth / 2.0;
    let mut vertices = Vec::with_capacity((segments * 12) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let front1 = ring_point(radius, theta1, half);
        let front2 = ring_point(radius, theta2, half);
        let back1 = ring_point(radius, theta1, -half);
        let back2 = ring_point(radius, theta2, -half);

        // Caps
        for (center, a, b, normal) in [
            (Vec3::Z * half, front1, front2, Vec3::Z),
            (-Vec3::Z * half, back2, back1, -Vec3::Z),
        ] {
            vertices.push(Vertex::new(center, normal, color, emissive));
            vertices.push(Vertex::new(a, normal, color, emissive));
            vertices.push(Vertex::new(b, normal, color, emissive));
        }

        // Side
        let n1 = ring_point(1.0, theta1, 0.0);
        let n2 = ring_point(1.0, theta2, 0.0);
        push_quad(
            &mut vertices,
            [back1, back2, front1, front2],
            [n1, n2, n1, n2],
            color,
            emissive,
        );
    }

    vertices
}

/// Extruded pie slice between `theta_start` and `theta_end`
pub fn wedge(
    radius: f32,
    theta_start: f32,
    theta_end: f32,
    z_back: f32,
    z_front: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity((WEDGE_ARC_SEGMENTS * 12 + 12) as usize);

    for i in 0..WEDGE_ARC_SEGMENTS {
        let theta1 = theta_start + span * i as f32 / WEDGE_ARC_SEGMENTS as f32;
        let theta2 = theta_start + span * (i + 1) as f32 / WEDGE_ARC_SEGMENTS as f32;

        let front1 = ring_point(radius, theta1, z_front);
        let front2 = ring_point(radius, theta2, z_front);
        let back1 = ring_point(radius, theta1, z_back);
        let back2 = ring_point(radius, theta2, z_back);

        // Faces
        for (center, a, b, normal) in [
            (Vec3::Z * z_front, front1, front2, Vec3::Z),
            (Vec3::Z * z_back, back2, back1, -Vec3::Z),
        ] {
            vertices.push(Vertex::new(center, normal, color, 0.0));
            vertices.push(Vertex::new(a, normal, color, 0.0));
            vertices.push(Vertex::new(b, normal, color, 0.0));
        }

        // Outer arc
        let n1 = ring_point(1.0, theta1, 0.0);
        let n2 = ring_point(1.0, theta2, 0.0);
        push_quad(
            &mut vertices,
            [back1, back2, front1, front2],
            [n1, n2, n1, n2],
            color,
            0.0,
        );
    }

    // Radial walls at both ends
    for (theta, sign) in [(theta_start, -1.0), (theta_end, 1.0)] {
        let normal = ring_point(1.0, theta + sign * std::f32::consts::FRAC_PI_2, 0.0);
        push_quad(
            &mut vertices,
            [
                Vec3::Z * z_back,
                ring_point(radius, theta, z_back),
                Vec3::Z * z_front,
                ring_point(radius, theta, z_front),
            ],
            [normal; 4],
            color,
            0.0,
        );
    }

    vertices
}

/// Flat disc facing +Z
pub fn disc(
    center: Vec3,
    radius: f32,
    segments: u32,
    color: [f32; 4],
    emissive: f32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::new(center, Vec3::Z, color, emissive));
        vertices.push(Vertex::new(
            center + ring_point(radius, theta1, 0.0),
            Vec3::Z,
            color,
            emissive,
        ));
        vertices.push(Vertex::new(
            center + ring_point(radius, theta2, 0.0),
            Vec3::Z,
            color,
            emissive,
        ));
    }

    vertices
}

/// Torus in the XY plane centered on the origin
pub fn torus(
    major_radius: f32,
    tube_radius: f32,
    radial_segments: u32,
    tubular_segments: u32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((radial_segments * tubular_segments * 6) as usize);

    // (position, normal) at tube angle v around ring angle u
    let sample = |u: f32, v: f32| {
        let normal = Vec3::new(v.cos() * u.cos(), v.cos() * u.sin(), v.sin());
        let center = ring_point(major_radius, u, 0.0);
        (center + normal * tube_radius, normal)
    };

    for j in 0..tubular_segments {
        let u1 = (j as f32 / tubular_segments as f32) * TAU;
        let u2 = ((j + 1) as f32 / tubular_segments as f32) * TAU;
        for i in 0..radial_segments {
            let v1 = (i as f32 / radial_segments as f32) * TAU;
            let v2 = ((i + 1) as f32 / radial_segments as f32) * TAU;

            let (p0, n0) = sample(u1, v1);
            let (p1, n1) = sample(u2, v1);
            let (p2, n2) = sample(u1, v2);
            let (p3, n3) = sample(u2, v2);
            push_quad(&mut vertices, [p0, p1, p2, p3], [n0, n1, n2, n3], color, 0.0);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(v: &Vertex) -> Vec3 {
        Vec3::from_array(v.position)
    }

    #[test]
    fn test_wheel_has_every_part() {
        let mesh = build_wheel();
        assert_eq!(mesh.count(|k| matches!(k, PartKind::Wedge(_))), WHEEL_SEGMENTS);
        assert_eq!(mesh.count(|k| matches!(k, PartKind::Marker(_))), WHEEL_SEGMENTS);
        assert_eq!(mesh.count(|k| k == PartKind::Base), 1);
        assert_eq!(mesh.count(|k| k == PartKind::Hub), 1);
        assert_eq!(mesh.count(|k| k == PartKind::Rim), 1);
        assert_eq!(mesh.vertices.len() % 3, 0);
    }

    #[test]
    fn test_wedges_tile_the_circle() {
        let (first_start, _) = wedge_angles(0);
        let (_, last_end) = wedge_angles(WHEEL_SEGMENTS - 1);
        assert_eq!(first_start, 0.0);
        assert!((last_end - TAU).abs() < 1e-5);
        for i in 1..WHEEL_SEGMENTS {
            assert_eq!(wedge_angles(i - 1).1, wedge_angles(i).0);
        }
    }

    #[test]
    fn test_wedge_stays_within_its_sector() {
        let mesh = build_wheel();
        let (start, end) = wedge_angles(2);
        for v in mesh.part(PartKind::Wedge(2)).unwrap() {
            let p = pos(v);
            assert!(p.truncate().length() <= WHEEL_OUTER_RADIUS + 1e-4);
            if p.truncate().length() > 1e-3 {
                let theta = p.y.atan2(p.x).rem_euclid(TAU);
                assert!(theta >= start - 1e-4 && theta <= end + 1e-4);
            }
        }
    }

    #[test]
    fn test_markers_sit_at_seventy_percent() {
        for i in 0..WHEEL_SEGMENTS {
            let c = marker_center(i);
            let r = c.truncate().length();
            assert!((r - WHEEL_OUTER_RADIUS * 0.7).abs() < 1e-4);

            let (start, end) = wedge_angles(i);
            let theta = c.y.atan2(c.x).rem_euclid(TAU);
            assert!((theta - (start + end) / 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rim_hugs_outer_radius() {
        let mesh = build_wheel();
        for v in mesh.part(PartKind::Rim).unwrap() {
            let p = pos(v);
            let ring_dist = Vec3::new(p.x, p.y, 0.0).length() - WHEEL_OUTER_RADIUS;
            let tube = (ring_dist * ring_dist + p.z * p.z).sqrt();
            assert!((tube - WHEEL_RIM_TUBE).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_normals_are_unit() {
        for v in cylinder(1.0, 0.5, 8, [1.0; 4], 0.0) {
            assert!((Vec3::from_array(v.normal).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_hub_is_emissive_gold() {
        let mesh = build_wheel();
        let hub = mesh.part(PartKind::Hub).unwrap();
        assert!(hub.iter().all(|v| v.emissive > 0.0));
        assert!(hub.iter().all(|v| v.color == hex_color(colors::GOLD)));
    }
}
