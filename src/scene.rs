//! Hero background scene
//!
//! A glowing core sphere inside a shell of particles and two wireframe
//! icosahedra, all slowly rotating. Geometry is generated at build time and
//! embedded as JSON; `site.js` only rotates, projects and draws it.

use std::collections::HashMap;
use std::f64::consts::PI;

use rand::Rng;
use serde::Serialize;

pub const PRIMARY_COLOR: &str = "#6366f1";
pub const SECONDARY_COLOR: &str = "#8b5cf6";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to the given length. The zero vector is returned unchanged.
    pub fn with_length(&self, radius: f64) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        let k = radius / len;
        Self::new(self.x * k, self.y * k, self.z * k)
    }

    pub fn midpoint(&self, other: &Vec3) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    pub fn rotate_x(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    pub fn rotate_y(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
    }
}

/// Point on a spherical shell from spherical coordinates
pub fn spherical(radius: f64, theta: f64, phi: f64) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Particles spread uniformly over a shell of radius 2..2.5
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    pub points: Vec<Vec3>,
}

pub const PARTICLE_INNER_RADIUS: f64 = 2.0;
pub const PARTICLE_SHELL_DEPTH: f64 = 0.5;

impl ParticleField {
    pub fn generate(rng: &mut impl Rng, count: usize) -> Self {
        let points = (0..count)
            .map(|_| {
                let theta = rng.gen::<f64>() * PI * 2.0;
                // acos(2u - 1) keeps the density uniform across latitudes
                let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
                let radius = PARTICLE_INNER_RADIUS + rng.gen::<f64>() * PARTICLE_SHELL_DEPTH;
                spherical(radius, theta, phi)
            })
            .collect();
        Self { points }
    }

    /// Flattened xyz triples rounded for embedding
    pub fn flat_positions(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| [round_f32(p.x), round_f32(p.y), round_f32(p.z)])
            .collect()
    }
}

fn round_f32(v: f64) -> f32 {
    ((v * 1000.0).round() / 1000.0) as f32
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// Icosahedron mesh, optionally subdivided and pushed onto the sphere
#[derive(Debug, Clone, PartialEq)]
pub struct Icosahedron {
    pub radius: f64,
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[usize; 3]>,
}

impl Icosahedron {
    /// Each subdivision level splits every triangle into four
    pub fn new(radius: f64, detail: u32) -> Self {
        let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let mut vertices: Vec<Vec3> = [
            (-1.0, t, 0.0), (1.0, t, 0.0), (-1.0, -t, 0.0), (1.0, -t, 0.0),
            (0.0, -1.0, t), (0.0, 1.0, t), (0.0, -1.0, -t), (0.0, 1.0, -t),
            (t, 0.0, -1.0), (t, 0.0, 1.0), (-t, 0.0, -1.0), (-t, 0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| Vec3::new(x, y, z).with_length(radius))
        .collect();

        let mut faces: Vec<[usize; 3]> = ICOSAHEDRON_FACES.to_vec();

        for _ in 0..detail {
            let mut midpoints: HashMap<(usize, usize), usize> = HashMap::new();
            let mut next = Vec::with_capacity(faces.len() * 4);
            for [a, b, c] in faces {
                let ab = midpoint_index(&mut vertices, &mut midpoints, a, b, radius);
                let bc = midpoint_index(&mut vertices, &mut midpoints, b, c, radius);
                let ca = midpoint_index(&mut vertices, &mut midpoints, c, a, radius);
                next.push([a, ab, ca]);
                next.push([b, bc, ab]);
                next.push([c, ca, bc]);
                next.push([ab, bc, ca]);
            }
            faces = next;
        }

        Self { radius, vertices, faces }
    }

    /// Unique undirected edges, sorted, for wireframe rendering
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .faces
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
            .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

fn midpoint_index(
    vertices: &mut Vec<Vec3>,
    cache: &mut HashMap<(usize, usize), usize>,
    a: usize,
    b: usize,
    radius: f64,
) -> usize {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }
    let mid = vertices[a].midpoint(&vertices[b]).with_length(radius);
    vertices.push(mid);
    let idx = vertices.len() - 1;
    cache.insert(key, idx);
    idx
}

/// Perspective camera on the +z axis looking at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    pub z: f64,
    /// Vertical field of view in degrees
    pub fov: f64,
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { z: 6.0, fov: 45.0, near: 0.1 }
    }
}

/// Projected point: normalized device coordinates plus view depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl Camera {
    /// Project a world-space point. Points behind the near plane yield `None`.
    pub fn project(&self, point: Vec3, aspect: f64) -> Option<Projected> {
        let depth = self.z - point.z;
        if depth < self.near {
            return None;
        }
        let f = 1.0 / (self.fov.to_radians() / 2.0).tan();
        Some(Projected {
            x: point.x * f / (depth * aspect),
            y: point.y * f / depth,
            depth,
        })
    }
}

/// Rotation rates of each scene element, in radians per second
pub mod spin {
    /// Particle shell yaw
    pub const PARTICLES_Y: f64 = 0.05;
    /// Particle shell pitch wobble frequency and amplitude
    pub const PARTICLES_WOBBLE_FREQ: f64 = 0.03;
    pub const PARTICLES_WOBBLE_AMP: f64 = 0.1;
    pub const WIREFRAME_X: f64 = 0.05;
    pub const WIREFRAME_Y: f64 = 0.08;
    pub const CORE_X: f64 = 0.1;
    pub const CORE_Y: f64 = 0.15;
}

/// Particle shell orientation `t` seconds after mount, as (pitch, yaw)
pub fn particle_rotation(t: f64) -> (f64, f64) {
    (
        (t * spin::PARTICLES_WOBBLE_FREQ).sin() * spin::PARTICLES_WOBBLE_AMP,
        t * spin::PARTICLES_Y,
    )
}

/// Wireframe orientation `t` seconds after mount, as (pitch, yaw)
pub fn wireframe_rotation(t: f64) -> (f64, f64) {
    (t * spin::WIREFRAME_X, t * spin::WIREFRAME_Y)
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleLayer {
    pub positions: Vec<f32>,
    pub size: f64,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireframeLayer {
    pub radius: f64,
    pub vertices: Vec<f32>,
    pub edges: Vec<u32>,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoreSphere {
    pub radius: f64,
    pub color: &'static str,
    pub opacity: f64,
    pub distort: f64,
}

/// Scene description embedded in the page
#[derive(Debug, Clone, Serialize)]
pub struct SceneData {
    pub camera: Camera,
    pub core: CoreSphere,
    pub particles: ParticleLayer,
    pub wireframes: Vec<WireframeLayer>,
    pub spin: SpinRates,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpinRates {
    pub particles_y: f64,
    pub particles_wobble_freq: f64,
    pub particles_wobble_amp: f64,
    pub wireframe_x: f64,
    pub wireframe_y: f64,
    pub core_x: f64,
    pub core_y: f64,
}

fn wireframe(radius: f64, color: &'static str, opacity: f64) -> WireframeLayer {
    let mesh = Icosahedron::new(radius, 1);
    WireframeLayer {
        radius,
        vertices: mesh
            .vertices
            .iter()
            .flat_map(|v| [round_f32(v.x), round_f32(v.y), round_f32(v.z)])
            .collect(),
        edges: mesh
            .edges()
            .into_iter()
            .flat_map(|(a, b)| [a as u32, b as u32])
            .collect(),
        color,
        opacity,
    }
}

impl SceneData {
    pub fn build(rng: &mut impl Rng, particle_count: usize) -> Self {
        Self {
            camera: Camera::default(),
            core: CoreSphere {
                radius: 1.5,
                color: PRIMARY_COLOR,
                opacity: 0.8,
                distort: 0.4,
            },
            particles: ParticleLayer {
                positions: ParticleField::generate(rng, particle_count).flat_positions(),
                size: 0.02,
                color: PRIMARY_COLOR,
                opacity: 0.6,
            },
            wireframes: vec![
                wireframe(2.0, PRIMARY_COLOR, 0.3),
                wireframe(2.5, SECONDARY_COLOR, 0.15),
            ],
            spin: SpinRates {
                particles_y: spin::PARTICLES_Y,
                particles_wobble_freq: spin::PARTICLES_WOBBLE_FREQ,
                particles_wobble_amp: spin::PARTICLES_WOBBLE_AMP,
                wireframe_x: spin::WIREFRAME_X,
                wireframe_y: spin::WIREFRAME_Y,
                core_x: spin::CORE_X,
                core_y: spin::CORE_Y,
            },
        }
    }
}
