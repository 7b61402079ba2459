//! Draw Data - renderer-facing instance structs
//!
//! The simulation never talks to a GPU. Anything visible pushes plain
//! `bytemuck::Pod` records into a [`DrawList`], which an external renderer
//! uploads as-is with `bytemuck::cast_slice`.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::physics::{Celestial, Ship};

/// One filled circle (celestial body or flame particle).
///
/// Layout:
///   offset 0:  center (vec2<f32>) = 8 bytes
///   offset 8:  radius (f32)       = 4 bytes
///   offset 12: color (u32)        = 4 bytes, packed 0x00RRGGBB
///   Total: 16 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: u32,
}

/// One vertex of the textured ship quad.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShipVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(CircleInstance, [u8; 16]);
static_assertions::assert_eq_size!(ShipVertex, [u8; 16]);

/// Texture coordinates of the hull corners, in `local_hull_corners` order
/// (bottom-left, bottom-right, top-left, top-right).
const HULL_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Corner indices of the two ship triangles.
const SHIP_QUAD_INDICES: [usize; 6] = [0, 1, 2, 1, 2, 3];

/// Everything drawn in one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub circles: Vec<CircleInstance>,
    pub ship_vertices: Vec<ShipVertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's data, keeping the allocations.
    pub fn clear(&mut self) {
        self.circles.clear();
        self.ship_vertices.clear();
    }

    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: u32) {
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            color,
        });
    }

    /// Push a textured quad given its corners (bottom-left, bottom-right,
    /// top-left, top-right) as two triangles.
    pub fn push_quad(&mut self, corners: [Vec2; 4]) {
        self.ship_vertices.extend(SHIP_QUAD_INDICES.iter().map(|&i| ShipVertex {
            position: corners[i].to_array(),
            uv: HULL_UVS[i],
        }));
    }

    pub fn circle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }

    pub fn ship_vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.ship_vertices)
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.ship_vertices.is_empty()
    }
}

/// Anything that can emit draw data.
pub trait Drawable {
    fn draw(&self, list: &mut DrawList);
}

impl Drawable for Celestial {
    fn draw(&self, list: &mut DrawList) {
        let color = if self.landed {
            highlight(self.color)
        } else {
            self.color
        };
        list.push_circle(self.position, self.radius, color);
    }
}

impl Drawable for Ship {
    fn draw(&self, list: &mut DrawList) {
        list.push_quad(self.hull_corners(self.movement()));
    }
}

impl<T: Drawable> Drawable for [T] {
    fn draw(&self, list: &mut DrawList) {
        for item in self {
            item.draw(list);
        }
    }
}

/// Pack RGB color components into a single u32 value
/// Format: 0x00RRGGBB
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack a u32 color value into RGB components
#[inline]
pub fn unpack_color(packed: u32) -> (u8, u8, u8) {
    let r = ((packed >> 16) & 0xFF) as u8;
    let g = ((packed >> 8) & 0xFF) as u8;
    let b = (packed & 0xFF) as u8;
    (r, g, b)
}

/// Pack float channels in `[0, 1]`, clamping out-of-range values.
pub fn pack_color_f32(rgb: [f32; 3]) -> u32 {
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    pack_color(r, g, b)
}

/// Convert HSV (all in 0..1, hue wraps) to 8-bit RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let h_prime = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r1 + m, g1 + m, b1 + m].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Lift every channel halfway to white.
pub fn highlight(color: u32) -> u32 {
    let (r, g, b) = unpack_color(color);
    let lift = |c: u8| c + (255 - c) / 2;
    pack_color(lift(r), lift(g), lift(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Movement, ShipConfig};

    #[test]
    fn test_pack_unpack_color() {
        let packed = pack_color(0x12, 0x34, 0x56);
        assert_eq!(packed, 0x123456);
        assert_eq!(unpack_color(packed), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_pack_color_f32_clamps() {
        assert_eq!(pack_color_f32([1.5, 0.0, -1.0]), 0xFF0000);
        assert_eq!(pack_color_f32([1.0, 0.32, 0.08]), pack_color(255, 82, 20));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(0.5, 0.0, 0.5), [128, 128, 128]);
        // Hue wraps
        assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_highlight_brightens() {
        assert_eq!(highlight(0x000000), pack_color(127, 127, 127));
        assert_eq!(highlight(0xFFFFFF), 0xFFFFFF);
    }

    #[test]
    fn test_landed_celestial_draws_highlighted() {
        let mut planet = Celestial::with_radius(Vec2::new(3.0, 4.0), 50.0).unwrap().color(0x204060);
        let mut list = DrawList::new();
        planet.draw(&mut list);
        planet.landed = true;
        planet.draw(&mut list);

        assert_eq!(list.circles.len(), 2);
        assert_eq!(list.circles[0].center, [3.0, 4.0]);
        assert_eq!(list.circles[0].radius, 50.0);
        assert_eq!(list.circles[0].color, 0x204060);
        assert_eq!(list.circles[1].color, highlight(0x204060));
    }

    #[test]
    fn test_ship_draws_two_triangles() {
        let ship = Ship::new(Vec2::ZERO, &ShipConfig::default())
            .with_movement(Movement::at_rest(Vec2::new(10.0, 0.0)));
        let mut list = DrawList::new();
        ship.draw(&mut list);

        assert_eq!(list.ship_vertices.len(), 6);
        assert_eq!(list.ship_vertex_bytes().len(), 6 * 16);
        // Shared edge: vertices 1/3 and 2/4 are the same corners
        assert_eq!(list.ship_vertices[1], list.ship_vertices[3]);
        assert_eq!(list.ship_vertices[2], list.ship_vertices[4]);
        // Unrotated hull: bottom-left corner sits at center - 50
        assert_eq!(list.ship_vertices[0].position, [-40.0, -50.0]);
        assert_eq!(list.ship_vertices[5].uv, [1.0, 1.0]);
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::ZERO, 1.0, 0);
        assert!(!list.is_empty());
        list.clear();
        assert!(list.is_empty());
        assert!(list.circle_bytes().is_empty());
    }
}
