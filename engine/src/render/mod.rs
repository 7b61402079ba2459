//! Render Module
//!
//! Renderer-agnostic draw data. Bodies, the ship and effects implement
//! [`Drawable`] and fill a [`DrawList`] of GPU-ready instances.

pub mod draw_data;

pub use draw_data::{
    CircleInstance, DrawList, Drawable, ShipVertex, highlight, hsv_to_rgb, pack_color,
    pack_color_f32, unpack_color,
};
