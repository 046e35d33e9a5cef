use crate::Color;
use super::raw;

/// Matrix stack targeted by subsequent matrix calls.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MatrixMode {
    ModelView = raw::MODELVIEW,
    Projection = raw::PROJECTION,
    Texture = raw::TEXTURE,
}

pub fn matrix_mode(mode: MatrixMode) {
    unsafe { raw::MatrixMode(mode as u32) }
}

/// Replaces the current matrix with the identity.
pub fn load_identity() {
    unsafe { raw::LoadIdentity() }
}

/// Multiplies the current matrix by an orthographic projection.
pub fn ortho(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) {
    unsafe { raw::Ortho(left, right, bottom, top, near, far) }
}

/// Primitive kind accepted by [`begin`].
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DrawMode {
    Points = raw::POINTS,
    Lines = raw::LINES,
    LineStrip = raw::LINE_STRIP,
    Triangles = raw::TRIANGLES,
    TriangleStrip = raw::TRIANGLE_STRIP,
    Quads = raw::QUADS,
}

/// Begins an immediate-mode vertex sequence. Must be matched by [`end`].
pub fn begin(mode: DrawMode) {
    unsafe { raw::Begin(mode as u32) }
}

pub fn end() {
    unsafe { raw::End() }
}

/// Submits a 2D vertex.
pub fn vertex2(x: f32, y: f32) {
    unsafe { raw::Vertex2f(x, y) }
}

/// Sets the texture coordinate carried by subsequent vertices.
pub fn tex_coord2(u: f32, v: f32) {
    unsafe { raw::TexCoord2f(u, v) }
}

/// Sets the current color.
pub fn color4(color: Color) {
    unsafe { raw::Color4f(color.r, color.g, color.b, color.a) }
}

/// Sets the rasterized width of lines, in pixels.
pub fn line_width(width: f32) {
    unsafe { raw::LineWidth(width) }
}
