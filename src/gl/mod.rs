use std::os::raw::c_void;
use bitflags::bitflags;
use crate::Color;

mod draw;
mod error;
mod texture;

pub use draw::*;
pub use error::*;
pub use texture::*;

#[allow(non_upper_case_globals, non_snake_case, non_camel_case_types, unused)]
pub(crate) mod raw {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

/// Installs the function-pointer loader for every binding in this module.
/// Must run on the thread whose GL context is current, before any other call.
pub fn load_with<F>(loader: F)
where
    F: FnMut(&'static str) -> *const c_void,
{
    raw::load_with(loader);
}

/// Sets the color used to clear the color buffer.
pub fn clear_color(color: Color) {
    unsafe { raw::ClearColor(color.r, color.g, color.b, color.a) }
}

bitflags! {
    /// Selects which buffers [`clear`] clears.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub struct ClearFlags: u32 {
        const COLOR = raw::COLOR_BUFFER_BIT;
        const DEPTH = raw::DEPTH_BUFFER_BIT;
    }
}

/// Clears the buffers selected by the flags.
pub fn clear(flags: ClearFlags) {
    unsafe { raw::Clear(flags.bits()) }
}

/// Sets the viewport rectangle, in pixels.
pub fn viewport(x: i32, y: i32, width: u32, height: u32) {
    unsafe { raw::Viewport(x, y, width as i32, height as i32) }
}

/// Server-side capability toggled with [`enable`] / [`disable`].
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Capability {
    Texture2d = raw::TEXTURE_2D,
    Blend = raw::BLEND,
}

pub fn enable(capability: Capability) {
    unsafe { raw::Enable(capability as u32) }
}

pub fn disable(capability: Capability) {
    unsafe { raw::Disable(capability as u32) }
}

/// Pixel-arithmetic factors for [`blend_func`].
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BlendFactor {
    Zero = raw::ZERO,
    One = raw::ONE,
    SrcAlpha = raw::SRC_ALPHA,
    OneMinusSrcAlpha = raw::ONE_MINUS_SRC_ALPHA,
}

/// Sets how incoming fragments combine with the framebuffer.
pub fn blend_func(src: BlendFactor, dst: BlendFactor) {
    unsafe { raw::BlendFunc(src as u32, dst as u32) }
}

#[cfg(test)]
mod test {
    use super::ClearFlags;

    #[test]
    fn clear_flags_match_gl_constants() {
        assert_eq!(ClearFlags::COLOR.bits(), 0x0000_4000);
        assert_eq!(ClearFlags::DEPTH.bits(), 0x0000_0100);
    }

    #[test]
    fn clear_flags_union_is_a_bitmask() {
        let both = ClearFlags::COLOR | ClearFlags::DEPTH;
        assert_eq!(both.bits(), 0x0000_4100);
        assert!(both.contains(ClearFlags::COLOR));
        assert!(both.contains(ClearFlags::DEPTH));
    }
}
