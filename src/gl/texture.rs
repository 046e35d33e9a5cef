use std::ptr;
use super::raw;

/// The name of a texture object, owned and life-cycled by the GL.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Texture(u32);

impl Texture {
    /// Raw GL name.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Binds the texture to a texturing target.
    pub fn bind(self, target: TextureTarget) {
        unsafe { raw::BindTexture(target as u32, self.0) }
    }

    /// Deletes the texture name.
    pub fn delete(self) {
        unsafe { raw::DeleteTextures(1, &self.0) }
    }
}

/// Generates `n` texture names. A zero count issues no GL call.
pub fn gen_textures(n: usize) -> Vec<Texture> {
    if n == 0 {
        return Vec::new();
    }
    let mut names = vec![0u32; n];
    unsafe { raw::GenTextures(n as i32, names.as_mut_ptr()) };
    names.into_iter().map(Texture).collect()
}

/// Deletes named textures. An empty slice issues no GL call.
pub fn delete_textures(textures: &[Texture]) {
    if textures.is_empty() {
        return;
    }
    // Texture is repr(transparent) over its GL name.
    unsafe { raw::DeleteTextures(textures.len() as i32, textures.as_ptr().cast()) };
}

/// A texturing target to which a texture can be bound.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextureTarget {
    Texture2d = raw::TEXTURE_2D,
}

/// Selects the active texture unit.
/// Units count up from zero; at least 80 are guaranteed by the GL.
pub fn active_texture(unit: u32) {
    unsafe { raw::ActiveTexture(raw::TEXTURE0 + unit) }
}

/// How texture data is laid out and interpreted.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TextureFormat {
    Alpha = raw::ALPHA,
    Luminance = raw::LUMINANCE,
    LuminanceAlpha = raw::LUMINANCE_ALPHA,
    Rgb = raw::RGB,
    Rgba = raw::RGBA,
}

/// Specifies a two-dimensional texture image with unsigned-byte data.
/// An empty slice allocates storage without supplying data.
pub fn tex_image_2d(
    target: TextureTarget,
    level: i32,
    internal_format: TextureFormat,
    width: u32,
    height: u32,
    border: i32,
    format: TextureFormat,
    data: &[u8],
) {
    let pixels = if data.is_empty() {
        ptr::null()
    } else {
        data.as_ptr().cast()
    };
    unsafe {
        raw::TexImage2D(
            target as u32,
            level,
            internal_format as u32 as i32,
            width as i32,
            height as i32,
            border,
            format as u32,
            raw::UNSIGNED_BYTE,
            pixels,
        )
    }
}

/// The name of a texture parameter.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TexParam {
    MinFilter = raw::TEXTURE_MIN_FILTER,
    MagFilter = raw::TEXTURE_MAG_FILTER,
}

/// Texture filter modes.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FilterMode {
    Nearest = raw::NEAREST,
    Linear = raw::LINEAR,
}

/// A texture parameter value.
///
/// Constructible from exactly the numeric types the fixed-function parameter
/// calls accept, plus [`FilterMode`] for the filter parameters. The variant
/// decides the call family: float values go through `glTexParameterf`,
/// integer values through `glTexParameteri`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum TexParamValue {
    Float(f32),
    Double(f64),
    Int(i32),
    Isize(isize),
}

impl From<f32> for TexParamValue {
    fn from(value: f32) -> Self {
        TexParamValue::Float(value)
    }
}

impl From<f64> for TexParamValue {
    fn from(value: f64) -> Self {
        TexParamValue::Double(value)
    }
}

impl From<i32> for TexParamValue {
    fn from(value: i32) -> Self {
        TexParamValue::Int(value)
    }
}

impl From<isize> for TexParamValue {
    fn from(value: isize) -> Self {
        TexParamValue::Isize(value)
    }
}

impl From<FilterMode> for TexParamValue {
    fn from(mode: FilterMode) -> Self {
        TexParamValue::Int(mode as u32 as i32)
    }
}

/// Sets a texture parameter.
pub fn tex_parameter(target: TextureTarget, param: TexParam, value: impl Into<TexParamValue>) {
    match value.into() {
        TexParamValue::Float(v) => unsafe {
            raw::TexParameterf(target as u32, param as u32, v)
        },
        TexParamValue::Double(v) => unsafe {
            raw::TexParameterf(target as u32, param as u32, v as f32)
        },
        TexParamValue::Int(v) => unsafe {
            raw::TexParameteri(target as u32, param as u32, v)
        },
        TexParamValue::Isize(v) => unsafe {
            raw::TexParameteri(target as u32, param as u32, v as i32)
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Passes without a GL context: the empty-input paths never reach the
    // (unloaded) function pointers.
    #[test]
    fn empty_deletes_and_gens_issue_no_call() {
        delete_textures(&[]);
        assert!(gen_textures(0).is_empty());
    }

    #[test]
    fn param_values_convert_from_the_four_numeric_types() {
        assert_eq!(TexParamValue::from(1.5f32), TexParamValue::Float(1.5));
        assert_eq!(TexParamValue::from(2.5f64), TexParamValue::Double(2.5));
        assert_eq!(TexParamValue::from(7i32), TexParamValue::Int(7));
        assert_eq!(TexParamValue::from(9isize), TexParamValue::Isize(9));
    }

    #[test]
    fn filter_modes_carry_their_gl_values() {
        assert_eq!(FilterMode::Nearest as u32, 0x2600);
        assert_eq!(FilterMode::Linear as u32, 0x2601);
        assert_eq!(
            TexParamValue::from(FilterMode::Linear),
            TexParamValue::Int(0x2601)
        );
    }
}
