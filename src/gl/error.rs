use derive_more::*;
use super::raw;

// From EXT_framebuffer_object; absent from the 2.1 enum set the bindings are
// generated against, but drivers report it.
const INVALID_FRAMEBUFFER_OPERATION: u32 = 0x0506;

/// An error code reported by the GL error query.
///
/// The mapping is total: the six documented non-zero codes get named variants
/// whose `Display` strings are the GL names, and anything else surfaces as
/// [`GlError::Unknown`] rather than an empty description.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display)]
pub enum GlError {
    #[display(fmt = "GL_INVALID_ENUM")]
    InvalidEnum,
    #[display(fmt = "GL_INVALID_VALUE")]
    InvalidValue,
    #[display(fmt = "GL_INVALID_OPERATION")]
    InvalidOperation,
    #[display(fmt = "GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    #[display(fmt = "GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[display(fmt = "GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[display(fmt = "GL_STACK_OVERFLOW")]
    StackOverflow,
    #[display(fmt = "unknown GL error 0x{:04X}", _0)]
    Unknown(u32),
}

impl GlError {
    /// Maps a raw error code. `GL_NO_ERROR` maps to `None`.
    pub fn from_code(code: u32) -> Option<GlError> {
        match code {
            raw::NO_ERROR => None,
            raw::INVALID_ENUM => Some(GlError::InvalidEnum),
            raw::INVALID_VALUE => Some(GlError::InvalidValue),
            raw::INVALID_OPERATION => Some(GlError::InvalidOperation),
            INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
            raw::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
            raw::STACK_UNDERFLOW => Some(GlError::StackUnderflow),
            raw::STACK_OVERFLOW => Some(GlError::StackOverflow),
            other => Some(GlError::Unknown(other)),
        }
    }

    /// The documented GL name for each of the seven known codes,
    /// `GL_NO_ERROR` included. `None` for anything undocumented.
    pub fn name_for_code(code: u32) -> Option<&'static str> {
        Some(match code {
            raw::NO_ERROR => "GL_NO_ERROR",
            raw::INVALID_ENUM => "GL_INVALID_ENUM",
            raw::INVALID_VALUE => "GL_INVALID_VALUE",
            raw::INVALID_OPERATION => "GL_INVALID_OPERATION",
            INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
            raw::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
            raw::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
            raw::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
            _ => return None,
        })
    }
}

impl std::error::Error for GlError {}

/// Returns the error recorded by the most recent GL call, or `None` if the
/// error state is `GL_NO_ERROR`.
pub fn get_error() -> Option<GlError> {
    GlError::from_code(unsafe { raw::GetError() })
}

#[cfg(test)]
mod test {
    use super::GlError;

    #[test]
    fn no_error_is_absent() {
        assert_eq!(GlError::from_code(0), None);
        assert_eq!(GlError::name_for_code(0), Some("GL_NO_ERROR"));
    }

    #[test]
    fn documented_codes_map_to_their_gl_names() {
        let expected = [
            (0x0500, "GL_INVALID_ENUM"),
            (0x0501, "GL_INVALID_VALUE"),
            (0x0502, "GL_INVALID_OPERATION"),
            (0x0506, "GL_INVALID_FRAMEBUFFER_OPERATION"),
            (0x0505, "GL_OUT_OF_MEMORY"),
            (0x0504, "GL_STACK_UNDERFLOW"),
            (0x0503, "GL_STACK_OVERFLOW"),
        ];
        for (code, name) in expected {
            let error = GlError::from_code(code).unwrap();
            assert_eq!(error.to_string(), name);
            assert_eq!(GlError::name_for_code(code), Some(name));
        }
    }

    #[test]
    fn undocumented_codes_are_distinct_unknowns() {
        let error = GlError::from_code(0x1234).unwrap();
        assert_eq!(error, GlError::Unknown(0x1234));
        assert_eq!(error.to_string(), "unknown GL error 0x1234");
        assert_eq!(GlError::name_for_code(0x1234), None);
    }
}
