//! Buffers and conversions shared by every wrapper.
//!
//! The native library reports diagnostics through caller-owned `char[AS_MAXCH]`
//! buffers and reads/rewrites object names in `char[SE_MAX_STNAME]` buffers.
//! Both are plain stack arrays here; reads stop at the first NUL or at the
//! buffer end, whichever comes first.

use crate::error::{Error, Result};
use log::warn;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use swisseph_sys as ffi;

fn bounded_string(buf: &[c_char]) -> String {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Diagnostic buffer passed as `serr`
pub(crate) struct ErrorBuffer([c_char; ffi::AS_MAXCH]);

impl ErrorBuffer {
    pub(crate) fn new() -> Self {
        Self([0; ffi::AS_MAXCH])
    }

    #[cfg(test)]
    pub(crate) fn with_text(text: &str) -> Self {
        let mut buf = Self::new();
        for (dst, &src) in buf.0.iter_mut().zip(text.as_bytes()) {
            *dst = src as c_char;
        }
        buf
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_char {
        self.0.as_mut_ptr()
    }

    /// Buffer contents, empty if the library wrote nothing
    pub(crate) fn text(&self) -> String {
        bounded_string(&self.0)
    }

    /// Buffer contents, `None` if the library wrote nothing
    pub(crate) fn message(&self) -> Option<String> {
        let text = self.text();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Map a native status flag to a `Result`.
    ///
    /// Negative flags become [`Error::Native`] with the buffer text verbatim.
    /// On success, any text the library left in the buffer is returned as a
    /// warning and logged.
    pub(crate) fn check(&self, context: &str, flag: i32) -> Result<Option<String>> {
        if flag < 0 {
            return Err(Error::native(flag, self.text()));
        }
        let warning = self.message();
        if let Some(msg) = &warning {
            warn!("{}: {}", context, msg);
        }
        Ok(warning)
    }
}

/// In/out name buffer for star and object names
pub(crate) struct NameBuffer([c_char; ffi::SE_MAX_STNAME]);

impl NameBuffer {
    pub(crate) fn new(name: &str) -> Result<Self> {
        if name.as_bytes().contains(&0) {
            return Err(Error::InvalidInput(format!(
                "Name contains null bytes: {:?}",
                name
            )));
        }
        // One byte is reserved for the terminator
        if name.len() >= ffi::SE_MAX_STNAME {
            return Err(Error::InvalidInput(format!(
                "Name is {} bytes long, the native buffer holds at most {}",
                name.len(),
                ffi::SE_MAX_STNAME - 1
            )));
        }
        let mut buf = [0 as c_char; ffi::SE_MAX_STNAME];
        for (dst, &src) in buf.iter_mut().zip(name.as_bytes()) {
            *dst = src as c_char;
        }
        Ok(Self(buf))
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_char {
        self.0.as_mut_ptr()
    }

    /// The (possibly rewritten) name
    pub(crate) fn text(&self) -> String {
        bounded_string(&self.0)
    }
}

/// Scratch buffer for functions that format into a caller string
pub(crate) struct TextBuffer([c_char; ffi::AS_MAXCH]);

impl TextBuffer {
    pub(crate) fn new() -> Self {
        Self([0; ffi::AS_MAXCH])
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut c_char {
        self.0.as_mut_ptr()
    }

    pub(crate) fn text(&self) -> String {
        bounded_string(&self.0)
    }
}

/// Convert a Rust string for a `const char *` parameter
pub(crate) fn c_string(value: &str, what: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::InvalidInput(format!("{} contains null bytes", what)))
}

/// Copy a library-owned static string, empty for NULL
///
/// # Safety
///
/// `ptr` must be NULL or point to a NUL-terminated string that stays valid
/// for the duration of this call.
pub(crate) unsafe fn static_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        CStr::from_ptr(ptr).to_string_lossy().into_owned()
    }
}

/// The native `backward` argument
pub(crate) fn direction_flag(backward: bool) -> i32 {
    if backward {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_buffer_empty_is_none() {
        let buf = ErrorBuffer::new();
        assert_eq!(buf.message(), None);
        assert!(buf.check("test", 0).unwrap().is_none());
    }

    #[test]
    fn test_error_buffer_negative_flag_is_error() {
        let buf = ErrorBuffer::with_text("illegal planet number");
        let err = buf.check("test", -1).unwrap_err();
        assert_eq!(err.code(), Some(-1));
        assert_eq!(err.native_message(), Some("illegal planet number"));
    }

    #[test]
    fn test_error_buffer_warning_on_success() {
        let buf = ErrorBuffer::with_text("using Moshier eph.");
        let warning = buf.check("test", 4).unwrap();
        assert_eq!(warning.as_deref(), Some("using Moshier eph."));
    }

    #[test]
    fn test_name_buffer_round_trip() {
        let buf = NameBuffer::new("Aldebaran").unwrap();
        assert_eq!(buf.text(), "Aldebaran");
    }

    #[test]
    fn test_name_buffer_rejects_nul_and_overflow() {
        assert!(matches!(
            NameBuffer::new("Alde\0baran"),
            Err(Error::InvalidInput(_))
        ));
        let long = "x".repeat(ffi::SE_MAX_STNAME);
        assert!(matches!(NameBuffer::new(&long), Err(Error::InvalidInput(_))));
        let fits = "x".repeat(ffi::SE_MAX_STNAME - 1);
        assert!(NameBuffer::new(&fits).is_ok());
    }

    #[test]
    fn test_unterminated_buffer_is_bounded() {
        let buf = [b'a' as c_char; 8];
        assert_eq!(bounded_string(&buf), "aaaaaaaa");
    }

    #[test]
    fn test_c_string_rejects_nul() {
        assert!(c_string("/tmp/ephe", "Path").is_ok());
        assert!(c_string("/tmp/\0ephe", "Path").is_err());
    }

    #[test]
    fn test_static_string_null() {
        assert_eq!(unsafe { static_string(std::ptr::null()) }, "");
    }
}
