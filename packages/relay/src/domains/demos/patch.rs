//! Header patching for Source engine demos.
//!
//! The demo header stores the server name as a fixed 260-byte,
//! NUL-padded field at byte 16. The relay rewrites that field with the
//! sponsor line so it is what demos.tf shows as the server.

use thiserror::Error;

/// Start of the server-name field in the demo header.
pub const HEADER_OFFSET: usize = 16;

/// Width of the server-name field.
pub const HEADER_LEN: usize = 260;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("demo is {len} bytes, shorter than the {required}-byte header")]
    TooShort { len: usize, required: usize },

    #[error("branding text is not ASCII: {0:?}")]
    NonAscii(String),
}

/// Sponsor line written into every relayed demo.
pub fn branding_text(hub_name: &str) -> String {
    format!("TF2PL.com {}, powered by FACEIT.com", hub_name)
}

/// Encode `text` as the fixed-width header field: truncated past
/// [`HEADER_LEN`], NUL-padded below it.
pub fn encode_header_field(text: &str) -> Result<[u8; HEADER_LEN], PatchError> {
    if !text.is_ascii() {
        return Err(PatchError::NonAscii(text.to_string()));
    }

    let mut field = [0u8; HEADER_LEN];
    let bytes = text.as_bytes();
    let n = bytes.len().min(HEADER_LEN);
    field[..n].copy_from_slice(&bytes[..n]);
    Ok(field)
}

/// Overwrite bytes `[HEADER_OFFSET, HEADER_OFFSET + HEADER_LEN)` of `demo`
/// with `text`. Everything else, including the length, is left alone.
pub fn patch_header(demo: &mut [u8], text: &str) -> Result<(), PatchError> {
    let required = HEADER_OFFSET + HEADER_LEN;
    if demo.len() < required {
        return Err(PatchError::TooShort {
            len: demo.len(),
            required,
        });
    }

    let field = encode_header_field(text)?;
    demo[HEADER_OFFSET..required].copy_from_slice(&field);
    Ok(())
}

/// Brand a decompressed demo for `hub_name`.
pub fn patch_demo(mut demo: Vec<u8>, hub_name: &str) -> Result<Vec<u8>, PatchError> {
    patch_header(&mut demo, &branding_text(hub_name))?;
    Ok(demo)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_demo(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8 + 1).collect()
    }

    #[test]
    fn test_patch_only_touches_header_field() {
        let original = sample_demo(1024);
        let patched = patch_demo(original.clone(), "Cup").unwrap();

        assert_eq!(patched.len(), original.len());
        assert_eq!(&patched[..HEADER_OFFSET], &original[..HEADER_OFFSET]);
        assert_eq!(
            &patched[HEADER_OFFSET + HEADER_LEN..],
            &original[HEADER_OFFSET + HEADER_LEN..]
        );

        let text = b"TF2PL.com Cup, powered by FACEIT.com";
        let field = &patched[HEADER_OFFSET..HEADER_OFFSET + HEADER_LEN];
        assert_eq!(&field[..text.len()], text);
        assert!(field[text.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_long_text_is_truncated() {
        let text = "x".repeat(HEADER_LEN + 40);
        let mut demo = sample_demo(300);

        patch_header(&mut demo, &text).unwrap();

        assert_eq!(demo.len(), 300);
        assert_eq!(
            &demo[HEADER_OFFSET..HEADER_OFFSET + HEADER_LEN],
            &text.as_bytes()[..HEADER_LEN]
        );
    }

    #[test]
    fn test_exact_minimum_length_is_accepted() {
        let mut demo = sample_demo(HEADER_OFFSET + HEADER_LEN);
        assert!(patch_header(&mut demo, "short").is_ok());
    }

    #[test]
    fn test_undersized_demo_is_rejected_untouched() {
        let original = sample_demo(HEADER_OFFSET + HEADER_LEN - 1);
        let mut demo = original.clone();

        let err = patch_header(&mut demo, "Cup").unwrap_err();

        assert_eq!(
            err,
            PatchError::TooShort {
                len: 275,
                required: 276
            }
        );
        assert_eq!(demo, original);
    }

    #[test]
    fn test_non_ascii_hub_name_is_rejected() {
        let err = patch_demo(sample_demo(400), "Coupe d'Été").unwrap_err();
        assert!(matches!(err, PatchError::NonAscii(_)));
    }

    #[test]
    fn test_branding_text() {
        assert_eq!(
            branding_text("Premier"),
            "TF2PL.com Premier, powered by FACEIT.com"
        );
    }
}
