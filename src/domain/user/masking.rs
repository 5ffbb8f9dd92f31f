//! Reversible password masking
//!
//! Masking is standard base64 over the UTF-8 bytes. It keeps plaintext out of
//! responses and logs; it is not a hash and offers no protection.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MaskingError {
    #[error("Masked value is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Masked value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub fn mask_password(password: &str) -> String {
    STANDARD.encode(password.as_bytes())
}

pub fn unmask_password(masked: &str) -> Result<String, MaskingError> {
    let bytes = STANDARD.decode(masked)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_known_value() {
        assert_eq!(mask_password("Password123"), "UGFzc3dvcmQxMjM=");
    }

    #[test]
    fn test_unmask_restores_original() {
        for password in ["Password123", "12345678", "pässwörd-ünïcode", "with space s"] {
            let masked = mask_password(password);
            assert_ne!(masked, password);
            assert_eq!(unmask_password(&masked).unwrap(), password);
        }
    }

    #[test]
    fn test_unmask_rejects_garbage() {
        assert!(matches!(
            unmask_password("not base64!"),
            Err(MaskingError::Decode(_))
        ));
    }
}
