//! Optional decorative logo asset.
//!
//! A missing or unreadable logo is never an error: it is logged and the
//! caller carries on without it.

use std::path::{Path, PathBuf};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Raw logo image bytes
#[derive(Clone, Debug)]
pub struct Logo {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Load the logo from disk, returning `None` on any failure
pub fn load_logo(path: &Path) -> Option<Logo> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Logo not found at {:?}: {}", path, e);
            return None;
        }
    };

    if !bytes.starts_with(&PNG_SIGNATURE) {
        tracing::warn!("Logo at {:?} is not a PNG image, skipping", path);
        return None;
    }

    tracing::debug!("Loaded logo from {:?} ({} bytes)", path, bytes.len());
    Some(Logo {
        path: path.to_path_buf(),
        bytes,
    })
}
