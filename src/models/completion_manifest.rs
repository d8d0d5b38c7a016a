use crate::constants::MANIFEST_FILE_NAME;
use crate::types::SheetName;
use crate::Error;
use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Completion record written after every sheet of a workbook has been written.
///
/// A workbook directory without a manifest, or whose sheets no longer match the recorded
/// digests, is considered partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionManifest {
    pub sheets: Vec<SheetDigest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDigest {
    pub name: SheetName,
    pub file_name: String,
    pub sha256: String,
}

impl CompletionManifest {
    pub fn path_in(directory: &Path) -> PathBuf {
        directory.join(MANIFEST_FILE_NAME)
    }

    /// Reads the manifest of a workbook directory, `None` if there is none or it cannot be
    /// parsed (e.g. cut short by an interrupted write).
    pub fn read(directory: &Path) -> Result<Option<Self>, Error> {
        let path = Self::path_in(directory);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        match serde_json::from_slice::<CompletionManifest>(&bytes) {
            Ok(manifest) => Ok(Some(manifest)),
            Err(err) => {
                warn!("Ignoring unreadable manifest {:?}: {}", path, err);
                Ok(None)
            }
        }
    }

    /// Writes to a temporary file first and renames it into place, so the manifest is either
    /// absent or whole.
    pub fn write(&self, directory: &Path) -> Result<(), Error> {
        let content = serde_json::to_string_pretty(self)?;
        let temp_path = directory.join(format!("{}.tmp", MANIFEST_FILE_NAME));
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, Self::path_in(directory))?;
        Ok(())
    }

    /// Checks that every recorded sheet exists with unchanged content.
    pub fn verify(&self, directory: &Path) -> Result<bool, Error> {
        for sheet in &self.sheets {
            let path = directory.join(&sheet.file_name);
            if !path.exists() {
                warn!("Sheet {:?} listed in manifest is missing", path);
                return Ok(false);
            }
            if sha256_hex(&fs::read(&path)?) != sheet.sha256 {
                warn!("Sheet {:?} does not match its recorded digest", path);
                return Ok(false);
            }
        }
        Ok(true)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
