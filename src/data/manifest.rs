// explicit, ordered list of school files
// format: "version=N" header, then "file.json[:sha256]" per line

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::error::DataError;

pub const MANIFEST_FILE: &str = "schools.manifest";
const MANIFEST_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub file: String,
    pub hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub version: String,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, DataError> {
        let mut version = None;
        let mut entries = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix("version=") {
                version = Some(rest.trim().to_string());
                continue;
            }

            let (file, hash) = match line.split_once(':') {
                Some((file, hash)) => (file.trim(), Some(hash.trim())),
                None => (line, None),
            };

            if file.is_empty() {
                return Err(DataError::Manifest {
                    line: idx + 1,
                    reason: "missing file name".to_string(),
                });
            }
            if let Some(hash) = hash {
                if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                    return Err(DataError::Manifest {
                        line: idx + 1,
                        reason: format!("invalid hash for {}", file),
                    });
                }
            }

            entries.push(ManifestEntry {
                file: file.to_string(),
                hash: hash.map(|h| h.to_ascii_lowercase()),
            });
        }

        let version = version.ok_or(DataError::Manifest {
            line: 1,
            reason: "missing version header".to_string(),
        })?;

        Ok(Self { version, entries })
    }

    /// read `<dir>/schools.manifest`; Ok(None) when there is none
    pub fn load(data_dir: &Path) -> Result<Option<Self>, DataError> {
        let path = data_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| DataError::io(&path, e))?;
        Self::parse(&content).map(Some)
    }

    /// build from a sorted scan of `schools_dir`, hashing every file
    pub fn generate(schools_dir: &Path) -> Result<Self, DataError> {
        let mut entries = Vec::new();
        for file in scan_school_files(schools_dir)? {
            let path = schools_dir.join(&file);
            let bytes = fs::read(&path).map_err(|e| DataError::io(&path, e))?;
            entries.push(ManifestEntry {
                file,
                hash: Some(hash_content(&bytes)),
            });
        }

        Ok(Self {
            version: MANIFEST_VERSION.to_string(),
            entries,
        })
    }

    pub fn render(&self) -> String {
        let mut content = format!("version={}\n", self.version);
        for entry in &self.entries {
            match &entry.hash {
                Some(hash) => content.push_str(&format!("{}:{}\n", entry.file, hash)),
                None => content.push_str(&format!("{}\n", entry.file)),
            }
        }
        content
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), DataError> {
        let path = data_dir.join(MANIFEST_FILE);
        fs::write(&path, self.render()).map_err(|e| DataError::io(&path, e))
    }
}

pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// `*.json` file names in `dir`, sorted so the order never depends on the filesystem
pub fn scan_school_files(dir: &Path) -> Result<Vec<String>, DataError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|e| DataError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            if let Some(name) = path.file_name() {
                files.push(name.to_string_lossy().to_string());
            }
        }
    }
    files.sort();
    Ok(files)
}
