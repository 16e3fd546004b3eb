//! Generic JSON persistence helpers for ~/.flappberry/ files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappberry/ directory path, creating it if needed.
pub fn flappberry_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappberry");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flappberry/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flappberry_dir()?.join(filename))
}

/// Load a JSON file from ~/.flappberry/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    match save_path(filename) {
        Ok(path) => load_json_from_or_default(&path),
        Err(_) => T::default(),
    }
}

/// Load JSON from an explicit path, returning `T::default()` if missing or invalid.
pub fn load_json_from_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to an explicit path.
pub fn save_json_to<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let val: Vec<String> = load_json_from_or_default(&dir.path().join("nonexistent.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_invalid_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let val: Vec<u32> = load_json_from_or_default(&path);
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persistence_test.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json_to(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_from_or_default(&path);
        assert_eq!(loaded, data);
    }
}
