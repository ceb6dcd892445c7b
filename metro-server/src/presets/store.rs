use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use super::Preset;

/// Failures from the preset store.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("preset storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt preset file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed preset storage.
///
/// Each user's presets live in `<dir>/<user>.json` as a JSON array.
/// An in-memory map fronts the files; every mutation is written back
/// immediately so a restart loses nothing.
#[derive(Debug, Clone)]
pub struct PresetStore {
    dir: PathBuf,
    loaded: Arc<RwLock<HashMap<String, Vec<Preset>>>>,
}

impl PresetStore {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, PresetError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            loaded: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    fn user_path(&self, user: &str) -> PathBuf {
        self.dir.join(format!("{user}.json"))
    }

    fn read_user_file(&self, user: &str) -> Result<Vec<Preset>, PresetError> {
        let path = self.user_path(user);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents).map_err(|source| PresetError::Json { path, source })
    }

    fn write_user_file(&self, user: &str, presets: &[Preset]) -> Result<(), PresetError> {
        let path = self.user_path(user);
        if presets.is_empty() {
            match std::fs::remove_file(&path) {
                Ok(()) => return Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
        let contents =
            serde_json::to_string_pretty(presets).expect("presets always serialize to JSON");
        std::fs::write(&path, contents)?;
        Ok(())
    }

    async fn ensure_loaded(&self, user: &str) -> Result<(), PresetError> {
        {
            let loaded = self.loaded.read().await;
            if loaded.contains_key(user) {
                return Ok(());
            }
        }
        let presets = self.read_user_file(user)?;
        let mut loaded = self.loaded.write().await;
        loaded.entry(user.to_string()).or_insert(presets);
        Ok(())
    }

    /// Saves a preset, replacing any existing preset with the same name.
    pub async fn save(&self, user: &str, preset: Preset) -> Result<(), PresetError> {
        self.ensure_loaded(user).await?;
        let mut loaded = self.loaded.write().await;
        let presets = loaded.entry(user.to_string()).or_default();
        match presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => presets.push(preset),
        }
        self.write_user_file(user, presets)
    }

    /// Looks up one preset by name.
    pub async fn get(&self, user: &str, name: &str) -> Result<Option<Preset>, PresetError> {
        self.ensure_loaded(user).await?;
        let loaded = self.loaded.read().await;
        Ok(loaded
            .get(user)
            .and_then(|presets| presets.iter().find(|p| p.name == name))
            .cloned())
    }

    /// Lists all of a user's presets in insertion order.
    pub async fn list(&self, user: &str) -> Result<Vec<Preset>, PresetError> {
        self.ensure_loaded(user).await?;
        let loaded = self.loaded.read().await;
        Ok(loaded.get(user).cloned().unwrap_or_default())
    }

    /// Deletes a preset by name. Returns whether anything was removed.
    pub async fn delete(&self, user: &str, name: &str) -> Result<bool, PresetError> {
        self.ensure_loaded(user).await?;
        let mut loaded = self.loaded.write().await;
        let Some(presets) = loaded.get_mut(user) else {
            return Ok(false);
        };
        let before = presets.len();
        presets.retain(|p| p.name != name);
        if presets.len() == before {
            return Ok(false);
        }
        self.write_user_file(user, presets)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationName;

    fn preset(name: &str, origin: &str, destination: &str) -> Preset {
        Preset {
            name: name.to_string(),
            origin: StationName::parse(origin).unwrap(),
            destination: StationName::parse(destination).unwrap(),
            line: None,
        }
    }

    #[tokio::test]
    async fn save_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save("alice", preset("출근", "정자", "강남")).await.unwrap();
        let fetched = store.get("alice", "출근").await.unwrap().unwrap();
        assert_eq!(fetched.origin.as_str(), "정자");
        assert_eq!(fetched.destination.as_str(), "강남");
    }

    #[tokio::test]
    async fn save_same_name_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save("alice", preset("출근", "정자", "강남")).await.unwrap();
        store.save("alice", preset("출근", "미금", "강남")).await.unwrap();

        let presets = store.list("alice").await.unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].origin.as_str(), "미금");
    }

    #[tokio::test]
    async fn presets_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = PresetStore::open(dir.path()).unwrap();
            store.save("alice", preset("출근", "정자", "강남")).await.unwrap();
        }
        let store = PresetStore::open(dir.path()).unwrap();
        let fetched = store.get("alice", "출근").await.unwrap();
        assert!(fetched.is_some());
    }

    #[tokio::test]
    async fn delete_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save("alice", preset("출근", "정자", "강남")).await.unwrap();
        assert!(store.delete("alice", "출근").await.unwrap());
        assert!(!store.delete("alice", "출근").await.unwrap());
        assert!(!store.delete("bob", "출근").await.unwrap());
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let store = PresetStore::open(dir.path()).unwrap();

        store.save("alice", preset("출근", "정자", "강남")).await.unwrap();
        store.save("bob", preset("출근", "왕십리", "선릉")).await.unwrap();

        let alice = store.get("alice", "출근").await.unwrap().unwrap();
        let bob = store.get("bob", "출근").await.unwrap().unwrap();
        assert_eq!(alice.origin.as_str(), "정자");
        assert_eq!(bob.origin.as_str(), "왕십리");
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("alice.json"), "not json").unwrap();

        let store = PresetStore::open(dir.path()).unwrap();
        let err = store.list("alice").await.unwrap_err();
        assert!(matches!(err, PresetError::Json { .. }));
    }
}
