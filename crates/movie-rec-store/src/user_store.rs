use crate::error::{StoreError, StoreResult};
use csv::{ReaderBuilder, WriterBuilder};
use movie_rec_config::SeedUser;
use movie_rec_models::{History, UserProfile, Watchlist};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header row of the user CSV
pub const USER_HEADER: [&str; 4] = ["Username", "Password", "Watchlist", "History"];

/// CSV-backed store of user profiles
///
/// One row per user: username, password, then the watchlist and history as
/// `;`-delimited movie ids (empty string for an empty list).
pub struct UserStore {
    path: PathBuf,
    seed_users: Vec<SeedUser>,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_users: Vec::new(),
        }
    }

    /// Accounts to create when the store file doesn't exist yet
    pub fn with_seed_users(mut self, seed_users: Vec<SeedUser>) -> Self {
        self.seed_users = seed_users;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all users, keyed by username
    ///
    /// A missing file is created from the seed users. Malformed rows are
    /// skipped, and profiles listing a movie in both watchlist and history
    /// are repaired.
    pub fn load(&self) -> StoreResult<BTreeMap<String, UserProfile>> {
        if !self.path.exists() {
            info!(
                "User file not found at {}, creating {} default users",
                self.path.display(),
                self.seed_users.len()
            );
            let users = self.seeded_users();
            self.save(&users)?;
            return Ok(users);
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let mut users = BTreeMap::new();
        let mut skipped = 0;

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Skipping unreadable user row: {}", e);
                    skipped += 1;
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            // Passwords are opaque and kept verbatim; id lists trim themselves
            let username = record.get(0).map(str::trim).unwrap_or_default();
            if record.len() < USER_HEADER.len() || username.is_empty() {
                let err = StoreError::InvalidRecord {
                    line,
                    reason: format!("expected {} fields, found {}", USER_HEADER.len(), record.len()),
                };
                warn!("Error parsing user line: {}", err);
                skipped += 1;
                continue;
            }

            let mut profile = UserProfile::with_lists(
                username,
                &record[1],
                Watchlist::parse(&record[2]),
                History::parse(&record[3]),
            );

            let repaired = profile.normalize();
            if repaired > 0 {
                warn!(
                    user = %profile.username,
                    repaired,
                    "Dropped watchlist entries that are already in history"
                );
            }

            if users.insert(profile.username.clone(), profile).is_some() {
                warn!(line, user = %username, "Duplicate username, keeping the later row");
            }
        }

        info!(
            "Loaded {} users from {} ({} rows skipped)",
            users.len(),
            self.path.display(),
            skipped
        );

        Ok(users)
    }

    /// Write all users, replacing the file atomically
    pub fn save(&self, users: &BTreeMap<String, UserProfile>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        // Write to a temp file, then rename over the real one
        let temp_path = self.path.with_extension("csv.tmp");
        {
            let file = File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
            let mut writer = WriterBuilder::new().from_writer(file);
            writer.write_record(USER_HEADER)?;
            for user in users.values() {
                writer.write_record([
                    user.username.as_str(),
                    user.password(),
                    user.watchlist().to_field().as_str(),
                    user.history().to_field().as_str(),
                ])?;
            }
            writer.flush().map_err(|e| StoreError::io(&temp_path, e))?;
        }
        std::fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }

    fn seeded_users(&self) -> BTreeMap<String, UserProfile> {
        self.seed_users
            .iter()
            .map(|seed| {
                (
                    seed.username.clone(),
                    UserProfile::new(seed.username.clone(), seed.password.clone()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_rec_config::default_seed_users;

    fn store_in(dir: &tempfile::TempDir) -> UserStore {
        UserStore::new(dir.path().join("data").join("users.csv"))
    }

    #[test]
    fn test_missing_file_is_seeded() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).with_seed_users(default_seed_users());

        let users = store.load().unwrap();

        assert_eq!(users.len(), 5);
        assert!(users["bob"].check_password("bob123"));
        assert!(users["bob"].watchlist().is_empty());
        assert!(store.exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut alice = UserProfile::new("alice", "alice123");
        alice.add_to_watchlist("M003");
        alice.add_to_watchlist("M001");
        alice.mark_watched("M007");
        let bob = UserProfile::new("bob", "pass,with,commas");

        let mut users = BTreeMap::new();
        users.insert(alice.username.clone(), alice.clone());
        users.insert(bob.username.clone(), bob.clone());
        store.save(&users).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded["alice"], alice);
        assert_eq!(loaded["bob"], bob);
    }

    #[test]
    fn test_padded_password_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir).with_seed_users(vec![SeedUser {
            username: "zoe".to_string(),
            password: " secret ".to_string(),
        }]);

        let seeded = store.load().unwrap();
        assert!(seeded["zoe"].check_password(" secret "));

        let reloaded = store.load().unwrap();
        assert!(reloaded["zoe"].check_password(" secret "));
        assert!(!reloaded["zoe"].check_password("secret"));
    }

    #[test]
    fn test_username_is_trimmed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            "Username,Password,Watchlist,History
 alice ,alice123, M001 , M002
",
        )
        .unwrap();

        let users = store.load().unwrap();

        assert!(users["alice"].check_password("alice123"));
        assert_eq!(users["alice"].watchlist().to_field(), "M001");
        assert_eq!(users["alice"].history().to_field(), "M002");
    }

    #[test]
    fn test_record_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut alice = UserProfile::new("alice", "alice123");
        alice.add_to_watchlist("M003");
        alice.add_to_watchlist("M001");
        alice.mark_watched("M007");
        let mut users = BTreeMap::new();
        users.insert("alice".to_string(), alice);
        users.insert("bob".to_string(), UserProfile::new("bob", "bob123"));
        store.save(&users).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            "Username,Password,Watchlist,History\nalice,alice123,M003;M001,M007\nbob,bob123,,\n"
        );
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            "Username,Password,Watchlist,History\nalice,alice123,M001; M002 ,M003\nbroken,row\n,nobody,,\n",
        )
        .unwrap();

        let users = store.load().unwrap();

        assert_eq!(users.len(), 1);
        let alice = &users["alice"];
        assert_eq!(alice.watchlist().to_field(), "M001;M002");
        assert_eq!(alice.history().to_field(), "M003");
    }

    #[test]
    fn test_overlapping_lists_are_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(
            store.path(),
            "Username,Password,Watchlist,History\neric,eric123,M001;M002,M002\n",
        )
        .unwrap();

        let users = store.load().unwrap();

        assert_eq!(users["eric"].watchlist().to_field(), "M001");
        assert!(users["eric"].history().contains("M002"));
    }
}
