use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Mapping from student id to display name. Read-only from this service's
/// perspective; an administrator edits the JSON file directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentDirectory {
    students: HashMap<String, String>,
}

impl StudentDirectory {
    pub fn name_of(&self, student_id: &str) -> Option<&str> {
        self.students.get(student_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.students.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<(String, String)> for StudentDirectory {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

/// JSON-file-backed directory, loaded fresh on every request.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    path: PathBuf,
}

impl DirectoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write an empty mapping if the file does not exist yet.
    pub(crate) fn ensure_initialized(&self) -> Result<()> {
        if !self.path.exists() {
            fs::write(&self.path, "{}")
                .with_context(|| format!("failed to write {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Load the directory. A missing or malformed file loads empty, which
    /// makes every id "not registered" rather than erroring.
    pub fn load(&self) -> StudentDirectory {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return StudentDirectory::default();
        };
        match serde_json::from_str::<HashMap<String, String>>(&contents) {
            Ok(students) => StudentDirectory { students },
            Err(e) => {
                warn!(error = %e, path = %self.path.display(), "Malformed student file, treating as empty");
                StudentDirectory::default()
            }
        }
    }
}
