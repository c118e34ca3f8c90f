//! Persistence of the signed-in session between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use crate::app::model::UserSession;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Failed to read session file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode session: {0}")]
    EncodeError(#[from] serde_json::Error),
}

/// Where the current user session is kept.
pub trait UserSessionRepository: Send + Sync {
    /// The stored session, or `None` when nobody is signed in.
    fn read(&self) -> Result<Option<UserSession>, SessionStoreError>;

    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError>;

    /// Forget the stored session. Succeeds when there is none.
    fn delete(&self) -> Result<(), SessionStoreError>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    session: Mutex<Option<UserSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: UserSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl UserSessionRepository for InMemorySessionRepository {
    fn read(&self) -> Result<Option<UserSession>, SessionStoreError> {
        Ok(self.session.lock().clone())
    }

    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError> {
        *self.session.lock() = Some(session.clone());
        Ok(())
    }

    fn delete(&self) -> Result<(), SessionStoreError> {
        self.session.lock().take();
        Ok(())
    }
}

/// JSON file holding one session. A missing file means signed out.
#[derive(Debug, Clone)]
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserSessionRepository for FileSessionRepository {
    fn read(&self) -> Result<Option<UserSession>, SessionStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionStoreError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let session = serde_json::from_str(&content).map_err(|e| SessionStoreError::ParseError {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(session))
    }

    fn save(&self, session: &UserSession) -> Result<(), SessionStoreError> {
        let content = serde_json::to_string_pretty(session)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionStoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        // Write to temp file first, then rename.
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .and_then(|()| fs::rename(&temp_path, &self.path))
            .map_err(|e| SessionStoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn delete(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::WriteError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
