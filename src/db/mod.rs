//! SQLite storage for the visitor's preferences.
//!
//! The only preference today is the colour theme, stored under [`THEME_KEY`].

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use crate::models::{Theme, ThemePreference};

const SCHEMA: &str = include_str!("schema.sql");

/// Preference key holding `light` or `dark`.
pub const THEME_KEY: &str = "theme";

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Location used when no path is configured.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "portfolio-gallery")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dirs.data_dir().join("portfolio.db"))
    }

    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create the preference table if it does not exist yet. Safe to repeat.
    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        conn.execute_batch(SCHEMA)
            .context("Failed to create preferences table")
    }

    // ============================================================
    // Preference operations
    // ============================================================

    pub fn get_preference(&self, key: &str) -> Result<Option<(String, DateTime<Utc>)>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let row = conn
            .query_row(
                "SELECT value, updated_at FROM preferences WHERE key = ?",
                [key],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;
        Ok(row.map(|(value, updated_at)| (value, parse_datetime(updated_at))))
    }

    pub fn set_preference(&self, key: &str, value: &str) -> Result<DateTime<Utc>> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let now = Utc::now();
        conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            (key, value, now.to_rfc3339()),
        )?;
        Ok(now)
    }

    // ============================================================
    // Theme operations
    // ============================================================

    /// The stored theme. Missing or unrecognised values read as the default.
    pub fn get_theme(&self) -> Result<ThemePreference> {
        let stored = self.get_preference(THEME_KEY)?;
        Ok(match stored {
            Some((value, updated_at)) => ThemePreference {
                theme: Theme::from_str(&value).unwrap_or_else(|| {
                    tracing::warn!("Ignoring unrecognised stored theme {:?}", value);
                    Theme::default()
                }),
                updated_at: Some(updated_at),
            },
            None => ThemePreference {
                theme: Theme::default(),
                updated_at: None,
            },
        })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<ThemePreference> {
        let updated_at = self.set_preference(THEME_KEY, theme.as_str())?;
        Ok(ThemePreference {
            theme,
            updated_at: Some(updated_at),
        })
    }

    /// Flip between light and dark and persist the result.
    pub fn toggle_theme(&self) -> Result<ThemePreference> {
        let current = self.get_theme()?.theme;
        self.set_theme(current.toggled())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

fn parse_datetime(s: String) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
