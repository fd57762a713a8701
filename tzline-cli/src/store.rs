// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Board persistence.
//!
//! The board is saved as a pretty-printed JSON array of people, by default in
//! `board.json` under the platform config directory.

use directories_next::ProjectDirs;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tzline::{Board, Person};

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "Siderust";
const APPLICATION_NAME: &str = "tzline";
const BOARD_FILE_NAME: &str = "board.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no config directory available on this platform")]
    Config,

    #[error("board file I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("board file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Board(#[from] tzline::Error),
}

/// Where the board lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardFile {
    path: PathBuf,
}

impl BoardFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `board.json` in the platform config directory.
    pub fn default_location() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME)
            .ok_or(StoreError::Config)?;
        Ok(Self::at(dirs.config_dir().join(BOARD_FILE_NAME)))
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the board; a missing file is an empty board.
    pub fn load(&self) -> Result<Board, StoreError> {
        if !self.path.exists() {
            info!("No board at {:?}, starting empty", self.path);
            return Ok(Board::new());
        }
        info!("Loading board from {:?}", self.path);
        let data = fs::read_to_string(&self.path)?;
        let people: Vec<Person> = serde_json::from_str(&data)?;
        info!("Loaded {} people", people.len());
        Ok(Board::from_people(people)?)
    }

    pub fn save(&self, people: &[Person]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving {} people to {:?}", people.len(), self.path);
        let json = serde_json::to_string_pretty(people)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
