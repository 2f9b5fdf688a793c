//! Locating puzzle inputs on disk

use aoc_solver::{InputError, input};
use std::path::PathBuf;

/// Where puzzle inputs come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// `{dir}/{year}/day{day:02}.txt`
    Directory(PathBuf),
    /// One file used for every selected puzzle
    File(PathBuf),
}

/// File-based store for puzzle inputs
pub struct InputStore {
    source: InputSource,
}

impl InputStore {
    pub fn new(source: InputSource) -> Self {
        Self { source }
    }

    /// Path the input for `year`/`day` is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.source {
            InputSource::Directory(dir) => dir
                .join(year.to_string())
                .join(format!("day{:02}.txt", day)),
            InputSource::File(path) => path.clone(),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for `year`/`day`
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        input::read_source(self.input_path(year, day))
    }
}
