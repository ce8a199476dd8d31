use std::{
    collections::HashSet,
    fs::File,
    io::{self, Read},
    path::PathBuf,
};
use thiserror::Error;
use tracing::info;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
use models::*;

use crate::shared::Stop;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Stop {0} has an invalid coordinate")]
    InvalidStop(String),
    #[error("Stop id {0} appears more than once")]
    DuplicateStop(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Csv(PathBuf),
    Zip(PathBuf),
}

/// File-backed supplier of stops.
#[derive(Default)]
pub struct StopSource {
    config: Config,
    storage: StorageType,
}

impl StopSource {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageType::Csv(path.into());
        self
    }

    pub fn from_zip(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage = StorageType::Zip(path.into());
        self
    }

    /// Reads every stop, failing on the first malformed row, out of range
    /// coordinate or repeated id.
    pub fn load_stops(&self) -> Result<Vec<Stop>, self::Error> {
        let stops = match &self.storage {
            StorageType::None => Vec::new(),
            StorageType::Csv(path) => read_stops(File::open(path)?)?,
            StorageType::Zip(path) => {
                let zip_file = File::open(path)?;
                let mut archive = ZipArchive::new(zip_file)?;
                let file = get_file(&mut archive, &self.config.stops_file_name)?;
                read_stops(file)?
            }
        };
        info!("Loaded {} stops", stops.len());
        Ok(stops)
    }
}

fn read_stops<R: Read>(reader: R) -> Result<Vec<Stop>, self::Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut seen: HashSet<String> = HashSet::new();
    let mut stops = Vec::new();
    for row in reader.deserialize::<CsvStop>() {
        let row = row?;
        if !seen.insert(row.id.clone()) {
            return Err(Error::DuplicateStop(row.id));
        }
        let stop: Stop = row.into();
        if !stop.coordinate.is_valid() {
            return Err(Error::InvalidStop(stop.id.to_string()));
        }
        stops.push(stop);
    }
    Ok(stops)
}

fn get_file<'a>(
    archive: &'a mut ZipArchive<File>,
    name: &'a str,
) -> Result<ZipFile<'a, File>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}
