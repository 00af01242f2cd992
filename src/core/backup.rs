use crate::errors::AppResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store file to `dest`. With `compress` the copy is gzipped
    /// and the final path gains a `.gz` suffix (unless already present).
    ///
    /// Returns the path of the file actually written. Overwrite
    /// confirmation happens in the CLI layer.
    pub fn backup(store_path: &Path, dest: &Path, compress: bool) -> AppResult<PathBuf> {
        // 1. Check the store exists
        if !store_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Store not found: {}", store_path.display()),
            )
            .into());
        }

        // 2. Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3. Plain copy or gzip
        if !compress {
            fs::copy(store_path, dest)?;
            return Ok(dest.to_path_buf());
        }

        let gz_path = if dest.extension().is_some_and(|e| e == "gz") {
            dest.to_path_buf()
        } else {
            let mut p = dest.as_os_str().to_owned();
            p.push(".gz");
            PathBuf::from(p)
        };

        let mut input = File::open(store_path)?;
        let output = File::create(&gz_path)?;
        let mut encoder = GzEncoder::new(output, Compression::default());
        io::copy(&mut input, &mut encoder)?;
        encoder.finish()?;

        Ok(gz_path)
    }
}
