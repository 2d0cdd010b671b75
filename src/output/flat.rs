use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use super::{picture_rows, ChunkSink, Summary, Table};
use crate::{picture::Picture, Result};

/// Writes each fold as a directory of pipe-delimited flat files under `root`
pub struct FlatFileWriter {
    root: PathBuf,
}
impl FlatFileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    pub fn fold_dir(&self, fold: usize) -> PathBuf {
        self.root.join(fold.to_string())
    }
}
impl ChunkSink for FlatFileWriter {
    fn write_chunk(&mut self, fold: usize, pictures: &[Picture], summary: &Summary) -> Result<()> {
        let dir = self.fold_dir(fold);
        if dir.is_dir() {
            warn!(
                "The files in the directory {} will be rewritten.",
                dir.display()
            );
        } else {
            fs::create_dir(&dir)?;
            info!("Created directory {}.", dir.display());
        }

        let mut files = HashMap::new();
        for table in Table::ALL {
            let file = File::create(dir.join(table.file_name()))?;
            files.insert(table, BufWriter::new(file));
        }

        for picture in pictures {
            for (table, row) in picture_rows(picture)? {
                if let Some(w) = files.get_mut(&table) {
                    writeln!(w, "{}", row)?;
                }
            }
        }
        for (_, mut w) in files {
            w.flush()?;
        }

        let mut file = File::create(dir.join("summary"))?;
        writeln!(file, "{}", summary)?;

        info!("Output {} pictures.", pictures.len());
        Ok(())
    }
}
