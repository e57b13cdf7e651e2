use crate::error::Result;
use log::debug;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Opens the task file for reading and writing, creating it (and its parent
/// directory) when missing. The file closes when the handle is dropped.
pub fn open_task_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    debug!("opened task file {}", path.display());
    Ok(file)
}
