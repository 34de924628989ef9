use crate::config::ResourceConfig;
use crate::error::{PermgenError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Lists the resource documents of a single directory.
///
/// Only regular files directly inside the directory are returned;
/// subdirectories are not descended into. Symlinks are followed so a link
/// to a regular file counts as one.
pub struct ResourceFinder<'a> {
    config: &'a ResourceConfig,
}

impl<'a> ResourceFinder<'a> {
    pub fn new(config: &'a ResourceConfig) -> Self {
        Self { config }
    }

    /// Regular files of `dir`, sorted by file name unless sorting is disabled
    pub fn find_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        debug!("Scanning resource directory: {}", dir.display());

        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);
        if self.config.sort_files {
            walker = walker.sort_by_file_name();
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    if let Some(path) = err.path() {
                        trace!("Skipping dangling link: {}", path.display());
                    }
                    continue;
                }
                Err(source) => {
                    return Err(PermgenError::ResourceDir {
                        path: dir.to_path_buf(),
                        source,
                    })
                }
            };

            if !entry.file_type().is_file() {
                trace!("Skipping non-file: {}", entry.path().display());
                continue;
            }
            if !self.config.accepts(entry.path()) {
                trace!("Skipping by extension: {}", entry.path().display());
                continue;
            }

            files.push(entry.into_path());
        }

        debug!("Found {} resource files", files.len());
        Ok(files)
    }
}

/// A directory entry whose link target does not exist. The root itself never qualifies.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err.path().is_some()
        && err.io_error().map(|e| e.kind()) == Some(ErrorKind::NotFound)
}
