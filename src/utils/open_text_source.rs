use crate::constants::GZIP_EXTENSION;
use crate::models::Error;
use flate2::read::GzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a book text for line-by-line reading.
///
/// Paths ending in `.gz` are read through a gzip decoder. The returned reader
/// owns the file handle, which is closed when the reader is dropped.
pub fn open_text_source(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path)?;

    let is_gzip = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(GZIP_EXTENSION));

    if is_gzip {
        debug!("Opening {} as gzip", path.display());
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        debug!("Opening {}", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}
