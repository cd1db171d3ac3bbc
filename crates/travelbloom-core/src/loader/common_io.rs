// crates/travelbloom-core/src/loader/common_io.rs
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| CatalogError::fetch(path.display().to_string(), e))?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(CatalogError::fetch(
            path.display().to_string(),
            "gzip input needs the 'compact' feature",
        ))
    }
}

/// Reads the whole (decompressed) file into memory.
pub fn read_path(path: &Path) -> Result<Vec<u8>> {
    let mut stream = open_stream(path)?;
    let mut data = Vec::new();
    stream
        .read_to_end(&mut data)
        .map_err(|e| CatalogError::fetch(path.display().to_string(), e))?;
    Ok(data)
}
