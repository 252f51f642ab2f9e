//! Output archive packaging.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use brewkit_core::BuildResult;

use crate::logger::BuildLog;

/// Name of the run log entry, present in every output archive.
pub const LOG_FILE_NAME: &str = "debug.log";

/// Package built artifacts and the run log into a single zip archive.
///
/// The archive is assembled in memory and returned as one unit: if any entry
/// write fails the whole packaging step fails, so callers never see a
/// truncated archive. Entry order follows `entries`, with `debug.log` always
/// last and always present, even when `entries` is empty.
pub fn write_archive(entries: &[(String, Vec<u8>)], log: &BuildLog) -> BuildResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, bytes) in entries {
        zip.start_file(name, options)?;
        zip.write_all(bytes)?;
    }

    zip.start_file(LOG_FILE_NAME, options)?;
    zip.write_all(log.contents().as_bytes())?;

    Ok(zip.finish()?.into_inner())
}
