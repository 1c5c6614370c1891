use crate::error::Result;
use crate::github::OrgRecord;
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces `path` with one login per line.
///
/// Lines go to a temporary file next to `path` which is renamed into place
/// once fully written. On any error the temporary file is dropped and removed,
/// leaving a previous `path` untouched.
pub fn write_logins(path: &Path, orgs: &[OrgRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    debug!("Writing {} login(s) to {}", orgs.len(), tmp.path().display());

    let mut writer = BufWriter::new(tmp);
    for org in orgs {
        writeln!(writer, "{}", org.login)?;
    }
    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;

    tmp.persist(path)?;
    debug!("Renamed into {}", path.display());
    Ok(())
}
