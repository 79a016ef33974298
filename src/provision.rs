use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Makes sure the database exists at `path`, downloading it once from
/// `source` if it does not.
pub fn provision(path : &Path, source : Option<&str>) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    match source {
        Some(url) => {
            let client = Client::builder().build()
                .map_err(|e| Error::unavailable(path, e))?;
            provision_with(&client, path, url)
        },
        None => Err(Error::unavailable(path, "file not found and no download source configured"))
    }
}

fn provision_with(client : &Client, path : &Path, url : &str) -> Result<()> {
    download(client, url, path).map_err(|e| match e {
        Error::DataUnavailable { .. } => e,
        other => Error::unavailable(path, format!("download from {} failed: {}", url, other))
    })
}

fn download(client : &Client, url : &str, path : &Path) -> Result<()> {
    info!("Downloading WordNet from {} to {}", url, path.display());
    let body = client.get(url).send()?.error_for_status()?.bytes()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // written beside the target, then renamed into place
    let partial = path.with_extension("part");
    let written = File::create(&partial)
        .and_then(|mut out| {
            out.write_all(&body)?;
            out.sync_all()
        })
        .and_then(|_| fs::rename(&partial, path));
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&partial) {
            warn!("Could not remove {}: {}", partial.display(), cleanup);
        }
        return Err(e.into());
    }
    info!("Downloaded {} bytes", body.len());
    Ok(())
}
