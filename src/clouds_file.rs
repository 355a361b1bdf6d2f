// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing the local clouds file

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LoginError, Result};
use crate::types::CloudsDocument;

const FILE_MODE: u32 = 0o644;

/// Read the local clouds file. A missing file reads as an empty document.
pub fn read(path: &Path) -> Result<CloudsDocument> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("{} does not exist, starting from an empty document", path.display());
            return Ok(CloudsDocument::default());
        }
        Err(source) => {
            return Err(LoginError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    CloudsDocument::from_slice(&data).map_err(|source| LoginError::LocalYaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the local clouds file with `document`
pub fn write(path: &Path, document: &CloudsDocument) -> Result<()> {
    let yaml = document.to_yaml().map_err(LoginError::Serialize)?;
    let io_err = |source: io::Error| LoginError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(io_err)?;
    file.write_all(yaml.as_bytes()).map_err(io_err)?;

    debug!("Wrote {} bytes to {}", yaml.len(), path.display());
    Ok(())
}
