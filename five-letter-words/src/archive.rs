use std::{
    fs::{self, File},
    io,
    path::Path,
};

use zip::ZipArchive;

use crate::{BuildError, errors::ArchiveError};

/// Unpack every entry of the zip at `archive_path` below `target_dir`.
///
/// The archive's directory structure is kept. Entries whose names would land
/// outside `target_dir` are skipped. Returns the number of files written.
pub fn extract(
    archive_path: impl AsRef<Path>,
    target_dir: impl AsRef<Path>,
) -> Result<usize, BuildError> {
    let archive_path = archive_path.as_ref();
    let target_dir = target_dir.as_ref();
    let zip_err = |err: zip::result::ZipError| {
        BuildError::Archive(archive_path.to_owned(), ArchiveError::from(err))
    };

    let file = File::open(archive_path)
        .map_err(|io_err| BuildError::Read(archive_path.to_owned(), io_err))?;
    let mut archive = ZipArchive::new(file).map_err(zip_err)?;
    log::info!(
        "extracting {} entries from {} into {}",
        archive.len(),
        archive_path.display(),
        target_dir.display(),
    );

    let mut extracted = 0;
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(zip_err)?;
        let Some(relative_path) = entry.enclosed_name() else {
            log::warn!("skipping entry with unsafe path: {}", entry.name());
            continue;
        };
        let final_path = target_dir.join(relative_path);

        if entry.is_dir() {
            fs::create_dir_all(&final_path).map_err(|io_err| {
                BuildError::CreateDir(final_path.clone(), io_err)
            })?;
            continue;
        }

        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent).map_err(|io_err| {
                BuildError::CreateDir(parent.to_owned(), io_err)
            })?;
        }
        let mut out_file = File::create(&final_path).map_err(|io_err| {
            BuildError::Write(final_path.clone(), io_err)
        })?;
        io::copy(&mut entry, &mut out_file).map_err(|io_err| {
            // A bad CRC or truncated stream surfaces as an io::Error here
            match io_err.kind() {
                io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
                    zip_err(zip::result::ZipError::Io(io_err))
                },
                _ => BuildError::Write(final_path.clone(), io_err),
            }
        })?;
        extracted += 1;
    }

    log::debug!("extracted {extracted} files from {}", archive_path.display());
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::{ZipWriter, write::SimpleFileOptions};

    use super::*;

    fn write_zip(path: &Path, entries: &[(&str, Option<&[u8]>)]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, contents) in entries {
            match contents {
                Some(bytes) => {
                    writer.start_file(*name, options).unwrap();
                    writer.write_all(bytes).unwrap();
                },
                None => writer.add_directory(*name, options).unwrap(),
            }
        }
        writer.finish().unwrap();
    }

    #[test]
    fn keeps_directory_structure() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("words.zip");
        write_zip(&zip_path, &[
            ("top/", None),
            ("top/empty/", None),
            ("top/wordlist/american-english/60", Some(&b"mango\n"[..])),
            ("top/README", Some(&b"hello"[..])),
        ]);

        let target = dir.path().join("out");
        let extracted = extract(&zip_path, &target).unwrap();
        assert_eq!(extracted, 2);
        assert_eq!(
            fs::read(target.join("top/wordlist/american-english/60")).unwrap(),
            b"mango\n",
        );
        assert!(target.join("top/empty").is_dir());
    }

    #[test]
    fn corrupt_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let zip_path = dir.path().join("corrupt.zip");
        fs::write(&zip_path, b"this is not a zip file").unwrap();

        let err = extract(&zip_path, dir.path().join("out")).unwrap_err();
        assert!(matches!(err, BuildError::Archive(..)), "{err:?}");
    }

    #[test]
    fn missing_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(dir.path().join("absent.zip"), dir.path())
            .unwrap_err();
        assert!(matches!(err, BuildError::Read(..)), "{err:?}");
    }
}
