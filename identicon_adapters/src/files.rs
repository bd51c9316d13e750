use std::fs::{
    set_permissions,
    File,
    Permissions,
};
use std::io::{BufWriter, Error, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use identicon_core::{Identicon, IdenticonError};

const IDENTICON_FILE_EXTENSION: &str = "png";

pub fn set_file_permissions(file_path: &Path, mode: u32) -> Result<(), Error> {
    let permissions = Permissions::from_mode(mode);
    set_permissions(file_path, permissions)?;
    Ok(())
}

/// Returns `<output_dir>/<name>.png`.
/// Names that could point outside of output directory are rejected.
pub fn get_identicon_path(
    output_dir: &Path,
    name: &str,
) -> Result<PathBuf, &'static str> {
    if name.is_empty() {
        return Err("name must not be empty");
    };
    if name == "." || name == ".." {
        return Err("name must not be a relative path");
    };
    if name.contains(['/', '\\', '\0']) {
        return Err("name contains invalid characters");
    };
    let file_name = format!("{name}.{IDENTICON_FILE_EXTENSION}");
    Ok(output_dir.join(file_name))
}

/// Creates (or truncates) file and writes PNG image into it
pub fn write_identicon_file(
    identicon: &Identicon,
    file_path: &Path,
) -> Result<(), IdenticonError> {
    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    identicon.write_image(&mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_identicon_path() {
        let path = get_identicon_path(Path::new("/tmp/avatars"), "alice").unwrap();
        assert_eq!(path, Path::new("/tmp/avatars/alice.png"));
        let path = get_identicon_path(Path::new("."), "Ünïcödé").unwrap();
        assert_eq!(path, Path::new("./Ünïcödé.png"));
    }

    #[test]
    fn test_get_identicon_path_invalid_name() {
        let output_dir = Path::new("/tmp");
        assert!(get_identicon_path(output_dir, "").is_err());
        assert!(get_identicon_path(output_dir, "..").is_err());
        assert!(get_identicon_path(output_dir, "../etc/passwd").is_err());
        assert!(get_identicon_path(output_dir, "a\\b").is_err());
    }

    #[test]
    fn test_write_identicon_file() {
        let output_dir = tempfile::tempdir().unwrap();
        let file_path = get_identicon_path(output_dir.path(), "banana").unwrap();
        let identicon = Identicon::generate(b"banana");
        write_identicon_file(&identicon, &file_path).unwrap();
        let data = std::fs::read(&file_path).unwrap();
        assert_eq!(data, identicon.to_png().unwrap());
        // Overwrite
        write_identicon_file(&identicon, &file_path).unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), data);
    }

    #[test]
    fn test_write_identicon_file_missing_directory() {
        let output_dir = tempfile::tempdir().unwrap();
        let file_path = output_dir.path().join("missing").join("alice.png");
        let identicon = Identicon::generate(b"alice");
        let error = write_identicon_file(&identicon, &file_path).unwrap_err();
        assert!(matches!(error, IdenticonError::IoError(_)));
    }

    #[test]
    fn test_set_file_permissions() {
        let output_dir = tempfile::tempdir().unwrap();
        let file_path = output_dir.path().join("test.txt");
        std::fs::write(&file_path, b"test").unwrap();
        set_file_permissions(&file_path, 0o640).unwrap();
        let metadata = std::fs::metadata(&file_path).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o640);
    }
}
