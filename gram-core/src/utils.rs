use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

fn is_gzipped(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("gz"))
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to open file {}: {}", path.display(), e),
        )
    })?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> io::Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

///
/// Get a writer for a file, gzip compressing when the path ends in `.gz`.
/// Parent directories are created as needed.
///
/// # Arguments
///
/// - path: path to the file to write
///
pub fn get_dynamic_writer(path: &Path) -> io::Result<BufWriter<Box<dyn Write>>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let file: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(file),
    };

    Ok(BufWriter::new(file))
}

///
/// Get a writer for a file, or stdout when no path (or '-') is given.
///
pub fn get_dynamic_writer_w_stdout(path: Option<&Path>) -> io::Result<BufWriter<Box<dyn Write>>> {
    match path {
        Some(path) if path != Path::new("-") => get_dynamic_writer(path),
        _ => Ok(BufWriter::new(Box::new(io::stdout()) as Box<dyn Write>)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("kmers.txt")]
    #[case("nested/dir/kmers.txt.gz")]
    fn test_writer_reader_round_trip(#[case] file_name: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(file_name);

        {
            let mut writer = get_dynamic_writer(&path).unwrap();
            writeln!(writer, "ACT").unwrap();
            writeln!(writer, "CTG").unwrap();
            writer.flush().unwrap();
        }

        let mut contents = String::new();
        get_dynamic_reader(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "ACT\nCTG\n");
    }

    #[rstest]
    fn test_missing_file_names_path() {
        match get_dynamic_reader(Path::new("does/not/exist.prg")) {
            Ok(_) => panic!("opening a missing file should fail"),
            Err(err) => assert!(err.to_string().contains("does/not/exist.prg")),
        }
    }
}
