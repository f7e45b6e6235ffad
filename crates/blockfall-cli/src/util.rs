use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use blockfall_engine::Piece;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    /// Writes the bordered text rendering of `piece`.
    pub fn write_piece(&mut self, piece: &Piece) -> anyhow::Result<()> {
        write!(&mut *self, "{piece}")
            .with_context(|| format!("Failed to write piece to {}", self.display_path()))
    }

    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(&mut *self, "{line}")
            .with_context(|| format!("Failed to write to {}", self.display_path()))
    }

    pub fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            eprintln!("Wrote {}", path.display());
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a column-major piece shape from a JSON file
///
/// The file holds an array of columns, each an array of booleans listed
/// bottom to top, e.g. `[[true, true], [false, true], [false, true]]`.
pub fn read_shape_file<P>(path: P) -> anyhow::Result<Piece>
where
    P: AsRef<Path>,
{
    read_json_file("shape", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_shape_file_missing() {
        let err = read_shape_file("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("Failed to open shape file"));
    }

    #[test]
    fn test_read_shape_file() {
        let path =
            std::env::temp_dir().join(format!("blockfall-shape-{}.json", std::process::id()));
        std::fs::write(&path, "[[true, true], [false, true], [false, true]]").unwrap();
        let piece = read_shape_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(piece, Piece::l_piece());
    }

    #[test]
    fn test_read_shape_file_invalid_shape() {
        let path =
            std::env::temp_dir().join(format!("blockfall-invalid-{}.json", std::process::id()));
        std::fs::write(&path, "[[true], [true, false]]").unwrap();
        let err = read_shape_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("uniform height"));
    }
}
