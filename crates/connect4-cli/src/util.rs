use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use connect4_evaluator::param_set::ParamSet;

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
    /// Writes `value` as pretty JSON to `path`, or to stdout when no path is given.
    pub fn save_json<T>(value: &T, path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(path)?;
        serde_json::to_writer_pretty(&mut output, value)?;
        output.finish_line()
    }

    pub fn from_output_path(path: Option<PathBuf>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Output::open(path),
            None => Ok(Output::Stdout {
                writer: io::stdout().lock(),
            }),
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

    /// Writes `value` as a single line of JSON, for streams of records.
    pub fn write_json_line<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer(&mut *self, &value)?;
        self.finish_line()
    }

    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        write!(&mut *self, "{line}")?;
        self.finish_line()
    }

    fn finish_line(&mut self) -> anyhow::Result<()> {
        writeln!(&mut *self).and_then(|()| self.flush()).with_context(|| match self {
            Output::Stdout { .. } => "Failed to write to stdout".to_owned(),
            Output::File { path, .. } => format!("Failed to write to {}", path.display()),
        })
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

fn read_json_file<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {kind} file: {}", path.display()))?;
    serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("Invalid {kind} file: {}", path.display()))
}

/// Loads the parameter set at `path`, or the default set when no path is given.
///
/// Values are validated while parsing, so a file with a non-positive weight is rejected.
pub fn load_params(path: Option<&Path>) -> anyhow::Result<ParamSet> {
    match path {
        Some(path) => read_json_file("parameter set", path),
        None => Ok(ParamSet::DEFAULT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_params() {
        assert_eq!(load_params(None).unwrap(), ParamSet::DEFAULT);
        let err = load_params(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open parameter set file"));
    }
}
