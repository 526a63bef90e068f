//! Loading puzzle inputs from the data directory

use crate::error::InputError;
use aoc_runner::Day;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Which of the two input sets to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSet {
    /// The personal puzzle input
    Real,
    /// The example from the puzzle statement
    Example,
}

impl InputSet {
    fn dir_name(self) -> &'static str {
        match self {
            InputSet::Real => "inputs",
            InputSet::Example => "examples",
        }
    }
}

/// File-based input store
///
/// Directory structure: `{data_dir}/inputs/{day:02}.txt` and `{data_dir}/examples/{day:02}.txt`
pub struct InputLoader {
    data_dir: PathBuf,
}

impl InputLoader {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the path of a day's input
    pub fn path(&self, day: Day, set: InputSet) -> PathBuf {
        self.data_dir.join(set.dir_name()).join(format!("{day}.txt"))
    }

    /// Read a day's input in full
    pub fn load(&self, day: Day, set: InputSet) -> Result<String, InputError> {
        let path = self.path(day, set);
        tracing::debug!(path = %path.display(), "loading input");
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::NotFound { path }),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn test_path_format() {
        let temp = TempDir::new().unwrap();
        let loader = InputLoader::new(temp.path().to_path_buf());

        assert_eq!(
            loader.path(day(1), InputSet::Real),
            temp.path().join("inputs").join("01.txt")
        );
        assert_eq!(
            loader.path(day(25), InputSet::Example),
            temp.path().join("examples").join("25.txt")
        );
    }

    #[test]
    fn test_load_existing_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("examples")).unwrap();
        fs::write(temp.path().join("examples/02.txt"), "line 1\nline 2\n").unwrap();

        let loader = InputLoader::new(temp.path().to_path_buf());
        assert_eq!(
            loader.load(day(2), InputSet::Example).unwrap(),
            "line 1\nline 2\n"
        );
    }

    #[test]
    fn test_missing_input_is_not_found() {
        let temp = TempDir::new().unwrap();
        let loader = InputLoader::new(temp.path().to_path_buf());

        match loader.load(day(4), InputSet::Real) {
            Err(InputError::NotFound { path }) => {
                assert_eq!(path, temp.path().join("inputs").join("04.txt"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("inputs/05.txt")).unwrap();

        let loader = InputLoader::new(temp.path().to_path_buf());
        assert!(matches!(
            loader.load(day(5), InputSet::Real),
            Err(InputError::Io { .. })
        ));
    }
}
