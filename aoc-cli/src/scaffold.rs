//! Creating a new day's solution file from the template

use crate::config::ScaffoldPaths;
use crate::error::ScaffoldError;
use aoc_runner::Day;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Placeholder replaced by the day number
const DAY_PLACEHOLDER: &str = "{{day}}";

pub struct Scaffolder {
    paths: ScaffoldPaths,
}

impl Scaffolder {
    pub fn new(paths: ScaffoldPaths) -> Self {
        Self { paths }
    }

    /// Path of the solution file for a day, e.g. `day_04.rs`
    pub fn target(&self, day: Day) -> PathBuf {
        self.paths.solutions_dir.join(format!("day_{day}.rs"))
    }

    /// Write the rendered template to the day's solution file, never overwriting.
    pub fn create(&self, day: Day) -> Result<PathBuf, ScaffoldError> {
        let path = self.target(day);
        if path.exists() {
            return Err(ScaffoldError::AlreadyExists { path });
        }

        let template = &self.paths.template;
        let source = fs::read_to_string(template).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScaffoldError::TemplateMissing {
                path: template.clone(),
            },
            _ => ScaffoldError::Io {
                path: template.clone(),
                source: e,
            },
        })?;

        // create_new also catches a file appearing after the check above
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => ScaffoldError::AlreadyExists { path: path.clone() },
                _ => ScaffoldError::Io {
                    path: path.clone(),
                    source: e,
                },
            })?;
        fill(&mut file, &path, &render(&source, day))?;

        tracing::info!(path = %path.display(), "created solution file");
        Ok(path)
    }
}

/// Write the contents of a freshly created file, removing it again if the write fails so a
/// later `create` is not refused by a truncated file.
fn fill(writer: &mut impl Write, path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    writer.write_all(contents.as_bytes()).map_err(|source| {
        if let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial file");
        }
        ScaffoldError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn render(template: &str, day: Day) -> String {
    template.replace(DAY_PLACEHOLDER, &day.get().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::TempDir;

    const SHIPPED_TEMPLATE: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../aoc-2023/templates/day.rs.tmpl"));

    /// Accepts a few bytes, then fails like a full disk.
    struct ShortWriter {
        room: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::other("no space left"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    fn scaffolder(root: &Path) -> Scaffolder {
        let template = root.join("day.rs.tmpl");
        fs::write(&template, "//! Day {{day}}\n#[aoc(day = {{day}})]\n").unwrap();
        let solutions_dir = root.join("solutions");
        fs::create_dir(&solutions_dir).unwrap();
        Scaffolder::new(ScaffoldPaths {
            template,
            solutions_dir,
        })
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        assert_eq!(
            render("day {{day}}, again {{day}}", day(7)),
            "day 7, again 7"
        );
    }

    #[test]
    fn test_create_writes_rendered_template() {
        let temp = TempDir::new().unwrap();
        let scaffolder = scaffolder(temp.path());

        let path = scaffolder.create(day(4)).unwrap();
        assert_eq!(path, temp.path().join("solutions").join("day_04.rs"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "//! Day 4\n#[aoc(day = 4)]\n"
        );
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let scaffolder = scaffolder(temp.path());
        let existing = scaffolder.target(day(4));
        fs::write(&existing, "// my work").unwrap();

        match scaffolder.create(day(4)) {
            Err(ScaffoldError::AlreadyExists { path }) => assert_eq!(path, existing),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(fs::read_to_string(&existing).unwrap(), "// my work");
    }

    #[test]
    fn test_missing_template() {
        let temp = TempDir::new().unwrap();
        let scaffolder = Scaffolder::new(ScaffoldPaths {
            template: temp.path().join("nope.tmpl"),
            solutions_dir: temp.path().to_path_buf(),
        });

        assert!(matches!(
            scaffolder.create(day(1)),
            Err(ScaffoldError::TemplateMissing { .. })
        ));
        assert!(!scaffolder.target(day(1)).exists());
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day_05.rs");
        fs::write(&path, "//! Day").unwrap();

        let result = fill(&mut ShortWriter { room: 7 }, &path, "//! Day 5\n");
        match result {
            Err(ScaffoldError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_fill_keeps_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day_05.rs");
        let mut file = fs::File::create(&path).unwrap();

        fill(&mut file, &path, "//! Day 5\n").unwrap();
        drop(file);
        assert_eq!(fs::read_to_string(&path).unwrap(), "//! Day 5\n");
    }

    #[test]
    fn test_shipped_template_renders_a_registered_day() {
        let rendered = render(SHIPPED_TEMPLATE, day(4));

        assert!(!rendered.contains(DAY_PLACEHOLDER));
        assert!(rendered.starts_with("//! Day 4\n"));
        assert!(rendered.contains("#[aoc(day = 4)]"));
        assert!(rendered.contains("#[aoc_solver(max_parts = 2, examples = EXAMPLES)]"));
        assert!(rendered.contains("#[derive(AocSolver, AutoRegisterSolver)]"));
        assert!(rendered.contains("impl PartSolver<2> for Solver"));
    }
}
