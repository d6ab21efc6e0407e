use std::fmt;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ConfigError;
use crate::time_value::TimeValue;

/// File name of the config in the user's home directory. The library never
/// resolves `$HOME` itself; callers join this onto a directory they own.
pub const CONFIG_FILE_NAME: &str = ".jws";

/// Wallpaper rotation settings plus the ordered list of image paths, as
/// persisted in the line-oriented config file the rotation daemon reads.
///
/// This is a plain data record with a parse/validate/serialize protocol:
/// construct with [`Default`] or [`Configuration::from_file`], edit through
/// the accessors, persist with [`Configuration::write_to_file`]. A value is
/// owned by one caller at a time; there is no interior locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    rotate_image: bool,
    rotate_time: TimeValue,
    randomize_order: bool,
    file_list: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            rotate_image: true,
            rotate_time: TimeValue::new(0, 1, 0),
            randomize_order: false,
            file_list: Vec::new(),
        }
    }
}

impl Configuration {
    /// Reads and parses the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(&text)
    }

    /// Parses config text.
    ///
    /// Lines before the `files` sentinel are matched against directive
    /// keywords by prefix, first match wins, checked in the fixed order
    /// `files`, `rotate-image`, `single-image`, `time`, `randomize-order`,
    /// `in-order`; unrecognized lines are skipped. Every non-empty line
    /// after the sentinel is one path, order preserved. The first error
    /// aborts the parse.
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let mut lines = text.lines();
        let mut has_files = false;
        for line in lines.by_ref() {
            if line.starts_with("files") {
                has_files = true;
                break;
            } else if line.starts_with("rotate-image") {
                config.rotate_image = true;
            } else if line.starts_with("single-image") {
                config.rotate_image = false;
            } else if line.starts_with("time") {
                config.rotate_time = parse_time_directive(line)?;
            } else if line.starts_with("randomize-order") {
                config.randomize_order = true;
            } else if line.starts_with("in-order") {
                config.randomize_order = false;
            }
        }
        if !has_files {
            return Err(ConfigError::NoFilesSection);
        }

        config
            .file_list
            .extend(lines.filter(|line| !line.is_empty()).map(str::to_string));
        if config.file_list.is_empty() {
            return Err(ConfigError::NoFilesListed);
        }

        Ok(config)
    }

    /// Replaces `self` with the parse of `text`. Existing state never leaks
    /// into the result: the value is reset to defaults up front and stays at
    /// defaults when the parse fails.
    pub fn set_from_text(&mut self, text: &str) -> Result<(), ConfigError> {
        *self = Self::default();
        *self = Self::from_text(text)?;
        Ok(())
    }

    /// [`Configuration::set_from_text`] reading from a file.
    pub fn set_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        *self = Self::default();
        *self = Self::from_file(path)?;
        Ok(())
    }

    /// Serializes to the exact on-disk layout: the rotate directive, then
    /// (when rotating) the order directive and a normalized `time` line, a
    /// blank separator, the `files` sentinel, and one path per line.
    pub fn to_config_string(&self) -> String {
        let mut out = String::new();
        if self.rotate_image {
            out.push_str("rotate-image\n");
            out.push_str(if self.randomize_order {
                "randomize-order\n"
            } else {
                "in-order\n"
            });
            out.push_str(&format!("time {}\n", self.rotate_time));
        } else {
            out.push_str("single-image\n");
        }
        out.push_str("\nfiles\n");
        for path in &self.file_list {
            out.push_str(path);
            out.push('\n');
        }
        out
    }

    /// Writes the serialized config to `path`.
    ///
    /// Goes through a temp file in the destination directory and renames it
    /// into place, so a failed write never leaves a half-written file behind
    /// claiming success.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let file_error = |source: std::io::Error| ConfigError::File {
            path: path.display().to_string(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(file_error)?;
        tmp.write_all(self.to_config_string().as_bytes())
            .map_err(file_error)?;
        tmp.persist(path).map_err(|err| file_error(err.error))?;
        Ok(())
    }

    pub fn rotate_image(&self) -> bool {
        self.rotate_image
    }

    pub fn set_rotate_image(&mut self, rotate_image: bool) {
        self.rotate_image = rotate_image;
    }

    pub fn rotate_time(&self) -> TimeValue {
        self.rotate_time
    }

    pub fn set_rotate_time(&mut self, rotate_time: TimeValue) {
        self.rotate_time = rotate_time;
    }

    pub fn randomize_order(&self) -> bool {
        self.randomize_order
    }

    pub fn set_randomize_order(&mut self, randomize_order: bool) {
        self.randomize_order = randomize_order;
    }

    pub fn file_list(&self) -> &[String] {
        &self.file_list
    }

    /// Replaces the path list wholesale. The list is singly owned here; GUI
    /// projections of it are the caller's to resynchronize.
    pub fn set_file_list(&mut self, file_list: Vec<String>) {
        self.file_list = file_list;
    }

    pub fn add_file(&mut self, path: impl Into<String>) {
        self.file_list.push(path.into());
    }

    /// Removes the first exact match of `path`, if any. Duplicates later in
    /// the list stay.
    pub fn remove_file(&mut self, path: &str) {
        if let Some(index) = self.file_list.iter().position(|entry| entry == path) {
            self.file_list.remove(index);
        }
    }

    /// Pure advisory validation, no file IO. Callers decide whether a
    /// problem blocks a save; warnings never do. Notably a single-image
    /// config listing several files parses and saves fine, it just earns a
    /// warning here because the daemon only looks at the first entry.
    pub fn check_consistency(&self) -> ConsistencyReport {
        let mut report = ConsistencyReport::default();
        if self.rotate_image && self.rotate_time.total_seconds() == 0 {
            report.problems.push(ConsistencyProblem::NonPositiveRotateTime);
        }
        if self.file_list.is_empty() {
            report.problems.push(ConsistencyProblem::NoFiles);
        }
        if !self.rotate_image && self.file_list.len() > 1 {
            report
                .warnings
                .push(ConsistencyWarning::ExtraSingleImageFiles);
        }
        report
    }

    /// Human-readable rendering for display to the user.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if self.rotate_image {
            out.push_str("Rotate image\n");
            out.push_str(&format!(
                "Seconds between rotation: {}\n",
                self.rotate_time.total_seconds()
            ));
            out.push_str(if self.randomize_order {
                "Randomize order\n"
            } else {
                "In order\n"
            });
        } else {
            out.push_str("Single image\n");
        }
        if self.file_list.is_empty() {
            out.push_str("No files\n");
        } else {
            out.push_str("Files:\n");
            for path in &self.file_list {
                out.push_str(path);
                out.push('\n');
            }
        }
        out
    }
}

fn parse_time_directive(line: &str) -> Result<TimeValue, ConfigError> {
    // The directive is prefix-matched, so `line` is known to start with
    // "time"; the argument is whatever follows the first run of whitespace.
    let rest = &line["time".len()..];
    let value = if rest.starts_with(char::is_whitespace) {
        rest.trim()
    } else {
        ""
    };
    if value.is_empty() {
        return Err(ConfigError::MissingTimeArgument {
            line: line.to_string(),
        });
    }
    let time: TimeValue = value.parse()?;
    if time.total_seconds() == 0 {
        return Err(ConfigError::NonPositiveTime);
    }
    Ok(time)
}

/// Findings from [`Configuration::check_consistency`]. Problems make the
/// config invalid; warnings are informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    problems: Vec<ConsistencyProblem>,
    warnings: Vec<ConsistencyWarning>,
}

impl ConsistencyReport {
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[ConsistencyProblem] {
        &self.problems
    }

    pub fn warnings(&self) -> &[ConsistencyWarning] {
        &self.warnings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyProblem {
    /// Rotation is enabled but the interval is zero seconds.
    NonPositiveRotateTime,
    /// The file list is empty.
    NoFiles,
}

impl fmt::Display for ConsistencyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRotateTime => {
                f.write_str("rotation is enabled but the rotation time is zero")
            }
            Self::NoFiles => f.write_str("no files are listed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyWarning {
    /// Single-image mode with more than one file; only the first is used.
    ExtraSingleImageFiles,
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExtraSingleImageFiles => f.write_str(
                "single-image mode lists more than one file; only the first will be shown",
            ),
        }
    }
}
