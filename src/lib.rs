//! # RollWriter
//!
//! RollWriter is a rotating file writer for append-only log streams. It
//! accepts raw byte writes, rolls the active file over to a dated backup once
//! the next write would push it past a size limit, and prunes backups by
//! count and by age. **A single `RollWriter` is safe to share between
//! threads**: every write, including any rotation it triggers, runs under one
//! lock, so callers never see a half-rotated file.
//!
//! Backups are named `<prefix>-<YYYY-MM-DD>-<N><ext>`. For `logs/app.log`
//! rotated twice on the same day that is `logs/app-2024-03-09-1.log` and then
//! `logs/app-2024-03-09-2.log`. With compression enabled, each backup is
//! gzipped in the background and gains a `.gz` suffix.
//!
//! ## Example
//!
//! ```rust
//! use {
//!    rollwriter::{Compression, RollWriterBuilder, RotationSize},
//!    tracing_subscriber::util::SubscriberInitExt,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!    let appender = RollWriterBuilder::new("./logs/tracing.log")
//!        .max_size(RotationSize::MB(10))
//!        .max_backups(3)
//!        .max_age(7) // days
//!        .compression(Compression::Gzip) // Compress rotated files with Gzip
//!        .build()?;
//!    let (non_blocking, _guard) = tracing_appender::non_blocking(appender);
//!    tracing_subscriber::fmt()
//!        .with_writer(non_blocking)
//!        .with_ansi(false)
//!        .finish()
//!        .try_init()?;
//!
//!    tracing::info!("This is an info message");
//!    tracing::warn!("This is a warning message");
//!
//!    Ok(())
//! }
//! ```
//!
//! The writer logs its own rotation and retention activity through
//! `tracing`. When it is also the sink of the subscriber, put it behind
//! `tracing_appender::non_blocking` as above so those events are not written
//! back into the writer while it holds its lock.
use {
    chrono::{DateTime, FixedOffset, Local, Utc},
    flate2::write::GzEncoder,
    std::{
        ffi::OsString,
        fs::{self, File},
        io::{self, Write as _},
        path::{Path, PathBuf},
        sync::{Mutex, MutexGuard, PoisonError},
        thread,
    },
    tracing::{debug, warn},
};

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};

mod config;
mod retention;

pub use config::RollConfig;
use retention::BackupPattern;

/// Mode for a fresh log file when no mode is configured and no previous file
/// exists to copy one from.
#[cfg(unix)]
const DEFAULT_FILE_MODE: u32 = 0o644;
/// Mode for log directories created on demand.
#[cfg(unix)]
const DEFAULT_DIR_MODE: u32 = 0o755;

/// Defines the size threshold at which the active file is rotated.
///
/// * `Bytes` - Direct byte count (e.g., 1048576 bytes)
/// * `KB` - Kilobytes (1 KB = 1024 bytes)
/// * `MB` - Megabytes (1 MB = 1024 KB)
/// * `GB` - Gigabytes (1 GB = 1024 MB)
///
/// # Examples
/// ```
/// use rollwriter::{RollWriterBuilder, RotationSize};
///
/// // Rotate before the file grows past 100 MB
/// let writer = RollWriterBuilder::new("./logs/large.log")
///     .max_size(RotationSize::MB(100))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationSize {
    /// Raw byte count
    Bytes(u64),
    /// Kilobytes (1 KB = 1024 bytes)
    KB(u64),
    /// Megabytes (1 MB = 1024 KB = 1,048,576 bytes)
    MB(u64),
    /// Gigabytes (1 GB = 1024 MB = 1,073,741,824 bytes)
    GB(u64),
}

impl RotationSize {
    /// The threshold in bytes, or `None` if it does not fit in a `u64`.
    fn bytes(&self) -> Option<u64> {
        match self {
            RotationSize::Bytes(b) => Some(*b),
            RotationSize::KB(kb) => kb.checked_mul(1024),
            RotationSize::MB(mb) => mb.checked_mul(1024 * 1024),
            RotationSize::GB(gb) => gb.checked_mul(1024 * 1024 * 1024),
        }
    }
}

/// Specifies the compression applied to rotated-out backups.
///
/// Compression runs on a detached background thread after the rename, so a
/// rotation never waits for it. The compressed file keeps the backup name and
/// gains the algorithm's extension (e.g. `app-2024-03-09-1.log.gz`); the
/// uncompressed backup is removed once the compressed copy is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compression {
    /// Gzip compression. Compressed files will have the `.gz` extension.
    Gzip,
    /// XZ compression, slower but denser than Gzip. Compressed files will have
    /// the `.xz` extension. Requires the `xz` feature.
    #[cfg(feature = "xz")]
    XZ,
}

impl Compression {
    /// Get the extension for the compressed log file.
    fn get_extension(&self) -> &'static str {
        match self {
            Compression::Gzip => "gz",
            #[cfg(feature = "xz")]
            Compression::XZ => "xz",
        }
    }

    /// Compress `log_path` next to itself and remove the original.
    ///
    /// The compressed file takes over the original's permissions and
    /// modification time, so retention ranks it by when its data was written.
    /// On failure the partial output is removed and the original is kept.
    fn compress(&self, log_path: &Path) -> Result<PathBuf, RollWriterError> {
        let infile = File::open(log_path)?;
        let metadata = infile.metadata()?;
        let mut reader = io::BufReader::new(infile);

        let mut compressed_name = OsString::from(log_path.as_os_str());
        compressed_name.push(format!(".{}", self.get_extension()));
        let compressed_path = PathBuf::from(compressed_name);
        let outfile = File::create(&compressed_path)?;

        let finished = self.encode(&mut reader, &outfile).and_then(|()| {
            outfile.set_permissions(metadata.permissions())?;
            outfile.set_modified(metadata.modified()?)
        });
        if let Err(err) = finished {
            drop(outfile);
            if let Err(remove_err) = fs::remove_file(&compressed_path) {
                debug!(path = %compressed_path.display(), error = %remove_err, "failed to remove partial compressed file");
            }
            return Err(err.into());
        }

        fs::remove_file(log_path)?;
        Ok(compressed_path)
    }

    fn encode(&self, reader: &mut io::BufReader<File>, outfile: &File) -> io::Result<()> {
        let writer = io::BufWriter::new(outfile);
        match self {
            Compression::Gzip => {
                let mut encoder = GzEncoder::new(writer, flate2::Compression::default());
                io::copy(reader, &mut encoder)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(feature = "xz")]
            Compression::XZ => {
                let mut writer = writer;
                lzma_rs::xz_compress(reader, &mut writer)?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

/// Specifies the time zone that dates backup names and anchors the age
/// cutoff of the retention sweep.
///
/// # Examples
/// ```
/// use rollwriter::TimeZone;
/// use chrono::FixedOffset;
///
/// // Use UTC time for global deployments
/// let utc = TimeZone::UTC;
///
/// // Use local system time zone (changes with system settings)
/// let local = TimeZone::Local;
///
/// // Use a fixed offset for a specific region (e.g., UTC+8 for China)
/// let china = TimeZone::Fix(FixedOffset::east_opt(8 * 3600).unwrap());
/// ```
#[derive(Debug, Clone)]
pub enum TimeZone {
    /// Use UTC time zone.
    UTC,
    /// Use the system's local time zone, resolved once when the writer is
    /// built.
    Local,
    /// Use a fixed time zone offset.
    Fix(FixedOffset),
}

/// Configuration of a writer. Immutable once built.
#[derive(Debug, Clone)]
struct RollWriterMeta {
    /// The active log file.
    path: PathBuf,
    /// The directory holding the active file and its backups. `.` when the
    /// path has no parent component.
    directory: PathBuf,
    /// Backup naming for this file.
    pattern: BackupPattern,
    /// Rotation threshold in bytes, always greater than zero.
    max_size: u64,
    /// Retention horizon in days; 0 keeps backups regardless of age.
    max_age: u32,
    /// Retention count; 0 keeps any number of backups.
    max_backups: usize,
    /// Compression applied to rotated-out backups, if any.
    compression: Option<Compression>,
    /// Offset used for backup dates and the age cutoff.
    time_zone: FixedOffset,
    /// Mode for fresh log files (Unix only). An existing file's mode wins on
    /// rotation.
    file_mode: Option<u32>,
}

/// The mutable half of a writer: the active handle and its size. Only ever
/// touched under the writer's lock.
#[derive(Debug, Default)]
struct RollWriterState {
    file: Option<File>,
    size: u64,
}

/// A rotating file writer for one log file.
///
/// See the [crate docs](crate) for the rotation and naming rules. Build one
/// with [`RollWriterBuilder`], [`RollWriter::new`] or
/// [`RollConfig::build`]. The file is opened lazily by the first write.
#[derive(Debug)]
pub struct RollWriter {
    meta: RollWriterMeta,
    state: Mutex<RollWriterState>,
}

impl RollWriter {
    /// Create a writer from plain settings: `max_size` in bytes, `max_age` in
    /// days, `max_backups` as a count (zero disables either limit) and
    /// `compress` to gzip backups. Performs no I/O.
    pub fn new<P: AsRef<Path>>(
        path: P,
        max_size: u64,
        max_age: u32,
        max_backups: usize,
        compress: bool,
    ) -> Result<Self, RollWriterError> {
        let mut builder = RollWriterBuilder::new(path)
            .max_size(RotationSize::Bytes(max_size))
            .max_age(max_age)
            .max_backups(max_backups);
        if compress {
            builder = builder.compression(Compression::Gzip);
        }
        builder.build()
    }

    /// The active log file.
    pub fn path(&self) -> &Path {
        &self.meta.path
    }

    /// Bytes written to the active file since it was opened or rotated. Zero
    /// while no file is open.
    pub fn size(&self) -> u64 {
        self.lock().size
    }

    /// Append `buf` to the active file, rotating first if it would not fit.
    ///
    /// A buffer longer than the size limit is rejected without touching the
    /// file. Returns the number of bytes written, which is `buf.len()` on
    /// success.
    pub fn write(&self, buf: &[u8]) -> Result<usize, RollWriterError> {
        let len = buf.len() as u64;
        if len > self.meta.max_size {
            return Err(RollWriterError::OversizedWrite {
                len: buf.len(),
                max_size: self.meta.max_size,
            });
        }

        let mut state = self.lock();
        if state.file.is_none() {
            self.meta.open_existing_or_new(&mut state, len)?;
        }
        if state.size + len > self.meta.max_size {
            self.meta.rotate(&mut state)?;
        }
        self.meta.append(&mut state, buf)
    }

    /// Rotate now, regardless of the current size. The active file (if any)
    /// becomes a backup and an empty file takes its place.
    pub fn rotate(&self) -> Result<(), RollWriterError> {
        let mut state = self.lock();
        self.meta.rotate(&mut state)
    }

    /// Sync and close the active file. Closing a closed writer is a no-op; a
    /// later write opens the file again.
    ///
    /// The handle is released before the sync, so a sync error is returned
    /// with the writer already closed. The next write starts over from an
    /// unopened state and adopts whatever size is on disk.
    pub fn close(&self) -> Result<(), RollWriterError> {
        let mut state = self.lock();
        state.size = 0;
        match state.file.take() {
            Some(file) => file.sync_all().map_err(RollWriterError::FileIOError),
            None => Ok(()),
        }
    }

    fn flush_file(&self) -> io::Result<()> {
        match self.lock().file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RollWriterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RollWriterMeta {
    /// Get the current time in the configured time zone.
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.time_zone)
    }

    /// Adopt the file at `path` if the next write fits, otherwise rotate it
    /// out. Creates the file when it does not exist yet.
    fn open_existing_or_new(&self, state: &mut RollWriterState, write_len: u64) -> Result<(), RollWriterError> {
        self.sweep();

        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return self.open_new(state),
            Err(err) => return Err(RollWriterError::FileIOError(err)),
        };

        if metadata.len() + write_len >= self.max_size {
            return self.rotate(state);
        }

        match fs::OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => {
                state.file = Some(file);
                state.size = metadata.len();
                Ok(())
            }
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "can't reopen log file, rotating it out");
                self.rotate(state)
            }
        }
    }

    /// Close the active file, move it to a backup and start an empty one.
    fn rotate(&self, state: &mut RollWriterState) -> Result<(), RollWriterError> {
        state.file = None;
        state.size = 0;
        self.open_new(state)?;
        self.sweep();
        Ok(())
    }

    /// Move an existing file at `path` to its backup name, then create a
    /// fresh file with the same mode.
    fn open_new(&self, state: &mut RollWriterState) -> Result<(), RollWriterError> {
        self.create_directory()?;

        let mut mode = self.file_mode;
        if let Ok(metadata) = fs::metadata(&self.path) {
            #[cfg(unix)]
            {
                mode = Some(metadata.permissions().mode() & 0o7777);
            }
            #[cfg(not(unix))]
            let _ = metadata;

            let backup_path = self.pattern.next_backup_path(&self.directory, self.now().date_naive());
            fs::rename(&self.path, &backup_path).map_err(|err| {
                self.rotation_failure(RotationCause::RenameFileError {
                    from: self.path.clone(),
                    to: backup_path.clone(),
                    error: err.to_string(),
                })
            })?;
            debug!(from = %self.path.display(), to = %backup_path.display(), "rotated log file");

            if let Some(compression) = &self.compression {
                spawn_compression(compression.clone(), backup_path);
            }
        }

        let file = self.create_log_file(mode)?;
        state.file = Some(file);
        state.size = 0;
        Ok(())
    }

    /// Create the log directory, including parents, if it is missing.
    fn create_directory(&self) -> Result<(), RollWriterError> {
        if self.directory.is_dir() {
            return Ok(());
        }
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        builder.mode(DEFAULT_DIR_MODE);
        builder.create(&self.directory).map_err(|err| {
            self.rotation_failure(RotationCause::CreateDirectoryFailed(
                self.directory.clone(),
                err.to_string(),
            ))
        })
    }

    /// Create an empty log file at `path`.
    ///
    /// When a mode is given it is applied explicitly after creation so the
    /// process umask does not narrow it.
    fn create_log_file(&self, mode: Option<u32>) -> Result<File, RollWriterError> {
        let mut open_options = fs::OpenOptions::new();
        open_options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        open_options.mode(mode.unwrap_or(DEFAULT_FILE_MODE));

        let log_file = open_options.open(&self.path).map_err(|err| {
            self.rotation_failure(RotationCause::CreateFileFailed(self.path.clone(), err.to_string()))
        })?;

        if let Some(mode) = mode {
            self.set_permissions(mode)?;
        }
        Ok(log_file)
    }

    /// Set the permissions of the active file (Unix-like systems only).
    fn set_permissions(&self, mode: u32) -> Result<(), RollWriterError> {
        #[cfg(unix)]
        {
            fs::set_permissions(&self.path, fs::Permissions::from_mode(mode)).map_err(|err| {
                self.rotation_failure(RotationCause::SetFilePermissionsError {
                    path: self.path.clone(),
                    error: err.to_string(),
                })
            })?;
        }
        #[cfg(not(unix))]
        {
            let _ = mode;
            warn!("Setting file permissions is not supported on non-Unix platforms");
        }
        Ok(())
    }

    /// Write all of `buf` to the open file, keeping the size in step with
    /// what actually landed even when the write fails part way.
    fn append(&self, state: &mut RollWriterState, buf: &[u8]) -> Result<usize, RollWriterError> {
        let Some(file) = state.file.as_mut() else {
            return Err(RollWriterError::WriteFailure {
                path: self.path.clone(),
                written: 0,
                error: io::Error::new(io::ErrorKind::NotConnected, "log file is not open"),
            });
        };

        let mut written = 0;
        while written < buf.len() {
            match file.write(&buf[written..]) {
                Ok(0) => {
                    state.size += written as u64;
                    return Err(RollWriterError::WriteFailure {
                        path: self.path.clone(),
                        written,
                        error: io::Error::new(io::ErrorKind::WriteZero, "failed to write whole buffer"),
                    });
                }
                Ok(n) => written += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    state.size += written as u64;
                    return Err(RollWriterError::WriteFailure {
                        path: self.path.clone(),
                        written,
                        error: err,
                    });
                }
            }
        }
        state.size += written as u64;
        Ok(written)
    }

    /// Prune backups by count and age. Never fails.
    fn sweep(&self) {
        let report = retention::sweep(
            &self.directory,
            &self.pattern,
            self.max_backups,
            self.max_age,
            self.now(),
        );
        if report.total_removed() > 0 || report.failed > 0 {
            debug!(
                by_count = report.removed_by_count,
                by_age = report.removed_by_age,
                failed = report.failed,
                removed = ?report.removed_paths,
                "pruned old log files"
            );
        }
    }

    fn rotation_failure(&self, cause: RotationCause) -> RollWriterError {
        RollWriterError::RotationFailure {
            path: self.path.clone(),
            cause,
        }
    }
}

/// Compress a backup on a detached thread. The writer never joins it; a
/// failure is only logged.
fn spawn_compression(compression: Compression, backup_path: PathBuf) {
    let spawned = thread::Builder::new()
        .name("rollwriter-compress".to_string())
        .spawn(move || match compression.compress(&backup_path) {
            Ok(compressed) => debug!(path = %compressed.display(), "compressed log file"),
            Err(err) => warn!(path = %backup_path.display(), error = %err, "failed to compress log file"),
        });
    if let Err(err) = spawned {
        warn!(error = %err, "failed to spawn compression thread");
    }
}

/// Errors that can occur when using the writer.
#[derive(Debug, thiserror::Error)]
pub enum RollWriterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Write of {len} bytes exceeds maximum file size {max_size}")]
    OversizedWrite { len: usize, max_size: u64 },
    #[error("Failed to write to '{path}' after {written} bytes: {error}")]
    WriteFailure {
        path: PathBuf,
        written: usize,
        #[source]
        error: io::Error,
    },
    #[error("Failed to rotate '{path}': {cause}")]
    RotationFailure { path: PathBuf, cause: RotationCause },
    #[error("File IO error: {0}")]
    FileIOError(#[from] io::Error),
}

/// The step of a rotation that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationCause {
    #[error("Failed to create directory '{0}': {1}")]
    CreateDirectoryFailed(PathBuf, String),
    #[error("Failed to create file '{0}': {1}")]
    CreateFileFailed(PathBuf, String),
    #[error("Failed to rename file from '{from}' to '{to}': {error}")]
    RenameFileError { from: PathBuf, to: PathBuf, error: String },
    #[error("Failed to set file permissions for '{path}': {error}")]
    SetFilePermissionsError { path: PathBuf, error: String },
}

#[allow(clippy::io_other_error)]
impl From<RollWriterError> for io::Error {
    fn from(err: RollWriterError) -> Self {
        match err {
            RollWriterError::OversizedWrite { .. } | RollWriterError::InvalidConfig(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
            RollWriterError::WriteFailure { error, .. } => error,
            RollWriterError::FileIOError(error) => error,
            RollWriterError::RotationFailure { .. } => io::Error::new(io::ErrorKind::Other, err.to_string()),
        }
    }
}

/// Provides a fluent interface for configuring `RollWriter` instances.
///
/// # Default Configuration
///
/// If not explicitly configured, the writer uses these defaults:
/// * Rotate at 100 MB
/// * Keep all backups, regardless of age
/// * No compression
/// * Local system time zone
/// * New files get mode 0644 (Unix), minus the process umask
///
/// # Examples
///
/// ```rust
/// use rollwriter::{Compression, RollWriterBuilder, RotationSize, TimeZone};
///
/// let writer = RollWriterBuilder::new("./logs/app.log")
///     .max_size(RotationSize::MB(50))
///     .max_backups(10)           // Keep the 10 most recent backups
///     .max_age(30)               // Drop backups older than 30 days
///     .time_zone(TimeZone::UTC)  // Date backups in UTC
///     .compression(Compression::Gzip)
///     .build()
///     .unwrap();
/// ```
pub struct RollWriterBuilder {
    path: PathBuf,
    max_size: RotationSize,
    max_age: u32,
    max_backups: usize,
    compression: Option<Compression>,
    time_zone: FixedOffset,
    file_mode: Option<u32>,
}

impl RollWriterBuilder {
    /// Create a new builder for the log file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        RollWriterBuilder {
            path: path.as_ref().to_path_buf(),
            max_size: RotationSize::MB(100),
            max_age: 0,
            max_backups: 0,
            compression: None,
            time_zone: Local::now().offset().to_owned(),
            file_mode: None,
        }
    }

    /// Set the size at which the active file is rotated.
    pub fn max_size(self, max_size: RotationSize) -> Self {
        Self { max_size, ..self }
    }

    /// Set the maximum age, in days, of backups to keep. 0 disables the limit.
    pub fn max_age(self, max_age: u32) -> Self {
        Self { max_age, ..self }
    }

    /// Set the maximum number of backups to keep. 0 disables the limit.
    pub fn max_backups(self, max_backups: usize) -> Self {
        Self { max_backups, ..self }
    }

    /// Set the compression type for rotated backups.
    pub fn compression(self, compression: Compression) -> Self {
        Self {
            compression: Some(compression),
            ..self
        }
    }

    /// Set the time zone used to date backups.
    pub fn time_zone(self, time_zone: TimeZone) -> Self {
        Self {
            time_zone: match time_zone {
                TimeZone::UTC => Utc::now().fixed_offset().offset().to_owned(),
                TimeZone::Local => Local::now().offset().to_owned(),
                TimeZone::Fix(fixed_offset) => fixed_offset,
            },
            ..self
        }
    }

    /// Set the file permissions for new log files (Unix-like systems only),
    /// in octal notation like when using chmod, e.g. 0o640. A file that
    /// already exists keeps its own mode across rotation.
    pub fn file_mode(self, mode: u32) -> Self {
        Self {
            file_mode: Some(mode),
            ..self
        }
    }

    /// Validate the configuration and build the writer. Performs no I/O.
    pub fn build(self) -> Result<RollWriter, RollWriterError> {
        let max_size = self
            .max_size
            .bytes()
            .ok_or_else(|| RollWriterError::InvalidConfig(format!("maximum file size {:?} overflows", self.max_size)))?;
        if max_size == 0 {
            return Err(RollWriterError::InvalidConfig(
                "maximum file size must be greater than zero".to_string(),
            ));
        }

        let filename = self
            .path
            .file_name()
            .ok_or_else(|| {
                RollWriterError::InvalidConfig(format!("log path '{}' has no file name", self.path.display()))
            })?
            .to_str()
            .ok_or_else(|| {
                RollWriterError::InvalidConfig(format!("log file name in '{}' is not UTF-8", self.path.display()))
            })?;
        let pattern = BackupPattern::new(filename).map_err(|err| RollWriterError::InvalidConfig(err.to_string()))?;

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(RollWriter {
            meta: RollWriterMeta {
                path: self.path,
                directory,
                pattern,
                max_size,
                max_age: self.max_age,
                max_backups: self.max_backups,
                compression: self.compression,
                time_zone: self.time_zone,
                file_mode: self.file_mode,
            },
            state: Mutex::new(RollWriterState::default()),
        })
    }
}

impl io::Write for RollWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RollWriter::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_file()
    }
}

impl io::Write for &RollWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        RollWriter::write(*self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_file()
    }
}
