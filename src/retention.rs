//! Backup file naming and the retention sweep.
//!
//! Backups are named `<prefix>-<YYYY-MM-DD>-<index><ext>`, where `prefix` and
//! `ext` come from splitting the active file name at its last `.`. A
//! compressed backup keeps that name and appends the compression extension.
//!
//! The index is found by probing the directory for the first unused value on
//! the given date, so picking a name costs one `stat` per existing backup of
//! that day.

use {
    chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta},
    regex::Regex,
    std::{
        collections::HashMap,
        fs,
        io,
        path::{Path, PathBuf},
        time::SystemTime,
    },
    tracing::{debug, trace, warn},
};

/// Extensions a backup may carry once the compression job has run.
const COMPRESSED_EXTENSIONS: [&str; 2] = ["gz", "xz"];

/// Date layout used in backup names.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Split a file name at its last `.`: `app.log` gives `("app", ".log")`,
/// `app` gives `("app", "")`.
pub(crate) fn split_name(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) => filename.split_at(idx),
        None => (filename, ""),
    }
}

/// Builds and recognises backup names for one active file.
#[derive(Debug, Clone)]
pub(crate) struct BackupPattern {
    prefix: String,
    ext: String,
    regex: Regex,
}

impl BackupPattern {
    pub(crate) fn new(filename: &str) -> Result<Self, regex::Error> {
        let (prefix, ext) = split_name(filename);
        let compressed = COMPRESSED_EXTENSIONS.join("|");
        let regex = Regex::new(&format!(
            r"^{}-(\d{{4}}-\d{{2}}-\d{{2}})-([1-9]\d*){}(\.({compressed}))?$",
            regex::escape(prefix),
            regex::escape(ext),
        ))?;
        Ok(BackupPattern {
            prefix: prefix.to_string(),
            ext: ext.to_string(),
            regex,
        })
    }

    /// Name of the `index`-th backup rotated out on `date`.
    pub(crate) fn backup_name(&self, date: NaiveDate, index: u32) -> String {
        format!("{}-{}-{}{}", self.prefix, date.format(DATE_FORMAT), index, self.ext)
    }

    /// Path for the next backup taken on `date`: the smallest index with no
    /// plain or compressed file already present in `directory`.
    pub(crate) fn next_backup_path(&self, directory: &Path, date: NaiveDate) -> PathBuf {
        let mut index = 1;
        loop {
            let name = self.backup_name(date, index);
            let taken = directory.join(&name).exists()
                || COMPRESSED_EXTENSIONS
                    .iter()
                    .any(|ext| directory.join(format!("{name}.{ext}")).exists());
            if !taken {
                return directory.join(name);
            }
            index += 1;
        }
    }

    /// Parse the date and index out of a backup name. Names that do not
    /// match, or carry an impossible date, yield `None`.
    pub(crate) fn parse(&self, name: &str) -> Option<(NaiveDate, u32)> {
        let captures = self.regex.captures(name)?;
        let date = NaiveDate::parse_from_str(captures.get(1)?.as_str(), DATE_FORMAT).ok()?;
        let index = captures.get(2)?.as_str().parse().ok()?;
        Some((date, index))
    }
}

/// A backup found on disk. A backup being compressed shows up as both the
/// plain file and the compressed one; both paths belong to the same backup.
#[derive(Debug, Clone)]
pub(crate) struct Backup {
    pub(crate) paths: Vec<PathBuf>,
    pub(crate) date: NaiveDate,
    pub(crate) index: u32,
    /// Earliest modification time among `paths`, i.e. when the data was
    /// last written rather than when it was compressed.
    modified: SystemTime,
}

/// List the backups in `directory`, newest first.
///
/// Ordering is by date, then modification time, then index. Indexes are
/// reused once a gap opens up, so the index alone does not say which backup
/// of a day is the most recent.
pub(crate) fn list_backups(directory: &Path, pattern: &BackupPattern) -> io::Result<Vec<Backup>> {
    let mut found: HashMap<(NaiveDate, u32), Backup> = HashMap::new();
    for entry in fs::read_dir(directory)?.flatten() {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some((date, index)) = pattern.parse(name) else {
            trace!(name, "skipping file that is not a backup");
            continue;
        };
        let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        found
            .entry((date, index))
            .and_modify(|backup| {
                backup.paths.push(entry.path());
                backup.modified = backup.modified.min(modified);
            })
            .or_insert_with(|| Backup {
                paths: vec![entry.path()],
                date,
                index,
                modified,
            });
    }

    let mut backups: Vec<Backup> = found.into_values().collect();
    for backup in &mut backups {
        backup.paths.sort();
    }
    backups.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.modified.cmp(&a.modified))
            .then_with(|| b.index.cmp(&a.index))
    });
    Ok(backups)
}

/// Outcome of one retention sweep.
#[derive(Debug, Default)]
pub(crate) struct SweepReport {
    pub(crate) removed_by_count: usize,
    pub(crate) removed_by_age: usize,
    pub(crate) removed_paths: Vec<PathBuf>,
    pub(crate) failed: usize,
}

impl SweepReport {
    pub(crate) fn total_removed(&self) -> usize {
        self.removed_by_count + self.removed_by_age
    }
}

/// Delete backups beyond `max_backups` (newest kept) and backups dated
/// before `now - max_age_days`. A limit of zero disables that rule.
///
/// Failures never propagate: an unreadable directory ends the sweep early
/// and each failed removal is logged and counted.
pub(crate) fn sweep(
    directory: &Path,
    pattern: &BackupPattern,
    max_backups: usize,
    max_age_days: u32,
    now: DateTime<FixedOffset>,
) -> SweepReport {
    let mut report = SweepReport::default();
    if max_backups == 0 && max_age_days == 0 {
        return report;
    }

    let mut backups = match list_backups(directory, pattern) {
        Ok(backups) => backups,
        Err(err) => {
            debug!(directory = %directory.display(), error = %err, "can't read log directory, skipping retention");
            return report;
        }
    };

    let mut deletes = Vec::new();
    if max_backups > 0 && backups.len() > max_backups {
        deletes.extend(backups.split_off(max_backups).into_iter().map(|b| (b, false)));
    }
    if max_age_days > 0 {
        // A horizon reaching past the calendar's start expires nothing.
        let cutoff = TimeDelta::try_days(i64::from(max_age_days))
            .and_then(|horizon| now.naive_local().checked_sub_signed(horizon));
        if let Some(cutoff) = cutoff {
            deletes.extend(
                backups
                    .into_iter()
                    .filter(|b| b.date.and_time(NaiveTime::MIN) < cutoff)
                    .map(|b| (b, true)),
            );
        }
    }

    for (backup, by_age) in deletes {
        let mut removed = false;
        for path in backup.paths {
            match fs::remove_file(&path) {
                Ok(()) => {
                    removed = true;
                    report.removed_paths.push(path);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "failed to remove old log file");
                    report.failed += 1;
                }
            }
        }
        match (removed, by_age) {
            (true, true) => report.removed_by_age += 1,
            (true, false) => report.removed_by_count += 1,
            (false, _) => {}
        }
    }

    report
}
