//! Deserializable settings for a [`RollWriter`].

use {
    crate::{Compression, RollWriter, RollWriterBuilder, RollWriterError, RotationSize},
    serde::Deserialize,
    std::path::PathBuf,
};

/// Writer settings as they appear in an application's config file.
///
/// `max_size` is in megabytes and `max_age` in days. Zero for `max_age` or
/// `max_backups` disables that limit. Missing fields take the defaults from
/// [`RollConfig::default`].
///
/// ```
/// use rollwriter::RollConfig;
///
/// let config: RollConfig = serde_json::from_str(
///     r#"{ "filename": "./logs/app.log", "max_size": 50, "max_backups": 7 }"#,
/// ).unwrap();
/// let writer = config.build().unwrap();
/// assert_eq!(writer.path(), std::path::Path::new("./logs/app.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RollConfig {
    pub filename: PathBuf,
    pub max_size: u64,
    pub max_age: u32,
    pub max_backups: usize,
    pub compress: bool,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            max_size: 100,
            max_age: 0,
            max_backups: 0,
            compress: false,
        }
    }
}

impl RollConfig {
    /// Check the settings without building a writer.
    pub fn validate(&self) -> Result<(), RollWriterError> {
        self.builder().map(|_| ())
    }

    /// A builder carrying these settings, for further customisation
    /// (time zone, file mode) before `build`.
    pub fn builder(&self) -> Result<RollWriterBuilder, RollWriterError> {
        if self.filename.as_os_str().is_empty() {
            return Err(RollWriterError::InvalidConfig("filename must be set".to_string()));
        }
        if self.max_size == 0 {
            return Err(RollWriterError::InvalidConfig(
                "max_size must be at least 1 MB".to_string(),
            ));
        }

        let mut builder = RollWriterBuilder::new(&self.filename)
            .max_size(RotationSize::MB(self.max_size))
            .max_age(self.max_age)
            .max_backups(self.max_backups);
        if self.compress {
            builder = builder.compression(Compression::Gzip);
        }
        Ok(builder)
    }

    /// Validate and build the writer.
    pub fn build(&self) -> Result<RollWriter, RollWriterError> {
        self.builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: RollConfig = serde_json::from_str(
            r#"{
                "filename": "/var/log/svc/app.log",
                "max_size": 20,
                "max_age": 7,
                "max_backups": 3,
                "compress": true
            }"#,
        )
        .unwrap();
        assert_eq!(
            config,
            RollConfig {
                filename: PathBuf::from("/var/log/svc/app.log"),
                max_size: 20,
                max_age: 7,
                max_backups: 3,
                compress: true,
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: RollConfig = serde_json::from_str(r#"{ "filename": "app.log" }"#).unwrap();
        assert_eq!(config.max_size, 100);
        assert_eq!(config.max_age, 0);
        assert_eq!(config.max_backups, 0);
        assert!(!config.compress);
    }

    #[test]
    fn rejects_unknown_and_negative_fields() {
        assert!(serde_json::from_str::<RollConfig>(r#"{ "filename": "a.log", "maxsize": 1 }"#).is_err());
        assert!(serde_json::from_str::<RollConfig>(r#"{ "filename": "a.log", "max_size": -1 }"#).is_err());
    }

    #[test]
    fn zero_size_is_a_config_error() {
        let config = RollConfig {
            filename: PathBuf::from("app.log"),
            max_size: 0,
            ..RollConfig::default()
        };
        assert!(matches!(config.validate(), Err(RollWriterError::InvalidConfig(_))));
        assert!(matches!(config.build(), Err(RollWriterError::InvalidConfig(_))));
    }

    #[test]
    fn empty_filename_is_a_config_error() {
        let config = RollConfig::default();
        assert!(matches!(config.validate(), Err(RollWriterError::InvalidConfig(_))));
    }

    #[test]
    fn build_converts_megabytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = RollConfig {
            filename: dir.path().join("app.log"),
            max_size: 1,
            ..RollConfig::default()
        };
        let writer = config.build().unwrap();

        let chunk = vec![b'x'; 512 * 1024];
        writer.write(&chunk).unwrap();
        writer.write(&chunk).unwrap();
        assert_eq!(writer.size(), 1024 * 1024);

        let err = writer.write(&vec![b'x'; 1024 * 1024 + 1]).unwrap_err();
        assert!(matches!(err, RollWriterError::OversizedWrite { .. }));
    }
}
