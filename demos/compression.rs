use {
    rollwriter::{Compression, RollWriterBuilder, RotationSize},
    std::{io::Write, time::Instant},
};

const LOG_FOLDER: &str = "./logs/compression";

/// Writes never wait for compression, so logging time should not grow with
/// the compression level.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut logger = RollWriterBuilder::new(format!("{LOG_FOLDER}/gzip.log"))
        .max_size(RotationSize::KB(256))
        .max_backups(5)
        .compression(Compression::Gzip)
        .build()?;

    for i in 1..=35_000 {
        writeln!(
            logger,
            "Log entry #{i}: This is a sample log message that will contribute to file size"
        )?;
    }
    logger.flush()?;
    println!("Done logging: {:?}", start.elapsed());

    #[cfg(feature = "xz")]
    {
        let mut logger = RollWriterBuilder::new(format!("{LOG_FOLDER}/xz.log"))
            .max_size(RotationSize::KB(256))
            .max_backups(5)
            .compression(Compression::XZ)
            .build()?;
        for i in 1..=35_000 {
            writeln!(
                logger,
                "Log entry #{i}: This is a sample log message that will contribute to file size"
            )?;
        }
        logger.flush()?;
    }

    #[cfg(not(feature = "xz"))]
    {
        println!("XZ compression example skipped. Enable 'xz' feature to run it.");
    }

    // Give the background compression a moment before listing.
    std::thread::sleep(std::time::Duration::from_secs(1));
    println!("File | Bytes");
    for entry in std::fs::read_dir(LOG_FOLDER)?.flatten() {
        let size = entry.metadata().map_or(0, |m| m.len());
        println!("{:?} : {size} Bytes", entry.file_name());
    }

    Ok(())
}
