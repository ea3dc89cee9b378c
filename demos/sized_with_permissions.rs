use {
    rollwriter::{RollWriterBuilder, RotationSize},
    std::io::Write,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = RollWriterBuilder::new("./logs/sized.log")
        .max_size(RotationSize::KB(16)) // Rotate before 16 KB
        .max_backups(5) // Keep only last 5 backups
        .max_age(7) // And none older than a week
        .file_mode(0o640) // Set file permissions to: owner rw, group r, others none
        .build()?;

    // Simulate writing logs that will trigger size-based rotation
    for i in 1..=1000 {
        writeln!(
            logger,
            "Log entry #{}: This is a sample log message that will contribute to file size",
            i
        )?;
    }
    logger.close()?;

    Ok(())
}
