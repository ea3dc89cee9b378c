use rollwriter::{Compression, RollWriterBuilder, RotationSize, TimeZone};
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let appender = RollWriterBuilder::new("./logs/tracing.log")
        .max_size(RotationSize::KB(64))
        .max_backups(3)
        .time_zone(TimeZone::Local)
        .compression(Compression::Gzip)
        .build()?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .finish()
        .try_init()?;

    for i in 1..=2_000 {
        tracing::info!(entry = i, "This is an info message");
        tracing::warn!(entry = i, "This is a warning message");
        tracing::error!(entry = i, "This is an error message");
    }

    Ok(())
}
