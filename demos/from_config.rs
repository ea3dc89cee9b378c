use {rollwriter::RollConfig, std::io::Write};

const CONFIG: &str = r#"{
    "filename": "./logs/service/app.log",
    "max_size": 1,
    "max_age": 14,
    "max_backups": 10,
    "compress": true
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: RollConfig = serde_json::from_str(CONFIG)?;
    config.validate()?;
    let writer = config.build()?;

    // `&RollWriter` is a sink too, so threads can share one writer.
    std::thread::scope(|scope| {
        for worker in 0..4 {
            let mut sink = &writer;
            scope.spawn(move || {
                for i in 0..10_000 {
                    writeln!(sink, "worker {worker}: request {i} handled").expect("write log line");
                }
            });
        }
    });
    writer.close()?;

    Ok(())
}
