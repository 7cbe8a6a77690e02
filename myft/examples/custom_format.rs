//! Write a small record file, inspect its header and read it back
//!
//! Run with `RUST_LOG=debug cargo run --example custom_format` to see the
//! codec's log output.

use myft::{inspect_file, read_file, write_file, HexPreview, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::temp_dir().join("custom_format.myft");
    let data = [100, 200, 300, 400, 500];

    write_file(&path, &data)?;
    let bytes = std::fs::read(&path)?;
    println!("Wrote {} records to {}", data.len(), path.display());
    println!("  Raw: {}", HexPreview(&bytes));

    let summary = inspect_file(&path)?;
    println!("Header: {summary}");

    let records = read_file(&path)?;
    for (i, record) in records.iter().enumerate() {
        println!("  Record {}: {record}", i + 1);
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
