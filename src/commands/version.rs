use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysdeck version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
