/// Handle `goku version`.
pub fn handle() -> anyhow::Result<()> {
    println!("goku {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
