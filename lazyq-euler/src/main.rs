fn main() -> anyhow::Result<()> {
    lazyq_euler::cli()?;
    Ok(())
}
