fn main() -> anyhow::Result<()> {
    stellarpak::cli::run_cli()
}
