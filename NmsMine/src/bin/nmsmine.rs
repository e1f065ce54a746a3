fn main() -> anyhow::Result<()> {
    nmsmine::cli::run_cli()
}
