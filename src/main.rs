use anyhow::Result;

fn main() -> Result<()> {
    rg_matches::cli::init_logging();
    rg_matches::cli::run()
}
