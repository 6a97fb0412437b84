use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod generate;
mod logging;
mod notebook;
mod render;
mod scenarios;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "notebook-fixtures", version)]
#[command(about = "Generate test notebooks for notebook validator integration testing", long_about = None)]
struct Cli {
    /// Output directory (path to the test notebooks repository).
    #[arg(long)]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    // 1) Build + check the catalog before touching the filesystem.
    let catalog = scenarios::catalog();
    catalog.validate()?;

    info!(root = %cli.output_dir.display(), notebooks = catalog.len(), "generating notebooks");

    // 2) Render + write.
    let mut stdout = std::io::stdout().lock();
    let written = generate::generate(&cli.output_dir, &catalog, &mut stdout)?;

    // 3) Summary.
    generate::print_summary(&mut stdout, written.len(), &cli.output_dir)?;
    info!(written = written.len(), "done");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_dir_is_required() {
        assert!(Cli::try_parse_from(["notebook-fixtures"]).is_err());
        let cli = Cli::try_parse_from(["notebook-fixtures", "--output-dir", "out/nbs"]).unwrap();
        assert_eq!(cli.output_dir, PathBuf::from("out/nbs"));
    }
}
