use clap::Parser;
use zettel_cli::cli::Cli;

fn main() -> anyhow::Result<()> {
    zettel_cli::logging::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    zettel_cli::run(cli, &mut stdout.lock())
}
