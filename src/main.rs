use clap::Parser;
use tasklet::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = tasklet::tui::run(cli.into_options()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
