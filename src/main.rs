#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

/// Two-player Tic-Tac-Toe on the command line. Enter moves as one-based
/// "row col" pairs; X always moves first.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    tictactoe::init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let status = tictactoe::run_game(stdin.lock(), stdout.lock())?;
    log::debug!("exiting with status: {}", status);
    Ok(())
}
