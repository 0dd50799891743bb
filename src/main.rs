#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use connect_four::{init_logging, CliGame, GameStatus, Player};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
#[cfg(feature = "std")]
enum FirstPlayer {
    #[default]
    X,
    O,
}

#[cfg(feature = "std")]
impl From<FirstPlayer> for Player {
    fn from(p: FirstPlayer) -> Self {
        match p {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game on this terminal (the default).
    Play {
        #[arg(long, value_enum, default_value_t = FirstPlayer::X, help = "Player who drops the first piece")]
        first: FirstPlayer,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let first = match cli.command {
        Some(Commands::Play { first }) => first,
        None => FirstPlayer::default(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = CliGame::new(first.into());
    let status = game.run(stdin.lock(), stdout.lock())?;
    if status == GameStatus::InProgress {
        println!("Game abandoned after {} moves.", game.session().moves());
    }
    Ok(())
}
