use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::{LogTarget, init_logging};
use word_scramble::tui::TuiInterface;
use word_scramble::{ConfigurationError, Game, game_loop, load_dictionary, load_root_words};

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_target = if cli.tui { LogTarget::File } else { LogTarget::Stderr };
    match init_logging(cli.verbose, log_target) {
        Ok(Some(path)) => eprintln!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Logging disabled: {e}"),
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn run(cli: &word_scramble::cli::Cli) -> Result<(), RunError> {
    let word_list = load_root_words(cli.word_list_path.as_deref())?;
    let dictionary = load_dictionary(cli.dictionary_path.as_deref(), &cli.language)?;
    log::info!(
        "Loaded {} root words and {} dictionary words",
        word_list.len(),
        dictionary.len()
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(word_list, dictionary, rng, &cli.language)?;

    if cli.tui {
        let mut interface = TuiInterface::new()?;
        game_loop(&mut game, &mut interface)?;
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut interface)?;
    }
    Ok(())
}
