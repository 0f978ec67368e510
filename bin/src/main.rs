use anyhow::{bail, Context, Result};
use clap::{ArgEnum, Parser, Subcommand};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use word_gauntlet::scorers::RankedCorpus;
use word_gauntlet::*;

/// Runs a word-guessing game in reverse, where the computer guesses the word, and
/// measures how often a guessing strategy wins across a whole word list.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of candidate words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Word length to play with; lines of any other length are skipped.
    #[clap(short = 'l', long, default_value_t = 5)]
    word_length: usize,

    /// Number of guesses allowed per game.
    #[clap(short = 'b', long, default_value_t = DEFAULT_TURN_BUDGET)]
    turn_budget: u32,

    /// The guessing strategy to play with.
    #[clap(arg_enum, short = 's', long, default_value = "common-letters")]
    strategy: StrategyChoice,

    /// Fixed opening word for the common-letters strategy.
    #[clap(short = 'o', long)]
    opening: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(ArgEnum, Clone, Copy, Debug)]
enum StrategyChoice {
    CommonLetters,
    Random,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play every word in the file as the secret and report how the strategy did.
    Evaluate,
    /// Run a single game with the given secret word.
    Single { word: String },
    /// Run an interactive game: you pick the secret and grade each guess with b/y/g.
    Interactive,
}

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Args::parse();

    let words_reader = io::BufReader::new(
        File::open(&args.words_file)
            .with_context(|| format!("failed to open words file {}", args.words_file))?,
    );
    let corpus = WordCorpus::from_reader(words_reader, args.word_length)
        .context("failed to read the words file")?;
    if corpus.is_empty() {
        bail!(
            "{} contains no {}-letter words",
            args.words_file,
            args.word_length
        );
    }
    println!("There are {} possible words.", corpus.len());

    let opening = match &args.opening {
        Some(word) => {
            let word = word.trim().to_lowercase();
            if word.len() != args.word_length {
                bail!(
                    "opening word '{}' is not {} letters long",
                    word,
                    args.word_length
                );
            }
            Some(Arc::<str>::from(word.as_str()))
        }
        None => None,
    };
    let ranking = RankedCorpus::new(&corpus);

    match &args.command {
        Command::Evaluate => run_evaluation(&args, &corpus, &ranking, opening)?,
        Command::Single { word } => play_single_game(word, &args, &ranking, opening)?,
        Command::Interactive => play_interactive_game(&args, &ranking, opening)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn common_letters<'a>(
    ranking: &'a RankedCorpus,
    opening: Option<Arc<str>>,
) -> CommonLettersStrategy<'a> {
    match opening {
        Some(word) => CommonLettersStrategy::with_opening(ranking, word),
        None => CommonLettersStrategy::new(ranking),
    }
}

fn run_evaluation(
    args: &Args,
    corpus: &WordCorpus,
    ranking: &RankedCorpus,
    opening: Option<Arc<str>>,
) -> Result<()> {
    let outcomes = match args.strategy {
        StrategyChoice::CommonLetters => evaluate_strategy(corpus, args.turn_budget, || {
            common_letters(ranking, opening.clone())
        }),
        StrategyChoice::Random => {
            evaluate_strategy(corpus, args.turn_budget, || RandomStrategy::new(ranking))
        }
    };

    let mut num_games_per_turns: HashMap<u32, u32> = HashMap::new();
    let mut losses: Vec<Arc<str>> = Vec::new();
    let mut failures: Vec<(Arc<str>, GameError)> = Vec::new();
    for (answer, outcome) in corpus.iter().zip(outcomes.iter()) {
        match outcome {
            Ok(outcome) if outcome.won => {
                *num_games_per_turns.entry(outcome.turns_used).or_insert(0) += 1;
            }
            Ok(_) => losses.push(Arc::clone(answer)),
            Err(error) => failures.push((Arc::clone(answer), *error)),
        }
    }
    let num_wins: u32 = num_games_per_turns.values().sum();

    println!("Played {} games. Wins per number of guesses:", outcomes.len());
    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut turn_counts = num_games_per_turns.keys().copied().collect::<Vec<u32>>();
    turn_counts.sort_unstable();
    for turns in turn_counts.iter() {
        println!("|{}|{}|", turns, num_games_per_turns.get(turns).unwrap());
    }

    if !losses.is_empty() {
        println!("\nUnsolved within {} guesses:", args.turn_budget);
        for word in losses.iter() {
            println!("\t{}", word);
        }
    }
    for (word, error) in failures.iter() {
        println!("\nGame for '{}' failed: {}", word, error);
    }

    println!(
        "\n**Win rate:** {:.1}% ({} of {})",
        num_wins as f64 * 100.0 / outcomes.len() as f64,
        num_wins,
        outcomes.len()
    );
    Ok(())
}

fn play_single_game(
    word: &str,
    args: &Args,
    ranking: &RankedCorpus,
    opening: Option<Arc<str>>,
) -> Result<()> {
    let secret = word.trim().to_lowercase();
    if secret.len() != args.word_length {
        bail!("'{}' is not {} letters long", secret, args.word_length);
    }
    let result = match args.strategy {
        StrategyChoice::CommonLetters => {
            play_game(&secret, args.turn_budget, common_letters(ranking, opening))
        }
        StrategyChoice::Random => play_game(&secret, args.turn_budget, RandomStrategy::new(ranking)),
    };
    let outcome = result.with_context(|| format!("the game for '{}' failed", secret))?;

    for guess in outcome.guesses.iter() {
        println!("\t{} {}", guess.word, feedback_to_mask(&guess.feedback));
    }
    if outcome.won {
        println!("Solved it! It took me {} guesses.", outcome.turns_used);
    } else {
        println!(
            "I still couldn't solve it after {} guesses :(",
            outcome.turns_used
        );
    }
    Ok(())
}

fn play_interactive_game(
    args: &Args,
    ranking: &RankedCorpus,
    opening: Option<Arc<str>>,
) -> Result<()> {
    println!("Choose a word from the word-list. Press enter once you've chosen.");
    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         After each guess, grade every letter with one character:\n\n\
           * 'b' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"gbgyb\""
    );

    match args.strategy {
        StrategyChoice::CommonLetters => {
            run_interactive(common_letters(ranking, opening), args.turn_budget)
        }
        StrategyChoice::Random => run_interactive(RandomStrategy::new(ranking), args.turn_budget),
    }
}

fn run_interactive<S: Strategy>(mut strategy: S, turn_budget: u32) -> Result<()> {
    let mut history: Vec<Guess> = Vec::new();
    for round in 1..=turn_budget {
        let word = match strategy.make_guess(&history) {
            Ok(word) => word,
            Err(GameError::NoCandidate) => {
                bail!("no word in the list matches that feedback; was a mask mistyped?")
            }
            Err(error) => return Err(error.into()),
        };
        println!("I'm guessing: {}. How did I do?", word);

        let feedback = loop {
            let mut buffer = String::new();
            io::stdin().read_line(&mut buffer)?;
            match parse_feedback_mask(&word, buffer.trim()) {
                Ok(marks) => break marks,
                Err(error) => println!("{}. Try again.", error),
            }
        };

        if feedback.iter().all(|mark| mark.color == MarkColor::Exact) {
            println!("I did it! It took me {} guesses.", round);
            return Ok(());
        }
        history.push(Guess { word, feedback });
    }

    println!("I couldn't guess it :(");
    Ok(())
}
