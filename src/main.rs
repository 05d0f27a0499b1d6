// Ficheiro: src/main.rs
// Descrição: Ponto de entrada principal da aplicação. Linha de comandos para
// gerar lances, seguir capturas forçadas, encontrar um lance e correr o Perft.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use motor_damas::{
    find_move_text, generate_forced_captures, perft_divide, run_perft, GeneratorConfig, Move,
    MoveGenerator, Position, Variant,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Draughts variant (international, english, italian, spanish, russian,
    /// brazilian, canadian, thai, frisian)
    #[arg(short, long, default_value = "international")]
    variant: String,

    /// JSON file with generator rules, replacing the variant's rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// Position text; defaults to the variant's initial position
    #[arg(short, long)]
    position: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the moves of the side to move
    Moves {
        /// Also list the moves rejected by the capture rule
        #[arg(long)]
        all: bool,
    },
    /// Play forced captures while they are the only legal move
    Forced,
    /// Find the move leading to the given position
    Find { target: String },
    /// Count the leaf nodes of the move tree
    Perft {
        depth: u8,
        /// Show the count for each root move
        #[arg(long)]
        divide: bool,
    },
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(args) {
        log::error!("Erro fatal: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut variant = Variant::by_name(&args.variant)?;
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        variant.config = serde_json::from_str::<GeneratorConfig>(&text)
            .with_context(|| format!("invalid generator config in {}", path.display()))?;
    }
    log::debug!("variante {}: {:?}", variant.name, variant.config);

    let generator = variant.generator();
    let position = match &args.position {
        Some(text) => variant.position(text)?,
        None => variant.initial_position(),
    };
    println!("{}", position.diagram());

    match args.command {
        Command::Moves { all } => print_moves(&position, &generator, all),
        Command::Forced => {
            let moves = generate_forced_captures(&position, &generator);
            print_list(&moves);
        }
        Command::Find { target } => match find_move_text(&position, &generator, &target)? {
            Some(m) => println!("{}", m),
            None => println!("nenhum lance encontrado"),
        },
        Command::Perft { depth, divide } => {
            if divide {
                for (m, nodes) in perft_divide(&position, &generator, depth) {
                    println!("{}: {}", m.notation(), nodes);
                }
            }
            let result = run_perft(&position, &generator, depth);
            println!("Nós totais: {}", result.nodes);
            println!("Tempo decorrido: {:?}", result.elapsed);
        }
    }
    Ok(())
}

fn print_moves(position: &Position, generator: &MoveGenerator, all: bool) {
    let generated = generator.generate(position);
    print_list(generated.legal_moves());
    if all {
        println!("-- ilegais --");
        print_list(generated.illegal_moves());
    }
}

fn print_list(moves: &[Move]) {
    for m in moves {
        println!("{}", m);
    }
}
