use clap::Parser;
use pl0_frontend::{
    ast::{printer::to_sexpr, NodeCounter, Program},
    frontend::{token::render_tokens, Diagnostic, Token},
    read,
    utils::errors::{Pl0Error, Pl0Result},
};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "PL/0 front-end: tokenizes and parses PL/0 programs",
    long_about = "PL/0 front-end: tokenizes and parses PL/0 programs.\n\
                 It performs lexical analysis and parsing, then reports every\n\
                 syntax error it finds together with the recovered syntax tree.\n\
                 \n\
                 Example usage:\n\
                 pl0-frontend input.pl0                 # Check syntax\n\
                 pl0-frontend input.pl0 --tokens        # Print the token listing\n\
                 pl0-frontend input.pl0 --show-ast      # Display abstract syntax tree\n\
                 pl0-frontend input.pl0 --verbose       # Verbose output\n\
                 pl0-frontend input.pl0 --timing        # Show phase timing"
)]
struct Cli {
    /// PL/0 source file (.pl0)
    path: PathBuf,

    /// Print one line per token
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree as an S-expression
    #[arg(long)]
    show_ast: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Report each phase on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print phase timings and counts
    #[arg(short, long)]
    timing: bool,
}

// Statistics for the timing table
#[derive(Debug, Default)]
struct AnalysisStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
    diagnostic_count: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Perform lexical analysis phase
fn lexical_analysis(source: &str, stats: &mut AnalysisStats, verbose: bool) -> Vec<Token> {
    let lexer_start = Instant::now();
    let tokens = pl0_frontend::tokenize(source);
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        eprintln!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        eprintln!("  Generated {} tokens", stats.token_count);
    }

    tokens
}

// Perform parsing phase
fn parsing_phase(
    tokens: &[Token],
    stats: &mut AnalysisStats,
    verbose: bool,
) -> (Program, Vec<Diagnostic>) {
    let parser_start = Instant::now();
    let (program, diagnostics) = pl0_frontend::parse(tokens);
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    stats.ast_size = NodeCounter::count_nodes(&program);
    stats.diagnostic_count = diagnostics.len();

    if verbose {
        eprintln!("Parsing completed in {:.3}s", stats.parser_time);
        eprintln!("  Built {} AST nodes, {} diagnostics", stats.ast_size, stats.diagnostic_count);
    }

    (program, diagnostics)
}

// Main analysis function
fn analyze(args: &Cli) -> Pl0Result<AnalysisStats> {
    let start_time = Instant::now();
    let mut stats = AnalysisStats::default();

    if args.verbose {
        eprintln!("Starting analysis of: {}", args.path.display());
    }

    if !args.path.exists() {
        return Err(Pl0Error::missing_input(&args.path));
    }

    let source = read(&args.path)?;
    if args.verbose {
        eprintln!("Read {} bytes from input file", source.len());
    }

    let tokens = lexical_analysis(&source, &mut stats, args.verbose);
    if args.tokens {
        println!("\nTokens:");
        print!("{}", render_tokens(&tokens));
    }

    let (program, diagnostics) = parsing_phase(&tokens, &mut stats, args.verbose);
    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        println!("{}", to_sexpr(&program));
    }

    let color = !args.no_color;
    for diagnostic in &diagnostics {
        eprint!("{}", diagnostic.render(&source, color));
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    if args.timing {
        print_stats(&stats);
    }

    if diagnostics.is_empty() {
        Ok(stats)
    } else {
        Err(Pl0Error::Syntax {
            count: diagnostics.len(),
        })
    }
}

// Print detailed analysis statistics
fn print_stats(stats: &AnalysisStats) {
    println!("\nAnalysis Statistics:");
    println!("+---------------------+-----------+");
    println!("| Phase               | Time (s)  |");
    println!("+---------------------+-----------+");
    println!("| Lexical Analysis    | {:>9.3} |", stats.lexer_time);
    println!("| Parsing             | {:>9.3} |", stats.parser_time);
    println!("+---------------------+-----------+");
    println!("| Total Time          | {:>9.3} |", stats.total_time);
    println!("+---------------------+-----------+");

    println!("\nCode Metrics:");
    println!("  Tokens:       {}", stats.token_count);
    println!("  AST Nodes:    {}", stats.ast_size);
    println!("  Diagnostics:  {}", stats.diagnostic_count);
}

fn main() {
    let args = Cli::parse();

    match analyze(&args) {
        Ok(_) => {
            if args.verbose {
                eprintln!("No syntax errors found.");
            }
        }
        Err(e) => fatal(&format!("Analysis failed: {}", e)),
    }
}
