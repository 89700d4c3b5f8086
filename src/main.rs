use std::{
    env,
    io::{self, BufWriter},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use minefield::Limits;

const USAGE: &str = "\
Usage: minefield [--max-fields <N>]

Reads fields with mines from stdin, finds the mines and prints every
field with the number of mines around each tile. The last field should
have dimensions 0 0.

Example:

Input:
3 5
**...
.....
.*...
0 0

Output:
Field #1:
**100
33200
1*100

Logging goes to stderr and is configured with RUST_LOG.
";

/// What the command line asked for.
enum Command {
    Run(Limits),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut limits = Limits::default();
    while let Some(arg) = args.next() {
        let value = match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--max-fields" => args.next().ok_or("--max-fields needs a value")?,
            _ => match arg.strip_prefix("--max-fields=") {
                Some(value) => value.to_owned(),
                None => return Err(format!("unknown argument '{}'", arg)),
            },
        };
        limits.max_fields = value.parse()
            .map_err(|_| format!("bad value for --max-fields: '{}'", value))?;
    }
    Ok(Command::Run(limits))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let limits = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(limits)) => limits,
        Ok(Command::Help) => {
            eprint!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match minefield::process(stdin.lock(), BufWriter::new(stdout.lock()), &limits) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "processing failed");
            eprintln!("{}", e);
            ExitCode::from(2)
        }
    }
}
