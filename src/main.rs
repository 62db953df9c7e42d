use std::fs;

use clap::Parser;

/// trn loads a configuration written in the trn language and prints its
/// structured-data rendering.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the trn source file.
    input: String,

    /// Also write the rendering to this file.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.input);
                     std::process::exit(1);
                 });

    let env = match trn::parse(&source) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let rendered = match trn::to_text(&env) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to render the configuration: {e}");
            std::process::exit(1);
        },
    };

    println!("{rendered}");

    if let Some(path) = args.output {
        if let Err(e) = fs::write(&path, &rendered) {
            eprintln!("Failed to write '{path}': {e}");
            std::process::exit(1);
        }
    }
}
