use std::{
    ffi::OsString,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use lox::lexer::lexer::{tokenize_with_options, ScanOptions, ScanResult};

const USAGE: &str = "Usage: lox [--alnum-idents] [script]";

const HELP: &str = "\
    lox - scan lox source into tokens

    USAGE:
        lox [--alnum-idents] [script]

    OPTIONS:
        --alnum-idents      Allow digits after the first character of an identifier (x1).
        -h, --help          Print this message.

    ARGS:
        script              The file to scan. Without it, an interactive prompt scans each
                            line as it is typed.
";

const EXIT_USAGE: i32 = 64;
const EXIT_DATA_ERROR: i32 = 65;
const EXIT_NO_INPUT: i32 = 66;
const EXIT_IO_ERROR: i32 = 74;

#[derive(Debug, PartialEq)]
struct LoxArgs {
    options: ScanOptions,
    script: Option<PathBuf>,
}

fn main() {
    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            eprintln!("{}", USAGE);
            process::exit(EXIT_USAGE);
        }
    };

    match args.script {
        Some(path) => run_file(&path, args.options),
        None => {
            if let Err(e) = run_prompt(args.options) {
                eprintln!("Error: {}", e);
                process::exit(EXIT_IO_ERROR);
            }
        }
    }
}

fn parse_args(mut pargs: pico_args::Arguments) -> Result<LoxArgs, String> {
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    let options = ScanOptions {
        alphanumeric_identifiers: pargs.contains("--alnum-idents"),
    };

    let mut remaining = pargs.finish();
    if let Some(flag) = remaining.iter().find(|arg| is_flag(arg)) {
        return Err(format!("unknown option {:?}", flag));
    }
    if remaining.len() > 1 {
        return Err(format!("expected at most one script, got {}", remaining.len()));
    }

    Ok(LoxArgs {
        options,
        script: remaining.pop().map(PathBuf::from),
    })
}

fn is_flag(arg: &OsString) -> bool {
    arg.to_str()
        .is_some_and(|arg| arg.len() > 1 && arg.starts_with('-'))
}

fn run_file(path: &Path, options: ScanOptions) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error opening source file {}: {}", path.display(), e);
            process::exit(EXIT_NO_INPUT);
        }
    };

    let result = tokenize_with_options(&source, options);
    report(&result);

    if result.had_error() {
        process::exit(EXIT_DATA_ERROR);
    }
}

fn run_prompt(options: ScanOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        // Each line is its own scan; errors never carry over to the next prompt.
        report(&tokenize_with_options(&line, options));
    }
}

fn report(result: &ScanResult) {
    for token in &result.tokens {
        println!("{}", token);
    }
    for error in &result.errors {
        eprintln!("{}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn test_parse_args_script() {
        let parsed = parse_args(args(&["main.lox"])).unwrap();

        assert_eq!(parsed.script, Some(PathBuf::from("main.lox")));
        assert!(!parsed.options.alphanumeric_identifiers);
    }

    #[test]
    fn test_parse_args_prompt() {
        let parsed = parse_args(args(&[])).unwrap();

        assert_eq!(parsed.script, None);
    }

    #[test]
    fn test_parse_args_alnum_idents() {
        let parsed = parse_args(args(&["--alnum-idents", "main.lox"])).unwrap();

        assert!(parsed.options.alphanumeric_identifiers);
        assert_eq!(parsed.script, Some(PathBuf::from("main.lox")));
    }

    #[test]
    fn test_parse_args_too_many_scripts() {
        assert!(parse_args(args(&["a.lox", "b.lox"])).is_err());
    }

    #[test]
    fn test_parse_args_unknown_flag() {
        assert!(parse_args(args(&["--phase", "a.lox"])).is_err());
    }
}
