mod report;

use numerus::{ConversionOptions, NamingSystem, convert, is_number};
use report::{Conversion, OutputMode};
use std::io::{self, BufRead, IsTerminal};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let inputs = match config.inputs.is_empty() {
        true => match read_stdin_lines() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        },
        false => config.inputs,
    };
    if inputs.is_empty() {
        eprintln!("error: no input provided\n\n{}", help_text());
        std::process::exit(2);
    }

    let conversions = convert_batch(&inputs, &config.options, config.jobs);
    let failures = report::print_run(&conversions, config.options.naming_system, config.mode, config.color);
    std::process::exit(failures.min(100) as i32);
}

/// Converts every input, preserving order. Inputs are split into at most
/// `jobs` contiguous chunks, one scoped worker thread per chunk.
fn convert_batch(inputs: &[String], options: &ConversionOptions, jobs: usize) -> Vec<Conversion> {
    let jobs = jobs.clamp(1, inputs.len().max(1));
    let chunk_len = inputs.len().div_ceil(jobs);
    let mut conversions = Vec::with_capacity(inputs.len());

    std::thread::scope(|scope| {
        let workers: Vec<_> = inputs
            .chunks(chunk_len)
            .map(|chunk| scope.spawn(move || chunk.iter().map(|input| convert_one(input, options)).collect::<Vec<_>>()))
            .collect();
        for worker in workers {
            match worker.join() {
                Ok(batch) => conversions.extend(batch),
                Err(_) => {
                    eprintln!("error: worker thread panicked");
                    std::process::exit(1);
                }
            }
        }
    });

    conversions
}

fn convert_one(input: &str, options: &ConversionOptions) -> Conversion {
    Conversion {
        input: input.to_string(),
        input_is_number: is_number(input, options),
        result: convert(input, options).map_err(|err| err.to_string()),
    }
}

struct CliConfig {
    inputs: Vec<String>,
    options: ConversionOptions,
    mode: OutputMode,
    jobs: usize,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut inputs: Vec<String> = Vec::new();
    let mut options = ConversionOptions::default();
    let mut mode = OutputMode::Descriptive;
    let mut jobs = 1usize;
    let mut color = io::stdout().is_terminal();
    let mut decimal_set = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numerus {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--no-thousands-separators" => options.use_thousands_separators = false,
            "--no-leading-zero" => options.force_leading_zero = false,
            "-i" | "--input" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                inputs.push(value);
            }
            "-s" | "--naming-system" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                options.naming_system = parse_naming_system(&value)?;
            }
            "-T" | "--thousands-separator" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                options.thousands_separator_symbol = parse_separator(&arg, &value)?;
                // Continental convention: a '.' grouping separator implies a
                // ',' decimal separator unless one was given explicitly.
                if options.thousands_separator_symbol == '.' && !decimal_set {
                    options.decimal_separator_symbol = ',';
                }
            }
            "-D" | "--decimal-separator" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                options.decimal_separator_symbol = parse_separator(&arg, &value)?;
                decimal_set = true;
            }
            "-o" | "--output-mode" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                mode = parse_output_mode(&value)?;
            }
            "-j" | "--jobs" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                jobs = value
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n >= 1)
                    .ok_or_else(|| format!("error: invalid --jobs '{value}' (expected a positive integer)"))?;
            }
            "--" => {
                inputs.extend(args);
                break;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => inputs.push(arg),
        }
    }

    options.validate().map_err(|err| format!("error: {err}"))?;
    Ok(CliConfig { inputs, options, mode, jobs, color })
}

fn parse_naming_system(value: &str) -> Result<NamingSystem, String> {
    match value {
        "short-scale" | "ss" => Ok(NamingSystem::ShortScale),
        "long-scale" | "ls" => Ok(NamingSystem::LongScale),
        _ => Err(format!("error: invalid naming system '{value}' (expected short-scale|ss|long-scale|ls)")),
    }
}

fn parse_separator(flag: &str, value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("error: {flag} expects a single character, got '{value}'")),
    }
}

fn parse_output_mode(value: &str) -> Result<OutputMode, String> {
    match value {
        "descriptive" => Ok(OutputMode::Descriptive),
        "associative" => Ok(OutputMode::Associative),
        "bare" => Ok(OutputMode::Bare),
        "suppress" => Ok(OutputMode::Suppress),
        _ => Err(format!(
            "error: invalid output mode '{value}' (expected descriptive|associative|bare|suppress)"
        )),
    }
}

fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| format!("error: failed to read stdin: {err}"))?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn help_text() -> String {
    format!(
        "numerus {version}

Converts numbers to English numerals and numerals back to numbers.
Each input is converted in whichever direction fits its shape.

Usage:
  numerus [OPTIONS] [--] <input...>
  numerus [OPTIONS] --input <text>

Options:
  -i, --input <text>             Add one input. May be repeated. If no inputs
                                 are given, lines are read from stdin.
  -s, --naming-system <system>   short-scale (default) or long-scale.
                                 Accepts the abbreviations ss and ls.
  -T, --thousands-separator <c>  Grouping symbol for number output and input.
                                 Default: ','. Setting '.' switches the
                                 decimal separator to ',' unless -D is given.
  -D, --decimal-separator <c>    Decimal symbol. Default: '.'.
  --no-thousands-separators      Render numbers without grouping symbols.
  --no-leading-zero              Render pure fractions without a leading
                                 \"zero\" word.
  -o, --output-mode <mode>       descriptive (default), associative, bare or
                                 suppress.
  -j, --jobs <n>                 Convert inputs on up to <n> threads.
  --color                        Force ANSI color output.
  --no-color                     Disable ANSI color output.
  -h, --help                     Show this help message.
  -V, --version                  Print version information.

Exit codes:
  0  Every input converted.
  N  N inputs failed to convert (capped at 100).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
