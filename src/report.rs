use numerus::NamingSystem;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Outcome of converting one input line.
pub struct Conversion {
    pub input: String,
    pub input_is_number: bool,
    pub result: Result<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `"1,905" is the numeral "one thousand nine hundred five"`.
    Descriptive,
    /// `1,905 = one thousand nine hundred five`.
    Associative,
    /// The converted text only.
    Bare,
    /// Nothing; only the exit code reports failures.
    Suppress,
}

/// Prints every conversion per the output mode (successes to stdout, errors
/// to stderr) and returns the number of failures.
pub fn print_run(
    conversions: &[Conversion],
    naming_system: NamingSystem,
    mode: OutputMode,
    color: bool,
) -> usize {
    let palette = ansi::Palette::new(color);
    let mut failures = 0;

    for conversion in conversions {
        match &conversion.result {
            Ok(output) => {
                if mode != OutputMode::Suppress {
                    println!("{}", format_success(conversion, output, naming_system, mode, &palette));
                }
            }
            Err(message) => {
                failures += 1;
                if mode != OutputMode::Suppress {
                    eprintln!(
                        "{} {}: {}",
                        palette.paint("error:", ansi::RED),
                        palette.paint(format!("\"{}\"", conversion.input), ansi::BLUE),
                        palette.paint(message, ansi::RED),
                    );
                }
            }
        }
    }

    failures
}

fn format_success(
    conversion: &Conversion,
    output: &str,
    naming_system: NamingSystem,
    mode: OutputMode,
    palette: &ansi::Palette,
) -> String {
    let input = palette.paint(format!("\"{}\"", conversion.input.trim()), ansi::BLUE);
    let result = palette.bold(palette.paint(format!("\"{output}\""), ansi::YELLOW));
    match mode {
        OutputMode::Descriptive => {
            let (kind, annotation) = if conversion.input_is_number {
                ("the numeral", scale_annotation(naming_system))
            } else {
                ("the number", "")
            };
            format!("{input} is {kind} {result}{}", palette.dim(annotation))
        }
        OutputMode::Associative => format!("{input} = {result}"),
        OutputMode::Bare => output.to_string(),
        OutputMode::Suppress => String::new(),
    }
}

fn scale_annotation(naming_system: NamingSystem) -> &'static str {
    match naming_system {
        NamingSystem::ShortScale => " (short scale)",
        NamingSystem::LongScale => " (long scale)",
    }
}
