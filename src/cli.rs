//! Interactive menu that dispatches to the ingestion entrypoints.
//!
//! The session is generic over its input and output so it can run against stdin/stdout or
//! in-memory buffers. End of input anywhere behaves like `exit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generator::{self, GeneratorSpec};
use crate::ingestion::{
    AnalysisOutcome, EntryCollector, InputSource, IngestionOptions, Submission, analyze_source, normalize_path,
};

/// Word that leaves the main menu (case-insensitive).
pub const EXIT_SENTINEL: &str = "exit";
/// Word that leaves the generator menu (case-insensitive).
pub const STOP_SENTINEL: &str = "stop";

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Options passed to every analysis.
    pub ingestion: IngestionOptions,
    /// Where the generator writes its data file.
    pub generator_output: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ingestion: IngestionOptions::default(),
            generator_output: PathBuf::from(generator::DEFAULT_OUTPUT),
        }
    }
}

/// One interactive session over `input`/`output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for the random generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Basic Data Analysis")?;
        writeln!(self.output, "Calculate the mean, median, and mode.\n")?;

        loop {
            writeln!(self.output, "What input mode do you want to use?")?;
            writeln!(self.output, "1. Whole list.")?;
            writeln!(self.output, "2. One at a time.")?;
            writeln!(self.output, "3. Text file.")?;
            writeln!(self.output, "4. Generate random data.")?;
            writeln!(self.output, "Type 'Exit' to exit.")?;

            let Some(choice) = self.prompt("\nEnter here(menu): ")? else {
                break;
            };
            let choice = choice.trim();
            if choice.eq_ignore_ascii_case(EXIT_SENTINEL) {
                break;
            }

            let keep_going = match choice {
                "1" => self.whole_list()?,
                "2" => self.one_at_a_time()?,
                "3" => self.text_file()?,
                "4" => self.generate()?,
                _ => {
                    writeln!(
                        self.output,
                        "\nError: Invalid menu option. Please enter 1, 2, 3, 4, or 'Exit'.\n"
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "\nExiting...")?;
        Ok(())
    }

    fn whole_list(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nWhole List.")?;
        writeln!(self.output, "Ex input:\n1, 2, 3, 4,...,n\nor\n(1, 2, 3, 4,...,n)")?;
        loop {
            let Some(line) = self.prompt("\nEnter here(whole): ")? else {
                return Ok(false);
            };
            match analyze_source(&InputSource::List(line), &self.config.ingestion) {
                Ok(outcome) => {
                    self.print_outcome(&outcome)?;
                    return Ok(true);
                }
                Err(e) => writeln!(self.output, "\nError: {e}")?,
            }
        }
    }

    fn one_at_a_time(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nOne at a time.")?;
        writeln!(self.output, "Put each element into the list one at a time; type 'done' to finish.")?;
        writeln!(self.output, "Every non-numerical element will not be included in the calculation.")?;

        let mut collector = EntryCollector::new();
        loop {
            writeln!(self.output, "\nCurrent: {:?}", collector.current())?;
            let Some(line) = self.prompt("\nEnter here(single): ")? else {
                return Ok(false);
            };
            match collector.submit(&line) {
                Submission::Added => {}
                Submission::Rejected(e) => writeln!(self.output, "\nError: {e}")?,
                Submission::Finished(ds) => {
                    let source = InputSource::Entries(ds.into_entries());
                    match analyze_source(&source, &self.config.ingestion) {
                        Ok(outcome) => self.print_outcome(&outcome)?,
                        Err(e) => writeln!(self.output, "\nError: {e}")?,
                    }
                    return Ok(true);
                }
            }
        }
    }

    fn text_file(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nText file.")?;
        writeln!(self.output, "One number per line; the file must end in .{}.", self.config.ingestion.extension)?;
        let Some(line) = self.prompt("\nEnter file path: ")? else {
            return Ok(false);
        };
        let source = InputSource::File(normalize_path(&line));
        match analyze_source(&source, &self.config.ingestion) {
            Ok(outcome) => self.print_outcome(&outcome)?,
            Err(e) => writeln!(self.output, "\nError: {e}")?,
        }
        Ok(true)
    }

    fn generate(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n--- Random number generator ---")?;
        writeln!(self.output, "1. Generate whole numbers.")?;
        writeln!(self.output, "2. Generate floating-point numbers.")?;
        writeln!(self.output, "Note: generated data overwrites {}.", self.config.generator_output.display())?;
        writeln!(self.output, "Type 'stop' to return.")?;

        let Some(mode) = self.prompt("Enter mode(number): ")? else {
            return Ok(false);
        };
        let mode = mode.trim().to_ascii_lowercase();
        if mode == STOP_SENTINEL {
            writeln!(self.output, "\nStopping...")?;
            return Ok(true);
        }
        if mode != "1" && mode != "2" {
            writeln!(self.output, "\nError: Selected mode does not exist.\n")?;
            return Ok(true);
        }

        let Some(start) = self.prompt_number::<i64>("\nEnter starting point(number): ")? else {
            return Ok(false);
        };
        let Some(end) = self.prompt_number::<i64>("Enter end point(number): ")? else {
            return Ok(false);
        };
        let decimals = if mode == "2" {
            match self.prompt_number::<usize>("Enter decimal places(number): ")? {
                Some(d) => Some(d),
                None => return Ok(false),
            }
        } else {
            None
        };
        let Some(count) = self.prompt_number::<usize>("Enter how many values(number): ")? else {
            return Ok(false);
        };

        let spec = match decimals {
            Some(decimals) => GeneratorSpec::Floats { start, end, decimals, count },
            None => GeneratorSpec::Integers { start, end, count },
        };
        let path = self.config.generator_output.clone();
        match generator::generate_to_file(&spec, &mut self.rng, &path) {
            Ok(n) => writeln!(self.output, "\n>> Saved {n} values to {}", path.display())?,
            Err(e) => writeln!(self.output, "\nError: {e}")?,
        }
        Ok(true)
    }

    fn print_outcome(&mut self, outcome: &AnalysisOutcome) -> io::Result<()> {
        if let Some(fault) = &outcome.fault {
            writeln!(self.output, "\nError: {fault}")?;
        }
        writeln!(self.output, "\n{}\n", outcome.report)
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_number<T: FromStr>(&mut self, text: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => writeln!(self.output, "\nError: Input is not a whole number. Try again.")?,
            }
        }
    }
}

