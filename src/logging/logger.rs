use colored::Colorize;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

use crate::{
    CurrentRound,
    Oracle,
    Sampler,
    SamplingError,
};

const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 4;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,PoolSize,MaxScore,Tied,X,Y,Time\n";


/// Struct `Logger` runs a sampler and logs,
/// for each acquired point,
/// the pool size, the disagreement of the committee,
/// the point and the running time.
///
/// The rows are written to a CSV file with the header
/// ```text
/// Round,PoolSize,MaxScore,Tied,X,Y,Time
/// ```
/// where `Time` is the cumulative time in milliseconds.
/// The first point is not chosen by the committee,
/// so its `PoolSize`, `MaxScore` and `Tied` columns are empty.
///
/// # Example
/// ```no_run
/// use parliament::prelude::*;
///
/// let oracle = |p: &Point| -> Label { if p.y() > p.x() { 1 } else { 0 } };
/// let config = SessionConfig::new(100).label_space_size(2);
/// let sampler = CommitteeSampler::init(config).unwrap();
///
/// let mut logger = Logger::new(sampler, &oracle)
///     .print_every(10);
/// let points = logger.run("qbc.csv").unwrap();
/// ```
pub struct Logger<'a, S, O> {
    sampler: S,
    oracle: &'a O,
    round: usize,
}


impl<'a, S, O> Logger<'a, S, O> {
    /// Create a new instance of `Logger`.
    pub fn new(sampler: S, oracle: &'a O) -> Self {
        Self { sampler, oracle, round: DEFAULT_ROUND }
    }


    /// Returns the sampler.
    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}


impl<S, O> Logger<'_, S, O>
    where S: Sampler + CurrentRound,
          O: Oracle,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "POOL".bold().blue(),
            "MAX".bold().green(),
            "#".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "SIZE".bold().blue(),
            "SCORE".bold().green(),
            "TIED".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Sampler".bold(),
            self.sampler.name().bold().green(),
        );

        if let Some(info) = self.sampler.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Oracle".bold(),
            self.oracle.name().bold().green(),
            "".bold(),
        );
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        assert!(round > 0, "The interval must be positive");
        self.round = round;
        self
    }


    /// Run the sampler with logging.
    /// Note that this method is almost the same as `Sampler::run`.
    /// This method measures running time per round.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<S::Output, SamplingError>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.sampler.preprocess()?;
        let silent = self.round == usize::MAX;
        if !silent {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Sampling step
        for iter in 1.. {
            let n_acquired = self.sampler.acquired().len();

            // Start measuring time
            let now = Instant::now();

            let flow = self.sampler.sample(self.oracle, iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            // Rounds that acquire no point are not logged.
            let acquired = self.sampler.acquired();
            let point = acquired.last()
                .filter(|_| acquired.len() > n_acquired);
            if let Some(point) = point {
                let summary = self.sampler.current_round();
                let (pool, score, tied) = match summary {
                    Some(s) => (
                        s.pool_size.to_string(),
                        s.max_score.to_string(),
                        s.n_tied.to_string(),
                    ),
                    None => (String::new(), String::new(), String::new()),
                };

                // Write the results to `file`.
                let line = format!(
                    "{iter},{pool},{score},{tied},{},{},{time_acc}\n",
                    point.x(), point.y(),
                );
                file.write_all(line.as_bytes())?;

                let tag = if flow.is_break() {
                    Some("[FIN]".bold().bright_green())
                } else if iter % self.round == 0 {
                    Some("[LOG]".bold().magenta())
                } else {
                    None
                };
                if let Some(tag) = tag.filter(|_| !silent) {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\t{}\t({:>+.PREC_WIDTH$}, {:>+.PREC_WIDTH$})",
                        tag,
                        format!("{:>WIDTH$}", iter).red(),
                        format!("{:>WIDTH$}", pool).blue(),
                        format!("{:>WIDTH$}", score).green(),
                        format!("{:>WIDTH$}", tied).yellow(),
                        time_format(time_acc).bold().cyan(),
                        point.x(),
                        point.y(),
                    );
                }
            }

            if flow.is_break() { break; }
        }

        self.sampler.postprocess()
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format_success_01() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(12_345), " 12.345s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(7_380_000), " 02h 03m");
    }
}
