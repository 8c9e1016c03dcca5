//! Terminal runner for the networking lessons.
//!
//! Usage:
//!   netlearn sections [<section>] [--mode exam]
//!   netlearn topics
//!   netlearn questions
//!   netlearn animate <topic> [--ticks N] [--interval-ms MS] [--realtime] [-o FILE]
//!   netlearn quiz <question> [--answer TEXT]

use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};
use netlearn::content::{self, SECTIONS};
use netlearn::transcript::{
    self, render_frame, render_quiz, render_section, render_section_detail,
};
use netlearn::{LearnError, LearningMode, SelectionEvaluator, Settings};

/// Play networking lesson animations and quizzes in the terminal.
#[derive(Parser)]
#[command(name = "netlearn")]
struct Cli {
    /// Show run details and library events on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List sections, or print one section in full
    Sections {
        /// Section id to print in full
        id: Option<String>,

        /// Display mode
        #[arg(short, long, value_enum, default_value_t = ModeArg::Visualize)]
        mode: ModeArg,
    },

    /// Play a topic's step animation
    Animate {
        /// Topic id (see `netlearn topics`)
        topic: String,

        /// Number of ticks to play after the first frame
        #[arg(short, long)]
        ticks: Option<usize>,

        /// Override the topic's tick period
        #[arg(long)]
        interval_ms: Option<u32>,

        /// Wait one period between frames
        #[arg(long)]
        realtime: bool,

        /// Write frames to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List animation topics
    Topics,

    /// Ask a scenario question
    Quiz {
        /// Question id (see `netlearn questions`)
        question: String,

        /// Answer to grade; omit to just print the question
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// List scenario questions
    Questions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Visualize,
    Exam,
}

impl From<ModeArg> for LearningMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Visualize => LearningMode::Visualize,
            ModeArg::Exam => LearningMode::Exam,
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), LearnError> {
    let mut settings = Settings::default();

    match cli.command {
        Command::Sections { id, mode } => {
            let mode = LearningMode::from(mode);
            match id {
                Some(id) => {
                    let section = content::section(&id).ok_or(LearnError::UnknownSection(id))?;
                    print!("{}", render_section_detail(section, mode));
                }
                None => {
                    for section in SECTIONS {
                        print!("{}", render_section(section, mode));
                    }
                }
            }
        }
        Command::Topics => {
            for t in content::ALL_TOPICS {
                println!(
                    "{:<20} {:>2} steps  {:>4} ms  {}",
                    t.id,
                    t.steps.len(),
                    t.interval_ms,
                    t.title
                );
            }
        }
        Command::Animate {
            topic,
            ticks,
            interval_ms,
            realtime,
            output,
        } => {
            let topic = content::topic(&topic).ok_or(LearnError::UnknownTopic(topic))?;
            settings.realtime = realtime;
            let interval = settings.interval_for(topic.interval_ms, interval_ms);
            let mut anim = netlearn::StepAnimator::new(topic.steps, interval)?;
            let ticks = ticks.unwrap_or(topic.steps.len());

            if cli.verbose {
                eprintln!("Topic:    {} ({})", topic.title, topic.id);
                eprintln!("Interval: {interval} ms");
                eprintln!("Ticks:    {ticks}");
                eprintln!("Output:   {}", output.as_deref().unwrap_or("(stdout)"));
            }

            if let Some(path) = output {
                let frames = transcript::play(&mut anim, ticks);
                transcript::write_output(Path::new(&path), &frames.join("\n"))?;
                if cli.verbose {
                    eprintln!("Wrote {} frames to {path}", frames.len());
                }
            } else if settings.realtime {
                anim.start();
                print_frame(&render_frame(&anim, 0));
                for k in 1..=ticks as u64 {
                    thread::sleep(Duration::from_millis(u64::from(interval)));
                    anim.advance_by(u64::from(interval));
                    print_frame(&render_frame(&anim, k * u64::from(interval)));
                }
            } else {
                for frame in transcript::play(&mut anim, ticks) {
                    print_frame(&frame);
                }
            }
        }
        Command::Questions => {
            for q in content::ALL_QUESTIONS {
                println!("{:<18} {}", q.id, q.prompt);
            }
        }
        Command::Quiz { question, answer } => {
            let q = content::question(&question).ok_or(LearnError::UnknownQuestion(question))?;
            let mut eval = SelectionEvaluator::new(q);
            if let Some(answer) = answer {
                match resolve_answer(q.candidates, &answer) {
                    Some(candidate) => eval.choose(candidate)?,
                    None => eval.choose(&answer)?,
                };
            }
            print!("{}", render_quiz(&eval));
        }
    }

    Ok(())
}

/// Accept either the full candidate text or its letter ("b", "B").
fn resolve_answer(candidates: &'static [&'static str], answer: &str) -> Option<&'static str> {
    let mut chars = answer.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_alphabetic()
    {
        let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        return candidates.get(idx).copied();
    }
    candidates
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(answer.trim()))
}

fn print_frame(frame: &str) {
    let mut stdout = io::stdout().lock();
    if writeln!(stdout, "{frame}").and_then(|_| stdout.flush()).is_err() {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_mode(args: &[&str]) -> Option<ModeArg> {
        match Cli::try_parse_from(args).ok()?.command {
            Command::Sections { mode, .. } => Some(mode),
            _ => None,
        }
    }

    #[test]
    fn test_mode_flag_values() {
        assert_eq!(sections_mode(&["netlearn", "sections"]), Some(ModeArg::Visualize));
        assert_eq!(
            sections_mode(&["netlearn", "sections", "--mode", "exam"]),
            Some(ModeArg::Exam)
        );
        assert_eq!(LearningMode::from(ModeArg::Exam), LearningMode::Exam);
    }

    #[test]
    fn test_mode_flag_rejects_unknown_values() {
        for bad in ["visual", "quiz", "Visualise"] {
            let err = Cli::try_parse_from(["netlearn", "sections", "--mode", bad])
                .err()
                .unwrap();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{bad}");
        }
    }

    #[test]
    fn test_resolve_answer_by_letter_or_text() {
        let candidates: &'static [&'static str] = &["TCP/IP Model", "OSI Model"];
        assert_eq!(resolve_answer(candidates, "b"), Some("OSI Model"));
        assert_eq!(resolve_answer(candidates, "tcp/ip model"), Some("TCP/IP Model"));
        assert_eq!(resolve_answer(candidates, "z"), None);
    }
}
