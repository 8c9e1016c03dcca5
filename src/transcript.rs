//! Plain-text rendering for the terminal runner.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::animator::{Emphasis, StepAnimator};
use crate::content::{BlockBody, FactTable, Section};
use crate::error::{LearnError, Result};
use crate::mode::LearningMode;
use crate::quiz::{Outcome, SelectionEvaluator};

/// One frame: every step on its own line, the active one marked.
///
/// `>` marks the active step, `!` an active special step.
pub fn render_frame(anim: &StepAnimator, elapsed_ms: u64) -> String {
    let mut out = format!(
        "t={:>6}ms  step {}/{}\n",
        elapsed_ms,
        anim.index() + 1,
        anim.len()
    );
    for (i, step) in anim.steps().iter().enumerate() {
        let marker = match anim.emphasis(i) {
            Emphasis::Active => '>',
            Emphasis::Pulsing => '!',
            Emphasis::Muted => ' ',
        };
        let _ = write!(out, " {marker} {:<24}", step.name);
        if marker != ' ' {
            let _ = write!(out, " {}", step.description);
        }
        out.push('\n');
    }
    out
}

/// Play `anim` for `ticks` periods and collect one frame per tick,
/// starting with the frame at t=0.
pub fn play(anim: &mut StepAnimator, ticks: usize) -> Vec<String> {
    anim.start();
    let period = u64::from(anim.interval_ms());
    let mut frames = vec![render_frame(anim, 0)];
    for k in 1..=ticks as u64 {
        anim.advance_by(period);
        frames.push(render_frame(anim, k * period));
    }
    frames
}

pub fn render_table(table: &FactTable) -> String {
    let widths = table.column_widths();
    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<width$}", width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let mut out = format!("{}\n", table.title);
    out.push_str(&line(table.columns));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for &row in table.rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// The question with lettered candidates, plus the result once answered.
pub fn render_quiz(eval: &SelectionEvaluator) -> String {
    let q = eval.question();
    let mut out = format!("{}\n", q.prompt);
    for (i, c) in q.candidates.iter().enumerate() {
        let letter = (b'A' + i as u8) as char;
        let mark = match eval.candidate_outcome(c) {
            Some(Outcome::Correct) => "  [correct]",
            Some(Outcome::Incorrect) => "  [your answer]",
            None => "",
        };
        let _ = writeln!(out, "  {letter}) {c}{mark}");
    }
    if let Some(outcome) = eval.outcome() {
        let verdict = if outcome.is_correct() {
            "Correct!"
        } else {
            "Not quite."
        };
        let _ = writeln!(out, "\n{verdict} {}", eval.explanation());
    }
    out
}

/// A section outline: which blocks show in `mode`.
pub fn render_section(section: &Section, mode: LearningMode) -> String {
    let mut out = format!("{} [{}]\n", section.title, section.id);
    for block in section.blocks_for(mode) {
        let what = match block.body {
            BlockBody::Text(_) => String::new(),
            BlockBody::KeyPoints(points) => format!("{} points", points.len()),
            BlockBody::Animation(topic) => topic.id.to_string(),
            BlockBody::Quiz(q) => q.id.to_string(),
            BlockBody::Facts(table, _) => table.id.to_string(),
            BlockBody::Assignment(set) => set.id.to_string(),
        };
        let _ = writeln!(out, "  - {:<11} {what}", block.body.kind());
    }
    out
}

/// Full text of the blocks shown in `mode`: prose, bullet points, tables,
/// unanswered questions and step lists.
pub fn render_section_detail(section: &Section, mode: LearningMode) -> String {
    let mut out = format!("{}\n{}\n", section.title, section.summary);
    for block in section.blocks_for(mode) {
        out.push('\n');
        match block.body {
            BlockBody::Text(text) => {
                let _ = writeln!(out, "{text}");
            }
            BlockBody::KeyPoints(points) => {
                for p in points {
                    let _ = writeln!(out, "  * {p}");
                }
            }
            BlockBody::Animation(topic) => {
                let _ = writeln!(out, "{} ({} ms per step)", topic.title, topic.interval_ms);
                for (i, step) in topic.steps.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}: {}", i + 1, step.name, step.description);
                }
            }
            BlockBody::Quiz(q) => out.push_str(&render_quiz(&SelectionEvaluator::new(q))),
            BlockBody::Facts(table, _) => out.push_str(&render_table(table)),
            BlockBody::Assignment(set) => {
                let _ = writeln!(out, "{}: {}", set.title, set.instructions);
                let items: Vec<_> = set.items.iter().map(|i| i.label).collect();
                let _ = writeln!(out, "  items:   {}", items.join(", "));
                let targets: Vec<_> = set.targets.iter().map(|t| t.label).collect();
                let _ = writeln!(out, "  targets: {}", targets.join(", "));
            }
        }
    }
    out
}

/// Write `text` to `path`, creating parent directories.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    let io_err = |source| LearnError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, text).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{facts, quizzes, section, topics};

    #[test]
    fn test_render_frame_marks_active() {
        let anim = topics::CIRCUIT_SWITCHING.animator().unwrap();
        let frame = render_frame(&anim, 0);
        assert!(frame.starts_with("t=     0ms  step 1/4"));
        assert!(frame.contains(" > Call Setup"));
        assert!(frame.contains("   Call Teardown"));
    }

    #[test]
    fn test_collision_frame_uses_bang() {
        let mut anim = topics::HUB_COLLISION.animator().unwrap();
        anim.select(3).unwrap();
        assert!(render_frame(&anim, 0).contains(" ! Collision!"));
    }

    #[test]
    fn test_play_wraps() {
        let mut anim = topics::TCP_HANDSHAKE.animator().unwrap();
        let frames = play(&mut anim, 5);
        assert_eq!(frames.len(), 6);
        assert!(frames[4].contains(" > SYN "));
        assert!(frames[5].contains(" > SYN-ACK"));
        assert!(frames[5].starts_with("t= 10000ms"));
    }

    #[test]
    fn test_render_table_aligns() {
        let text = render_table(&facts::TCP_VS_UDP);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "TCP vs UDP");
        assert!(lines[1].starts_with("Property     | TCP"));
        assert_eq!(lines.len(), 3 + facts::TCP_VS_UDP.rows.len());
    }

    #[test]
    fn test_render_quiz_after_answer() {
        let mut eval = SelectionEvaluator::new(&quizzes::MODEL_IN_USE);
        eval.choose("OSI Model").unwrap();
        let text = render_quiz(&eval);
        assert!(text.contains("A) TCP/IP Model  [correct]"));
        assert!(text.contains("B) OSI Model  [your answer]"));
        assert!(text.contains(quizzes::MODEL_IN_USE.explanation));
    }

    #[test]
    fn test_render_section_for_mode() {
        let s = section("hubs").unwrap();
        let visual = render_section(s, LearningMode::Visualize);
        assert!(visual.contains("animation   hub-collision"));
        let exam = render_section(s, LearningMode::Exam);
        assert!(!exam.contains("animation"));
        assert!(exam.contains("key-points  2 points"));
    }

    #[test]
    fn test_render_section_detail_follows_mode() {
        let s = section("hubs").unwrap();
        let visual = render_section_detail(s, LearningMode::Visualize);
        assert!(visual.contains("4. Collision!"));
        let exam = render_section_detail(s, LearningMode::Exam);
        assert!(!exam.contains("Collision!:"));
        assert!(exam.contains("  * "));
    }

    #[test]
    fn test_write_output_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs").join("handshake.txt");
        write_output(&path, "frame\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "frame\n");
    }

    #[test]
    fn test_write_output_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let err = write_output(&blocker.join("out.txt"), "frame").unwrap_err();
        assert!(matches!(err, LearnError::Io { .. }));
        assert!(err.to_string().contains("out.txt"));
    }
}
