//! Behavior checks across the whole literal dataset.

use netlearn::content::{
    ALL_ASSIGNMENTS, ALL_QUESTIONS, ALL_TOPICS, BlockBody, SECTIONS, quizzes, topics,
};
use netlearn::{
    AnimationState, AssignmentBoard, DragAdapter, LearningMode, Outcome, SelectionEvaluator,
    StepAnimator, TapAdapter, Visibility,
};

#[test]
fn test_looping_invariant_every_topic() {
    for topic in ALL_TOPICS {
        let mut anim = topic.animator().unwrap();
        let n = anim.len();
        anim.start();
        for k in 0..(3 * n + 2) {
            assert_eq!(anim.index(), k % n, "{} after {} ticks", topic.id, k);
            anim.tick();
        }
    }
}

#[test]
fn test_looping_invariant_clock_driven() {
    for topic in ALL_TOPICS {
        let mut anim = topic.animator().unwrap();
        let n = anim.len();
        anim.start();
        for k in 1..=(2 * n + 1) {
            assert_eq!(anim.advance_by(u64::from(topic.interval_ms)), 1);
            assert_eq!(anim.index(), k % n, "{}", topic.id);
        }
    }
}

#[test]
fn test_pause_idempotent() {
    let mut anim = topics::PACKET_SWITCHING.animator().unwrap();
    anim.start();
    anim.tick();
    anim.tick();
    anim.pause();
    let paused_at = anim.index();
    for _ in 0..5 {
        anim.pause();
        assert!(!anim.is_playing());
        assert_eq!(anim.index(), paused_at);
    }
}

#[test]
fn test_reset_from_any_reachable_state() {
    for topic in ALL_TOPICS {
        for index in 0..topic.steps.len() {
            for playing in [false, true] {
                let mut anim = topic.animator().unwrap();
                anim.select(index).unwrap();
                if playing {
                    anim.start();
                }
                anim.reset();
                assert_eq!(
                    anim.state(),
                    AnimationState {
                        index: 0,
                        playing: false
                    }
                );
            }
        }
    }
}

#[test]
fn test_no_tick_after_pause() {
    let mut anim = topics::DNS_RESOLUTION.animator().unwrap();
    anim.start();
    let scheduled = anim.session();
    anim.tick();
    anim.pause();
    let paused_at = anim.index();

    // A timer callback that was already queued fires after the pause.
    assert!(!anim.tick_session(scheduled));
    anim.tick();
    assert_eq!(anim.advance_by(60_000), 0);
    assert_eq!(anim.index(), paused_at);

    // Restarting does not revive the old timer either.
    anim.start();
    assert!(!anim.tick_session(scheduled));
    assert_eq!(anim.index(), paused_at);
}

#[test]
fn test_four_step_scenario_at_2500ms() {
    let mut anim = StepAnimator::new(topics::CIRCUIT_SWITCHING.steps, 2500).unwrap();
    assert_eq!(anim.len(), 4);
    anim.start();
    assert_eq!(anim.index(), 0);

    let mut now = 0u64;
    let mut seen = Vec::new();
    for _ in 0..4 {
        // Frames land a few ms late, as real timers do.
        anim.advance_by(2497);
        now += 2497;
        assert_eq!(anim.index(), seen.len() % 4);
        anim.advance_by(3);
        now += 3;
        seen.push(anim.index());
    }
    assert_eq!(now, 10_000);
    assert_eq!(seen, vec![1, 2, 3, 0]);
}

#[test]
fn test_selection_correctness_for_every_question() {
    for q in ALL_QUESTIONS {
        for candidate in q.candidates {
            let mut eval = SelectionEvaluator::new(q);
            let outcome = eval.choose(candidate).unwrap();
            let expected = if *candidate == q.correct {
                Outcome::Correct
            } else {
                Outcome::Incorrect
            };
            assert_eq!(outcome, expected, "{}: {}", q.id, candidate);
            assert_eq!(eval.outcome(), Some(expected));
        }
    }
}

#[test]
fn test_model_question_explanation_unchanged() {
    let mut eval = SelectionEvaluator::new(&quizzes::MODEL_IN_USE);
    assert_eq!(
        quizzes::MODEL_IN_USE.candidates,
        &["TCP/IP Model", "OSI Model", "Both equally", "Neither"]
    );
    assert_eq!(eval.choose("OSI Model").unwrap(), Outcome::Incorrect);
    assert_eq!(eval.outcome(), Some(Outcome::Incorrect));
    assert_eq!(eval.explanation(), quizzes::MODEL_IN_USE.explanation);
}

#[test]
fn test_mode_gating_per_section() {
    for section in SECTIONS {
        for mode in LearningMode::ALL {
            let hidden = match mode {
                LearningMode::Exam => Visibility::VisualizeOnly,
                LearningMode::Visualize => Visibility::ExamOnly,
            };
            let shown: Vec<usize> = section.visible_blocks(mode).map(|(i, _)| i).collect();
            for (i, block) in section.blocks.iter().enumerate() {
                assert_eq!(
                    shown.contains(&i),
                    block.visibility != hidden,
                    "{} block {} ({}) in {:?}",
                    section.id,
                    i,
                    block.body.kind(),
                    mode
                );
            }
            assert_eq!(section.blocks_for(mode).len(), shown.len());
        }
    }
}

#[test]
fn test_every_referenced_topic_builds() {
    for section in SECTIONS {
        for block in section.blocks {
            if let BlockBody::Animation(topic) = block.body {
                assert!(topic.animator().is_ok(), "{}", topic.id);
            }
        }
    }
}

#[test]
fn test_drag_and_tap_reach_the_same_score() {
    for set in ALL_ASSIGNMENTS {
        let mut by_drag = AssignmentBoard::new(set);
        let mut by_tap = AssignmentBoard::new(set);
        let mut drag = DragAdapter::default();
        let mut tap = TapAdapter::default();
        // Place everything on the first target.
        let first = set.targets[0].id;
        for item in set.items {
            drag.drag_start(&by_drag, item.id).unwrap();
            drag.drop_on(&mut by_drag, first).unwrap();
            tap.tap_item(&by_tap, item.id).unwrap();
            tap.tap_target(&mut by_tap, first).unwrap();
        }
        assert_eq!(by_drag.score(), by_tap.score(), "{}", set.id);
        assert_eq!(by_drag.target_scores(), by_tap.target_scores());
    }
}
