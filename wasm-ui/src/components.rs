//! Section layout and the static content blocks.

use netlearn::content::{BlockBody, FactStyle, FactTable, Section};
use netlearn::{InputMode, LearningMode, Outcome, ScenarioQuestion};
use yew::prelude::*;

use crate::animation::StepAnimation;
use crate::assignment::AssignmentQuiz;
use crate::state::{QuizAction, QuizModel};

/// One page section. Receives the root flags read-only.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub section: &'static Section,
    pub mode: LearningMode,
    pub dark_mode: bool,
    pub input_mode: InputMode,
}

#[function_component(SectionView)]
pub fn section_view(props: &SectionProps) -> Html {
    let section = props.section;
    html! {
        <section id={section.id} class="lesson-section">
            <h2 class="section-title">{ section.title }</h2>
            <p class="section-summary">{ section.summary }</p>
            // Keys use the block's position in the full list so a block's
            // state survives a mode switch that hides its neighbours.
            { for section.visible_blocks(props.mode).map(|(i, b)| html! {
                <div key={i} class={classes!("block", format!("block-{}", b.body.kind()))}>
                    { render_body(&b.body, props) }
                </div>
            })}
        </section>
    }
}

fn render_body(body: &BlockBody, props: &SectionProps) -> Html {
    match *body {
        BlockBody::Text(text) => html! { <p class="lesson-text">{ text }</p> },
        BlockBody::KeyPoints(points) => html! { <KeyPoints {points} /> },
        BlockBody::Animation(topic) => match topic.animator() {
            Ok(anim) => html! { <StepAnimation title={topic.title} {anim} /> },
            Err(e) => {
                log::error!("topic '{}': {e}", topic.id);
                html! {}
            }
        },
        BlockBody::Quiz(question) => html! { <QuizCard {question} /> },
        BlockBody::Facts(table, FactStyle::Cards) => html! { <FactCards {table} /> },
        BlockBody::Facts(table, FactStyle::Table) => {
            html! { <FactTableView {table} dark_mode={props.dark_mode} /> }
        }
        BlockBody::Assignment(set) => {
            html! { <AssignmentQuiz {set} input_mode={props.input_mode} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct KeyPointsProps {
    pub points: &'static [&'static str],
}

#[function_component(KeyPoints)]
pub fn key_points(props: &KeyPointsProps) -> Html {
    html! {
        <ul class="key-points">
            { for props.points.iter().map(|p| html! { <li>{ *p }</li> }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct FactProps {
    pub table: &'static FactTable,
    #[prop_or_default]
    pub dark_mode: bool,
}

/// Visualize-mode rendering: one card per row, first column as heading.
#[function_component(FactCards)]
pub fn fact_cards(props: &FactProps) -> Html {
    let table = props.table;
    html! {
        <div class="fact-cards">
            <h3>{ table.title }</h3>
            <div class="card-grid">
                { for table.rows.iter().map(|row| html! {
                    <div class="fact-card">
                        <h4>{ row.first().copied().unwrap_or_default() }</h4>
                        <dl>
                            { for table.columns.iter().zip(row.iter()).skip(1).map(|(col, cell)| html! {
                                <>
                                    <dt>{ *col }</dt>
                                    <dd>{ *cell }</dd>
                                </>
                            })}
                        </dl>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Exam-mode rendering of the same rows.
#[function_component(FactTableView)]
pub fn fact_table_view(props: &FactProps) -> Html {
    let table = props.table;
    html! {
        <div class="fact-table">
            <h3>{ table.title }</h3>
            <table class={classes!("facts", props.dark_mode.then_some("facts-dark"))}>
                <thead>
                    <tr>{ for table.columns.iter().map(|c| html! { <th>{ *c }</th> }) }</tr>
                </thead>
                <tbody>
                    { for table.rows.iter().map(|row| html! {
                        <tr>{ for row.iter().map(|c| html! { <td>{ *c }</td> }) }</tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizCardProps {
    pub question: &'static ScenarioQuestion,
}

#[function_component(QuizCard)]
pub fn quiz_card(props: &QuizCardProps) -> Html {
    let model = {
        let question = props.question;
        use_reducer(move || QuizModel::new(question))
    };
    let eval = &model.eval;
    let question = eval.question();

    let on_reset = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(QuizAction::Reset))
    };

    html! {
        <div class="quiz-card">
            <p class="quiz-prompt">{ question.prompt }</p>
            <div class="quiz-options">
                { for question.candidates.iter().map(|&candidate| {
                    let onclick = {
                        let model = model.clone();
                        Callback::from(move |_: MouseEvent| model.dispatch(QuizAction::Choose(candidate)))
                    };
                    let outcome = eval.candidate_outcome(candidate);
                    html! {
                        <button
                            class={classes!("quiz-option", outcome.map(Outcome::css_class))}
                            disabled={eval.answer().revealed}
                            {onclick}
                        >
                            { candidate }
                        </button>
                    }
                })}
            </div>
            if let Some(outcome) = eval.outcome() {
                <div class={classes!("quiz-result", outcome.css_class())}>
                    <strong>{ if outcome.is_correct() { "Correct! " } else { "Not quite. " } }</strong>
                    { eval.explanation() }
                    <button class="link-button" onclick={on_reset}>{ "Try again" }</button>
                </div>
            }
        </div>
    }
}
