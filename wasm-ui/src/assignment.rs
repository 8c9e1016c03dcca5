//! Drag-and-drop (or tap-to-place) assignment quiz.

use netlearn::{AssignmentItem, AssignmentSet, InputMode};
use yew::prelude::*;

use crate::state::{AssignmentAction, AssignmentModel};

/// Whether the primary pointer is coarse (touch screen).
pub fn coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
        .is_some_and(|m| m.matches())
}

/// Put the item id on the drag so the browser treats it as a text drag.
/// Returns whether the payload was set.
fn attach_drag_payload(e: &DragEvent, id: &str) -> bool {
    let Some(dt) = e.data_transfer() else {
        log::debug!("drag for '{id}' has no data transfer");
        return false;
    };
    match dt.set_data("text/plain", id) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("drag data for '{id}' not set: {err:?}");
            false
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AssignmentProps {
    pub set: &'static AssignmentSet,
    pub input_mode: InputMode,
}

#[function_component(AssignmentQuiz)]
pub fn assignment_quiz(props: &AssignmentProps) -> Html {
    let model = {
        let (set, mode) = (props.set, props.input_mode);
        use_reducer(move || AssignmentModel::new(set, mode))
    };
    let board = &model.board;
    let set = board.set();
    let pending = model.pending();

    // Chips sit inside drop targets; a tap must not also reach the target.
    let dispatch = |action: fn(&'static str) -> AssignmentAction, id: &'static str| {
        let model = model.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            model.dispatch(action(id));
        })
    };

    let item_chip = |item: &'static AssignmentItem| {
        let verdict = board
            .is_checked()
            .then(|| board.is_correct(item.id))
            .flatten()
            .map(|ok| if ok { "chip-correct" } else { "chip-wrong" });
        let class = classes!(
            "item-chip",
            (pending == Some(item.id)).then_some("chip-pending"),
            verdict
        );
        match model.mode {
            InputMode::Drag => {
                let ondragstart = {
                    let model = model.clone();
                    let id = item.id;
                    Callback::from(move |e: DragEvent| {
                        attach_drag_payload(&e, id);
                        model.dispatch(AssignmentAction::DragStart(id));
                    })
                };
                let ondragend = {
                    let model = model.clone();
                    Callback::from(move |_: DragEvent| model.dispatch(AssignmentAction::DragEnd))
                };
                html! {
                    <span key={item.id} {class} draggable="true" {ondragstart} {ondragend}>
                        { item.label }
                    </span>
                }
            }
            InputMode::Tap => html! {
                <button key={item.id} {class} onclick={dispatch(AssignmentAction::TapItem, item.id)}>
                    { item.label }
                </button>
            },
        }
    };

    let on_check = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(AssignmentAction::Check))
    };
    let on_reset = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(AssignmentAction::Reset))
    };

    html! {
        <div class="assignment">
            <h3>{ set.title }</h3>
            <p class="hint">{ set.instructions }{ " " }<em>{ model.mode.hint() }</em></p>

            <div class="item-pool">
                { for board.unplaced().into_iter().map(&item_chip) }
            </div>

            <div class="target-grid">
                { for set.targets.iter().map(|target| {
                    let id = target.id;
                    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
                    let ondrop = {
                        let model = model.clone();
                        Callback::from(move |e: DragEvent| {
                            e.prevent_default();
                            model.dispatch(AssignmentAction::DropOn(id));
                        })
                    };
                    let onclick = dispatch(AssignmentAction::TapTarget, id);
                    html! {
                        <div key={id} class="drop-target" {ondragover} {ondrop} {onclick}>
                            <div class="target-label">{ target.label }</div>
                            <div class="target-items">
                                { for board.assigned_to(id).into_iter().map(|item| html! {
                                    <span key={item.id} class="placed">
                                        { item_chip(item) }
                                        if !board.is_checked() {
                                            <button
                                                class="chip-remove"
                                                title="Remove"
                                                onclick={dispatch(AssignmentAction::Unassign, item.id)}
                                            >
                                                { "\u{00D7}" }
                                            </button>
                                        }
                                    </span>
                                })}
                            </div>
                        </div>
                    }
                })}
            </div>

            <div class="button-group">
                <button class="run-button" onclick={on_check} disabled={!board.is_complete()}>
                    { "Check answers" }
                </button>
                <button class="control-button" onclick={on_reset}>{ "Reset" }</button>
            </div>

            if board.is_checked() {
                <div class="assignment-score">
                    <strong>{ format!("Score: {}/{} ({}%)", board.score().correct, board.score().total, board.score().percent()) }</strong>
                    <ul>
                        { for board.target_scores().into_iter().map(|ts| html! {
                            <li class={if ts.score.is_perfect() { "score-perfect" } else { "score-partial" }}>
                                { format!("{}: {}/{}", ts.target.label, ts.score.correct, ts.score.total) }
                            </li>
                        })}
                    </ul>
                </div>
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_coarse_pointer_query_runs() {
        // Headless browsers report a fine pointer; the call must not panic.
        let _ = coarse_pointer();
    }

    #[wasm_bindgen_test]
    fn test_drag_without_data_transfer_is_reported() {
        let e = DragEvent::new("dragstart").unwrap();
        assert!(!attach_drag_payload(&e, "hub"));
    }
}
