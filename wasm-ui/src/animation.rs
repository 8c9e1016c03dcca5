//! Looping step animation with play/pause, reset and manual stepping.

use gloo::timers::callback::Interval;
use netlearn::{Emphasis, StepAnimator};
use yew::prelude::*;

use crate::state::{AnimatorAction, AnimatorModel};

#[derive(Properties, PartialEq)]
pub struct StepAnimationProps {
    pub title: &'static str,
    pub anim: StepAnimator,
}

#[function_component(StepAnimation)]
pub fn step_animation(props: &StepAnimationProps) -> Html {
    let model = {
        let anim = props.anim.clone();
        use_reducer(move || AnimatorModel::from(anim))
    };
    let anim = &model.anim;

    // One interval per play session. A pause, a restart or unmounting runs
    // the cleanup, which cancels the interval; a tick that was already
    // queued carries the old session and is dropped by the reducer.
    {
        let dispatcher = model.dispatcher();
        use_effect_with(
            (anim.is_playing(), anim.session(), anim.interval_ms()),
            move |&(playing, session, interval_ms)| {
                let handle = playing.then(|| {
                    Interval::new(interval_ms, move || {
                        dispatcher.dispatch(AnimatorAction::Tick(session));
                    })
                });
                move || {
                    if let Some(handle) = handle {
                        handle.cancel();
                    }
                }
            },
        );
    }

    let action = |make: fn() -> AnimatorAction| {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(make()))
    };
    let on_toggle = action(|| AnimatorAction::Toggle);
    let on_reset = action(|| AnimatorAction::Reset);
    let on_prev = action(|| AnimatorAction::Previous);
    let on_next = action(|| AnimatorAction::Next);

    let current = anim.current();
    let style = current.color.style();

    html! {
        <div class="animation">
            <div class="animation-header">
                <h3>{ props.title }</h3>
                <div class="button-group">
                    <button class="control-button" onclick={on_prev} title="Previous step">{ "\u{25C0}" }</button>
                    <button class="control-button play" onclick={on_toggle}>
                        { if anim.is_playing() { "Pause" } else { "Play" } }
                    </button>
                    <button class="control-button" onclick={on_next} title="Next step">{ "\u{25B6}" }</button>
                    <button class="control-button" onclick={on_reset}>{ "Reset" }</button>
                </div>
            </div>

            <div class="progress">
                <div
                    class={classes!("progress-bar", style.accent)}
                    style={format!("width: {}%", anim.progress_percent())}
                />
            </div>

            <ol class="step-list">
                { for anim.steps().iter().enumerate().map(|(i, step)| {
                    let emphasis = anim.emphasis(i);
                    let tag = step.color.style();
                    let onclick = {
                        let model = model.clone();
                        Callback::from(move |_: MouseEvent| model.dispatch(AnimatorAction::Select(i)))
                    };
                    let tone = if emphasis == Emphasis::Muted { tag.surface } else { tag.accent };
                    html! {
                        <li key={step.id}>
                            <button class={classes!("step-card", emphasis.css_class(), tone, tag.border)} {onclick}>
                                <span class="step-icon">{ step.icon.glyph() }</span>
                                <span class="step-name">{ step.name }</span>
                                <span class="step-number">{ format!("{}/{}", i + 1, anim.len()) }</span>
                            </button>
                        </li>
                    }
                })}
            </ol>

            <div class={classes!("step-detail", style.border)}>
                <h4 class={style.text}>
                    { format!("{} {}", current.icon.glyph(), current.name) }
                </h4>
                <p class="step-description">{ current.description }</p>
                if !current.detail.is_empty() {
                    <p class="step-extra">{ current.detail }</p>
                }
            </div>
        </div>
    }
}
