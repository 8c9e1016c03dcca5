//! Main application component.

use gloo::events::EventListener;
use netlearn::content::SECTIONS;
use netlearn::{InputMode, LearningMode, Settings};
use yew::prelude::*;

use crate::assignment::coarse_pointer;
use crate::components::SectionView;
use crate::state::{ShellAction, ShellModel};

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let model = use_reducer(|| ShellModel::new(Settings::default().scroll_threshold_px));
    let input_mode = use_memo((), |_| InputMode::from_coarse_pointer(coarse_pointer()));
    let shell = model.shell;

    // Scroll listener lives as long as the page root.
    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                let win = window.clone();
                EventListener::new(&window, "scroll", move |_| {
                    let offset = win.scroll_y().unwrap_or(0.0);
                    dispatcher.dispatch(ShellAction::Scrolled(offset));
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_dark = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(ShellAction::ToggleDarkMode))
    };
    let on_toggle_mode = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| model.dispatch(ShellAction::ToggleLearningMode))
    };
    let on_scroll_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class={classes!("app", shell.theme_class())}>
            <header class="header">
                <div class="header-left">
                    <h1>{ "netlearn" }</h1>
                    <p class="subtitle">{ "Computer Networking, Step by Step" }</p>
                </div>
                <div class="header-right">
                    <button class="mode-toggle" onclick={on_toggle_mode}>
                        { format!("Mode: {}", shell.learning_mode.label()) }
                    </button>
                    <button class="theme-toggle" onclick={on_toggle_dark} title="Toggle dark mode">
                        { if shell.dark_mode { "\u{2600}" } else { "\u{1F319}" } }
                    </button>
                </div>
            </header>

            <nav class="toc">
                { for SECTIONS.iter().map(|s| html! {
                    <a key={s.id} href={format!("#{}", s.id)}>{ s.title }</a>
                })}
            </nav>

            <main class="main">
                if shell.learning_mode == LearningMode::Exam {
                    <p class="mode-banner">{ "Exam mode: condensed facts and revision notes." }</p>
                }
                { for SECTIONS.iter().map(|section| html! {
                    <SectionView
                        key={section.id}
                        {section}
                        mode={shell.learning_mode}
                        dark_mode={shell.dark_mode}
                        input_mode={*input_mode}
                    />
                })}
            </main>

            if shell.show_scroll_top {
                <button class="scroll-top" onclick={on_scroll_top} title="Back to top">
                    { "\u{2191}" }
                </button>
            }

            <footer class="footer">
                <div class="footer-row">
                    <span>{ "All tables, packets and addresses are illustrative." }</span>
                </div>
                <div class="footer-row">
                    <span class="footer-left">{ "MIT License" }</span>
                    <span class="footer-build">
                        { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                    </span>
                </div>
            </footer>
        </div>
    }
}
