use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::content::FaqContent;

/// Which item is open after `clicked` is activated. At most one is open.
pub fn next_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let index = props.index;
    let question_id = format!("faq-question-{}", index);
    let answer_id = format!("faq-answer-{}", index);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };
    // Handled here so the native button click does not toggle twice.
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(index);
            }
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                id={question_id.clone()}
                class="faq-question"
                aria-expanded={props.open.to_string()}
                aria-controls={answer_id.clone()}
                {onclick}
                {onkeydown}
            >
                <h3 class="question-text">{props.question}</h3>
                <span class="toggle-icon" aria-hidden="true">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div id={answer_id} class="faq-answer" role="region" aria-labelledby={question_id}>
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub content: &'static FaqContent,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| open.set(next_open(*open, index)))
    };

    html! {
        <section class="faq-section" aria-labelledby="faq-title">
            <style>
                {r#"
                .faq-section { padding: 6rem 1.5rem; }
                .faq-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 500;
                    margin: 0 0 4rem;
                    color: #111827;
                }
                .faq-list { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
                .faq-item {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(229, 231, 235, 0.8);
                    border-radius: 0.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: start;
                    border: none;
                    background: none;
                    cursor: pointer;
                    border-radius: 0.5rem;
                }
                .faq-question:focus-visible { outline: 4px solid #6ee7b7; }
                .question-text {
                    margin: 0;
                    padding-inline-end: 1rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #111827;
                }
                .toggle-icon { font-size: 1.25rem; color: #6b7280; flex-shrink: 0; }
                .faq-item.open .toggle-icon { color: #059669; }
                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                    border-top: 1px solid rgba(229, 231, 235, 0.8);
                    animation: faq-open 0.3s ease-in-out;
                }
                .faq-answer p { margin: 1rem 0 0; color: #4b5563; line-height: 1.7; }
                @keyframes faq-open {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
            <h2 id="faq-title">{props.content.title}</h2>
            <div class="faq-list" role="region" aria-labelledby="faq-title">
                { for props.content.items.iter().enumerate().map(|(index, item)| html! {
                    <FaqItem
                        key={index}
                        {index}
                        question={item.question}
                        answer={item.answer}
                        open={*open == Some(index)}
                        on_toggle={on_toggle.clone()}
                    />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_item_closes_the_other() {
        assert_eq!(next_open(None, 2), Some(2));
        assert_eq!(next_open(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(next_open(Some(1), 1), None);
    }
}
