use yew::prelude::*;
use yew_hooks::use_raf;

use super::in_view::use_in_view;

const COUNT_UP_MS: u32 = 2500;

/// Value shown at `progress` (0..=1) of the count-up. Eases out so the
/// last digits settle slowly.
pub fn counted(target: u32, progress: f64) -> u32 {
    let t = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    (f64::from(target) * eased).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Counts from 0 up to `value` the first time it scrolls into view.
#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), 0.5);

    html! {
        <span ref={node} aria-label={format!("{}{}", props.value, props.suffix)}>
            if seen {
                <Counter value={props.value} />
            } else {
                {"0"}
            }
            {props.suffix.clone()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct CounterProps {
    value: u32,
}

#[function_component(Counter)]
fn counter(props: &CounterProps) -> Html {
    let progress = use_raf(COUNT_UP_MS, 0);
    html! { {counted(props.value, progress)} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(counted(37, 0.0), 0);
        assert_eq!(counted(37, 1.0), 37);
    }

    #[test]
    fn progress_outside_range_is_clamped() {
        assert_eq!(counted(90, -0.5), 0);
        assert_eq!(counted(90, 3.0), 90);
    }

    #[test]
    fn never_decreases() {
        let mut last = 0;
        for step in 0..=100 {
            let value = counted(1000, f64::from(step) / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn eases_out() {
        // Past the halfway mark on value before halfway on time.
        assert!(counted(100, 0.5) > 50);
    }
}
