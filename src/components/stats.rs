//! Impact counters
//!
//! The "Our Impact in Numbers" figures count up from zero the first time the
//! stats band scrolls into view.

use dioxus::prelude::*;
use raggaeirre_core::effects::COUNTER_FRAME;
use raggaeirre_core::CounterAnimation;

use crate::context::use_site;

#[component]
pub fn ImpactCounters(visible: ReadOnlySignal<bool>) -> Element {
    let site = use_site();
    let finals = site.catalog().stats.counter_texts();

    let mut texts = use_signal(|| finals.iter().map(|(_, text)| text.clone()).collect::<Vec<_>>());
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !visible() || *started.peek() {
            return;
        }
        started.set(true);

        let mut counters: Vec<CounterAnimation> = texts
            .peek()
            .iter()
            .map(|text| CounterAnimation::from_text(text))
            .collect();

        spawn(async move {
            texts.set(counters.iter().map(CounterAnimation::text).collect());
            loop {
                tokio::time::sleep(COUNTER_FRAME).await;
                let mut running = false;
                for counter in counters.iter_mut() {
                    running |= counter.tick();
                }
                texts.set(counters.iter().map(CounterAnimation::text).collect());
                if !running {
                    break;
                }
            }
            tracing::trace!("Impact counters finished");
        });
    });

    rsx! {
        div { class: "stats",
            for (i, (label, _)) in finals.iter().enumerate() {
                div { key: "{label}", class: "stat-item",
                    span { class: "stat-number", {texts.read().get(i).cloned().unwrap_or_default()} }
                    span { class: "stat-label", "{label}" }
                }
            }
        }
    }
}
