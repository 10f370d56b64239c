use dioxus::prelude::*;

/// Round button that returns to the top of the page
#[component]
pub fn ScrollToTop(visible: bool) -> Element {
    rsx! {
        button {
            class: if visible { "scroll-to-top visible" } else { "scroll-to-top" },
            "aria-label": "Scroll to top",
            onclick: move |_| {
                document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
            },
            i { class: "fas fa-arrow-up" }
        }
    }
}

/// Smooth-scroll so section `id` sits just below the fixed header.
pub fn scroll_to_section(id: &str) {
    let script = format!(
        r#"
        const target = document.getElementById({id:?});
        if (target) {{
            const header = document.querySelector('.header');
            const offset = header ? header.offsetHeight : 0;
            window.scrollTo({{ top: target.offsetTop - offset, behavior: 'smooth' }});
        }}
        "#
    );
    document::eval(&script);
}
