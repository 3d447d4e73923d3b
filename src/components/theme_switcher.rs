use dioxus::prelude::*;
use crate::theme::Theme;

const OPTIONS: [(Theme, &str, &str); 3] = [
    (Theme::Light, "☀", "Light"),
    (Theme::Dark, "☾", "Dark"),
    (Theme::System, "🖥", "System"),
];

const BUTTON_CLASS: &str = "p-2";
const SELECTED_CLASS: &str = "p-2 rounded-md ring-2 ring-slate-800 dark:ring-slate-300";

/// Theme to dispatch when `clicked` is pressed, if any.
pub fn selection(current: Option<Theme>, clicked: Theme) -> Option<Theme> {
    (current != Some(clicked)).then_some(clicked)
}

pub fn option_class(current: Option<Theme>, option: Theme) -> &'static str {
    if current == Some(option) { SELECTED_CLASS } else { BUTTON_CLASS }
}

#[component]
pub fn ThemeSwitcher(theme: Option<Theme>, on_select: EventHandler<Theme>) -> Element {
    rsx! {
        div {
            class: "text-slate-800 dark:text-slate-300",
            for (option, glyph, label) in OPTIONS {
                button {
                    key: "{option}",
                    class: option_class(theme, option),
                    title: label,
                    aria_pressed: theme == Some(option),
                    onclick: move |_| {
                        if let Some(next) = selection(theme, option) {
                            on_select.call(next);
                        }
                    },
                    "{glyph}"
                }
            }
        }
    }
}
