use dioxus::prelude::*;
use crate::components::ThemeSwitcher;
use crate::theme::{ Theme, ThemeHandle };

#[component]
pub fn DarkMode() -> Element {
    let handle = use_context::<ThemeHandle>();
    let mut theme = use_signal(|| handle.theme());

    let select = move |next: Theme| {
        if handle.set_theme(next) {
            theme.set(Some(next));
        }
    };

    rsx! {
        document::Title { "DarkMode Example" }
        div {
            class: "flex min-h-screen w-screen flex-col items-center bg-slate-300 text-slate-800 dark:bg-slate-800 dark:text-slate-300",
            nav {
                class: "flex w-screen items-center bg-slate-400 p-4 dark:bg-slate-700",
                h2 { class: "mr-auto ml-2 text-2xl font-semibold", "DarkMode Example" }
                ThemeSwitcher { theme: theme(), on_select: select }
            }
            div {
                class: "w-1/2 pt-12",
                p {
                    class: "text-lg",
                    "This is an example of a theme switcher with Dark, Light and System mode that also persists preferences in localStorage. "
                    "System mode follows the "
                    span { class: "rounded-md bg-slate-400/30", "`prefers-color-scheme`" }
                    " media query and updates live when the operating system theme changes."
                }
                p {
                    class: "text-lg",
                    "The effective appearance is applied as the "
                    span { class: "rounded-md bg-slate-400/30", "`dark`" }
                    " class on the document root."
                }
            }
        }
    }
}
