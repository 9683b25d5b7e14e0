//! Button Component
//!
//! Pill button with three visual variants and an optional leading glyph.

use leptos::prelude::*;

/// Visual style of a `Button`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }

    /// Variant classes followed by `extra`, for buttons and for links
    /// styled as buttons
    pub fn classes(self, extra: &str) -> String {
        if extra.is_empty() {
            self.class().to_string()
        } else {
            format!("{} {}", self.class(), extra)
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    /// Extra classes appended after the variant classes
    #[prop(optional, into)] class: String,
    /// Glyph rendered before the label
    #[prop(optional)] icon: Option<&'static str>,
    /// `button` unless given (e.g. `submit`)
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = variant.classes(&class);

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {icon.map(|glyph| view! { <span class="btn-icon">{glyph}</span> })}
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(ButtonVariant::Primary.classes(""), "btn btn-primary");
        assert_eq!(ButtonVariant::Outline.classes("btn-spaced"), "btn btn-outline btn-spaced");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
