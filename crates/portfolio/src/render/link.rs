use crate::profile::Link;
use leptos::*;

/// Anchor for a content link; external links open in a new browsing context.
#[component]
pub fn ContentLink(
    link: Link,
    #[prop(into)] class: String,
    #[prop(into)] text: String,
) -> impl IntoView {
    view! {
        <a
            href=link.href
            class=class
            target=link.external.then_some("_blank")
            rel=link.external.then_some("noopener noreferrer")
        >
            {text}
        </a>
    }
}

/// The opening tag of the first element whose markup contains `needle`.
#[cfg(test)]
pub(crate) fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not rendered"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}
