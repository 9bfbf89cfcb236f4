use std::cell::Cell;

use folio_core::motion::{float_keyframes, pulse_keyframes};

use crate::browser::REDUCED_MOTION_QUERY;

const STYLE_ELEMENT_ID: &str = "folio-motion";

thread_local! {
    static INSTALLED: Cell<bool> = Cell::new(false);
}

pub(crate) fn motion_stylesheet() -> String {
    format!(
        "{}\n{}\n@media {REDUCED_MOTION_QUERY} {{ .motion {{ animation: none !important; transition: none !important; transform: none !important; opacity: 1 !important; }} }}\n",
        float_keyframes(),
        pulse_keyframes(),
    )
}

/// Adds the shared keyframes to `<head>` once per page.
pub(crate) fn install_motion_styles() {
    let already = INSTALLED.with(|flag| flag.replace(true));
    if already {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        gloo::console::warn!("motion: could not create stylesheet");
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&motion_stylesheet()));
    if head.append_child(&style).is_err() {
        gloo::console::warn!("motion: could not install stylesheet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_keyframes_and_reduced_motion_guard() {
        let css = motion_stylesheet();
        assert!(css.contains("@keyframes folio-float"));
        assert!(css.contains("@keyframes folio-pulse"));
        assert!(css.contains("@media (prefers-reduced-motion: reduce)"));
    }
}
