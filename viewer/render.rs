/// Template renderer for the viewer.
///
/// A single HTML template (`viewer/assets/viewer.html`) with placeholder
/// tokens like `{{TOKEN}}` is loaded at compile time; `render_page` fills
/// the global placeholders through the caller-provided closure and blanks
/// whatever is left so raw tokens never reach the browser.

const TEMPLATE: &str = include_str!("assets/viewer.html");

/// Renders the viewer page; `fill` substitutes the page's placeholders.
pub fn render_page<F>(fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let html = fill(TEMPLATE.to_owned());
    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string, so a missed token produces a clean page.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
