/// Page renderer for the picker.
///
/// One HTML template (`picker/assets/picker.html`) with `{{TOKEN}}`
/// placeholders, embedded at compile time. `render_page` fills the global
/// tokens, hands the rest to a closure, then blanks anything left over.

const TEMPLATE: &str = include_str!("assets/picker.html");

/// Renders the picker page.
///
/// # Arguments
/// - `top_k`      : number of labels shown, displayed in the page hint
/// - `input_size` : model input width and height
/// - `fill`       : closure that fills result-specific placeholders
pub fn render_page<F>(top_k: usize, input_size: (u32, u32), fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{TOP_K}}", &top_k.to_string());
    html = html.replace("{{INPUT_W}}", &input_size.0.to_string());
    html = html.replace("{{INPUT_H}}", &input_size.1.to_string());

    html = fill(html);

    blank_remaining(html)
}

/// Replaces any `{{TOKEN}}` the caller did not fill with an empty string.
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
