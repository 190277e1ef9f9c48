//! Feed renderer
//!
//! Pure projection from a feed snapshot to an HTML fragment. No network
//! awareness, no retained state: every call builds the full markup from
//! scratch and the caller replaces the previous output wholesale.

use crate::domain::entities::Post;

/// Render a feed snapshot to an HTML fragment
///
/// Posts render in order; an empty feed renders an empty container.
/// All server-supplied text is escaped before interpolation.
pub fn render_feed(posts: &[Post]) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"posts-list\">\n");
    for post in posts {
        buf.push_str(&render_post(post));
    }
    buf.push_str("</div>\n");

    buf
}

fn render_post(post: &Post) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"card mb-3\">\n");
    buf.push_str("  <div class=\"card-body\">\n");
    buf.push_str(&format!(
        "    <p class=\"card-text\">{}</p>\n",
        escape_html(&post.content)
    ));
    buf.push_str(&format!(
        "    <button class=\"btn btn-success like-btn\" data-id=\"{}\">Like ({})</button>\n",
        post.id, post.likes
    ));
    buf.push_str(&format!(
        "    <button class=\"btn btn-danger dislike-btn\" data-id=\"{}\">Dislike ({})</button>\n",
        post.id, post.dislikes
    ));
    buf.push_str(&format!(
        "    <button class=\"btn btn-secondary share-btn\" data-id=\"{}\">Share</button>\n",
        post.id
    ));
    buf.push_str("    <div class=\"mt-2\">\n");
    buf.push_str(
        "      <textarea class=\"form-control comment-text\" rows=\"2\" \
         placeholder=\"Add a comment\"></textarea>\n",
    );
    buf.push_str(&format!(
        "      <button class=\"btn btn-primary mt-2 comment-btn\" data-id=\"{}\">Comment</button>\n",
        post.id
    ));
    buf.push_str("    </div>\n");
    buf.push_str("  </div>\n");

    // Comments in display order, plain text lines
    buf.push_str("  <div class=\"card-footer\">\n");
    buf.push_str("    <div class=\"comments-list\">\n");
    for comment in &post.comments {
        buf.push_str(&format!("      <p>{}</p>\n", escape_html(&comment.content)));
    }
    buf.push_str("    </div>\n");
    buf.push_str("  </div>\n");
    buf.push_str("</div>\n");

    buf
}

/// Escape text for interpolation into HTML
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
