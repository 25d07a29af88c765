// ABOUTME: HTML rendering of item records into the storefront page and its error page.
// ABOUTME: Every interpolated value is escaped; the layout is the dark card grid of the mirror UI.

//! Storefront rendering.
//!
//! Produces a complete HTML document from a slice of [`ItemRecord`]s. Names
//! and prices are escaped as text, URLs as double-quoted attribute values.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::item::ItemRecord;

/// Page title used by both the rendered page and the error page.
pub const PAGE_TITLE: &str = "Kubeo Marketplace Mock API";

const STYLE: &str = r#"body { font-family: Arial, sans-serif; background: #121215; color: #eee; margin: 20px; }
.grid { display: flex; flex-wrap: wrap; gap: 15px; }
.card { background: #1b1b1f; padding: 10px; border-radius: 8px; width: 150px; text-align: center; transition: transform 0.2s; }
.card:hover { transform: scale(1.05); }
.card img { width: 100%; height: auto; border-radius: 4px; }
.card p { margin: 5px 0; }
.card a { color: #4fc3f7; text-decoration: none; }
.empty { color: #888; }"#;

fn head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n",
        encode_text(title),
        STYLE
    )
}

/// Render one item card.
pub fn render_card(item: &ItemRecord) -> String {
    let link = encode_double_quoted_attribute(&item.link_url);
    format!(
        "<div class=\"card\">\n<a href=\"{link}\" target=\"_blank\"><img src=\"{img}\" alt=\"{alt}\"></a>\n<p>{name}</p>\n<p><strong>{price}</strong></p>\n<a href=\"{link}\" target=\"_blank\">View Item</a>\n</div>\n",
        link = link,
        img = encode_double_quoted_attribute(&item.image_url),
        alt = encode_double_quoted_attribute(&item.name),
        name = encode_text(&item.name),
        price = encode_text(&item.price),
    )
}

/// Render the full storefront page.
pub fn render_page(items: &[ItemRecord]) -> String {
    let mut html = head(PAGE_TITLE);
    html.push_str("<body>\n<h1>Kubeo Marketplace (Mock API)</h1>\n");
    html.push_str(
        "<p>This page demonstrates a mock \"direct API\" for fetching marketplace items.</p>\n",
    );
    html.push_str("<div class=\"grid\">\n");
    if items.is_empty() {
        html.push_str("<p class=\"empty\">No items found.</p>\n");
    }
    for item in items {
        html.push_str(&render_card(item));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Render the inline error page shown when the upstream fetch fails.
pub fn render_error(message: &str) -> String {
    let mut html = head(PAGE_TITLE);
    html.push_str("<body>\n<h1>Kubeo Marketplace (Mock API)</h1>\n<p class=\"error\">");
    html.push_str(&encode_text(&format!("Error fetching items: {}", message)));
    html.push_str("</p>\n</body>\n</html>\n");
    html
}
