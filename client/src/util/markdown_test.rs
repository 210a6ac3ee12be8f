use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_html("# Plan\n\n**bold** text");
    assert!(html.contains("<h1>Plan</h1>"));
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn drops_raw_html() {
    let html = render_html("hello <script>alert(1)</script>\n\n<div onclick=\"x\">block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("onclick"));
    assert!(html.contains("hello"));
}

#[test]
fn renders_tables() {
    let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

// =============================================================
// link targets
// =============================================================

#[test]
fn script_links_are_neutralized() {
    let html = render_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains("href=\"#\""));

    let autolink = render_html("<JavaScript:alert(1)>");
    assert!(!autolink.to_ascii_lowercase().contains("href=\"javascript:"));
}

#[test]
fn script_image_sources_are_neutralized() {
    let html = render_html("![x](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:"));
}

#[test]
fn allowed_links_are_kept() {
    let html = render_html("[site](https://agency.test/a) [mail](mailto:pm@agency.test) [doc](/projects/p1)");
    assert!(html.contains("href=\"https://agency.test/a\""));
    assert!(html.contains("href=\"mailto:pm@agency.test\""));
    assert!(html.contains("href=\"/projects/p1\""));
}

#[test]
fn is_safe_url_checks_scheme() {
    assert!(is_safe_url("http://agency.test"));
    assert!(is_safe_url("HTTPS://agency.test"));
    assert!(is_safe_url("docs/brief.pdf"));
    assert!(is_safe_url("#section"));
    assert!(is_safe_url("/files?x=a:b"));
    assert!(!is_safe_url("javascript:alert(1)"));
    assert!(!is_safe_url(" java\tscript:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(!is_safe_url("data:text/html,x"));
}
