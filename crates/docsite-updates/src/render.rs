//! HTML for the latest-updates panel.

use docsite_content::labels::{difficulty_class, widget_difficulty};

use crate::entry::UpdateEntry;
use crate::panel::UpdatesView;
use crate::settings::{UpdatesSettings, file_name};

/// Message shown when no document could be described.
pub const NO_DOCUMENTS: &str = "没有找到可用的文档";

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
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

/// Link target for a document.
///
/// Markdown documents open in the viewer page; anything else, or a link that
/// already points at the viewer, is used as is.
pub fn viewer_link(url: &str, viewer_page: &str) -> String {
    let viewer = file_name(viewer_page);
    let at_viewer = !viewer.is_empty() && url.contains(viewer);
    if url.ends_with(".md") && !at_viewer {
        format!("{viewer_page}?file={}", file_name(url))
    } else {
        url.to_string()
    }
}

/// One update card.
pub fn render_card(entry: &UpdateEntry, settings: &UpdatesSettings) -> String {
    let class = difficulty_class(&entry.difficulty);
    let label = widget_difficulty(&entry.difficulty);
    let link = viewer_link(&entry.url, &settings.viewer_page);

    format!(
        r#"<div class="update-card">
    <div class="update-date">{date}</div>
    <div class="update-meta">
        <span class="difficulty-tag {class}">{label}</span>
        <span class="estimated-time">⏱️ {time}</span>
    </div>
    <h3 class="update-title">{title}</h3>
    <p class="update-description">{description}</p>
    <a href="{link}" class="update-link">查看详情 →</a>
</div>
"#,
        date = escape_html(&entry.last_updated),
        label = escape_html(label),
        time = escape_html(&entry.time),
        title = escape_html(&entry.title),
        description = escape_html(&entry.description),
        link = escape_html(&link),
    )
}

/// Panel contents for a view state.
pub fn render_view(view: &UpdatesView, settings: &UpdatesSettings) -> String {
    match view {
        UpdatesView::Loading => r#"<div class="loading-indicator">
    <div class="spinner"></div>
    <p>正在加载最新更新...</p>
</div>
"#
        .to_string(),
        UpdatesView::Cards(entries) => entries
            .iter()
            .map(|e| render_card(e, settings))
            .collect(),
        UpdatesView::Error(message) => format!(
            r#"<div class="error-indicator">
    <div class="error-icon">⚠️</div>
    <p>加载失败: {}</p>
    <button class="btn btn-secondary retry-button" onclick="loadLatestUpdates()">重试</button>
</div>
"#,
            escape_html(message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FallbackRecord;

    fn entry(url: &str, difficulty: &str) -> UpdateEntry {
        let mut entry = UpdateEntry::from_fallback(url, &FallbackRecord::unknown_document());
        entry.difficulty = difficulty.to_string();
        entry
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("教程"), "教程");
    }

    #[test]
    fn test_viewer_link() {
        let viewer = "docs/viewer.html";
        assert_eq!(
            viewer_link("docs/Modder入门/a.md", viewer),
            "docs/viewer.html?file=a.md"
        );
        assert_eq!(
            viewer_link("docs/viewer.html?file=a.md", viewer),
            "docs/viewer.html?file=a.md"
        );
        assert_eq!(viewer_link("docs/page.html", viewer), "docs/page.html");
    }

    #[test]
    fn test_viewer_link_without_viewer_page() {
        assert_eq!(viewer_link("docs/a.md", ""), "?file=a.md");
        assert_eq!(viewer_link("docs/page.html", ""), "docs/page.html");
    }

    #[test]
    fn test_card_contents() {
        let settings = UpdatesSettings::default();
        let mut e = entry("docs/guides/intro.md", "beginner");
        e.title = "入门 <1>".to_string();
        e.time = "30分钟".to_string();

        let html = render_card(&e, &settings);
        assert!(html.contains(r#"<div class="update-date">2025-11-27</div>"#));
        assert!(html.contains(r#"<span class="difficulty-tag beginner">初级</span>"#));
        assert!(html.contains("⏱️ 30分钟"));
        assert!(html.contains("入门 &lt;1&gt;"));
        assert!(html.contains(r#"href="docs/viewer.html?file=intro.md""#));
    }

    #[test]
    fn test_card_difficulty_labels() {
        let settings = UpdatesSettings::default();

        let html = render_card(&entry("a.md", "中级"), &settings);
        assert!(html.contains(r#"difficulty-tag intermediate">中级<"#));

        let html = render_card(&entry("a.md", "intermediate"), &settings);
        assert!(html.contains(r#"difficulty-tag intermediate">中等<"#));

        let html = render_card(&entry("a.md", "全部级别"), &settings);
        assert!(html.contains(r#"difficulty-tag unknown">unknown<"#));
    }

    #[test]
    fn test_render_loading() {
        let html = render_view(&UpdatesView::Loading, &UpdatesSettings::default());
        assert!(html.contains("loading-indicator"));
        assert!(html.contains("正在加载最新更新..."));
    }

    #[test]
    fn test_render_error_has_retry() {
        let view = UpdatesView::Error(NO_DOCUMENTS.to_string());
        let html = render_view(&view, &UpdatesSettings::default());
        assert!(html.contains("加载失败: 没有找到可用的文档"));
        assert!(html.contains(r#"onclick="loadLatestUpdates()""#));
        assert!(html.contains("重试"));
    }

    #[test]
    fn test_render_cards_in_order() {
        let settings = UpdatesSettings::default();
        let mut a = entry("a.md", "beginner");
        a.title = "first".to_string();
        let mut b = entry("b.md", "beginner");
        b.title = "second".to_string();

        let html = render_view(&UpdatesView::Cards(vec![a, b]), &settings);
        assert_eq!(html.matches("update-card").count(), 2);
        assert!(html.find("first").unwrap_or(usize::MAX) < html.find("second").unwrap_or(0));
    }
}
