//! Panel behaviour over an in-memory source.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use docsite_updates::{HtmlPanel, LatestUpdates, MockSource, UpdatesSettings, UpdatesView};

fn manifest(paths: &[&str]) -> String {
    let files: Vec<String> = paths.iter().map(|p| format!(r#"{{"path":"{p}"}}"#)).collect();
    format!(r#"{{"all_files":[{}]}}"#, files.join(","))
}

#[tokio::test]
async fn test_seven_candidates_show_newest_five() {
    let names = ["a.md", "b.md", "c.md", "d.md", "e.md", "f.md", "g.md"];
    let mut source = MockSource::new().with_document("docs/config.json", manifest(&names), None);
    for (i, name) in names.iter().enumerate() {
        let day = u32::try_from(i).unwrap() + 1;
        source = source.with_document(
            format!("docs/{name}"),
            format!("---\ntitle: doc-{day}\ndifficulty: beginner\n---\n"),
            Some(Utc.with_ymd_and_hms(2025, 4, day, 8, 0, 0).unwrap()),
        );
    }

    let settings = UpdatesSettings::default();
    let updates = LatestUpdates::new(source, settings.clone());
    let mut panel = HtmlPanel::new(settings);
    let shown = updates.load(&mut panel).await;

    let titles: Vec<_> = shown.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["doc-7", "doc-6", "doc-5", "doc-4", "doc-3"]);

    let html = panel.html();
    assert_eq!(html.matches(r#"class="update-card""#).count(), 5);
    assert!(!html.contains("doc-1<"));
    assert!(!html.contains("doc-2<"));
    assert!(html.find("doc-7").unwrap() < html.find("doc-3").unwrap());
    assert!(html.contains("2025-04-07"));
}

#[tokio::test]
async fn test_last_updated_overrides_header_date() {
    let source = MockSource::new()
        .with_document("docs/config.json", manifest(&["old.md", "new.md"]), None)
        .with_document(
            "docs/old.md",
            "---\ntitle: old\nlast_updated: 2026-01-01\n---\n",
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
        )
        .with_document(
            "docs/new.md",
            "---\ntitle: new\n---\n",
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        );

    let updates = LatestUpdates::new(source, UpdatesSettings::default());
    let mut panel = HtmlPanel::new(UpdatesSettings::default());
    let shown = updates.load(&mut panel).await;

    assert_eq!(shown[0].title, "old");
    assert_eq!(shown[0].last_updated, "2026-01-01");
    assert_eq!(shown[1].last_updated, "2025-01-01");
}

#[tokio::test]
async fn test_same_day_headers_sort_by_time() {
    let source = MockSource::new()
        .with_document("docs/config.json", manifest(&["early.md", "late.md"]), None)
        .with_document(
            "docs/early.md",
            "---\ntitle: early\n---\n",
            Some(Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap()),
        )
        .with_document(
            "docs/late.md",
            "---\ntitle: late\n---\n",
            Some(Utc.with_ymd_and_hms(2025, 4, 1, 20, 0, 0).unwrap()),
        );

    let updates = LatestUpdates::new(source, UpdatesSettings::default());
    let shown = updates.load(&mut HtmlPanel::default()).await;

    let titles: Vec<_> = shown.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["late", "early"]);
}

#[tokio::test]
async fn test_everything_unreachable_renders_fallback_records() {
    let source = MockSource::new();
    let settings = UpdatesSettings::default();
    let updates = LatestUpdates::new(source.clone(), settings.clone());
    let mut panel = HtmlPanel::new(settings.clone());

    let shown = updates.load(&mut panel).await;

    assert_eq!(shown.len(), 4);
    assert!(shown.iter().all(|e| e.fallback));
    let mut urls: Vec<_> = shown.iter().map(|e| e.url.clone()).collect();
    urls.sort();
    let mut expected = settings.fallback_paths.clone();
    expected.sort();
    assert_eq!(urls, expected);

    let html = panel.html();
    for title in ["给新人的入门建议", "贡献者怎么编写文章？", "Topic 系统使用指南", "教程索引"] {
        assert!(html.contains(title), "missing card for {title}");
    }
    assert!(html.contains("docs/viewer.html?file=tutorial-index.md"));

    // manifest, then one HEAD per fallback document
    let requests = source.requests().await;
    assert_eq!(requests[0], "docs/config.json");
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn test_reload_after_failure() {
    let settings = UpdatesSettings::default().with_fallback_paths(Vec::new());
    let mut panel = HtmlPanel::new(settings.clone());

    let empty = LatestUpdates::new(MockSource::new(), settings.clone());
    empty.load(&mut panel).await;
    assert!(matches!(panel.states().last(), Some(UpdatesView::Error(_))));

    let source = MockSource::new()
        .with_document("docs/config.json", manifest(&["a.md"]), None)
        .with_document("docs/a.md", "---\ntitle: A\n---\n", None);
    LatestUpdates::new(source, settings).load(&mut panel).await;

    assert!(matches!(panel.states().last(), Some(UpdatesView::Cards(c)) if c.len() == 1));
    assert_eq!(panel.states().len(), 2);
    assert!(panel.states()[0].is_loading());
}
