//! The latest-updates panel driver.

use crate::entry::{UpdateEntry, collect_entries, latest};
use crate::manifest::load_manifest;
use crate::render::{NO_DOCUMENTS, render_view};
use crate::settings::UpdatesSettings;
use crate::source::DocumentSource;

/// What the panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatesView {
    Loading,
    Cards(Vec<UpdateEntry>),
    /// Error message, shown with a retry button.
    Error(String),
}

impl UpdatesView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Receives panel state changes.
pub trait Panel {
    fn show(&mut self, view: &UpdatesView);
}

/// Panel that renders each state to HTML and keeps the latest render.
#[derive(Debug, Clone, Default)]
pub struct HtmlPanel {
    settings: UpdatesSettings,
    html: String,
    states: Vec<UpdatesView>,
}

impl HtmlPanel {
    pub fn new(settings: UpdatesSettings) -> Self {
        Self {
            settings,
            html: String::new(),
            states: Vec::new(),
        }
    }

    /// HTML of the last state shown.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// States shown since the last `Loading`, oldest first.
    pub fn states(&self) -> &[UpdatesView] {
        &self.states
    }
}

impl Panel for HtmlPanel {
    fn show(&mut self, view: &UpdatesView) {
        if view.is_loading() {
            self.states.clear();
        }
        self.html = render_view(view, &self.settings);
        self.states.push(view.clone());
    }
}

/// Loads the newest documents from a source into a panel.
///
/// # Examples
///
/// ```
/// use docsite_updates::{HtmlPanel, LatestUpdates, MockSource, UpdatesSettings};
///
/// # futures::executor::block_on(async {
/// let updates = LatestUpdates::new(MockSource::new(), UpdatesSettings::default());
/// let mut panel = HtmlPanel::new(UpdatesSettings::default());
///
/// // Nothing reachable: the built-in documents are shown from fallback records.
/// let shown = updates.load(&mut panel).await;
/// assert_eq!(shown.len(), 4);
/// # });
/// ```
pub struct LatestUpdates<S> {
    source: S,
    settings: UpdatesSettings,
}

impl<S: DocumentSource> LatestUpdates<S> {
    pub fn new(source: S, settings: UpdatesSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &UpdatesSettings {
        &self.settings
    }

    /// Show the loading state, gather entries, then show cards or an error.
    ///
    /// Call again to retry. Returns the entries shown.
    pub async fn load<P: Panel + ?Sized>(&self, panel: &mut P) -> Vec<UpdateEntry> {
        panel.show(&UpdatesView::Loading);

        let paths = load_manifest(&self.source, &self.settings).await;
        let entries = collect_entries(&self.source, &self.settings, &paths).await;
        let shown = latest(entries, self.settings.limit);

        if shown.is_empty() {
            log::warn!("no documents available for the updates panel");
            panel.show(&UpdatesView::Error(NO_DOCUMENTS.to_string()));
        } else {
            log::info!("showing {} of {} documents", shown.len(), paths.len());
            panel.show(&UpdatesView::Cards(shown.clone()));
        }
        shown
    }
}
