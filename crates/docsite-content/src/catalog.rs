//! Category catalog for the tutorial index.
//!
//! The catalog is the ordered list of index sections. A document's
//! `category` field selects a section by key, or by one of the section's
//! aliases (localized names authors tend to write). Anything else, including
//! a missing category, goes to the default section.

/// One index section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDef {
    /// Canonical key, e.g. `getting-started`.
    pub key: String,
    /// Section heading.
    pub title: String,
    /// Alternative spellings that map onto this key.
    pub aliases: Vec<String>,
}

impl CategoryDef {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    fn answers_to(&self, name: &str) -> bool {
        self.key == name || self.aliases.iter().any(|a| a == name)
    }
}

/// Ordered set of index sections plus the fallback key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<CategoryDef>,
    default_key: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            vec![
                CategoryDef::new("getting-started", "入门指南").with_alias("入门"),
                CategoryDef::new("basic-concepts", "基础概念").with_alias("基础概念"),
                CategoryDef::new("mod-development", "Mod开发").with_alias("Mod开发"),
                CategoryDef::new("advanced-topics", "高级主题").with_alias("高级主题"),
                CategoryDef::new("resources", "资源参考").with_alias("资源参考"),
            ],
            "resources",
        )
    }
}

impl Catalog {
    /// Build a catalog. `default_key` need not be one of `categories`; if it
    /// is not, its section is created on demand after the declared ones.
    pub fn new(categories: Vec<CategoryDef>, default_key: impl Into<String>) -> Self {
        Self {
            categories,
            default_key: default_key.into(),
        }
    }

    /// Declared sections, in render order.
    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Whether `key` is a declared section key.
    pub fn is_known(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    /// Section key for a document's `category` field.
    ///
    /// Exact keys win over aliases, so an alias can never shadow another
    /// section's key.
    pub fn resolve(&self, category: Option<&str>) -> &str {
        let Some(name) = category else {
            return &self.default_key;
        };
        if let Some(def) = self.categories.iter().find(|c| c.key == name) {
            return &def.key;
        }
        self.categories
            .iter()
            .find(|c| c.answers_to(name))
            .map_or(self.default_key.as_str(), |c| c.key.as_str())
    }

    /// Heading for a section key (or alias); unknown keys are their own title.
    pub fn title_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.answers_to(key))
            .map_or(key, |c| c.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let catalog = Catalog::default();
        let keys: Vec<_> = catalog.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "getting-started",
                "basic-concepts",
                "mod-development",
                "advanced-topics",
                "resources"
            ]
        );
        assert_eq!(catalog.default_key(), "resources");
    }

    #[test]
    fn test_resolve_known_key() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve(Some("mod-development")), "mod-development");
    }

    #[test]
    fn test_resolve_alias() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve(Some("入门")), "getting-started");
        assert_eq!(catalog.resolve(Some("高级主题")), "advanced-topics");
    }

    #[test]
    fn test_resolve_unknown_and_missing() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve(Some("cooking")), "resources");
        assert_eq!(catalog.resolve(None), "resources");
    }

    #[test]
    fn test_title_for() {
        let catalog = Catalog::default();
        assert_eq!(catalog.title_for("getting-started"), "入门指南");
        assert_eq!(catalog.title_for("入门"), "入门指南");
        assert_eq!(catalog.title_for("misc"), "misc");
    }

    #[test]
    fn test_custom_default_not_declared() {
        let catalog = Catalog::new(vec![CategoryDef::new("guides", "Guides")], "misc");
        assert!(!catalog.is_known("misc"));
        assert_eq!(catalog.resolve(Some("other")), "misc");
    }
}
