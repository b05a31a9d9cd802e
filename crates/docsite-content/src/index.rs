//! Tutorial index generation.
//!
//! Scans a content directory for markdown files, reads each file's front
//! matter, groups the documents into catalog sections, and writes a single
//! `tutorial-index.md` listing every tutorial.
//!
//! Individual files that cannot be read are indexed with empty metadata.
//! Only a failure to discover the directory or to write the output file is
//! an error.

use std::path::{Path, PathBuf};

use docsite_core::util::files::{self, FindOptions};
use docsite_core::{Error, Result};

use crate::catalog::Catalog;
use crate::frontmatter;
use crate::labels::{self, NO_DESCRIPTION, NO_TITLE, UNKNOWN};
use crate::metadata::Metadata;

/// Default name of the generated index file.
pub const DEFAULT_OUTPUT_FILE: &str = "tutorial-index.md";

/// Command shown in the generated file for refreshing it.
pub const REGENERATE_COMMAND: &str = "docsite index";

// ============================================================================
// Types
// ============================================================================

/// Where to read documents from and where to write the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Directory holding the markdown documents.
    pub content_dir: PathBuf,
    /// Output file name, relative to `content_dir`.
    pub output_file: String,
    /// Maximum directory depth to scan; `Some(1)` is the top level only.
    pub max_depth: Option<usize>,
}

impl IndexOptions {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            max_depth: Some(1),
        }
    }

    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Full path of the generated index.
    pub fn output_path(&self) -> PathBuf {
        self.content_dir.join(&self.output_file)
    }

    /// Directory name shown in the generated instructions.
    fn content_dir_label(&self) -> String {
        self.content_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.content_dir.display().to_string())
    }
}

/// A document listed in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedDocument {
    /// Link target, relative to the content directory.
    pub file: String,
    pub metadata: Metadata,
}

impl IndexedDocument {
    pub fn new(file: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            file: file.into(),
            metadata,
        }
    }

    fn sort_title(&self) -> &str {
        self.metadata.title().unwrap_or("")
    }
}

/// Documents sharing one index section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    pub key: String,
    pub documents: Vec<IndexedDocument>,
}

impl CategoryBucket {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            documents: Vec::new(),
        }
    }
}

/// Outcome of an index run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// Path of the index file.
    pub output: PathBuf,
    /// Number of documents listed.
    pub documents: usize,
    /// Number of non-empty sections rendered.
    pub sections: usize,
    /// Whether the file was (re)written.
    pub written: bool,
}

// ============================================================================
// Bucketing and rendering
// ============================================================================

/// Group documents into catalog sections.
///
/// Declared sections come first in catalog order (empty ones included); a
/// fallback section that the catalog does not declare is appended after
/// them. Documents in each section are ordered by title, keeping encounter
/// order for equal titles.
pub fn bucket_documents(documents: Vec<IndexedDocument>, catalog: &Catalog) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = catalog
        .categories()
        .iter()
        .map(|c| CategoryBucket::new(c.key.as_str()))
        .collect();

    for doc in documents {
        let key = catalog.resolve(doc.metadata.category());
        match buckets.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.documents.push(doc),
            None => {
                log::debug!("creating section '{key}' for {}", doc.file);
                let mut bucket = CategoryBucket::new(key);
                bucket.documents.push(doc);
                buckets.push(bucket);
            }
        }
    }

    for bucket in &mut buckets {
        bucket
            .documents
            .sort_by(|a, b| a.sort_title().cmp(b.sort_title()));
    }

    buckets
}

/// Render the full index document.
pub fn render_index(buckets: &[CategoryBucket], catalog: &Catalog, options: &IndexOptions) -> String {
    let mut out = String::new();
    render_header(&mut out, catalog, options);

    for bucket in buckets.iter().filter(|b| !b.documents.is_empty()) {
        out.push_str(&format!("## {}\n\n", catalog.title_for(&bucket.key)));
        for doc in &bucket.documents {
            render_entry(&mut out, doc);
        }
    }

    render_footer(&mut out, options);
    out
}

fn render_header(out: &mut String, catalog: &Catalog, options: &IndexOptions) {
    let dir = options.content_dir_label();
    let category_keys = catalog
        .categories()
        .iter()
        .map(|c| c.key.as_str())
        .collect::<Vec<_>>()
        .join("|");

    out.push_str("# 教程索引\n\n");
    out.push_str(
        "这个文件是泰拉瑞亚Mod制作教程的索引，列出了所有可用的教程资源。\
         索引是自动生成的，贡献者可以通过添加新的教程文件来更新此索引。\n\n",
    );
    out.push_str("## 如何添加新教程\n\n");
    out.push_str(&format!("1. 在`{dir}`目录下创建新的Markdown文件\n"));
    out.push_str("2. 在文件开头添加以下元数据格式：\n\n");
    out.push_str("```markdown\n---\n");
    out.push_str("title: 教程标题\n");
    out.push_str("difficulty: beginner|intermediate|advanced\n");
    out.push_str(&format!("category: {category_keys}\n"));
    out.push_str("time: 预计完成时间（分钟）\n");
    out.push_str("author: 作者名称\n");
    out.push_str("date: 更新日期（YYYY-MM-DD）\n");
    out.push_str("description: 简短描述\n");
    out.push_str("---\n```\n\n");
    out.push_str(&format!(
        "3. 运行`{REGENERATE_COMMAND}`命令自动更新此索引文件\n\n"
    ));
}

fn render_entry(out: &mut String, doc: &IndexedDocument) {
    let meta = &doc.metadata;
    out.push_str(&format!(
        "### [{}]({})\n",
        meta.title().unwrap_or(NO_TITLE),
        doc.file
    ));
    out.push_str(&format!(
        "- **难度**: {}\n",
        labels::index_difficulty(meta.difficulty())
    ));
    out.push_str(&format!("- **预计时间**: {}\n", labels::time_label(meta.time())));
    out.push_str(&format!("- **作者**: {}\n", meta.author().unwrap_or(UNKNOWN)));
    out.push_str(&format!("- **更新日期**: {}\n", meta.date().unwrap_or(UNKNOWN)));
    out.push_str(&format!(
        "- **描述**: {}\n\n",
        meta.description().unwrap_or(NO_DESCRIPTION)
    ));
}

fn render_footer(out: &mut String, options: &IndexOptions) {
    let dir = options.content_dir_label();
    out.push_str("---\n\n");
    out.push_str("## 自动生成\n\n");
    out.push_str("此索引由`docsite`命令行工具生成。添加或修改教程后，请运行：\n\n");
    out.push_str(&format!("```bash\n{REGENERATE_COMMAND}\n```\n\n"));
    out.push_str(&format!(
        "这将自动扫描`{dir}`目录中的所有Markdown文件，解析它们的元数据，并更新`{}`文件。\n",
        options.output_file
    ));
}

// ============================================================================
// IndexBuilder
// ============================================================================

/// Regenerates the tutorial index for one content directory.
///
/// Documents are processed one at a time in path order, so repeated runs
/// over an unchanged directory produce identical output.
pub struct IndexBuilder {
    options: IndexOptions,
    catalog: Catalog,
}

impl IndexBuilder {
    pub fn new(options: IndexOptions, catalog: Catalog) -> Self {
        Self { options, catalog }
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Read every document and group it into sections.
    pub async fn collect(&self) -> Result<Vec<CategoryBucket>> {
        if !files::exists(&self.options.content_dir).await {
            return Err(Error::not_found_msg(format!(
                "content directory {}",
                self.options.content_dir.display()
            )));
        }

        let mut find = FindOptions::markdown();
        find.max_depth = self.options.max_depth;

        let found = files::find_all_files(&self.options.content_dir, find).await?;
        let mut documents = Vec::with_capacity(found.len());

        for info in found {
            let link = info.link_path();
            if link == self.options.output_file {
                continue;
            }
            let metadata = read_metadata(&info.path).await;
            documents.push(IndexedDocument::new(link, metadata));
        }

        log::debug!(
            "indexing {} document(s) from {}",
            documents.len(),
            self.options.content_dir.display()
        );
        Ok(bucket_documents(documents, &self.catalog))
    }

    /// Render the index without touching the output file.
    pub async fn render(&self) -> Result<(String, Vec<CategoryBucket>)> {
        let buckets = self.collect().await?;
        let content = render_index(&buckets, &self.catalog, &self.options);
        Ok((content, buckets))
    }

    /// Render the index and overwrite the output file.
    pub async fn build(&self) -> Result<IndexReport> {
        let (content, buckets) = self.render().await?;
        let output = self.options.output_path();
        files::write_file(&output, &content).await?;
        log::info!("wrote tutorial index to {}", output.display());
        Ok(report(output, &buckets, true))
    }

    /// Compare the rendered index with the file on disk.
    ///
    /// `written` in the report is always false; the returned flag is true
    /// when the file exists and matches.
    pub async fn check(&self) -> Result<(bool, IndexReport)> {
        let (content, buckets) = self.render().await?;
        let output = self.options.output_path();
        let fresh = files::exists(&output).await
            && files::read_file(&output)
                .await
                .map(|current| current == content)
                .unwrap_or(false);
        Ok((fresh, report(output, &buckets, false)))
    }
}

async fn read_metadata(path: &Path) -> Metadata {
    match files::read_file(path).await {
        Ok(text) => frontmatter::extract(&text),
        Err(e) => {
            log::warn!("indexing {} without metadata: {e}", path.display());
            Metadata::new()
        }
    }
}

fn report(output: PathBuf, buckets: &[CategoryBucket], written: bool) -> IndexReport {
    IndexReport {
        output,
        documents: buckets.iter().map(|b| b.documents.len()).sum(),
        sections: buckets.iter().filter(|b| !b.documents.is_empty()).count(),
        written,
    }
}
