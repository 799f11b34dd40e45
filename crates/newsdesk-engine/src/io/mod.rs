use crate::editing::EditorSession;
use crate::models::{Article, ArticleFile, ArticleIndex, Envelope};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid article slug: {0:?}")]
    InvalidSlug(String),
    #[error("Invalid articles directory: {0}")]
    InvalidArticlesDir(String),
}

/// The persistence API as the block core uses it: whole articles in and out.
pub trait ArticleStore {
    /// `GET /articles/:slug`. `Ok(None)` when no such article exists.
    fn get(&self, slug: &str) -> Result<Option<Article>, StoreError>;

    /// `PUT /articles/:slug`. Creates or replaces.
    fn put(&self, article: &Article) -> Result<(), StoreError>;
}

/// Article store backed by a directory of `<slug>.json` envelope files.
#[derive(Debug, Clone)]
pub struct FsArticleStore {
    root: PathBuf,
}

impl FsArticleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn relative_path_for(slug: &str) -> Result<RelativePathBuf, StoreError> {
        let valid = !slug.is_empty()
            && slug
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidSlug(slug.to_string()));
        }
        Ok(RelativePathBuf::from(format!("{slug}.json")))
    }
}

impl ArticleStore for FsArticleStore {
    fn get(&self, slug: &str) -> Result<Option<Article>, StoreError> {
        let relative_path = Self::relative_path_for(slug)?;
        match read_article(&relative_path, &self.root) {
            Ok(article) => Ok(Some(article)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn put(&self, article: &Article) -> Result<(), StoreError> {
        let relative_path = Self::relative_path_for(&article.slug)?;
        write_article(&relative_path, &self.root, article)
    }
}

/// Read a file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, StoreError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(StoreError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(StoreError::Io)
}

/// Write content to a file
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), StoreError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(StoreError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(StoreError::Io)
}

/// Read an article envelope (`{ "data": { ... } }`)
pub fn read_article(relative_path: &RelativePath, root: &Path) -> Result<Article, StoreError> {
    let json = read_file(relative_path, root)?;
    let envelope: Envelope<Article> =
        serde_json::from_str(&json).map_err(|source| StoreError::Json {
            path: relative_path.to_path(root),
            source,
        })?;
    Ok(envelope.into_inner())
}

/// Write an article as a pretty-printed envelope
pub fn write_article(
    relative_path: &RelativePath,
    root: &Path,
    article: &Article,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(&Envelope::new(article)).map_err(|source| {
        StoreError::Json {
            path: relative_path.to_path(root),
            source,
        }
    })?;
    write_file(relative_path, root, &json)
}

/// Keep an in-progress editing session on disk
pub fn save_draft(session: &EditorSession, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(session).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

/// Restore a saved editing session. `Ok(None)` when no draft exists.
pub fn load_draft(path: &Path) -> Result<Option<EditorSession>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let session = serde_json::from_str(&json).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(session))
}

/// Scan for article JSON files in the articles directory
pub fn scan_article_files(root: &Path) -> Result<Vec<PathBuf>, StoreError> {
    validate_articles_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

/// Index every readable article in the articles directory.
///
/// Files that fail to parse are still listed, under their slug. When two
/// files share a slug the one closest to `root` (the file [`FsArticleStore`]
/// serves) is kept and the other is skipped with a warning.
pub fn build_article_index(root: &Path) -> Result<ArticleIndex, StoreError> {
    let mut index = ArticleIndex::new();

    for path in scan_article_files(root)? {
        let Ok(relative) = RelativePathBuf::from_path(path.strip_prefix(root).unwrap_or(&path))
        else {
            log::warn!("Skipping non-relative article path {}", path.display());
            continue;
        };
        let file = ArticleFile::new(relative);

        if let Some(existing) = index.get(file.slug()) {
            let existing_path = existing.file.relative_path();
            if depth(existing_path) <= depth(file.relative_path()) {
                log::warn!(
                    "Skipping {}: slug {:?} is already listed from {}",
                    file.relative_path(),
                    file.slug(),
                    existing_path
                );
                continue;
            }
            log::warn!(
                "Listing {} instead of {}: both have slug {:?}",
                file.relative_path(),
                existing_path,
                file.slug()
            );
        }

        let title = match read_article(file.relative_path(), root) {
            Ok(article) if !article.title.is_empty() => article.title,
            Ok(_) => file.slug().to_string(),
            Err(e) => {
                log::warn!("Could not read article {}: {e}", path.display());
                file.slug().to_string()
            }
        };
        index.add(file, title);
    }

    Ok(index)
}

fn depth(path: &RelativePath) -> usize {
    path.components().count()
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), StoreError> {
    let entries = fs::read_dir(dir).map_err(StoreError::Io)?;

    for entry in entries {
        let entry = entry.map_err(StoreError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_articles_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidArticlesDir(
            "articles directory not found".to_string(),
        ));
    }

    Ok(())
}
