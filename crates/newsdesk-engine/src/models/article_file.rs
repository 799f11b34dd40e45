use relative_path::{RelativePath, RelativePathBuf};

/// A stored article file with a relative path and the slug derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFile {
    relative_path: RelativePathBuf,
    slug: String,
}

impl ArticleFile {
    /// Create a new ArticleFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let slug = Self::extract_slug(&relative_path);
        Self {
            relative_path,
            slug,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the slug (file stem without .json extension)
    pub fn slug(&self) -> &str {
        &self.slug
    }

    fn extract_slug(path: &RelativePath) -> String {
        path.file_name()
            .map(|name| name.strip_suffix(".json").unwrap_or(name))
            .unwrap_or("untitled")
            .to_string()
    }
}

impl From<RelativePathBuf> for ArticleFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for ArticleFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
