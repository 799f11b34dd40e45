use std::collections::BTreeMap;

use super::ArticleFile;

/// A discovered article and the title to list it under
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleEntry {
    pub file: ArticleFile,
    pub title: String,
}

/// In-memory index of stored articles.
///
/// Uses BTreeMap for automatic sorted ordering by slug.
#[derive(Debug, Default)]
pub struct ArticleIndex {
    articles: BTreeMap<String, ArticleEntry>,
}

impl ArticleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single article; an existing entry with the same slug is replaced
    pub fn add(&mut self, file: ArticleFile, title: String) {
        self.articles
            .insert(file.slug().to_string(), ArticleEntry { file, title });
    }

    pub fn get(&self, slug: &str) -> Option<&ArticleEntry> {
        self.articles.get(slug)
    }

    /// All articles, sorted by slug
    pub fn entries(&self) -> impl Iterator<Item = &ArticleEntry> {
        self.articles.values()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Remove a single article
    ///
    /// Returns the removed entry if it existed
    pub fn remove(&mut self, slug: &str) -> Option<ArticleEntry> {
        self.articles.remove(slug)
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index_is_empty() {
        let index = ArticleIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_entries_sorted_by_slug() {
        let mut index = ArticleIndex::new();
        index.add(ArticleFile::from("z-last.json"), "Last".to_string());
        index.add(ArticleFile::from("a-first.json"), "First".to_string());
        index.add(ArticleFile::from("m-middle.json"), "Middle".to_string());

        let titles: Vec<_> = index.entries().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Middle", "Last"]);
    }

    #[test]
    fn test_same_slug_overwrites() {
        let mut index = ArticleIndex::new();
        index.add(ArticleFile::from("story.json"), "original".to_string());
        index.add(ArticleFile::from("story.json"), "updated".to_string());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("story").unwrap().title, "updated");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut index = ArticleIndex::new();
        index.add(ArticleFile::from("a.json"), "A".to_string());
        index.add(ArticleFile::from("b.json"), "B".to_string());

        let removed = index.remove("a");
        assert_eq!(removed.unwrap().title, "A");
        assert!(index.remove("nonexistent").is_none());
        assert_eq!(index.len(), 1);

        index.clear();
        assert!(index.is_empty());
    }
}
