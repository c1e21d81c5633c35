//! Filesystem catalog store

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use atlas_domain::{Category, EntityId, TitleSource};
use serde::Deserialize;
use tracing::warn;

use crate::error::CatalogError;

/// Frontmatter fields the catalog cares about
///
/// Entries carry more metadata than this; everything else is ignored.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: Option<String>,
}

/// Catalog entries stored as markdown files on disk
///
/// Expects one subdirectory per category under the documents root, each
/// holding `<slug>.md` files with a leading YAML frontmatter block.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    documents_dir: PathBuf,
}

impl FsCatalog {
    /// Create a catalog over the given documents root
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
        }
    }

    /// The documents root this catalog reads from
    pub fn documents_dir(&self) -> &Path {
        &self.documents_dir
    }

    /// Slugs of every entry in a category, sorted
    ///
    /// # Errors
    /// [`CatalogError::MissingCategory`] if the category directory does not
    /// exist; [`CatalogError::Io`] if it cannot be read.
    pub fn slugs(&self, category: Category) -> Result<Vec<String>, CatalogError> {
        let dir = self.documents_dir.join(category.as_str());
        if !dir.is_dir() {
            return Err(CatalogError::MissingCategory {
                category,
                path: dir,
            });
        }

        let mut slugs = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_string());
            }
        }

        slugs.sort();
        Ok(slugs)
    }

    /// Every known entity id across all categories
    ///
    /// This is the valid-id set the referential validator audits against.
    pub fn known_ids(&self) -> Result<HashSet<EntityId>, CatalogError> {
        let mut ids = HashSet::new();

        for category in Category::ALL {
            for slug in self.slugs(category)? {
                match EntityId::new(format!("{}/{}", category, slug)) {
                    Ok(id) => {
                        ids.insert(id);
                    }
                    Err(err) => warn!("Skipping entry with unusable slug: {}", err),
                }
            }
        }

        Ok(ids)
    }

    fn entry_path(&self, id: &EntityId) -> PathBuf {
        self.documents_dir
            .join(id.category().as_str())
            .join(format!("{}.md", id.slug()))
    }
}

impl TitleSource for FsCatalog {
    /// Title from the entry's frontmatter block
    ///
    /// Degrades gracefully: a missing file, missing frontmatter, malformed
    /// YAML, or an absent `title` field all yield `None`.
    fn title(&self, id: &EntityId) -> Option<String> {
        let path = self.entry_path(id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Could not load title for {}: {}", id, err);
                return None;
            }
        };

        let block = frontmatter_block(&content)?;
        match serde_yaml::from_str::<Frontmatter>(block) {
            Ok(front) => front.title,
            Err(err) => {
                warn!("Malformed frontmatter in {}: {}", path.display(), err);
                None
            }
        }
    }
}

/// The YAML between the leading `---` fence pair, if any
fn frontmatter_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix('\n')
        .or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_entry(root: &Path, category: &str, slug: &str, content: &str) {
        let dir = root.join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{}.md", slug)), content).unwrap();
    }

    fn catalog_with_categories() -> (TempDir, FsCatalog) {
        let tmp = TempDir::new().unwrap();
        for category in Category::ALL {
            fs::create_dir_all(tmp.path().join(category.as_str())).unwrap();
        }
        let catalog = FsCatalog::new(tmp.path());
        (tmp, catalog)
    }

    fn id(s: &str) -> EntityId {
        EntityId::new(s).unwrap()
    }

    #[test]
    fn test_slugs_sorted_and_md_only() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(tmp.path(), "patterns", "show-me", "# Show Me");
        write_entry(tmp.path(), "patterns", "active-partner", "# Active Partner");
        fs::write(tmp.path().join("patterns/notes.txt"), "scratch").unwrap();

        let slugs = catalog.slugs(Category::Patterns).unwrap();
        assert_eq!(slugs, vec!["active-partner", "show-me"]);
    }

    #[test]
    fn test_missing_category_directory() {
        let tmp = TempDir::new().unwrap();
        let catalog = FsCatalog::new(tmp.path());

        let err = catalog.slugs(Category::Obstacles).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingCategory {
                category: Category::Obstacles,
                ..
            }
        ));
    }

    #[test]
    fn test_known_ids_spans_all_categories() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(tmp.path(), "patterns", "active-partner", "");
        write_entry(tmp.path(), "anti-patterns", "answer-injection", "");
        write_entry(tmp.path(), "obstacles", "black-box-ai", "");

        let ids = catalog.known_ids().unwrap();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&id("patterns/active-partner")));
        assert!(ids.contains(&id("anti-patterns/answer-injection")));
        assert!(ids.contains(&id("obstacles/black-box-ai")));
    }

    #[test]
    fn test_title_from_frontmatter() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(
            tmp.path(),
            "patterns",
            "active-partner",
            "---\ntitle: Active Partner\ncategory: patterns\n---\n\nBody text.\n",
        );

        assert_eq!(
            catalog.title(&id("patterns/active-partner")),
            Some("Active Partner".to_string())
        );
    }

    #[test]
    fn test_title_missing_file_is_none() {
        let (_tmp, catalog) = catalog_with_categories();
        assert_eq!(catalog.title(&id("patterns/nowhere")), None);
    }

    #[test]
    fn test_title_without_frontmatter_is_none() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(tmp.path(), "patterns", "bare", "# Bare\n\nNo frontmatter here.\n");

        assert_eq!(catalog.title(&id("patterns/bare")), None);
    }

    #[test]
    fn test_title_with_malformed_yaml_is_none() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(
            tmp.path(),
            "patterns",
            "broken",
            "---\ntitle: [unclosed\n---\n",
        );

        assert_eq!(catalog.title(&id("patterns/broken")), None);
    }

    #[test]
    fn test_title_field_absent_is_none() {
        let (tmp, catalog) = catalog_with_categories();
        write_entry(
            tmp.path(),
            "patterns",
            "untitled",
            "---\ncategory: patterns\n---\n",
        );

        assert_eq!(catalog.title(&id("patterns/untitled")), None);
    }

    #[test]
    fn test_frontmatter_block_extraction() {
        assert_eq!(
            frontmatter_block("---\ntitle: X\n---\nbody"),
            Some("title: X")
        );
        assert_eq!(frontmatter_block("no fences"), None);
        assert_eq!(frontmatter_block("---\nunterminated"), None);
    }
}
