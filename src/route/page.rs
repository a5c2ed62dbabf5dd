//! Page file kinds and the page-file predicate.

use std::path::Path;

use crate::utils::path::to_slash;

/// Kind of page file, determined by extension.
///
/// The set is closed: these are the formats the host framework treats
/// as routable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Component template (.astro)
    Astro,
    /// Script endpoint or component (.ts, .tsx, .js, .jsx)
    Script,
    /// Markdown page (.md, .mdx)
    Markdown,
}

impl PageKind {
    /// Every recognized page extension, without the leading dot.
    pub const EXTENSIONS: &'static [&'static str] = &["astro", "ts", "tsx", "js", "jsx", "md", "mdx"];

    /// Detect page kind from file extension (case-sensitive, like the host).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "astro" => Some(Self::Astro),
            "ts" | "tsx" | "js" | "jsx" => Some(Self::Script),
            "md" | "mdx" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Detect page kind from a file name such as `[slug].astro`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.rsplit_once('.')
            .and_then(|(stem, ext)| (!stem.is_empty()).then_some(ext))
            .and_then(Self::from_extension)
    }
}

/// Check whether `file` is a page file under `pages_root`.
///
/// Used by file watchers to drop irrelevant events before asking for a
/// rescan. Both paths are compared with `/` separators so Windows-style
/// watcher output matches a Unix-style configured root and vice versa.
pub fn is_page_file(file: &Path, pages_root: &Path) -> bool {
    let file = to_slash(file);
    let mut root = to_slash(pages_root);
    if !root.ends_with('/') {
        root.push('/');
    }

    file.starts_with(&root) && PageKind::from_file_name(&file[root.len()..]).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(PageKind::from_extension("astro"), Some(PageKind::Astro));
        assert_eq!(PageKind::from_extension("tsx"), Some(PageKind::Script));
        assert_eq!(PageKind::from_extension("mdx"), Some(PageKind::Markdown));
        assert_eq!(PageKind::from_extension("html"), None);
        assert_eq!(PageKind::from_extension("css"), None);
    }

    #[test]
    fn test_every_listed_extension_is_recognized() {
        for ext in PageKind::EXTENSIONS {
            assert!(PageKind::from_extension(ext).is_some(), "{ext} not recognized");
        }
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(PageKind::from_file_name("[slug].astro"), Some(PageKind::Astro));
        assert_eq!(PageKind::from_file_name("post.md"), Some(PageKind::Markdown));
        assert_eq!(PageKind::from_file_name("styles.css"), None);
        assert_eq!(PageKind::from_file_name("README"), None);
        // dotfile with no stem
        assert_eq!(PageKind::from_file_name(".ts"), None);
    }

    #[test]
    fn test_is_page_file() {
        let root = PathBuf::from("/site/src/pages");
        assert!(is_page_file(Path::new("/site/src/pages/about.astro"), &root));
        assert!(is_page_file(Path::new("/site/src/pages/blog/[slug].md"), &root));
        assert!(!is_page_file(Path::new("/site/src/pages/logo.png"), &root));
        assert!(!is_page_file(Path::new("/site/src/components/Nav.astro"), &root));
        // sibling directory sharing a prefix
        assert!(!is_page_file(Path::new("/site/src/pages-old/a.astro"), &root));
    }

    #[test]
    fn test_is_page_file_backslashes() {
        let root = PathBuf::from("C:\\site\\src\\pages\\");
        assert!(is_page_file(Path::new("C:\\site\\src\\pages\\blog\\index.astro"), &root));
        assert!(is_page_file(Path::new("C:/site/src/pages/index.astro"), &root));
    }
}
