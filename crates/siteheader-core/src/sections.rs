//! Site sections and active-state classification
//!
//! The active section is derived from the location path by substring
//! containment, not exact match, so nested pages without a shared URL
//! prefix (e.g. blog posts under `/pyspark/`) still light up their section.

/// Top-level site section, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Work,
    About,
    Blog,
    Contact,
}

impl Section {
    /// All sections in the order they appear in the nav bar
    pub const ALL: [Section; 4] = [
        Section::Work,
        Section::About,
        Section::Blog,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Work => "Work",
            Section::About => "About",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }

    /// Page the nav link points at, relative to the site root
    pub fn page(self) -> &'static str {
        match self {
            Section::Work => "work.html",
            Section::About => "about.html",
            Section::Blog => "blog.html",
            Section::Contact => "contact.html",
        }
    }

    /// Path substrings that mark this section active
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Section::Work => &["work.html"],
            Section::About => &["about.html"],
            // Blog posts live under several topic directories
            Section::Blog => &["blog", "pyspark", "search", "crawler"],
            Section::Contact => &["contact.html"],
        }
    }

    pub fn is_active(self, path: &str) -> bool {
        self.tokens().iter().any(|token| path.contains(token))
    }
}

/// Active flags for every section, computed independently per section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSections {
    pub work: bool,
    pub about: bool,
    pub blog: bool,
    pub contact: bool,
}

impl ActiveSections {
    pub fn classify(path: &str) -> Self {
        Self {
            work: Section::Work.is_active(path),
            about: Section::About.is_active(path),
            blog: Section::Blog.is_active(path),
            contact: Section::Contact.is_active(path),
        }
    }

    pub fn get(&self, section: Section) -> bool {
        match section {
            Section::Work => self.work,
            Section::About => self.about,
            Section::Blog => self.blog,
            Section::Contact => self.contact,
        }
    }

    /// Sections marked active, in nav order
    pub fn active(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(|s| self.get(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_page_only_marks_work() {
        let active = ActiveSections::classify("/work.html");
        assert_eq!(active.active().collect::<Vec<_>>(), vec![Section::Work]);
    }

    #[test]
    fn test_blog_tokens_all_map_to_blog() {
        for path in [
            "/blog.html",
            "/blog/post-1.html",
            "/pyspark/joins.html",
            "/search/index.html",
            "/crawler/part-2.html",
        ] {
            let active = ActiveSections::classify(path);
            assert!(active.blog, "{} should mark blog", path);
            assert!(!active.work && !active.about && !active.contact);
        }
    }

    #[test]
    fn test_index_marks_nothing() {
        let active = ActiveSections::classify("/index.html");
        assert_eq!(active, ActiveSections::default());
        assert_eq!(ActiveSections::classify("/").active().count(), 0);
    }

    #[test]
    fn test_substring_not_exact_match() {
        assert!(Section::About.is_active("/old/about.html?ref=nav"));
        assert!(Section::Contact.is_active("/site/contact.html"));
    }

    #[test]
    fn test_overlapping_tokens_mark_both() {
        // Not a well-formed URL for this site, but flags stay independent
        let active = ActiveSections::classify("/blog/work.html");
        assert!(active.work);
        assert!(active.blog);
    }
}
