//! Keyword rules for categories and tags.
//!
//! Both tables are ordered: categories stop at the first rule that matches,
//! tags are appended in table order.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anime,
    Lofi,
    Ambient,
    Electronic,
    Romantic,
    Classical,
    Cinematic,
    Energetic,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Anime => "anime",
            Category::Lofi => "lofi",
            Category::Ambient => "ambient",
            Category::Electronic => "electronic",
            Category::Romantic => "romantic",
            Category::Classical => "classical",
            Category::Cinematic => "cinematic",
            Category::Energetic => "energetic",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Anime,
        &["anime", "naruto", "demon slayer", "doraemon", "shounen"],
    ),
    (Category::Lofi, &["lofi", "chill", "study"]),
    (Category::Ambient, &["ambient", "calm", "nature", "meditation"]),
    (Category::Electronic, &["cyberpunk", "electronic", "edm"]),
    (Category::Romantic, &["romantic", "love", "casa rosa"]),
    (Category::Classical, &["piano", "classical", "soft"]),
    (
        Category::Cinematic,
        &["cinematic", "epic", "lumiere", "clair obscur"],
    ),
    (Category::Energetic, &["darkside", "energetic", "upbeat"]),
];

pub const TAG_RULES: &[(&str, &[&str])] = &[
    ("relaxing", &["calm", "peaceful", "soft", "ambient"]),
    ("study", &["lofi", "focus", "concentration", "study"]),
    ("energetic", &["upbeat", "energetic", "power"]),
    ("anime", &["anime", "naruto", "demon slayer", "doraemon"]),
    ("japanese", &["japanese", "japan"]),
    ("cover", &["cover"]),
    ("slowed", &["slowed", "slow"]),
    ("instrumental", &["piano", "instrumental"]),
];

fn any_keyword(haystacks: &[&str], keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|kw| haystacks.iter().any(|h| h.contains(kw)))
}

/// First category whose keywords appear in `filename` or `title`.
pub fn categorize(filename: &str, title: &str) -> Category {
    let filename = filename.to_lowercase();
    let title = title.to_lowercase();
    let haystacks = [filename.as_str(), title.as_str()];

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| any_keyword(&haystacks, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

/// Category label followed by every matching tag, at most `max` entries.
pub fn generate_tags(
    filename: &str,
    title: &str,
    artist: &str,
    category: Category,
    max: usize,
) -> Vec<String> {
    let text = format!("{filename} {title} {artist}").to_lowercase();
    let mut tags = vec![category.as_str().to_string()];

    for (tag, keywords) in TAG_RULES {
        if any_keyword(&[text.as_str()], keywords) && !tags.iter().any(|t| t == tag) {
            tags.push((*tag).to_string());
        }
    }

    tags.truncate(max);
    tags
}
