//! Document metadata injected into every page head.
//!
//! 页面 head 元数据。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_title: String,
    pub og_description: String,
    pub og_type: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
}

impl SiteMetadata {
    pub fn default_profile() -> Self {
        Self {
            title: "Jaiyeola John | Full Stack Software Engineer".to_string(),
            description: "Full Stack Developer specializing in Laravel, React, and Node.js. \
                Remote-ready with 5+ years experience building scalable web applications."
                .to_string(),
            keywords: [
                "Full Stack Developer",
                "React Developer",
                "Laravel Developer",
                "Remote Developer",
                "JavaScript",
                "TypeScript",
                "Node.js",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            og_title: "Jaiyeola John | Full Stack Software Engineer".to_string(),
            og_description:
                "Building digital experiences that matter. Specializing in modern web technologies."
                    .to_string(),
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
            twitter_title: "Jaiyeola John | Full Stack Developer".to_string(),
            twitter_description:
                "Passionate about creating scalable, efficient, and user-friendly applications."
                    .to_string(),
        }
    }

    /// `(attribute, key, content)` triples in document order.
    ///
    /// `attribute` is `name` or `property`, as the tag requires.
    pub fn meta_tags(&self) -> Vec<(&'static str, &'static str, String)> {
        vec![
            ("name", "description", self.description.clone()),
            ("name", "keywords", self.keywords.join(", ")),
            ("property", "og:title", self.og_title.clone()),
            ("property", "og:description", self.og_description.clone()),
            ("property", "og:type", self.og_type.clone()),
            ("name", "twitter:card", self.twitter_card.clone()),
            ("name", "twitter:title", self.twitter_title.clone()),
            ("name", "twitter:description", self.twitter_description.clone()),
        ]
    }

    /// Title with the owner name swapped, keeping the role suffix.
    pub fn with_owner(mut self, owner: &str) -> Self {
        let owner = owner.trim();
        if owner.is_empty() {
            return self;
        }
        for title in [&mut self.title, &mut self.og_title, &mut self.twitter_title] {
            if let Some((_, role)) = title.split_once(" | ") {
                *title = format!("{owner} | {role}");
            }
        }
        self
    }
}
