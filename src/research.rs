//! Reference link generation.
//!
//! Produces a fixed set of templated links per topic. No network access:
//! each link is the topic label dropped into a URL pattern, with spaces
//! replaced by the separator that site's URLs expect.

use crate::models::Topic;

/// A site a reference link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// Encyclopedia article.
    Encyclopedia,
    /// Introductory video search.
    VideoSearch,
    /// Article tag feed.
    TagFeed,
    /// Scholarly paper search.
    Scholar,
}

impl LinkSource {
    /// All sources, in output order.
    pub const ALL: [LinkSource; 4] = [
        LinkSource::Encyclopedia,
        LinkSource::VideoSearch,
        LinkSource::TagFeed,
        LinkSource::Scholar,
    ];

    /// Character that replaces spaces in this source's URL.
    pub fn space_separator(self) -> char {
        match self {
            LinkSource::Encyclopedia => '_',
            LinkSource::VideoSearch | LinkSource::Scholar => '+',
            LinkSource::TagFeed => '-',
        }
    }

    /// URL for a topic.
    pub fn url(self, topic: &str) -> String {
        let slug = topic.replace(' ', &self.space_separator().to_string());
        match self {
            LinkSource::Encyclopedia => format!("https://en.wikipedia.org/wiki/{slug}"),
            LinkSource::VideoSearch => {
                format!("https://www.youtube.com/results?search_query=introduction+to+{slug}")
            }
            LinkSource::TagFeed => format!("https://medium.com/tag/{slug}"),
            LinkSource::Scholar => format!("https://scholar.google.com/scholar?q={slug}"),
        }
    }

    /// Human-readable link title for a topic.
    pub fn title(self, topic: &str) -> String {
        match self {
            LinkSource::Encyclopedia => format!("What is {topic}?"),
            LinkSource::VideoSearch => format!("YouTube Intro to {topic}"),
            LinkSource::TagFeed => format!("Benefits and Risks of {topic}"),
            LinkSource::Scholar => format!("Research Paper on {topic}"),
        }
    }

    /// Full link line: `<title> - <url>`.
    pub fn render(self, topic: &str) -> String {
        format!("{} - {}", self.title(topic), self.url(topic))
    }
}

/// Generates the reference links for a topic, one per [`LinkSource`].
pub fn research_links(topic: &Topic) -> Vec<String> {
    LinkSource::ALL
        .iter()
        .map(|source| source.render(topic.as_str()))
        .collect()
}
