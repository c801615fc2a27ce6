//! Template-based content generation
//!
//! Picks a random topic/template/organization/emoji combination for the
//! requested focus, fills the template, appends a hashtag line, and
//! enforces the configured maximum length. The RNG is injectable so
//! tests can seed it or remove randomness with singleton tables.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::tables::ContentTables;
use crate::types::{ContentStats, DailyContent, Focus, Language};

/// Ellipsis appended after hard truncation
const TRUNCATION_MARKER: &str = "...";

/// Maximum number of hashtag tokens kept on the hashtag line
const MAX_HASHTAGS: usize = 6;

/// Hashtag tokens kept when shortening an over-length post
const SHORTENED_HASHTAGS: usize = 3;

pub struct ContentGenerator {
    tables: ContentTables,
    max_length: usize,
    rng: Box<dyn RngCore + Send>,
}

impl ContentGenerator {
    /// Create a generator with the standard tables for a language
    pub fn new(language: Language, max_length: usize) -> Self {
        Self::with_tables(ContentTables::for_language(language), max_length)
    }

    /// Create a generator from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.content.language, config.content.max_length)
    }

    /// Create a generator with custom tables
    ///
    /// Singleton tables remove randomness entirely, which the tests use
    /// to pin down exact output.
    pub fn with_tables(tables: ContentTables, max_length: usize) -> Self {
        Self {
            tables,
            max_length,
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Replace the random source, e.g. with a seeded `StdRng`
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Generate content for the given focus
    pub fn generate(&mut self, focus: Focus) -> Result<String> {
        let topic = pick(&mut self.rng, self.tables.topics(focus), "topics")?;
        let template = pick(&mut self.rng, self.tables.templates(focus), "templates")?;
        let organization = pick(&mut self.rng, &self.tables.organizations, "organizations")?;
        let emoji = pick(&mut self.rng, &self.tables.emojis, "emojis")?;

        let date = Local::now().format("%Y-%m-%d").to_string();
        let mut content = fill_template(template, emoji, topic, organization, &date);

        content.push_str("\n\n");
        content.push_str(&hashtag_line(topic, focus));

        let content = self.enforce_length(content);
        debug!(focus = %focus, length = content.chars().count(), "generated content");
        Ok(content)
    }

    /// Morning content (HPC focus)
    pub fn generate_morning(&mut self) -> Result<String> {
        self.generate(Focus::Hpc)
    }

    /// Afternoon content (AI focus)
    pub fn generate_afternoon(&mut self) -> Result<String> {
        self.generate(Focus::Ai)
    }

    /// Morning and afternoon content in one call
    pub fn generate_daily(&mut self) -> Result<DailyContent> {
        Ok(DailyContent {
            morning: self.generate_morning()?,
            afternoon: self.generate_afternoon()?,
        })
    }

    /// Simple statistics about a piece of content
    pub fn content_stats(&self, content: &str) -> ContentStats {
        ContentStats {
            length: content.chars().count(),
            lines: content.split('\n').count(),
            hashtags: content.matches('#').count(),
            mentions: content.matches('@').count(),
            emojis: content
                .chars()
                .filter(|c| self.tables.emojis.contains(&c.to_string()))
                .count(),
        }
    }

    /// Bring content under the maximum length
    ///
    /// First tries dropping hashtag tokens from the last line, then hard
    /// truncates with an ellipsis marker as a last resort.
    fn enforce_length(&self, content: String) -> String {
        let length = content.chars().count();
        if length <= self.max_length {
            return content;
        }

        warn!(length, max = self.max_length, "content too long, truncating");

        let mut content = content;
        let lines: Vec<&str> = content.split('\n').collect();
        if lines.len() >= 3 {
            let tags: Vec<&str> = lines[lines.len() - 1].split_whitespace().collect();
            if tags.len() > SHORTENED_HASHTAGS {
                let mut shortened: Vec<String> =
                    lines[..lines.len() - 1].iter().map(|l| l.to_string()).collect();
                shortened.push(tags[..SHORTENED_HASHTAGS].join(" "));
                content = shortened.join("\n");
            }
        }

        if content.chars().count() > self.max_length {
            let kept = self.max_length.saturating_sub(TRUNCATION_MARKER.len());
            content = content.chars().take(kept).collect::<String>() + TRUNCATION_MARKER;
        }

        content
    }
}

/// Uniformly pick one entry from a table
fn pick<'a, R: Rng>(rng: &mut R, table: &'a [String], name: &str) -> Result<&'a str> {
    if table.is_empty() {
        return Err(ConfigError::EmptyTable(name.to_string()).into());
    }
    let index = rng.gen_range(0..table.len());
    Ok(&table[index])
}

/// Structured placeholder substitution
fn fill_template(
    template: &str,
    emoji: &str,
    topic: &str,
    organization: &str,
    date: &str,
) -> String {
    template
        .replace("{emoji}", emoji)
        .replace("{topic}", topic)
        .replace("{organization}", organization)
        .replace("{date}", date)
}

/// Build the hashtag line for a topic and focus
///
/// Two base tags, three focus tags, up to two tags derived from the
/// first two words of the topic, capped at six tokens.
fn hashtag_line(topic: &str, focus: Focus) -> String {
    let mut tags: Vec<String> = vec!["#Tech".to_string(), "#Innovation".to_string()];

    let focus_tags: [&str; 3] = match focus {
        Focus::Hpc => ["#HPC", "#Supercomputing", "#HighPerformanceComputing"],
        Focus::Ai => ["#AI", "#ArtificialIntelligence", "#MachineLearning"],
    };
    tags.extend(focus_tags.iter().map(|t| t.to_string()));

    for word in topic.split_whitespace().take(2) {
        tags.push(format!("#{}", capitalize(word)));
    }

    tags.truncate(MAX_HASHTAGS);
    tags.join(" ")
}

/// Lowercase a word, then uppercase its first character
fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => lower,
    }
}
