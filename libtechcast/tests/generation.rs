//! Generation behavior with controlled tables
//!
//! Singleton tables remove randomness so exact output can be asserted.

use libtechcast::tables::ContentTables;
use libtechcast::types::{Focus, Language};
use libtechcast::ContentGenerator;

fn singleton_tables() -> ContentTables {
    ContentTables {
        hpc_topics: vec!["Exascale Computing".to_string()],
        ai_topics: vec!["Large Language Models".to_string()],
        organizations: vec!["CERN".to_string()],
        emojis: vec!["🚀".to_string()],
        hpc_templates: vec!["{emoji} {topic} update by {organization}".to_string()],
        ai_templates: vec!["{emoji} {topic} update by {organization}".to_string()],
    }
}

#[test]
fn singleton_tables_produce_exact_output() {
    let mut generator = ContentGenerator::with_tables(singleton_tables(), 280);

    let content = generator.generate(Focus::Hpc).unwrap();
    assert_eq!(
        content,
        "🚀 Exascale Computing update by CERN\n\n#Tech #Innovation #HPC #Supercomputing #HighPerformanceComputing #Exascale"
    );
}

#[test]
fn hashtag_line_is_capped_at_six_tokens() {
    let mut generator = ContentGenerator::with_tables(singleton_tables(), 280);

    let content = generator.generate(Focus::Hpc).unwrap();
    let hashtag_line = content.lines().last().unwrap();
    assert_eq!(hashtag_line.split_whitespace().count(), 6);
    // "#Computing" (second topic word) is the token the cap drops
    assert!(!hashtag_line.contains("#Computing"));
}

#[test]
fn ai_focus_uses_ai_tables() {
    let mut generator = ContentGenerator::with_tables(singleton_tables(), 280);

    let content = generator.generate(Focus::Ai).unwrap();
    assert!(content.contains("Large Language Models"));
    assert!(!content.contains("Exascale"));
    assert!(content.contains("#AI #ArtificialIntelligence #MachineLearning"));
}

#[test]
fn every_generated_post_fits_and_carries_hashtags() {
    for language in [Language::En, Language::Zh] {
        let mut generator = ContentGenerator::new(language, 280);
        for focus in [Focus::Hpc, Focus::Ai] {
            for _ in 0..25 {
                let content = generator.generate(focus).unwrap();
                assert!(
                    content.chars().count() <= 280,
                    "over-length {} content: {}",
                    language,
                    content
                );
                assert!(content.contains('#'));
            }
        }
    }
}

#[test]
fn morning_is_hpc_and_afternoon_is_ai() {
    let mut generator = ContentGenerator::with_tables(singleton_tables(), 280);

    let morning = generator.generate_morning().unwrap();
    assert!(morning.contains("Exascale Computing"));

    let afternoon = generator.generate_afternoon().unwrap();
    assert!(afternoon.contains("Large Language Models"));
}

#[test]
fn daily_content_pairs_both_focuses() {
    let mut generator = ContentGenerator::with_tables(singleton_tables(), 280);

    let daily = generator.generate_daily().unwrap();
    assert!(daily.morning.contains("Exascale Computing"));
    assert!(daily.afternoon.contains("Large Language Models"));
}
