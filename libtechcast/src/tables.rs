//! Static topic, organization, emoji, and template tables
//!
//! All tables are immutable after construction. Templates carry
//! `{emoji}`, `{topic}`, `{organization}`, and `{date}` placeholders
//! that the generator fills via structured substitution.

use crate::types::{Focus, Language};

/// The content tables a generator draws from
#[derive(Debug, Clone)]
pub struct ContentTables {
    pub hpc_topics: Vec<String>,
    pub ai_topics: Vec<String>,
    pub organizations: Vec<String>,
    pub emojis: Vec<String>,
    pub hpc_templates: Vec<String>,
    pub ai_templates: Vec<String>,
}

impl ContentTables {
    /// Build the standard tables for the given language
    pub fn for_language(language: Language) -> Self {
        let (hpc_templates, ai_templates) = match language {
            Language::En => (english_hpc_templates(), english_ai_templates()),
            Language::Zh => (chinese_hpc_templates(), chinese_ai_templates()),
        };

        Self {
            hpc_topics: hpc_topics(),
            ai_topics: ai_topics(),
            organizations: organizations(),
            emojis: emojis(),
            hpc_templates,
            ai_templates,
        }
    }

    /// Topic set for a focus
    pub fn topics(&self, focus: Focus) -> &[String] {
        match focus {
            Focus::Hpc => &self.hpc_topics,
            Focus::Ai => &self.ai_topics,
        }
    }

    /// Template set for a focus
    pub fn templates(&self, focus: Focus) -> &[String] {
        match focus {
            Focus::Hpc => &self.hpc_templates,
            Focus::Ai => &self.ai_templates,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn hpc_topics() -> Vec<String> {
    to_strings(&[
        "Exascale Computing",
        "Quantum-HPC Integration",
        "AI for Science",
        "High Performance Data Analytics",
        "Green Computing",
        "HPC Cloud",
        "GPU Computing",
        "Storage Technologies",
        "Interconnect Networks",
        "Scientific Visualization",
        "Edge Computing",
        "Hybrid Computing",
        "Memory Technologies",
        "Parallel Algorithms",
        "Workflow Management",
    ])
}

fn ai_topics() -> Vec<String> {
    to_strings(&[
        "Large Language Models",
        "Computer Vision",
        "Reinforcement Learning",
        "Generative AI",
        "Federated Learning",
        "Explainable AI",
        "AI Ethics",
        "Edge AI",
        "AI Hardware",
        "Multimodal AI",
        "Transfer Learning",
        "Self-Supervised Learning",
        "Neuro-Symbolic AI",
        "AI Safety",
        "AI Governance",
    ])
}

fn organizations() -> Vec<String> {
    to_strings(&[
        "DOE (Department of Energy)",
        "NSF (National Science Foundation)",
        "CERN",
        "NASA",
        "Oak Ridge National Laboratory",
        "Lawrence Livermore National Laboratory",
        "Argonne National Laboratory",
        "European HPC Centers",
        "Chinese Supercomputing Centers",
        "Japanese Research Institutions",
        "MIT",
        "Stanford University",
        "Google Research",
        "Microsoft Research",
        "OpenAI",
    ])
}

fn emojis() -> Vec<String> {
    to_strings(&[
        "🚀", "🔬", "💻", "⚡", "🌍", "📈", "🔍", "🎯", "🤖", "🧠", "💡", "⚛️", "🔋", "📊", "🌐",
    ])
}

fn english_hpc_templates() -> Vec<String> {
    to_strings(&[
        "{emoji} {topic} breakthrough: {organization} reports significant performance improvements, accelerating scientific discovery.\n\n#HighPerformanceComputing #ScientificComputing",
        "{emoji} {topic} technology analysis: New architecture shows excellent performance in {organization} tests, with improved energy efficiency.\n\nFollow cutting-edge computing infrastructure development!",
        "{emoji} {topic} application case: {organization} uses this technology to solve complex scientific problems, dramatically reducing computation time.\n\n#HPC #ResearchInnovation",
        "{emoji} Latest developments in {topic}: {organization} study reveals groundbreaking advances in computational capabilities.\n\n#Supercomputing #TechInnovation",
        "{emoji} {topic} infrastructure update: {organization} deploys new system achieving record-breaking performance metrics.\n\n#HPCNews #Computing",
    ])
}

fn english_ai_templates() -> Vec<String> {
    to_strings(&[
        "{emoji} {topic} breakthrough: {organization} research team publishes latest results, achieving new performance heights.\n\n#ArtificialIntelligence #MachineLearning",
        "{emoji} {topic} applications: Demonstrates powerful capabilities in real-world scenarios, validated by {organization}.\n\n#AI #TechnologyInnovation",
        "{emoji} {topic} trend analysis: {organization} report indicates rapid development in this field with widespread industry applications.\n\nFollow AI frontier developments!",
        "{emoji} Advancements in {topic}: {organization} researchers achieve state-of-the-art results in benchmark tests.\n\n#AIResearch #DeepLearning",
        "{emoji} {topic} implementation: Successful deployment at {organization} shows promising results for future applications.\n\n#AITechnology #Innovation",
    ])
}

fn chinese_hpc_templates() -> Vec<String> {
    to_strings(&[
        "{emoji} {topic}最新进展：{organization}报告显示性能提升显著，推动科学发现加速。\n\n#高性能计算 #科学计算",
        "{emoji} {topic}技术解析：新型架构在{organization}测试中表现优异，能效比改善明显。\n\n关注前沿计算基础设施发展！",
        "{emoji} {topic}应用案例：{organization}利用该技术解决复杂科学问题，计算时间大幅缩短。\n\n#HPC #科研创新",
        "{emoji} {topic}基础设施更新：{organization}部署新系统，实现突破性性能指标。\n\n#超算 #技术创新",
        "{emoji} {topic}研究动态：{organization}最新研究揭示计算能力重大进展。\n\n#高性能计算 #科技前沿",
    ])
}

fn chinese_ai_templates() -> Vec<String> {
    to_strings(&[
        "{emoji} {topic}突破：{organization}研究团队发布最新成果，模型性能达到新高度。\n\n#人工智能 #机器学习",
        "{emoji} {topic}应用：在实际场景中展现强大能力，{organization}验证其有效性。\n\n#AI #技术创新",
        "{emoji} {topic}趋势分析：{organization}报告指出该领域发展迅速，产业应用广泛。\n\n关注AI前沿动态！",
        "{emoji} {topic}进展：{organization}研究人员在基准测试中取得最先进成果。\n\n#AI研究 #深度学习",
        "{emoji} {topic}实施：在{organization}的成功部署显示未来应用前景广阔。\n\n#AI技术 #创新",
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let tables = ContentTables::for_language(Language::En);
        assert_eq!(tables.hpc_topics.len(), 15);
        assert_eq!(tables.ai_topics.len(), 15);
        assert_eq!(tables.organizations.len(), 15);
        assert_eq!(tables.emojis.len(), 15);
        assert_eq!(tables.hpc_templates.len(), 5);
        assert_eq!(tables.ai_templates.len(), 5);
    }

    #[test]
    fn test_topic_sets_are_disjoint() {
        let tables = ContentTables::for_language(Language::En);
        for topic in &tables.hpc_topics {
            assert!(!tables.ai_topics.contains(topic));
        }
    }

    #[test]
    fn test_templates_vary_by_language() {
        let en = ContentTables::for_language(Language::En);
        let zh = ContentTables::for_language(Language::Zh);
        assert_ne!(en.hpc_templates, zh.hpc_templates);
        assert_ne!(en.ai_templates, zh.ai_templates);
        // Topics and organizations are shared across languages
        assert_eq!(en.hpc_topics, zh.hpc_topics);
        assert_eq!(en.organizations, zh.organizations);
    }

    #[test]
    fn test_templates_carry_placeholders() {
        let tables = ContentTables::for_language(Language::En);
        for template in tables.hpc_templates.iter().chain(&tables.ai_templates) {
            assert!(template.contains("{emoji}"));
            assert!(template.contains("{topic}"));
            assert!(template.contains("{organization}"));
        }
    }

    #[test]
    fn test_focus_accessors() {
        let tables = ContentTables::for_language(Language::En);
        assert_eq!(tables.topics(Focus::Hpc), tables.hpc_topics.as_slice());
        assert_eq!(tables.topics(Focus::Ai), tables.ai_topics.as_slice());
        assert_eq!(
            tables.templates(Focus::Hpc),
            tables.hpc_templates.as_slice()
        );
    }
}
