/**
 * Prompt Building
 *
 * Every prompt sent to the text model is assembled here: the profile-aware
 * generation prompt, the improvement prompts, the enforcer's rewrite
 * prompts and the topic suggestion prompt. The static fallbacks used when
 * the model is unavailable live here too.
 *
 * Industry lookups fall back to the Technology entry for unknown
 * industries.
 */

use rand::seq::IndexedRandom;
use std::collections::HashMap;

use crate::backend::auth::users::User;
use crate::shared::budget::{fraction_of, soft_limit};
use crate::shared::content::{PostLength, PostType, SuggestionType};

const DEFAULT_INDUSTRY: &str = "Technology";

/// Profile fields that shape a generation prompt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorProfile {
    pub name: String,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub current_role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub brand_voice: String,
    pub skills: Vec<String>,
}

impl AuthorProfile {
    /// Industry name, or the default when the profile has none
    pub fn industry_or_default(&self) -> &str {
        self.industry
            .as_deref()
            .filter(|i| !i.trim().is_empty())
            .unwrap_or(DEFAULT_INDUSTRY)
    }
}

impl From<&User> for AuthorProfile {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            headline: user.headline.clone(),
            industry: user.industry.clone(),
            current_role: user.current_role.clone(),
            company: user.company.clone(),
            location: user.location.clone(),
            brand_voice: user.brand_voice.clone(),
            skills: user.skills.0.clone(),
        }
    }
}

/// What the caller asked to generate
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub post_type: PostType,
    pub length: PostLength,
    pub tone: String,
    pub audience: Option<String>,
}

/// Length guidance and outline for one post type and length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentStructure {
    pub length_instruction: &'static str,
    pub structure: &'static str,
}

/// Industry focus, themes and audience notes
pub fn industry_context(industry: &str) -> &'static str {
    match industry {
        "Marketing" => "Focus: Digital strategies, branding, automation, ROI.\n\
            Key themes: Customer journey, personalization, omnichannel, storytelling.\n\
            Audience: Actionable tactics, case studies, performance metrics.",
        "Finance" => "Focus: Investment, fintech, regulation, trends.\n\
            Key themes: Market volatility, diversification, digital banking, crypto.\n\
            Audience: Data-backed insights, predictions, compliance updates.",
        "Healthcare" => "Focus: Digital health, telemedicine, patient care, policy.\n\
            Key themes: Outcomes, accessibility, innovation, compliance, prevention.\n\
            Audience: Evidence-based, safety-focused, tech adoption insights.",
        "Education" => "Focus: EdTech, learning methods, online education.\n\
            Key themes: Personalized learning, accessibility, skills development.\n\
            Audience: Pedagogical insights, tech integration, student success stories.",
        _ => "Focus: AI/ML, digital transformation, cybersecurity, startups.\n\
            Key themes: Disruption, scalability, UX, data-driven decisions, emerging tech.\n\
            Audience: Future-focused, practical insights, credible commentary.",
    }
}

/// Outline for a post type and length
pub fn content_structure(post_type: PostType, length: PostLength) -> ContentStructure {
    use PostLength::*;
    use PostType::*;

    let (length_instruction, structure) = match (post_type, length) {
        (Professional, Short) => (
            "50-100 words, concise and impactful",
            "1. Strong opening\n2. Key insight or data\n3. Brief perspective\n4. Call-to-action",
        ),
        (Professional, Medium) => (
            "100-200 words, balanced depth and engagement",
            "1. Attention hook\n2. Context (2-3 sentences)\n3. Main insight with support\n4. Personal example\n5. Engaging CTA",
        ),
        (Professional, Long) => (
            "200-300 words, comprehensive storytelling",
            "1. Story opener\n2. Background context\n3. Detailed analysis\n4. Case study\n5. Takeaways\n6. CTA",
        ),
        (Casual, Short) => (
            "50-100 words, conversational",
            "1. Personal anecdote\n2. Relatable insight\n3. Light humor\n4. Question",
        ),
        (Casual, Medium) => (
            "100-200 words, conversational and relatable",
            "1. Casual opener\n2. Relevant story\n3. Lesson or insight\n4. Friendly CTA",
        ),
        (Casual, Long) => (
            "200-300 words, informal storytelling",
            "1. Story-driven intro\n2. Detailed narrative\n3. Relatable lesson\n4. Sign-off + question",
        ),
        (ThoughtLeadership, Short) => (
            "50-100 words, authoritative",
            "1. Bold view\n2. Supporting rationale\n3. Implication\n4. Starter question",
        ),
        (ThoughtLeadership, Medium) => (
            "100-200 words, insightful",
            "1. Trend/challenge\n2. Unique perspective\n3. Evidence\n4. Question for leaders",
        ),
        (ThoughtLeadership, Long) => (
            "200-300 words, broad analysis",
            "1. Strategic observation\n2. Evaluation\n3. Bold stance\n4. Future vision + CTA",
        ),
    };

    ContentStructure {
        length_instruction,
        structure,
    }
}

/// Trending topics per industry
///
/// Owned by the content service. The table is static, so there is nothing
/// to invalidate.
#[derive(Debug, Clone)]
pub struct TrendCatalog {
    topics: HashMap<String, String>,
}

impl Default for TrendCatalog {
    fn default() -> Self {
        let topics = [
            ("Technology", "AI automation, remote work tools, cybersecurity threats, sustainable tech, quantum computing"),
            ("Marketing", "AI personalization, privacy-first marketing, influencer partnerships, video content, social commerce"),
            ("Finance", "Digital banking, ESG investing, crypto adoption, fintech regulation, financial wellness"),
            ("Healthcare", "Telemedicine, AI diagnostics, patient data security, mental health, preventive care"),
            ("Education", "Hybrid models, AI tutoring, skills-based learning, educational equity, micro-credentials"),
        ];
        Self::new(topics.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }
}

impl TrendCatalog {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            topics: entries.into_iter().collect(),
        }
    }

    /// Trending topics line for `industry`
    pub fn trending_for(&self, industry: &str) -> String {
        let topics = self
            .topics
            .get(industry)
            .or_else(|| self.topics.get(DEFAULT_INDUSTRY))
            .map(String::as_str)
            .unwrap_or("");
        format!("Current trending topics in {}: {}", industry, topics)
    }
}

/// Builds the generation prompt from a profile and a request
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    trends: TrendCatalog,
}

impl PromptBuilder {
    pub fn new(trends: TrendCatalog) -> Self {
        Self { trends }
    }

    pub fn trends(&self) -> &TrendCatalog {
        &self.trends
    }

    /// Profile-aware post generation prompt
    pub fn generation_prompt(&self, profile: &AuthorProfile, request: &GenerationRequest) -> String {
        let industry = profile.industry_or_default();
        let skills = if profile.skills.is_empty() {
            "Various professional skills".to_string()
        } else {
            profile
                .skills
                .iter()
                .take(5)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };
        let structure = content_structure(request.post_type, request.length);

        format!(
            "You are creating content for {name}, a real LinkedIn professional.\n\
             \n\
             USER PROFILE:\n\
             - Name: {name}\n\
             - Professional Headline: {headline}\n\
             - Industry: {industry}\n\
             - Current Role: {role}\n\
             - Company: {company}\n\
             - Location: {location}\n\
             - Brand Voice: {voice}\n\
             - Skills: {skills}\n\
             \n\
             CREATE A HIGH-ENGAGEMENT LINKEDIN POST:\n\
             Topic: {topic}\n\
             Style: {style}\n\
             Tone: {tone}\n\
             Target Audience: {audience}\n\
             Length: {length}\n\
             \n\
             Make this post authentic to {name}'s professional background in {industry}.\n\
             Reference their expertise and use language that matches their {voice} brand voice.\n\
             \n\
             INDUSTRY CONTEXT:\n\
             {context}\n\
             \n\
             {trends}\n\
             \n\
             CONTENT STRUCTURE:\n\
             {structure}\n\
             \n\
             Add 3-5 relevant hashtags. Return ONLY the post text, no markdown.",
            name = profile.name,
            headline = profile.headline.as_deref().unwrap_or("Professional"),
            industry = industry,
            role = profile.current_role.as_deref().unwrap_or("Professional"),
            company = profile.company.as_deref().unwrap_or("Current Company"),
            location = profile.location.as_deref().unwrap_or("Global"),
            voice = profile.brand_voice,
            skills = skills,
            topic = request.topic,
            style = request.post_type.as_str(),
            tone = request.tone,
            audience = request.audience.as_deref().unwrap_or("Industry professionals"),
            length = structure.length_instruction,
            context = industry_context(industry),
            trends = self.trends.trending_for(industry),
            structure = structure.structure,
        )
    }
}

/// Wording of the enforcer's single rewrite request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStyle {
    /// Aim just under the budget; used for fresh generations
    LongForm,
    /// Ask for a concise version within the budget; used for improvements
    Concise,
}

impl RewriteStyle {
    pub fn prompt(self, content: &str, max_characters: usize) -> String {
        match self {
            RewriteStyle::LongForm => format!(
                "Rewrite this LinkedIn post as a detailed long-form LinkedIn article. \
                 Target between {} and {} characters (including spaces). \
                 Do not go below {} characters. \
                 Keep all key ideas, expand explanations, and ensure readability:\n\n{}",
                soft_limit(max_characters),
                max_characters,
                fraction_of(max_characters, 85, 100),
                content
            ),
            RewriteStyle::Concise => format!(
                "Rewrite this LinkedIn post to stay within {} characters. \
                 Do not drop the main ideas, just make it concise:\n\n{}",
                max_characters, content
            ),
        }
    }
}

/// Prompt for one of the `/improve` suggestion types
pub fn improvement_prompt(
    suggestion: SuggestionType,
    content: &str,
    target_tone: Option<&str>,
    specific_request: Option<&str>,
    max_characters: usize,
) -> String {
    match suggestion {
        SuggestionType::Improve => format!(
            "Rewrite the following LinkedIn post by applying improvements directly.\n\n\
             Current post:\n{}\n\n\
             Apply improvements for:\n\
             - Stronger engagement (hooks, CTAs, questions)\n\
             - Clearer and more professional tone\n\
             - Better structure and readability\n\n\
             Return ONE improved post only, not suggestions or lists.",
            content
        ),
        SuggestionType::Shorten => format!(
            "Rewrite the following LinkedIn post into ONE concise version about 50% shorter, \
             while keeping the core message intact.\n\n\
             Original post:\n{}",
            content
        ),
        SuggestionType::Expand => format!(
            "Expand the following LinkedIn post into ONE version under {} characters.\n\n\
             Current post:\n{}\n\n\
             Add:\n\
             - More examples and details\n\
             - Industry insights or trends\n\
             - A touch of personal experience\n\n\
             Return ONE rewritten post only.",
            max_characters, content
        ),
        SuggestionType::ToneChange => format!(
            "Rewrite the following LinkedIn post in a {} tone.\n\n\
             Original post:\n{}\n\n\
             Return ONE rewritten post only.",
            target_tone.unwrap_or("professional"),
            content
        ),
        SuggestionType::Custom => format!(
            "Modify the following LinkedIn post based on this request: \"{}\"\n\n\
             Current post:\n{}\n\n\
             Return ONE rewritten post only.",
            specific_request.unwrap_or(""),
            content
        ),
    }
}

/// Prompt asking for five topic ideas
pub fn suggestion_prompt(industry: &str) -> String {
    format!(
        "Generate 5 trending and engaging LinkedIn post topics for the {} industry.\n\
         Focus on current trends, professional insights, and content that would drive engagement.\n\
         Return only the topic titles, one per line.",
        industry
    )
}

/// Keep up to five non-empty lines that are not bullet points
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('-'))
        .take(5)
        .map(String::from)
        .collect()
}

/// Static topic ideas used when the model is unavailable
pub fn fallback_suggestions(industry: &str) -> Vec<String> {
    let topics: [&str; 5] = match industry {
        "Marketing" => [
            "Social media marketing trends",
            "Content marketing strategies",
            "Customer experience optimization",
            "Brand storytelling",
            "Digital marketing analytics",
        ],
        "Finance" => [
            "Fintech innovations",
            "Investment strategies",
            "Cryptocurrency trends",
            "Financial planning tips",
            "Economic market analysis",
        ],
        "Healthcare" => [
            "Digital health innovations",
            "Patient care optimization",
            "Healthcare technology trends",
            "Medical research insights",
            "Healthcare policy updates",
        ],
        "Education" => [
            "EdTech innovations",
            "Online learning trends",
            "Student engagement strategies",
            "Educational technology",
            "Future of education",
        ],
        _ => [
            "AI and Machine Learning trends",
            "Remote work productivity",
            "Digital transformation",
            "Cybersecurity best practices",
            "Future of software development",
        ],
    };
    topics.iter().map(|t| t.to_string()).collect()
}

/// Template post used when generation fails for a variation
pub fn fallback_post(topic: &str, profile: &AuthorProfile) -> String {
    let industry = profile
        .industry
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or("professional");
    let role = profile
        .current_role
        .as_deref()
        .filter(|r| !r.trim().is_empty())
        .unwrap_or("professional");

    let templates = [
        format!(
            "Sharing insights on {} in the {} space. What's your perspective?",
            topic, industry
        ),
        format!(
            "As a {}, I've been reflecting on {}. Curious how others see it?",
            role, topic
        ),
        format!(
            "Excited to explore how {} is shaping {}. Drop your thoughts below!",
            topic, industry
        ),
    ];
    let body = templates
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_default();

    format!(
        "{} #{} #innovation #thoughtleadership",
        body,
        industry.to_lowercase().replace(' ', "")
    )
}
