/// Produces the assistant's answer to a user message, before any mood
/// prefix or translation is applied.
pub trait ReplyGenerator: Send + Sync {
    fn generate(&self, user_text: &str) -> String;
}

const JOB: &[&str] = &["job", "नौकरी", "வேலை"];
const FORM: &[&str] = &["form", "application", "document"];
const STRESS: &[&str] = &["stress", "worried", "anxiety", "sad"];
const SCHEME: &[&str] = &["scheme", "benefit", "government"];
const LEARNING: &[&str] = &["learn", "study", "course"];
const EMERGENCY: &[&str] = &["emergency", "help", "urgent"];

pub(crate) const JOB_REPLY: &str = "I can help you find job opportunities! Based on your profile, I found several suitable positions. Would you like me to create a resume for you or search for specific job types? I can also help you prepare for interviews.";
pub(crate) const FORM_REPLY: &str = "I can help you create various forms and applications. What type of document do you need? For example, RTI application, bank forms, police complaints, or government scheme applications? Just tell me what you need and I'll guide you through it.";
pub(crate) const STRESS_REPLY: &str = "I understand you're feeling stressed. Let me suggest some government mental health resources and relaxation techniques. Would you also like me to schedule reminders for self-care activities? Remember, it's okay to seek help.";
pub(crate) const SCHEME_REPLY: &str = "I can help you find government schemes you're eligible for. Based on your location and profile, here are some schemes you might qualify for. Would you like detailed information about any specific scheme like PM Mudra Loan, Pradhan Mantri Awas Yojana, or Skill India Mission?";
pub(crate) const LEARNING_REPLY: &str = "Great! I can help you with learning opportunities. We have interactive modules on digital literacy, financial planning, legal rights, and job skills. Which topic interests you most? I can also suggest free online courses based on your goals.";
pub(crate) const EMERGENCY_REPLY: &str = "If this is an emergency, please call the appropriate emergency number: Police (100), Fire (101), Ambulance (108). For non-emergency help, I'm here to assist you with any daily life problems. What specific help do you need?";
pub(crate) const DEFAULT_REPLY: &str = "Hello! I'm your AI assistant, here to help you with daily life problems. You can ask me about jobs, government schemes, creating forms, managing tasks, learning new skills, or any other assistance you need. How can I help you today?";

// First topic with any matching keyword wins.
const TOPICS: [(&[&str], &str); 6] = [
    (JOB, JOB_REPLY),
    (FORM, FORM_REPLY),
    (STRESS, STRESS_REPLY),
    (SCHEME, SCHEME_REPLY),
    (LEARNING, LEARNING_REPLY),
    (EMERGENCY, EMERGENCY_REPLY),
];

/// Canned replies chosen by substring match on the lowercased message.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordReplyGenerator;

impl KeywordReplyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReplyGenerator for KeywordReplyGenerator {
    fn generate(&self, user_text: &str) -> String {
        let lower_text = user_text.to_lowercase();
        TOPICS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower_text.contains(k)))
            .map(|(_, reply)| *reply)
            .unwrap_or(DEFAULT_REPLY)
            .to_owned()
    }
}
