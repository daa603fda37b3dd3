use crate::agent::stateless_llm::Message;
use crate::translate::interface::TranslateRequest;

/// `{language}` is replaced with the target language name.
pub const SYSTEM_PROMPT_TEMPLATE: &str = "Translate the following into {language}:";

pub fn build_system_prompt(language: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{language}", language)
}

/// Builds the two-turn conversation sent to the model: the instruction as
/// the system turn, then the user's text untouched.
pub fn build_prompt(request: &TranslateRequest) -> Vec<Message> {
    vec![
        Message::system(build_system_prompt(request.target_language.as_str())),
        Message::user(request.text.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::interface::TargetLanguage;

    #[test]
    fn test_system_prompt_template_has_placeholder() {
        assert!(SYSTEM_PROMPT_TEMPLATE.contains("{language}"));
    }

    #[test]
    fn test_build_prompt_french_example() {
        let req = TranslateRequest::new("Hello, how are you?", TargetLanguage::French);
        let messages = build_prompt(&req);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "Translate the following into French:");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content, "Hello, how are you?");
    }

    #[test]
    fn test_build_prompt_every_language() {
        for lang in TargetLanguage::ALL {
            let req = TranslateRequest::new("text", lang);
            let messages = build_prompt(&req);
            assert_eq!(
                messages[0].content,
                format!("Translate the following into {}:", lang.as_str())
            );
        }
    }

    #[test]
    fn test_user_text_is_not_mutated() {
        let text = "  leading and trailing spaces\n{language} braces and \"quotes\"\n\n";
        let req = TranslateRequest::new(text, TargetLanguage::Arabic);
        let messages = build_prompt(&req);
        assert_eq!(messages[1].content, text);
        assert_eq!(messages[0].content, "Translate the following into Arabic:");
    }
}
