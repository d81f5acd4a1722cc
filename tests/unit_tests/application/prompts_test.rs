use condo_advocate::application::services::PromptTemplate;

#[test]
fn given_template_when_rendering_then_substitutes_input() {
    let (system, user) = PromptTemplate::analysis().render("Pool levy: $850");

    assert!(!system.is_empty());
    assert!(user.contains("Pool levy: $850"));
    assert!(!user.contains("{input}"));
}

#[test]
fn given_language_note_when_rendering_then_appends_to_both_prompts() {
    let template =
        PromptTemplate::suggestions().with_language_note(Some("Please respond in French."));

    let (system, user) = template.render("[]");

    assert!(system.ends_with("Please respond in French."));
    assert!(user.ends_with("\n\nPlease respond in French."));
}

#[test]
fn given_blank_language_note_when_rendering_then_prompts_are_unchanged() {
    let plain = PromptTemplate::legal_question().render("q");
    let with_blank = PromptTemplate::legal_question()
        .with_language_note(Some("   "))
        .render("q");

    assert_eq!(plain, with_blank);
}

#[test]
fn given_letter_template_when_rendering_then_keeps_placeholder_instructions() {
    let (_, user) = PromptTemplate::dispute_letter().render("Unfair late fee");

    assert!(user.contains("{{placeholders}}"));
    assert!(user.ends_with("Unfair late fee"));
}
