use review_assistant::llm::prompt::PromptTemplate;

#[test]
fn role_tagged_template_renders_chat_sequence() {
    let template = PromptTemplate::default();
    let messages = template.messages("The soup was cold");
    assert_eq!(messages.len(), 6);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[2].role, "assistant");
    assert_eq!(messages[3].role, "user");
    assert_eq!(messages[4].role, "assistant");
    assert_eq!(messages[5].role, "user");
    assert_eq!(messages[5].content, "The soup was cold");
}

#[test]
fn few_shot_block_carries_worked_examples() {
    let template = PromptTemplate::default();
    let messages = template.messages("x");
    let block = &messages[3].content;
    assert!(block.contains("few-shot"));
    assert!(block.contains("Steak Tartare"));
    assert!(block.contains("None (entity), None (aspect)"));
}

#[test]
fn instruction_requests_numbered_json_object() {
    let template = PromptTemplate::default();
    let messages = template.messages("x");
    assert!(messages[1].content.contains("JSON"));
    assert!(messages[1].content.contains("named_entity"));
    assert!(messages[1].content.contains("aspect"));
}

#[test]
fn flat_template_renders_single_message() {
    let mut template = PromptTemplate::default();
    template.role_tagged = false;
    let messages = template.messages("The soup was cold");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, "user");
    assert!(messages[0].content.contains("named_entity"));
    assert!(messages[0].content.contains("Steak Tartare"));
    assert!(messages[0].content.contains("The soup was cold"));
}
