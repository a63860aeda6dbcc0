#![cfg(test)]

use telegen_compiler::{
    compile_document, compile_to_go,
    error::GenError,
    gen_go::RenderOptions,
    lexicon::Lexicon,
    DEFAULT_SOURCE_URL,
};

const PAGE: &str = r##"<!DOCTYPE html>
<html>
<body>
<div id="dev_page_content">
<h3><a class="anchor" name="recent-changes" href="#recent-changes"></a>Recent changes</h3>
<h4><a class="anchor" name="june-1" href="#june-1"></a>June 1</h4>
<p>Added something.</p>
<h3><a class="anchor" name="getting-updates" href="#getting-updates"></a>Getting updates</h3>
<h4><a class="anchor" name="making-requests" href="#making-requests"></a>Making requests</h4>
<p>All queries to the Telegram Bot API must be served over HTTPS.</p>
<h4><a class="anchor" name="sendmessage" href="#sendmessage"></a>sendMessage</h4>
<p>Use this method to send text messages. On success, the sent <a href="#message">Message</a> is returned.</p>
<table class="table">
<thead><tr><th>Parameter</th><th>Type</th><th>Required</th><th>Description</th></tr></thead>
<tbody>
<tr><td>chat_id</td><td>Integer or String</td><td>Yes</td><td>Unique identifier for the target chat</td></tr>
<tr><td>text</td><td>String</td><td>Optional</td><td>Text of the message
to be sent</td></tr>
</tbody>
</table>
<h3><a class="anchor" name="available-types" href="#available-types"></a>Available types</h3>
<h4><a class="anchor" name="message" href="#message"></a>Message</h4>
<p>This object represents a message.</p>
<table class="table">
<thead><tr><th>Field</th><th>Type</th><th>Description</th></tr></thead>
<tbody>
<tr><td>message_id</td><td>Integer</td><td>Unique message identifier inside this chat</td></tr>
</tbody>
</table>
</div>
</body>
</html>"##;

#[test]
fn test_extract_catalogue() {
    let catalogue = compile_document(PAGE, DEFAULT_SOURCE_URL).expect("compile_document failed");

    // Headings before the catalogue anchor are not entities
    assert_eq!(catalogue.operations.len(), 1);
    assert_eq!(catalogue.definitions.len(), 1);

    let send = &catalogue.operations[0];
    assert_eq!(send.name, "sendMessage");
    assert_eq!(send.url, "https://core.telegram.org/bots/api#sendmessage");
    assert_eq!(send.postfix, "Request");
    assert!(send.exists());
    assert_eq!(
        send.description,
        "Use this method to send text messages. On success, the sent Message is returned."
    );
    assert_eq!(send.fields.len(), 2);
    assert_eq!(send.fields[0].name, "chat_id");
    assert_eq!(send.fields[0].type_, "Integer or String");
    assert!(send.fields[0].required);
    assert_eq!(send.fields[1].description, "Optional. Text of the message to be sent");
    assert!(!send.fields[1].required);

    let message = &catalogue.definitions[0];
    assert_eq!(message.name, "Message");
    assert_eq!(message.postfix, "");
    assert_eq!(message.description, "This object represents a message.");
    assert_eq!(message.fields.len(), 1);
}

#[test]
fn test_render_three_outputs() {
    let (catalogue, artifacts) = compile_to_go(
        PAGE,
        DEFAULT_SOURCE_URL,
        &Lexicon::default(),
        &RenderOptions::default(),
    )
    .expect("compile_to_go failed");
    assert_eq!(catalogue.len(), 2);

    assert!(artifacts.definitions.starts_with("package telego\n\n"));
    assert!(artifacts.definitions.contains("type Message struct {"));
    assert!(artifacts.definitions.contains("\tMessageId            int                  `json:\"message_id\"`"));

    assert!(artifacts.requests.contains("type SendMessageRequest struct {"));
    assert!(artifacts.requests.contains("\tChatId               int                  `json:\"chat_id\"`"));
    assert!(artifacts.requests.contains("`json:\"text,omitempty\"`"));

    assert!(artifacts.methods.contains(
        "func (b *Bot) SendMessage(ctx context.Context, request *SendMessageRequest) (result *Message, err error) {\n\tresult = new(Message)\n"
    ));
    assert!(!artifacts.methods.contains("MakingRequests"));
}

#[test]
fn test_custom_package_and_lexicon() {
    let lexicon = Lexicon::with_overrides_json(r#"{"Integer": "int64"}"#).expect("lexicon failed");
    let options = RenderOptions { package: "botapi".to_string(), ..RenderOptions::default() };
    let (_catalogue, artifacts) =
        compile_to_go(PAGE, "https://example.org/api", &lexicon, &options).expect("compile_to_go failed");

    for (_name, content) in artifacts.files() {
        assert!(content.starts_with("package botapi\n\n"));
    }
    assert!(artifacts.requests.contains("// https://example.org/api#sendmessage"));
    assert!(artifacts.requests.contains("\tChatId               int64"));
}

#[test]
fn test_layout_change_is_fatal() {
    let page = PAGE.replace("name=\"getting-updates\"", "name=\"updates\"");
    assert!(matches!(
        compile_document(&page, DEFAULT_SOURCE_URL),
        Err(GenError::MissingAnchor(_))
    ));
}
