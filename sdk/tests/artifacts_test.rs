#![cfg(test)]

use std::fs;

use telegen::{catalogue_to_json, compile_to_go, write_artifacts, Lexicon, RenderOptions};

const PAGE: &str = r##"<html><body>
<h3><a class="anchor" name="getting-updates" href="#getting-updates"></a>Getting updates</h3>
<h4><a class="anchor" name="getme" href="#getme"></a>getMe</h4>
<p>A simple method for testing your bot's authentication token. Requires no parameters. Returns basic information about the bot in form of a User object.</p>
<h4><a class="anchor" name="user" href="#user"></a>User</h4>
<p>This object represents a Telegram user or bot.</p>
<table><tbody>
<tr><td>id</td><td>Integer</td><td>Unique identifier for this user or bot.</td></tr>
<tr><td>username</td><td>String</td><td>Optional. User's or bot's username</td></tr>
</tbody></table>
</body></html>"##;

#[test]
fn test_write_artifacts() {
    let (_catalogue, artifacts) =
        compile_to_go(PAGE, "https://core.telegram.org/bots/api", &Lexicon::default(), &RenderOptions::default())
            .expect("compile_to_go failed");

    let dir = tempfile::tempdir().expect("tempdir failed");
    let written = write_artifacts(dir.path(), &artifacts).expect("write_artifacts failed");
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["response.go", "request.go", "methods.go"]);

    let response = fs::read_to_string(dir.path().join("response.go")).unwrap();
    assert!(response.contains("type User struct {"));
    assert!(response.contains("`json:\"username,omitempty\"`"));

    // getMe has no parameters, so no request type is declared
    let request = fs::read_to_string(dir.path().join("request.go")).unwrap();
    assert_eq!(request, "package telego\n\n");

    let methods = fs::read_to_string(dir.path().join("methods.go")).unwrap();
    assert!(methods.contains("func (b *Bot) GetMe(ctx context.Context) (result *User, err error) {\n\tresult = new(User)\n"));
    assert!(methods.contains("b.postResult(ctx, \"getMe\", nil, &result)"));
}

#[test]
fn test_catalogue_to_json() {
    let (catalogue, _artifacts) =
        compile_to_go(PAGE, "https://core.telegram.org/bots/api", &Lexicon::default(), &RenderOptions::default())
            .expect("compile_to_go failed");
    let json = catalogue_to_json(&catalogue).expect("catalogue_to_json failed");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["operations"][0]["name"], "getMe");
    assert_eq!(value["definitions"][0]["fields"][1]["required"], false);
}
