use telegen_schema::{Catalogue, Field, ResultType, Type, TypeRef};
use tracing::info;

use crate::{infer::infer_with, lexicon::Lexicon};

pub const DEFINITIONS_FILE: &str = "response.go";
pub const REQUESTS_FILE:    &str = "request.go";
pub const METHODS_FILE:     &str = "methods.go";

/// Column budget of wrapped description comments.
pub const WRAP_WIDTH: usize = 100;
/// Padding of name and type columns.
pub const COLUMN_WIDTH: usize = 20;

pub const UNKNOWN_RESULT: &str = "interface{}";

/// Names baked into the generated Go code.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub package:  String,
    /// Receiver type the methods hang off.
    pub receiver: String,
    /// Receiver method performing the call: `(ctx, name, request, &result) error`.
    pub invoke:   String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            package:  "telego".to_string(),
            receiver: "Bot".to_string(),
            invoke:   "postResult".to_string(),
        }
    }
}

/// The three generated Go sources.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub definitions: String,
    pub requests:    String,
    pub methods:     String,
}

impl Artifacts {
    /// File name and content, in write order.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (DEFINITIONS_FILE, self.definitions.as_str()),
            (REQUESTS_FILE,    self.requests.as_str()),
            (METHODS_FILE,     self.methods.as_str()),
        ]
    }
}

/// Converts a snake_case field name to a Go member name: each underscore
/// separated word gets an upper-case first letter and a lower-case rest.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
     .map(|word| {
         let mut chars = word.chars();
         match chars.next() {
             None => String::new(),
             Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
         }
     })
     .collect::<String>()
}

pub fn go_type(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Scalar(name)        => name.clone(),
        TypeRef::SequenceOf(inner)   => format!("[]{}", go_type(inner)),
        TypeRef::Indirection(name)   => format!("*{}", name),
    }
}

pub fn go_result_type(result: &ResultType) -> String {
    match result {
        ResultType::Resolved(type_ref) => go_type(type_ref),
        ResultType::Unknown            => UNKNOWN_RESULT.to_string(),
    }
}

/// Wraps prose into `//` comment lines. A word goes on line
/// `running_length / WRAP_WIDTH`, where the running length counts every
/// word plus one separator. Empty text yields an empty string.
pub fn wrap_comment(text: &str) -> String {
    let mut total = 0;
    let mut lines: Vec<String> = Vec::new();
    for word in text.split(' ').filter(|word| !word.is_empty()) {
        total += word.chars().count() + 1;
        let index = total / WRAP_WIDTH;
        while lines.len() <= index {
            lines.push("//".to_string());
        }
        lines[index].push(' ');
        lines[index].push_str(word);
    }
    lines.join("\n")
}

/// Name, permalink and description lines shared by every rendered block.
fn header_lines(type_: &Type) -> Vec<String> {
    let mut lines = vec![format!("// {}", type_.name), format!("// {}", type_.url)];
    let description = wrap_comment(&type_.description);
    if !description.is_empty() {
        lines.push(description);
    }
    lines
}

/// Comment block above a declaration: header plus a field table, if any.
pub fn render_comment(type_: &Type) -> String {
    let mut lines = vec![format!("// {}", type_.name), format!("// {}", type_.url), "//".to_string()];
    let description = wrap_comment(&type_.description);
    if !description.is_empty() {
        lines.push(description);
    }
    lines.push("//".to_string());

    if type_.exists() {
        lines.push(format!(
            "//    {:w$} {:w$} {}",
            "Field",
            "Type",
            "Description",
            w = COLUMN_WIDTH
        ));
        for field in &type_.fields {
            lines.push(format!(
                "//    {:w$} {:w$} {}",
                field.name,
                field.type_,
                field.description,
                w = COLUMN_WIDTH
            ));
        }
        lines.push("//".to_string());
    }
    lines.join("\n")
}

fn render_field(field: &Field, lexicon: &Lexicon) -> String {
    let member = to_pascal_case(&field.name);
    let member_type = go_type(&lexicon.resolve(&field.type_));
    let omitempty = if field.required { "" } else { ",omitempty" };
    format!(
        "\t// {}\n\t{:w$} {:w$} `json:\"{}{}\"`",
        field.description,
        member,
        member_type,
        field.name,
        omitempty,
        w = COLUMN_WIDTH
    )
}

/// `type <Name><Postfix> struct { ... }` with one tagged member per field.
pub fn render_struct(type_: &Type, lexicon: &Lexicon) -> String {
    let mut lines = vec![format!("type {} struct {{", type_.declaration_name())];
    for field in &type_.fields {
        lines.push(render_field(field, lexicon));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Callable stub for an operation, delegating to the receiver's invoke method.
pub fn render_method(type_: &Type, lexicon: &Lexicon, options: &RenderOptions) -> String {
    let result = infer_with(lexicon, &type_.description);
    let result_type = go_result_type(&result);

    let init = match &result {
        ResultType::Resolved(TypeRef::SequenceOf(_))    => format!("\n\tresult = make({}, 0)", result_type),
        ResultType::Resolved(TypeRef::Indirection(name)) => format!("\n\tresult = new({})", name),
        _ => String::new(),
    };
    let (parameter, argument) = if type_.exists() {
        (format!(", request *{}", type_.declaration_name()), "request")
    } else {
        (String::new(), "nil")
    };

    let mut lines = header_lines(type_);
    lines.push(format!(
        "func (b *{}) {}(ctx context.Context{}) (result {}, err error) {{{}",
        options.receiver,
        type_.exported_name(),
        parameter,
        result_type,
        init
    ));
    lines.push(format!(
        "\treturn result, b.{}(ctx, \"{}\", {}, &result)",
        options.invoke, type_.name, argument
    ));
    lines.push("}".to_string());
    lines.join("\n") + "\n"
}

fn package_header(options: &RenderOptions) -> String {
    format!("package {}\n\n", options.package)
}

/// Renders the whole catalogue into the three Go sources.
pub fn compile_catalogue_to_go(catalogue: &Catalogue, lexicon: &Lexicon, options: &RenderOptions) -> Artifacts {
    let mut definitions = package_header(options);
    for type_ in &catalogue.definitions {
        definitions.push_str(&format!("{}\n{}\n\n", render_comment(type_), render_struct(type_, lexicon)));
    }

    let mut requests = package_header(options);
    for type_ in catalogue.operations.iter().filter(|t| t.exists()) {
        requests.push_str(&format!("{}\n{}\n\n", render_comment(type_), render_struct(type_, lexicon)));
    }

    let mut methods = package_header(options);
    methods.push_str("import \"context\"\n\n");
    for type_ in &catalogue.operations {
        methods.push_str(&format!("{}\n\n", render_method(type_, lexicon, options)));
    }

    info!(
        "rendered {} definition(s), {} request type(s), {} method(s)",
        catalogue.definitions.len(),
        catalogue.operations.iter().filter(|t| t.exists()).count(),
        catalogue.operations.len()
    );
    Artifacts { definitions, requests, methods }
}
