//! HTML rendering for the single page.

use crate::persona::Persona;
use crate::web::state::ViewState;
use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use std::fmt::Write as _;
use url::Url;

pub const PAGE_TITLE: &str = "LLM エキスパート相談";
pub const EMPTY_INPUT_WARNING: &str = "入力テキストを入力してください。";
pub const MISSING_KEY_ERROR: &str = "OpenAI API キーが見つかりませんでした。ローカルは `.env`、デプロイはシークレットストアに `OPENAI_API_KEY` を設定してください。";
pub const FAILURE_PREFIX: &str = "エラーが発生しました: ";
pub const FAILURE_HINT: &str =
    "API キー、モデル名、ネットワーク、依存関係バージョンをご確認ください。";
pub const LOADING_TEXT: &str = "LLM に問い合わせています…";
pub const ANSWER_HEADING: &str = "🧠 回答";

const TEXT_PLACEHOLDER: &str =
    "ここに質問や要件、文章を入力してください（例：このA/Bテスト設計をレビューして）";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
.caption { color: #6b6f7b; font-size: 0.9rem; }
details { border: 1px solid #e6e6eb; border-radius: 0.5rem; padding: 0.5rem 1rem; margin: 1rem 0; }
fieldset { border: none; padding: 0; margin: 1rem 0; }
fieldset label { margin-right: 1.5rem; }
textarea { width: 100%; height: 150px; box-sizing: border-box; }
.alert { border-radius: 0.5rem; padding: 0.75rem 1rem; margin: 1rem 0; }
.warning { background: #fffce7; color: #926c05; }
.error { background: #ffecec; color: #9d2b2b; }
.info { background: #e8f2fc; color: #0f4c81; }
.spinner { color: #6b6f7b; }
"#;

const HELP_HTML: &str = r#"<details open>
<summary>ℹ️ このアプリの概要と使い方</summary>
<p><strong>概要</strong></p>
<ul>
<li>入力テキストを LLM に渡し、回答を表示します。</li>
<li>ラジオボタンで <strong>専門家の役割</strong> を選ぶと、回答の観点（システムメッセージ）が切り替わります。</li>
</ul>
<p><strong>使い方</strong></p>
<ol>
<li>役割（データサイエンティスト / プロダクトマネージャー）を選択</li>
<li>テキストを入力して <strong>送信</strong></li>
<li>画面下に回答が表示されます</li>
</ol>
<p><strong>注意</strong></p>
<ul>
<li>ローカルでは <code>.env</code> の <code>OPENAI_API_KEY</code> が読み込まれます。</li>
<li>環境変数がない場合は OS のシークレットストア（サービス名 <code>persona-chat</code>）の <code>OPENAI_API_KEY</code> を使います。</li>
</ul>
</details>"#;

/// Everything needed to render the page.
#[derive(Debug, Clone)]
pub struct PageModel<'a> {
    pub state: &'a ViewState,
    /// Role label as submitted, `None` before the first submission.
    ///
    /// `None` checks the default persona. A submitted label outside the table
    /// leaves the whole group unchecked.
    pub role: Option<&'a str>,
    pub user_text: &'a str,
}

/// Render the full HTML document.
pub fn render(model: &PageModel<'_>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", encode_text(PAGE_TITLE));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE);

    let _ = writeln!(out, "<h1>🤖 {}</h1>", encode_text(PAGE_TITLE));
    out.push_str(
        "<p class=\"caption\">1つの入力フォームとラジオボタンで役割を切り替え、LLM に質問します。</p>\n",
    );
    out.push_str(HELP_HTML);
    out.push('\n');

    render_form(&mut out, model);
    render_outcome(&mut out, model.state);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_form(out: &mut String, model: &PageModel<'_>) {
    let selected = match model.role {
        None => Some(Persona::default()),
        Some(label) => Persona::from_label(label),
    };

    out.push_str(
        "<form method=\"post\" action=\"/\" onsubmit=\"document.getElementById('spinner').hidden=false;this.querySelector('button').disabled=true;\">\n",
    );
    out.push_str("<fieldset>\n<legend>専門家の役割を選択してください：</legend>\n");
    for persona in Persona::ALL {
        let label = persona.label();
        let _ = writeln!(
            out,
            "<label><input type=\"radio\" name=\"role\" value=\"{}\"{}> {}</label>",
            encode_double_quoted_attribute(label),
            if Some(persona) == selected { " checked" } else { "" },
            encode_text(label),
        );
    }
    out.push_str("</fieldset>\n");

    out.push_str("<label for=\"user_text\">入力テキスト</label>\n");
    let _ = writeln!(
        out,
        "<textarea id=\"user_text\" name=\"user_text\" placeholder=\"{}\">{}</textarea>",
        encode_double_quoted_attribute(TEXT_PLACEHOLDER),
        encode_text(model.user_text),
    );
    out.push_str("<p><button type=\"submit\">送信</button></p>\n</form>\n");

    let _ = writeln!(
        out,
        "<p id=\"spinner\" class=\"spinner\"{}>{}</p>",
        if model.state.is_loading() { "" } else { " hidden" },
        encode_text(LOADING_TEXT),
    );
}

fn render_outcome(out: &mut String, state: &ViewState) {
    match state {
        ViewState::Idle | ViewState::AwaitingInput | ViewState::Loading => {}
        ViewState::SubmittedInvalid => alert(out, "warning", EMPTY_INPUT_WARNING),
        ViewState::SubmittedMissingCredential => alert(out, "error", MISSING_KEY_ERROR),
        ViewState::Success { answer } => {
            let _ = writeln!(out, "<h3>{}</h3>", encode_text(ANSWER_HEADING));
            out.push_str("<div class=\"answer\">\n");
            out.push_str(&markdown_to_html(answer));
            out.push_str("</div>\n");
        }
        ViewState::Error { message } => {
            alert(out, "error", &format!("{}{}", FAILURE_PREFIX, message));
            alert(out, "info", FAILURE_HINT);
        }
    }
}

fn alert(out: &mut String, kind: &str, text: &str) {
    let _ = writeln!(
        out,
        "<div class=\"alert {}\" role=\"alert\">{}</div>",
        kind,
        encode_text(text)
    );
}

/// Render model output as Markdown.
///
/// Raw HTML in the source is shown as text, and link or image destinations
/// outside `http`, `https` and `mailto` are replaced with `#`.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(neutralize_destination(tag)),
        Event::End(tag) => Event::End(neutralize_destination(tag)),
        other => other,
    });

    let mut html_out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_out, parser);
    html_out
}

fn neutralize_destination(tag: Tag<'_>) -> Tag<'_> {
    match tag {
        Tag::Link(kind, dest, title) if !is_safe_destination(&dest) => {
            Tag::Link(kind, CowStr::Borrowed("#"), title)
        }
        Tag::Image(kind, dest, title) if !is_safe_destination(&dest) => {
            Tag::Image(kind, CowStr::Borrowed("#"), title)
        }
        other => other,
    }
}

/// Relative references and `http`/`https`/`mailto` URLs only.
fn is_safe_destination(dest: &str) -> bool {
    match Url::parse(dest) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "mailto"),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}
