// src/ports/html.rs
use crate::domain::Note;
use crate::util::date::format_due_date;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_item(&self, note: &Note) -> String {
        let (item_class, marker, action) = if note.completed {
            ("task-item task-item--completed", "&#9745;", "Mark task incomplete")
        } else {
            ("task-item", "&#9744;", "Mark task complete")
        };
        let title = encode_text(&note.title);
        let tooltip = format!("{action}: {}", note.title);

        format!(
            r#"            <li class="{item_class}" id="note-{id}">
                <div class="icons">
                    <span class="task-button" title="{tooltip}">{marker}</span>
                </div>
                <div class="task-con">
                    <div class="task-header">
                        <h3>{title}</h3>
                        <h4>{date}</h4>
                    </div>
                    <p>{description}</p>
                </div>
            </li>
"#,
            item_class = item_class,
            id = encode_double_quoted_attribute(&note.id),
            tooltip = encode_double_quoted_attribute(&tooltip),
            title = title,
            marker = marker,
            date = encode_text(&format_due_date(&note.due_date)),
            description = encode_text(&note.description),
        )
    }

    #[instrument(level = "debug", skip_all, fields(count = notes.len()))]
    pub fn render(&self, notes: &[Note]) -> String {
        let items: String = if notes.is_empty() {
            "            <li class=\"empty\">No tasks yet.</li>\n".to_string()
        } else {
            notes.iter().map(|n| self.render_item(n)).collect()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>All Tasks</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        ul {{
            list-style: none;
            padding: 0;
        }}
        .task-item {{
            display: flex;
            gap: 1rem;
            background: white;
            border-radius: 8px;
            padding: 1rem 1.5rem;
            margin-bottom: 1rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .task-item--completed h3 {{
            text-decoration: line-through;
            color: #888;
        }}
        .task-button {{
            font-size: 1.5em;
        }}
        .task-header {{
            display: flex;
            justify-content: space-between;
            gap: 1rem;
        }}
        .task-con {{
            flex: 1;
        }}
        .task-con p {{
            white-space: pre-wrap;
            margin: 0;
        }}
    </style>
</head>
<body>
    <div id="task-lists">
        <h1>All Tasks</h1>
        <ul>
{items}        </ul>
    </div>
</body>
</html>"#,
            items = items
        )
    }
}
