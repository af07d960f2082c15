use lookalike_core::{HistoryRowView, MatchRowView, PopupViewModel, ResultPane};

/// Flattens the view model into display lines for a plain text surface.
/// Widgets, thumbnails and styling stay with the embedder.
pub fn render_lines(view: &PopupViewModel) -> Vec<String> {
    match &view.pane {
        ResultPane::Empty => Vec::new(),
        ResultPane::Notice { text } => vec![text.clone()],
        ResultPane::SignInPrompt { text } => vec![text.clone()],
        ResultPane::Failure { text } => vec![format!("error: {text}")],
        ResultPane::MatchList { heading, rows } => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(heading.clone());
            lines.extend(rows.iter().map(format_match_row));
            lines
        }
        ResultPane::HistoryList { rows } => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push("search history:".to_string());
            lines.extend(rows.iter().map(format_history_row));
            lines
        }
    }
}

fn format_match_row(row: &MatchRowView) -> String {
    format!("{}  score {}  {}", row.name, row.score, row.link)
}

fn format_history_row(row: &HistoryRowView) -> String {
    format!("{}. {} ({} matches)", row.position, row.query_file, row.match_count)
}

#[cfg(test)]
mod tests {
    use lookalike_core::{HistoryRowView, MatchRowView, PopupViewModel, ResultPane};

    use super::render_lines;

    #[test]
    fn idle_popup_renders_nothing() {
        let view = PopupViewModel::default();
        assert!(render_lines(&view).is_empty());
    }

    #[test]
    fn match_list_renders_heading_then_rows_in_order() {
        let view = PopupViewModel {
            busy: false,
            pane: ResultPane::MatchList {
                heading: "2 matches found".to_string(),
                rows: vec![
                    MatchRowView {
                        name: "hero.png".to_string(),
                        score: 0.72,
                        link: "https://drive.example/a".to_string(),
                        thumbnail: None,
                    },
                    MatchRowView {
                        name: "logo.png".to_string(),
                        score: 0.95,
                        link: "https://drive.example/b".to_string(),
                        thumbnail: None,
                    },
                ],
            },
        };

        let lines = render_lines(&view);
        assert_eq!(lines[0], "2 matches found");
        assert!(lines[1].starts_with("hero.png"));
        assert!(lines[2].starts_with("logo.png"));
    }

    #[test]
    fn history_rows_keep_their_numbering() {
        let view = PopupViewModel {
            busy: false,
            pane: ResultPane::HistoryList {
                rows: vec![HistoryRowView {
                    position: 1,
                    query_file: "latest.png".to_string(),
                    match_count: 3,
                }],
            },
        };

        let lines = render_lines(&view);
        assert_eq!(lines, vec!["search history:", "1. latest.png (3 matches)"]);
    }

    #[test]
    fn failure_text_is_prefixed_but_not_rewritten() {
        let view = PopupViewModel {
            busy: false,
            pane: ResultPane::Failure {
                text: "Drive quota exceeded".to_string(),
            },
        };
        assert_eq!(render_lines(&view), vec!["error: Drive quota exceeded"]);
    }
}
