use std::fs;
use std::io::{IsTerminal, Read};

use crate::source::invalid_input_error;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SourceKind {
    File,
    Stdin,
}

impl SourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Stdin => "stdin",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedSource {
    pub(crate) source_kind: SourceKind,
    pub(crate) source_ref: Option<String>,
    pub(crate) content: String,
}

pub(crate) fn resolve_source(
    path: Option<String>,
    stdin_override: Option<String>,
) -> ClientResult<ResolvedSource> {
    let stdin_body = read_stdin(stdin_override)?;

    if let Some(path_value) = path {
        if path_value == "-" {
            if let Some(stdin_value) = stdin_body {
                return Ok(ResolvedSource {
                    source_kind: SourceKind::Stdin,
                    source_ref: None,
                    content: stdin_value,
                });
            }

            return Err(invalid_input_error(
                "Path `-` means stdin input, but stdin was empty. Pipe JSON/CSV input or pass a file path.",
            ));
        }

        let file_body = fs::read_to_string(&path_value).map_err(|error| {
            ClientError::invalid_argument_with_recovery(
                &format!("Could not read transactions file `{path_value}`: {error}"),
                vec![
                    "Verify the path exists and is readable.".to_string(),
                    "Rerun the command with a readable path, or `-` for stdin.".to_string(),
                ],
            )
        })?;

        if stdin_body.is_some() {
            return Err(invalid_input_error(
                "Both stdin and file input were provided. Pass exactly one source: either a file path or piped stdin.",
            ));
        }

        return Ok(ResolvedSource {
            source_kind: SourceKind::File,
            source_ref: Some(path_value),
            content: file_body,
        });
    }

    if let Some(stdin_value) = stdin_body {
        return Ok(ResolvedSource {
            source_kind: SourceKind::Stdin,
            source_ref: None,
            content: stdin_value,
        });
    }

    Err(invalid_input_error(
        "No transaction source provided. Pass a file path or pipe input via stdin.",
    ))
}

/// Returns `None` for a terminal or whitespace-only stdin.
fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    let buffer = match stdin_override {
        Some(value) => value,
        None => {
            if std::io::stdin().is_terminal() {
                return Ok(None);
            }

            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|error| {
                    ClientError::invalid_argument_with_recovery(
                        &format!("Could not read stdin: {error}"),
                        vec![
                            "Retry with an explicit file path argument.".to_string(),
                            "Or rerun with valid stdin content.".to_string(),
                        ],
                    )
                })?;
            buffer
        }
    };

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::Builder;

    use super::{SourceKind, resolve_source};

    #[test]
    fn dash_path_reads_stdin_override() {
        let resolved = resolve_source(Some("-".to_string()), Some("[]".to_string()));
        assert!(resolved.is_ok());
        if let Ok(source) = resolved {
            assert_eq!(source.source_kind, SourceKind::Stdin);
            assert_eq!(source.content, "[]");
        }
    }

    #[test]
    fn dash_path_with_blank_stdin_is_rejected() {
        let resolved = resolve_source(Some("-".to_string()), Some("  \n".to_string()));
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains("stdin was empty"));
        }
    }

    #[test]
    fn file_and_stdin_together_are_rejected() {
        let dir = Builder::new().prefix("tally-input").tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("rows.json");
            assert!(fs::write(&path, "[]").is_ok());
            let resolved = resolve_source(
                Some(path.display().to_string()),
                Some("[]".to_string()),
            );
            assert!(resolved.is_err());
            if let Err(error) = resolved {
                assert!(error.message.contains("exactly one source"));
            }
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let resolved = resolve_source(
            Some("/definitely/not/here.csv".to_string()),
            Some(String::new()),
        );
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert!(error.message.contains("/definitely/not/here.csv"));
        }
    }
}
