use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Categories { json, .. } | Commands::Transactions { json, .. } => {
            if *json {
                OutputMode::Json
            } else {
                OutputMode::Text
            }
        }
    }
}

/// Best-effort mode for errors raised before clap finishes parsing.
pub fn infer_requested_output_mode(raw_args: &[String]) -> OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return OutputMode::Json;
    }
    OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, infer_requested_output_mode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_selects_json_for_both_commands() {
        for args in [
            ["tally", "categories", "--json"],
            ["tally", "transactions", "--json"],
        ] {
            let parsed = parse_from(args);
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
            }
        }
    }

    #[test]
    fn text_is_the_default() {
        let parsed = parse_from(["tally", "categories", "rows.csv"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }

    #[test]
    fn raw_args_with_json_flag_infer_json() {
        let args = ["tally", "categories", "--by", "bogus", "--json"]
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<String>>();
        assert_eq!(infer_requested_output_mode(&args), OutputMode::Json);
        assert_eq!(
            infer_requested_output_mode(&["tally".to_string()]),
            OutputMode::Text
        );
    }
}
