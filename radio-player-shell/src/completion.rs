use crate::commands::takes_station_argument;

/// Result of completing the input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Input line after completion
    pub line: String,
    /// All matches, filled only when the completion is ambiguous
    pub candidates: Vec<String>,
}

/// Complete the last word of `input` against command names or, after `play`
/// and `info`, against station ids.
pub fn complete(input: &str, commands: &[String], station_ids: &[&str]) -> Option<Completion> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let ends_with_space = input.ends_with(char::is_whitespace);

    let (head, partial, pool): (&str, &str, Vec<&str>) = match (words.as_slice(), ends_with_space) {
        ([], _) => ("", "", commands.iter().map(String::as_str).collect()),
        ([word], false) => ("", *word, commands.iter().map(String::as_str).collect()),
        ([command], true) if takes_station_argument(command) => (input, "", station_ids.to_vec()),
        ([command, word], false) if takes_station_argument(command) => {
            let head = &input[..input.len() - word.len()];
            (head, *word, station_ids.to_vec())
        }
        _ => return None,
    };

    let matches: Vec<&str> = pool.into_iter().filter(|c| c.starts_with(partial)).collect();
    match matches.as_slice() {
        [] => None,
        [single] => Some(Completion {
            line: format!("{head}{single} "),
            candidates: Vec::new(),
        }),
        _ => Some(Completion {
            line: format!("{head}{}", common_prefix(&matches)),
            candidates: matches.iter().map(|m| m.to_string()).collect(),
        }),
    }
}

fn common_prefix<'a>(words: &[&'a str]) -> &'a str {
    let Some((first, rest)) = words.split_first() else {
        return "";
    };
    let mut end = first.len();
    for word in rest {
        end = first
            .char_indices()
            .zip(word.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0)
            .min(end);
    }
    &first[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> Vec<String> {
        ["play", "pause", "players", "prev", "radios", "info"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    const IDS: &[&str] = &["rmc", "rmcsport", "rtl", "fip"];

    #[test]
    fn completes_unique_command() {
        let completion = complete("ra", &commands(), IDS).unwrap();
        assert_eq!(completion.line, "radios ");
        assert!(completion.candidates.is_empty());
    }

    #[test]
    fn ambiguous_command_extends_to_common_prefix() {
        let completion = complete("pl", &commands(), IDS).unwrap();
        assert_eq!(completion.line, "play");
        assert_eq!(completion.candidates, vec!["play", "players"]);
    }

    #[test]
    fn completes_station_ids_after_play() {
        let completion = complete("play f", &commands(), IDS).unwrap();
        assert_eq!(completion.line, "play fip ");

        let completion = complete("info rm", &commands(), IDS).unwrap();
        assert_eq!(completion.line, "info rmc");
        assert_eq!(completion.candidates, vec!["rmc", "rmcsport"]);
    }

    #[test]
    fn lists_every_station_after_a_space() {
        let completion = complete("play ", &commands(), IDS).unwrap();
        assert_eq!(completion.line, "play ");
        assert_eq!(completion.candidates.len(), IDS.len());
    }

    #[test]
    fn no_completion_for_other_arguments() {
        assert_eq!(complete("pause x", &commands(), IDS), None);
        assert_eq!(complete("play rmc -p", &commands(), IDS), None);
        assert_eq!(complete("play zz", &commands(), IDS), None);
    }

    #[test]
    fn common_prefix_handles_multibyte_characters() {
        assert_eq!(common_prefix(&["chérie", "chéri fm"]), "chéri");
        assert_eq!(common_prefix(&["abc", "xyz"]), "");
    }
}
