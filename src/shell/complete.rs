//! Tab completion for the input line

use crate::content::{ContentStore, SectionName};
use crate::shell::command::COMMANDS;

/// Complete the input line when exactly one candidate matches
///
/// A lone word completes against the command verbs. The second word of
/// `cd`/`ls` completes against collection names; the second word of
/// `view`/`cat` also considers the biography and the entries of the current
/// collection.
#[must_use]
pub fn complete(input: &str, store: &ContentStore, cwd: Option<SectionName>) -> Option<String> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [word] => unique(COMMANDS.iter().copied(), word).map(|verb| format!("{verb} ")),
        [verb, word] => {
            let verb = verb.to_lowercase();
            let candidates: Vec<String> = match verb.as_str() {
                "cd" | "ls" => SectionName::COLLECTIONS
                    .iter()
                    .map(|s| s.as_str().to_owned())
                    .collect(),
                "view" | "cat" => SectionName::ALL
                    .iter()
                    .map(|s| s.as_str().to_owned())
                    .chain(
                        cwd.and_then(|section| store.collection(section))
                            .into_iter()
                            .flat_map(|c| c.entries().iter().map(|e| e.name.clone())),
                    )
                    .collect(),
                _ => return None,
            };
            unique(candidates.iter().map(String::as_str), word)
                .map(|name| format!("{verb} {name}"))
        }
        _ => None,
    }
}

fn unique<'a>(candidates: impl Iterator<Item = &'a str>, prefix: &str) -> Option<&'a str> {
    let mut matches = candidates.filter(|c| c.starts_with(prefix));
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::content::loader::load_builtin;

    #[test]
    fn completes_unique_verbs_only() {
        let store = load_builtin().unwrap();
        assert_eq!(complete("wh", &store, None).as_deref(), Some("whoami "));
        // `c` matches cd, clear and cat
        assert_eq!(complete("c", &store, None), None);
        assert_eq!(complete("", &store, None), None);
    }

    #[test]
    fn completes_section_names() {
        let store = load_builtin().unwrap();
        assert_eq!(complete("cd pub", &store, None).as_deref(), Some("cd publications"));
        assert_eq!(complete("view m", &store, None).as_deref(), Some("view me"));
        assert_eq!(complete("cd m", &store, None), None);
    }

    #[test]
    fn view_completes_entries_of_current_collection() {
        let store = load_builtin().unwrap();
        assert_eq!(
            complete("view post3", &store, Some(SectionName::Blog)).as_deref(),
            Some("view post3.txt")
        );
        assert_eq!(complete("view post3", &store, None), None);
        // post1.txt, post2.txt, post3.txt
        assert_eq!(complete("cat post", &store, Some(SectionName::Blog)), None);
    }
}
