//! Command interpreter tests

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use chrono::DateTime;
    use std::path::Path;
    use termfolio::content::SectionName;
    use termfolio::content::loader::{load_builtin, load_dir};
    use termfolio::error::SiteError;
    use termfolio::shell::{OutputKind, Shell};
    use termfolio::system::mock::MockSystem;
    use termfolio::viewer::{ViewerMode, render_full};

    fn output(shell: &mut Shell<'_>) -> Vec<String> {
        shell
            .take_scrollback()
            .into_iter()
            .map(|line| line.text)
            .collect()
    }

    #[test]
    fn unknown_verb_reports_and_changes_nothing() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        shell.execute("cd blog").unwrap();

        let err = shell.execute("rm -rf /").unwrap_err();
        assert_eq!(err, SiteError::command_not_found("rm"));
        assert_eq!(shell.current_dir(), Some(SectionName::Blog));

        let last = shell.scrollback().last().unwrap();
        assert_eq!(last.kind, OutputKind::Error);
        assert_eq!(
            last.text,
            "Command not found: rm. Type 'help' for available commands."
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        shell.execute("CD publications").unwrap();
        assert_eq!(shell.current_dir(), Some(SectionName::Publications));
    }

    #[test]
    fn cd_to_unknown_name_keeps_directory() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        shell.execute("cd experiences").unwrap();

        let err = shell.execute("cd nowhere").unwrap_err();
        assert_eq!(err, SiteError::directory_not_found("nowhere"));
        assert_eq!(shell.current_dir(), Some(SectionName::Experiences));
        assert_eq!(shell.cwd_display(), "~/experiences");
    }

    #[test]
    fn cd_accepts_home_aliases() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        for home in ["~", "/", "..", ""] {
            shell.execute("cd blog/").unwrap();
            assert_eq!(shell.current_dir(), Some(SectionName::Blog));
            shell.execute(&format!("cd {home}")).unwrap();
            assert_eq!(shell.current_dir(), None, "cd {home:?}");
        }
    }

    #[test]
    fn cd_into_biography_is_rejected() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        let err = shell.execute("cd me").unwrap_err();
        assert_eq!(err, SiteError::not_a_directory("me"));
        assert_eq!(shell.current_dir(), None);
    }

    #[test]
    fn bare_ls_lists_the_root_from_any_directory() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        shell.execute("cd publications").unwrap();
        output(&mut shell);

        shell.execute("ls").unwrap();
        let text = output(&mut shell).join("\n");
        assert!(text.contains("Available files and directories:"));
        assert!(text.contains("blog/"));
        assert!(!text.contains("paper1.txt"));
        assert_eq!(shell.current_dir(), Some(SectionName::Publications));

        shell.execute("ls publications").unwrap();
        let text = output(&mut shell).join("\n");
        assert!(text.contains("paper1.txt"));
        assert!(text.contains("paper2.txt"));
    }

    #[test]
    fn view_resolves_biography_collection_and_entries() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);

        shell.execute("view me.txt").unwrap();
        assert_eq!(shell.viewer().title().as_deref(), Some("me"));
        shell.viewer_mut().close();

        shell.execute("cat blog").unwrap();
        assert_eq!(shell.viewer().mode(), ViewerMode::List);
        assert_eq!(shell.viewer().active_collection(), Some(SectionName::Blog));
        shell.viewer_mut().close();

        // Found by the global search from the home directory
        shell.execute("view education1.txt").unwrap();
        assert_eq!(shell.viewer().mode(), ViewerMode::Detail);
        assert_eq!(shell.viewer().title().as_deref(), Some("education1.txt"));
        assert_eq!(shell.viewer().origin(), None);
    }

    #[test]
    fn view_reports_missing_targets() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);

        let err = shell.execute("view missing.txt").unwrap_err();
        assert_eq!(err, SiteError::file_not_found("missing.txt"));
        assert!(!shell.viewer().is_open());

        let err = shell.execute("view").unwrap_err();
        assert_eq!(err, SiteError::usage("view <filename>"));
    }

    #[test]
    fn identity_and_clock_commands() {
        let now = DateTime::parse_from_rfc3339("2025-03-14T15:09:26+01:00").unwrap();
        let system = MockSystem::new().with_now(now).unwrap();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);

        shell.execute("whoami").unwrap();
        shell.execute("date").unwrap();
        shell.execute("pwd").unwrap();
        let text = output(&mut shell);
        assert_eq!(
            text,
            vec![
                "abehou@stanford:~$ whoami",
                "abehou",
                "abehou@stanford:~$ date",
                "Fri Mar 14 2025 15:09:26 GMT+0100",
                "abehou@stanford:~$ pwd",
                "~",
            ]
        );
    }

    #[test]
    fn clear_empties_the_scrollback() {
        let system = MockSystem::new();
        let mut shell = Shell::new(load_builtin().unwrap(), &system);
        shell.execute("help").unwrap();
        assert!(shell.scrollback().len() > 5);

        shell.execute("clear").unwrap();
        assert!(shell.scrollback().is_empty());
    }

    #[test]
    fn current_directory_wins_over_global_search() {
        let system = MockSystem::new()
            .with_file("/site/me.yaml", b"type: document\ntext: Hello.\n")
            .unwrap()
            .with_file(
                "/site/publications.yaml",
                b"type: collection\nentries:\n  shared.txt:\n    title: Shared Paper\n",
            )
            .unwrap()
            .with_file("/site/experiences.yaml", b"type: collection\nentries: {}\n")
            .unwrap()
            .with_file(
                "/site/blog.yaml",
                b"type: collection\nentries:\n  shared.txt:\n    title: Shared Post\n",
            )
            .unwrap();
        let store = load_dir(&system, Path::new("/site")).unwrap();
        let mut shell = Shell::new(store, &system);

        shell.execute("cd blog").unwrap();
        shell.execute("view shared.txt").unwrap();
        let text = render_full(shell.viewer(), shell.store()).unwrap().to_text();
        assert!(text.contains("Shared Post"));
        assert!(!text.contains("Shared Paper"));
        shell.viewer_mut().close();

        // From home the first collection in site order is searched first
        shell.execute("cd ~").unwrap();
        shell.execute("view shared.txt").unwrap();
        let text = render_full(shell.viewer(), shell.store()).unwrap().to_text();
        assert!(text.contains("Shared Paper"));
    }
}
