//! The command interpreter: current directory, scrollback and the viewer

use crate::content::format::format_entry;
use crate::content::{ContentStore, SectionName};
use crate::error::SiteError;
use crate::input::Key;
use crate::shell::command::Command;
use crate::system::System;
use crate::utils::text::{RULE, pad_end};
use crate::viewer::Viewer;
use tracing::debug;

/// Styling class of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Echo of the prompt and the typed line
    Command,
    Info,
    Success,
    Error,
}

/// One line of scrollback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub kind: OutputKind,
    pub text: String,
}

/// Format used by `date`
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Interpreter state passed explicitly to every handler
pub struct Shell<'sys> {
    store: ContentStore,
    system: &'sys dyn System,
    /// `None` is the home directory
    cwd: Option<SectionName>,
    viewer: Viewer,
    scrollback: Vec<OutputLine>,
}

impl<'sys> Shell<'sys> {
    #[must_use]
    pub fn new(store: ContentStore, system: &'sys dyn System) -> Self {
        Self {
            store,
            system,
            cwd: None,
            viewer: Viewer::new(),
            scrollback: Vec::new(),
        }
    }

    #[must_use]
    #[inline]
    pub const fn store(&self) -> &ContentStore {
        &self.store
    }

    #[must_use]
    #[inline]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[inline]
    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    /// Current collection, `None` at home
    #[must_use]
    #[inline]
    pub const fn current_dir(&self) -> Option<SectionName> {
        self.cwd
    }

    /// Current directory as shown by `pwd` and the prompt
    #[must_use]
    pub fn cwd_display(&self) -> String {
        match self.cwd {
            None => "~".to_owned(),
            Some(section) => format!("~/{section}"),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        let identity = self.store.identity();
        format!("{}@{}:{}$ ", identity.user, identity.host, self.cwd_display())
    }

    #[must_use]
    #[inline]
    pub fn scrollback(&self) -> &[OutputLine] {
        &self.scrollback
    }

    /// Remove and return all scrollback lines
    pub fn take_scrollback(&mut self) -> Vec<OutputLine> {
        std::mem::take(&mut self.scrollback)
    }

    /// Append multi-line text to the scrollback
    pub fn print(&mut self, kind: OutputKind, text: &str) {
        self.scrollback.extend(text.lines().map(|line| OutputLine {
            kind,
            text: line.to_owned(),
        }));
        if text.is_empty() {
            self.scrollback.push(OutputLine {
                kind,
                text: String::new(),
            });
        }
    }

    /// Route a key to the viewer
    pub fn handle_viewer_key(&mut self, key: Key) -> bool {
        self.viewer.handle_key(key, &self.store)
    }

    /// Echo and execute one command line
    ///
    /// Failures are appended to the scrollback as a single error line and
    /// also returned; the interpreter state is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the "target not found" error the command reported
    pub fn execute(&mut self, line: &str) -> Result<(), SiteError> {
        let line = line.trim();
        let echo = format!("{}{line}", self.prompt());
        self.print(OutputKind::Command, &echo);
        if line.is_empty() {
            return Ok(());
        }

        debug!("Executing command: {line}");
        let result = Command::parse(line).and_then(|command| self.dispatch(command));
        if let Err(err) = &result {
            debug!("Command failed: {err}");
            self.print(OutputKind::Error, &err.to_string());
        }
        result
    }

    /// Run a command without echoing it
    ///
    /// # Errors
    ///
    /// Returns the "target not found" error the command reported
    pub fn dispatch(&mut self, command: Command) -> Result<(), SiteError> {
        match command {
            Command::Help => {
                self.print(OutputKind::Info, &help_text());
                Ok(())
            }
            Command::Ls(dir) => self.list(dir.as_deref()),
            Command::Cd(dir) => self.change_dir(dir.as_deref()),
            Command::View(target) => self.view(&target),
            Command::Pwd => {
                let cwd = self.cwd_display();
                self.print(OutputKind::Info, &cwd);
                Ok(())
            }
            Command::Clear => {
                self.scrollback.clear();
                Ok(())
            }
            Command::Whoami => {
                let user = self.store.identity().user.clone();
                self.print(OutputKind::Info, &user);
                Ok(())
            }
            Command::Date => {
                let now = self.system.now().format(DATE_FORMAT).to_string();
                self.print(OutputKind::Info, &now);
                Ok(())
            }
        }
    }

    fn list(&mut self, dir: Option<&str>) -> Result<(), SiteError> {
        let target = match dir {
            None | Some("~" | "/") => None,
            Some(name) => match SectionName::parse(trim_dir(name)) {
                Some(section) if section.is_collection() => Some(section),
                _ => return Err(SiteError::directory_not_found(name)),
            },
        };

        let text = match target {
            None => root_listing(),
            Some(section) => self.collection_listing(section),
        };
        self.print(OutputKind::Info, &text);
        Ok(())
    }

    fn change_dir(&mut self, dir: Option<&str>) -> Result<(), SiteError> {
        match dir {
            None | Some("~" | "/") => {
                self.cwd = None;
                self.print(OutputKind::Success, "Changed to home directory");
            }
            Some("..") => {
                if self.cwd.take().is_some() {
                    self.print(OutputKind::Success, "Changed to home directory");
                }
            }
            Some(name) => {
                let trimmed = trim_dir(name);
                match SectionName::parse(trimmed) {
                    Some(section) if section.is_collection() => {
                        self.cwd = Some(section);
                        self.print(
                            OutputKind::Success,
                            &format!("Changed directory to {section}"),
                        );
                        let listing = self.collection_listing(section);
                        self.print(OutputKind::Info, &listing);
                    }
                    Some(_) => return Err(SiteError::not_a_directory(trimmed)),
                    None => return Err(SiteError::directory_not_found(name)),
                }
            }
        }
        Ok(())
    }

    /// Resolve a `view`/`cat` target; first match wins
    fn view(&mut self, target: &str) -> Result<(), SiteError> {
        let target = target.trim_end_matches('/');
        if target.is_empty() {
            return Err(SiteError::usage("view <filename>"));
        }

        // The biography document
        if target == "me" || target == "me.txt" {
            let me = self.store.me();
            self.viewer.open_document(SectionName::Me.as_str(), &me.text);
            return Ok(());
        }

        // A whole collection
        if let Some(collection) = SectionName::parse(target).and_then(|s| self.store.collection(s)) {
            self.viewer.open_collection(collection);
            return Ok(());
        }

        // An entry of the current collection, then anywhere
        let scoped = self
            .cwd
            .and_then(|section| self.store.collection(section))
            .and_then(|c| c.position(target).map(|index| (c.name(), index)));
        let found = scoped.or_else(|| self.store.find_entry(target));

        let Some(named) = found.and_then(|(section, index)| self.store.entry(section, index)) else {
            return Err(SiteError::file_not_found(target));
        };
        let text = format_entry(&named.entry);
        let name = named.name.clone();
        self.viewer.open_document(name, &text);
        Ok(())
    }

    fn collection_listing(&self, section: SectionName) -> String {
        let mut out = format!("\nContents of {section}/:\n");
        if let Some(collection) = self.store.collection(section) {
            for named in collection.entries() {
                out.push_str(&format!("  {}\n", named.name));
            }
        }
        out.push_str(&format!(
            "\nType 'view {section}' to browse, or 'view <filename>' for details.\n"
        ));
        out
    }
}

/// Strip one trailing slash and a leading `~/`
fn trim_dir(name: &str) -> &str {
    let name = name.strip_prefix("~/").unwrap_or(name);
    name.strip_suffix('/').unwrap_or(name)
}

fn root_listing() -> String {
    let mut out = String::from("\nAvailable files and directories:\n");
    for section in SectionName::ALL {
        let label = if section.is_collection() {
            format!("{section}/")
        } else {
            section.as_str().to_owned()
        };
        out.push_str(&format!("  {}{}\n", pad_end(&label, 18), section.blurb()));
    }
    out.push_str("\nType 'view <filename>' to open a file, or 'cd <directory>' to navigate.\n");
    out
}

fn help_text() -> String {
    let rule = &*RULE;
    format!(
        "
Available commands:
{rule}
  ls [directory]       List files and directories
  cd <directory>       Change directory (publications, experiences, blog)
  view <file>          Open file in vim-style viewer
  cat <file>           Alias for 'view'
  pwd                  Print current directory
  clear                Clear terminal screen
  whoami               Display current user
  date                 Show current date and time
  help                 Show this help message
{rule}

Viewer keys:
  j/k                  Move selection or scroll
  d/u                  Scroll half a page
  g/G                  Jump to top/bottom
  Enter                Open the selected entry
  b                    Back to the list
  q, Esc               Close the viewer
{rule}

Examples:
  ls                   # List all available files
  cd publications      # Navigate to publications directory
  view me              # View the about page
  view paper1.txt      # View specific publication
  view publications    # Browse all publications
{rule}
"
    )
}
