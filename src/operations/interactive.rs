//! Full-screen terminal front end
//!
//! Puts the terminal in raw mode on the alternate screen, translates
//! crossterm events into [`Key`]s for the session and redraws after each one.

use crate::config::prefs::{DisplayMode, Theme};
use crate::error::SiteError;
use crate::input::Key;
use crate::operations::session::{Control, Session};
use crate::shell::OutputKind;
use crate::utils::text::percent;
use crate::viewer::render;
use anyhow::{Context as _, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use std::io::{self, IsTerminal as _, Write};
use tracing::debug;

const PLAIN_TITLE: &str = "plain view";
const PLAIN_HINT: &str = "j/k scroll  g/G top/bottom  Ctrl-P terminal  Ctrl-T theme";
const CURSOR: char = '█';

/// Visual role of a screen row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Output(OutputKind),
    Prompt,
    Bar,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRow {
    pub text: String,
    pub tone: Tone,
}

impl ScreenRow {
    fn new<S: Into<String>>(tone: Tone, text: S) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

struct Palette {
    background: Color,
    text: Color,
    command: Color,
    info: Color,
    success: Color,
    error: Color,
    accent: Color,
}

const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            background: Color::Reset,
            text: Color::Grey,
            command: Color::Green,
            info: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            accent: Color::Yellow,
        },
        Theme::Light => Palette {
            background: Color::White,
            text: Color::Black,
            command: Color::DarkBlue,
            info: Color::DarkCyan,
            success: Color::DarkGreen,
            error: Color::DarkRed,
            accent: Color::DarkMagenta,
        },
    }
}

/// Translate a crossterm key event
#[must_use]
pub fn map_key(event: KeyEvent) -> Option<Key> {
    let key = match event.code {
        KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    };
    Some(key)
}

/// Lay out the whole screen for a terminal of `height` rows
#[must_use]
pub fn compose(session: &Session<'_>, height: usize) -> Vec<ScreenRow> {
    if session.preferences().mode == DisplayMode::Plain {
        return compose_plain(session, height);
    }

    let shell = session.shell();
    if let Some(frame) = render(shell.viewer(), shell.store()) {
        let mut rows = vec![ScreenRow::new(Tone::Bar, format!(" {} ", frame.title))];
        rows.extend(frame.lines.into_iter().map(|line| {
            let tone = if line.highlighted {
                Tone::Highlight
            } else {
                Tone::Text
            };
            ScreenRow::new(tone, line.text)
        }));
        rows.resize(height.saturating_sub(1), ScreenRow::new(Tone::Text, ""));
        rows.push(ScreenRow::new(
            Tone::Bar,
            format!(" {}   {}", frame.hint, frame.status),
        ));
        return rows;
    }

    let scrollback = shell.scrollback();
    let visible = height.saturating_sub(1);
    let start = scrollback.len().saturating_sub(visible);
    let mut rows: Vec<_> = scrollback[start..]
        .iter()
        .map(|line| ScreenRow::new(Tone::Output(line.kind), line.text.clone()))
        .collect();
    rows.push(ScreenRow::new(
        Tone::Prompt,
        format!("{}{}{CURSOR}", shell.prompt(), session.editor().buffer()),
    ));
    rows
}

fn compose_plain(session: &Session<'_>, height: usize) -> Vec<ScreenRow> {
    let lines = session.plain_lines();
    let page = session.page_height();
    let offset = session.plain_scroll();
    let max = lines.len().saturating_sub(page);

    let mut rows = vec![ScreenRow::new(Tone::Bar, format!(" {PLAIN_TITLE} "))];
    rows.extend(
        lines
            .iter()
            .skip(offset)
            .take(page)
            .map(|line| ScreenRow::new(Tone::Text, line.clone())),
    );
    rows.resize(height.saturating_sub(1), ScreenRow::new(Tone::Text, ""));
    rows.push(ScreenRow::new(
        Tone::Bar,
        format!(" {PLAIN_HINT}   {}%", percent(offset, max)),
    ));
    rows
}

/// Run the session until the user quits
///
/// # Errors
///
/// Returns an error if stdin or stdout is not a terminal, or if the terminal
/// cannot be driven
pub fn run_interactive(session: &mut Session<'_>) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(SiteError::terminal("an interactive session needs a terminal").into());
    }

    let mut stdout = io::stdout();
    enable_raw_mode()
        .map_err(|err| SiteError::terminal(format!("cannot enable raw mode: {err}")))?;
    execute!(stdout, EnterAlternateScreen, Hide).context("enter alternate screen")?;

    let result = event_loop(&mut stdout, session);

    disable_raw_mode().ok();
    execute!(stdout, ResetColor, Show, LeaveAlternateScreen).ok();
    result
}

fn event_loop<W: Write>(out: &mut W, session: &mut Session<'_>) -> Result<()> {
    let (mut width, mut height) = terminal::size().context("query terminal size")?;
    session.resize(usize::from(height));
    session.start();

    loop {
        draw(out, session, usize::from(width), usize::from(height))?;
        match event::read().context("read event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(key) = map_key(key)
                    && session.handle_key(key) == Control::Quit
                {
                    debug!("Session ended by user");
                    return Ok(());
                }
            }
            Event::Resize(w, h) => {
                width = w;
                height = h;
                session.resize(usize::from(h));
            }
            _ => {}
        }
    }
}

fn draw<W: Write>(out: &mut W, session: &Session<'_>, width: usize, height: usize) -> Result<()> {
    let colors = palette(session.preferences().theme);
    queue!(
        out,
        SetBackgroundColor(colors.background),
        Clear(ClearType::All)
    )
    .context("clear screen")?;

    for (row, line) in compose(session, height).iter().take(height).enumerate() {
        let text: String = line.text.chars().take(width).collect();
        let fg = match line.tone {
            Tone::Text => colors.text,
            Tone::Output(OutputKind::Command) | Tone::Prompt => colors.command,
            Tone::Output(OutputKind::Info) => colors.info,
            Tone::Output(OutputKind::Success) => colors.success,
            Tone::Output(OutputKind::Error) => colors.error,
            Tone::Bar | Tone::Highlight => colors.accent,
        };
        let reverse = matches!(line.tone, Tone::Bar | Tone::Highlight);
        let row = u16::try_from(row).unwrap_or(u16::MAX);

        queue!(out, MoveTo(0, row), SetForegroundColor(fg)).context("draw row")?;
        if reverse {
            queue!(
                out,
                SetAttribute(Attribute::Reverse),
                Print(format!("{text:<width$}")),
                SetAttribute(Attribute::NoReverse)
            )
            .context("draw row")?;
        } else {
            queue!(out, Print(text)).context("draw row")?;
        }
    }

    queue!(out, ResetColor).context("draw screen")?;
    out.flush().context("flush terminal")?;
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::config::prefs::{PreferenceStore, Preferences};
    use crate::content::loader::load_builtin;
    use crate::shell::Shell;
    use crate::system::MockSystem;

    #[test]
    fn control_letters_map_to_ctrl_keys() {
        let event = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), Some(Key::Ctrl('p')));
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(event), Some(Key::Char('j')));
        let event = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(map_key(event), None);
    }

    #[test]
    fn terminal_screen_ends_with_prompt() {
        let system = MockSystem::new();
        let shell = Shell::new(load_builtin().unwrap(), &system);
        let mut session = Session::new(
            shell,
            PreferenceStore::new(&system, None),
            Preferences::default(),
        );
        session.start();

        let rows = compose(&session, 10);
        assert_eq!(rows.len(), 10);
        let last = rows.last().unwrap();
        assert_eq!(last.tone, Tone::Prompt);
        assert_eq!(last.text, format!("abehou@stanford:~$ {CURSOR}"));
    }

    #[test]
    fn viewer_screen_fills_the_terminal() {
        let system = MockSystem::new();
        let shell = Shell::new(load_builtin().unwrap(), &system);
        let mut session = Session::new(
            shell,
            PreferenceStore::new(&system, None),
            Preferences::default(),
        );
        session.resize(12);
        for c in "view blog".chars() {
            session.handle_key(Key::Char(c));
        }
        session.handle_key(Key::Enter);

        let rows = compose(&session, 12);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].tone, Tone::Bar);
        assert!(
            rows.iter()
                .any(|row| row.tone == Tone::Highlight && row.text.contains("post1.txt"))
        );
        assert!(rows[11].text.contains("1/3"));
    }

    #[test]
    fn plain_screen_has_title_and_position() {
        let system = MockSystem::new();
        let shell = Shell::new(load_builtin().unwrap(), &system);
        let session = Session::new(
            shell,
            PreferenceStore::new(&system, None),
            Preferences {
                mode: DisplayMode::Plain,
                theme: Theme::Light,
            },
        );

        let rows = compose(&session, 8);
        assert_eq!(rows.len(), 8);
        assert!(rows[0].text.contains(PLAIN_TITLE));
        assert!(rows.last().unwrap().text.ends_with("0%"));
    }
}
