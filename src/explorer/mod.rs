//! Interactive menu loop over a [`Session`].
//!
//! Every filesystem failure is turned into one line of text prefixed with the
//! action name and the loop carries on. Only `Exit`, end of input, or a
//! failure to write the transcript ends [`Explorer::run`].

pub mod menu;
pub mod session;

pub use menu::{Action, MenuProfile};
pub use session::Session;

use crate::core::errors::{Error, Result};
use crate::services::fs::listing::list_dir;
use crate::services::fs::ops::{self, Removed};
use crate::services::fs::permissions::{read_permissions, set_permissions};
use crate::services::search::{search_names, MatchMode, NameQuery};
use std::io::{self, BufRead, Write};

const RULE: &str = "---------------------------------------------";

#[derive(Debug, Clone, Copy)]
pub struct ExplorerOptions {
    pub profile: MenuProfile,
    /// Wait for Enter after read-only views. Ignored by profiles that never pause.
    pub pause: bool,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            profile: MenuProfile::Full,
            pause: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Explorer<R, W> {
    session: Session,
    options: ExplorerOptions,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(session: Session, options: ExplorerOptions, input: R, out: W) -> Self {
        Self {
            session,
            options,
            input,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line() else {
                break;
            };
            let Some(action) = self.options.profile.parse_choice(&line) else {
                writeln!(self.out, "Invalid choice.")?;
                continue;
            };
            if self.dispatch(action)? == Flow::Quit {
                break;
            }
        }
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let profile = self.options.profile;
        if profile == MenuProfile::Basic {
            writeln!(self.out, "\n=============================================")?;
            writeln!(self.out, "           TERMINAL FILE EXPLORER            ")?;
            writeln!(self.out, "=============================================")?;
        }
        writeln!(
            self.out,
            "\nCurrent Directory: \"{}\"",
            self.session.cwd().display()
        )?;
        for (i, action) in profile.actions().iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, profile.label(*action))?;
        }
        write!(self.out, "\nEnter choice: ")?;
        self.out.flush()
    }

    fn dispatch(&mut self, action: Action) -> io::Result<Flow> {
        let profile = self.options.profile;
        if action == Action::Exit {
            writeln!(self.out, "{}", profile.farewell())?;
            return Ok(Flow::Quit);
        }

        let mut args = Vec::new();
        for prompt in profile.prompts(action) {
            write!(self.out, "{prompt}")?;
            self.out.flush()?;
            match self.read_line() {
                Some(arg) => args.push(arg),
                None => return Ok(Flow::Quit),
            }
        }

        match self.execute(action, &args) {
            Ok(message) => writeln!(self.out, "{message}")?,
            Err(e) => {
                tracing::debug!("{:?} failed: {}", action, e);
                writeln!(self.out, "{} error: {}", action.error_prefix(), e)?;
            }
        }

        let pauses = matches!(
            action,
            Action::List | Action::Search | Action::ViewPermissions
        );
        if pauses && self.options.pause && profile.pauses() {
            write!(self.out, "\nPress Enter to continue...")?;
            self.out.flush()?;
            if self.read_line().is_none() {
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn execute(&mut self, action: Action, args: &[String]) -> Result<String> {
        match (action, args) {
            (Action::List, []) => self.list(),
            (Action::ChangeDir, [path]) => {
                let cwd = self.session.change_dir(path)?;
                Ok(format!("Now in: {}", cwd.display()))
            }
            (Action::CreateFile, [name]) => {
                ops::create_file(&self.session.resolve(name)?)?;
                Ok(format!("Created file: {name}"))
            }
            (Action::Delete, [path]) => match ops::delete(&self.session.resolve(path)?)? {
                Removed::File => Ok(format!("Removed file: {path}")),
                Removed::Directory { items } => Ok(format!(
                    "Removed directory (and contents): {path} ({items} items)"
                )),
            },
            (Action::Copy, [src, dst]) => {
                ops::copy(&self.session.resolve(src)?, &self.session.resolve(dst)?)?;
                Ok(format!("Copied to: {dst}"))
            }
            (Action::Move, [src, dst]) => {
                ops::move_entry(&self.session.resolve(src)?, &self.session.resolve(dst)?)?;
                Ok(format!("Moved/Renamed to: {dst}"))
            }
            (Action::Search, [pattern]) => self.search(pattern),
            (Action::ViewPermissions, [path]) => {
                let bits = read_permissions(&self.session.resolve(path)?)?;
                Ok(format!("{path} : {}", bits.to_rwx()))
            }
            (Action::ChangePermissions, [path, code]) => {
                let bits = set_permissions(&self.session.resolve(path)?, code.trim())?;
                Ok(format!("Permissions set to {bits} for {path}"))
            }
            _ => Err(Error::InvalidArgument(format!(
                "{:?} expects {} argument(s)",
                action,
                self.options.profile.prompts(action).len()
            ))),
        }
    }

    fn list(&self) -> Result<String> {
        let cwd = self.session.cwd();
        let mut lines = vec![format!("\nListing: {}", cwd.display()), RULE.to_string()];
        for entry in list_dir(cwd)? {
            lines.push(format!(
                "{:<5} {}  ({})",
                entry.kind.tag(),
                entry.name,
                entry.size_label()
            ));
        }
        Ok(lines.join("\n"))
    }

    fn search(&self, pattern: &str) -> Result<String> {
        let query = NameQuery::new(pattern, self.options.profile.search_mode());
        let hits = search_names(self.session.cwd(), &query)?;
        if hits.is_empty() {
            return Ok("No matches.".to_string());
        }
        let lines: Vec<String> = hits
            .iter()
            .map(|hit| match query.mode() {
                MatchMode::Contains => hit.path.display().to_string(),
                MatchMode::ExactName => format!("Found at: {}", hit.path.display()),
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Next input line without its terminator. `None` once input is exhausted or unreadable.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(line)
            }
            Err(e) => {
                tracing::warn!("Input stream failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn explorer(input: &str) -> Explorer<Cursor<Vec<u8>>, Vec<u8>> {
        let session = Session::new("/").unwrap();
        Explorer::new(
            session,
            ExplorerOptions::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        )
    }

    #[test]
    fn read_line_strips_crlf_but_keeps_spaces() {
        let mut explorer = explorer("  my file.txt \r\nnext\nlast");
        assert_eq!(explorer.read_line().as_deref(), Some("  my file.txt "));
        assert_eq!(explorer.read_line().as_deref(), Some("next"));
        assert_eq!(explorer.read_line().as_deref(), Some("last"));
        assert_eq!(explorer.read_line(), None);
    }

    #[test]
    fn execute_rejects_wrong_argument_count() -> Result<()> {
        let dir = TempDir::new()?;
        let mut explorer = Explorer::new(
            Session::new(dir.path())?,
            ExplorerOptions::default(),
            Cursor::new(Vec::new()),
            Vec::new(),
        );
        let result = explorer.execute(Action::Copy, &["only-one".to_string()]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        Ok(())
    }
}
