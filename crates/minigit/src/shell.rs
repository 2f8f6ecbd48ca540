//! The interactive menu shell.
//!
//! A thin layer over [`Repository`]: it reads trimmed lines, dispatches to
//! the core's operations, and prints whatever they return, error messages
//! included, verbatim. Input strings are passed through unmodified (empty
//! filenames and messages are allowed). The loop is generic over
//! `BufRead`/`Write` so it can be driven by tests without a terminal.

use minigit_history::{HistoryError, Repository};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n===== minigit menu =====\n\
                    1. Add File\n\
                    2. Commit\n\
                    3. Log History (Tree)\n\
                    4. Checkout Commit\n\
                    5. Show Current Files\n\
                    6. Show Staged Files\n\
                    7. Exit\n\
                    Enter your choice: ";

/// The menu loop and its repository.
pub struct Shell {
    repo: Repository,
    quiet: bool,
}

impl Shell {
    /// Create a shell around an existing repository.
    pub fn new(repo: Repository, quiet: bool) -> Self {
        Self { repo, quiet }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        if !self.quiet {
            writeln!(out, "Repository initialized.")?;
        }

        loop {
            if !self.quiet {
                write!(out, "{}", MENU)?;
                out.flush()?;
            }

            let Some(choice) = read_line(input)? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_file(input, out)?,
                "2" => self.commit(input, out)?,
                "3" => self.log(out)?,
                "4" => self.checkout(input, out)?,
                "5" => self.current_files(out)?,
                "6" => self.staged_files(out)?,
                "7" => {
                    writeln!(out, "Exiting minigit.")?;
                    break;
                }
                "" => continue,
                other => writeln!(out, "Invalid choice: {}", other)?,
            }
        }

        Ok(())
    }

    fn add_file<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(filename) = prompt(input, out, "Enter filename: ")? else {
            return Ok(());
        };
        let Some(content) = prompt(input, out, "Enter file content: ")? else {
            return Ok(());
        };

        self.repo.stage(filename.clone(), content);
        writeln!(out, "File '{}' staged for commit.", filename)
    }

    fn commit<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(message) = prompt(input, out, "Enter commit message: ")? else {
            return Ok(());
        };

        match self.repo.commit(message.clone()) {
            Ok(id) => writeln!(out, "Committed as {}: {}", id, message),
            Err(e) => writeln!(out, "{}", e),
        }
    }

    fn log<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.repo.log() {
            Ok(entries) => {
                writeln!(out, "--- Commit History Tree ---")?;
                for entry in &entries {
                    writeln!(out, "{}{}", "  ".repeat(entry.depth), entry.render())?;
                }
                writeln!(out, "---------------------------")
            }
            Err(e) => writeln!(out, "{}", e),
        }
    }

    fn checkout<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> io::Result<()> {
        let Some(id) = prompt(input, out, "Enter commit ID to checkout: ")? else {
            return Ok(());
        };

        match self.repo.checkout(&id) {
            Ok(commit) => writeln!(out, "Checked out to {}: {}", commit.id, commit.message),
            Err(e) => writeln!(out, "{}", e),
        }
    }

    fn current_files<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.repo.current_files() {
            Ok(files) => {
                let head_id = self
                    .repo
                    .head()
                    .map(|c| c.id.to_string())
                    .unwrap_or_default();
                writeln!(out, "--- Files at HEAD ({}) ---", head_id)?;
                for (path, content) in files.iter() {
                    writeln!(out, "{}: {}", path, content)?;
                }
                Ok(())
            }
            Err(e) => writeln!(out, "{}", e),
        }
    }

    fn staged_files<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.repo.staged().is_empty() {
            return writeln!(out, "{}", HistoryError::NothingToCommit);
        }

        writeln!(out, "--- Staged Files ---")?;
        for (path, content) in self.repo.staged() {
            writeln!(out, "{}: {}", path, content)?;
        }
        Ok(())
    }
}

/// Print a prompt and read the reply. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    read_line(input)
}

/// Read a trimmed line from the input. `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run the shell in quiet mode over scripted input lines.
    fn run_script(lines: &[&str]) -> String {
        let mut input = Cursor::new(lines.join("\n") + "\n");
        let mut out = Vec::new();
        let mut shell = Shell::new(Repository::new(), true);
        shell.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_stage_and_commit_flow() {
        let output = run_script(&["1", "a.txt", "hello", "2", "first commit", "7"]);
        assert!(output.contains("File 'a.txt' staged for commit."));
        assert!(output.contains("Committed as cmt_"));
        assert!(output.contains(": first commit"));
        assert!(output.contains("Exiting minigit."));
    }

    #[test]
    fn test_commit_with_nothing_staged_after_first_commit() {
        let output = run_script(&["2", "root", "2", "again", "7"]);
        assert!(output.contains("Committed as cmt_"));
        assert!(output.contains("No files staged. Nothing to commit."));
    }

    #[test]
    fn test_log_before_any_commit() {
        let output = run_script(&["3", "7"]);
        assert!(output.contains("No commits yet."));
        assert!(!output.contains("--- Commit History Tree ---"));
    }

    #[test]
    fn test_log_renders_tree() {
        let output = run_script(&["1", "a.txt", "1", "2", "c1", "3", "7"]);
        assert!(output.contains("--- Commit History Tree ---"));
        assert!(output.contains("- cmt_"));
        assert!(output.contains(" : c1 @ "));
    }

    #[test]
    fn test_checkout_unknown_id() {
        let output = run_script(&["2", "root", "4", "cmt_nope", "7"]);
        assert!(output.contains("Commit ID not found: cmt_nope"));
    }

    #[test]
    fn test_show_current_files() {
        let output = run_script(&["1", "a.txt", "hello", "2", "c1", "5", "7"]);
        assert!(output.contains("--- Files at HEAD (cmt_"));
        assert!(output.contains("a.txt: hello"));
    }

    #[test]
    fn test_show_current_files_before_any_commit() {
        let output = run_script(&["5", "7"]);
        assert!(output.contains("No commits yet."));
    }

    #[test]
    fn test_show_staged_files() {
        let output = run_script(&["1", "a.txt", "pending", "6", "7"]);
        assert!(output.contains("--- Staged Files ---"));
        assert!(output.contains("a.txt: pending"));
    }

    #[test]
    fn test_invalid_choice() {
        let output = run_script(&["9", "7"]);
        assert!(output.contains("Invalid choice: 9"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        // No "7": the loop ends when input runs out.
        let output = run_script(&["1", "a.txt", "hello"]);
        assert!(output.contains("File 'a.txt' staged for commit."));
    }
}
