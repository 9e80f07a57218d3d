use std::io::{self, BufRead, Write};
use wyf_core::Prompter;
use wyf_types::ImportMode;

/// Terminal implementation of the decision-point seam. EOF or an
/// unrecognized answer counts as cancelling the prompt.
pub struct StdinPrompter;

impl StdinPrompter {
    fn ask(&self, question: &str) -> Option<String> {
        print!("{} ", question);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).ok()?;
        if read == 0 {
            None
        } else {
            Some(line.trim().to_lowercase())
        }
    }
}

impl Prompter for StdinPrompter {
    fn confirm_remove(&self) -> bool {
        matches!(
            self.ask("Are you sure you want to remove this friend? [y/N]")
                .as_deref(),
            Some("y") | Some("yes")
        )
    }

    // Cancelling here means merge, matching the original dialog where
    // "Cancel" was the merge button.
    fn choose_import_mode(&self) -> ImportMode {
        match self
            .ask("You already have friends data. Replace it with the loaded data? [replace/Merge]")
            .as_deref()
        {
            Some("replace") | Some("r") => ImportMode::Replace,
            _ => ImportMode::Merge,
        }
    }
}
