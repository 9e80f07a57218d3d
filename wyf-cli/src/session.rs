use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use wyf_core::{
    export_document, export_filename, is_importable, reconcile_import, validate_submission,
    WidgetRegistry,
};
use wyf_types::{ContactChannel, FriendSubmission, WidgetOptions};

use crate::prompt::StdinPrompter;
use crate::render;

const CONTAINER_ID: &str = "terminal";

const HELP: &str = "Commands:
  list            show all friends, most recently contacted first
  add             add a friend
  edit <id>       edit a friend (blank input keeps the current value)
  touch <id>      mark a friend as contacted today
  remove <id>     remove a friend (asks for confirmation)
  export [path]   save friends to a JSON file
  import <path>   load friends from a JSON file
  help            show this help
  quit            exit";

/// One interactive terminal session owning a single widget instance.
pub struct Session {
    registry: WidgetRegistry,
    prompter: StdinPrompter,
    export_dir: PathBuf,
}

impl Session {
    pub fn new(options: WidgetOptions, export_dir: PathBuf) -> Self {
        let mut registry = WidgetRegistry::new();
        registry.create(CONTAINER_ID, options);
        Self {
            registry,
            prompter: StdinPrompter,
            export_dir,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        {
            let widget = self.widget();
            println!("{}", widget.options.title);
            println!("{}", widget.options.subtitle);
        }
        println!("Type \"help\" for commands.\n");

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            // Errors surface as messages; the session itself keeps going.
            if let Err(e) = self.dispatch(line) {
                println!("{}", e);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<()> {
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "list" => self.cmd_list(),
            "add" => self.cmd_add()?,
            "edit" => self.cmd_edit(parse_id(rest)?)?,
            "touch" => self.cmd_touch(parse_id(rest)?),
            "remove" => self.cmd_remove(parse_id(rest)?),
            "export" => self.cmd_export(rest)?,
            "import" => self.cmd_import(Path::new(rest))?,
            "help" => println!("{}", HELP),
            _ => println!("Unknown command \"{}\". Type \"help\" for commands.", command),
        }
        Ok(())
    }

    fn widget(&mut self) -> &mut wyf_core::FriendWidget {
        // The session always creates its own instance, so this lookup holds.
        self.registry
            .get_mut(CONTAINER_ID)
            .expect("terminal widget registered at startup")
    }

    fn cmd_list(&mut self) {
        let today = Local::now().date_naive();
        print!("{}", render::render_cards(self.widget().store.list(), today));
    }

    fn cmd_add(&mut self) -> Result<()> {
        let submission = self.read_submission(None)?;
        validate_submission(&submission)?;
        let name = submission.name.clone();
        let id = self.widget().store.add(submission);
        println!("Added {} [{}]", name, id);
        Ok(())
    }

    fn cmd_edit(&mut self, id: i64) -> Result<()> {
        let current = match self.widget().store.get(id) {
            Some(f) => f.clone(),
            None => {
                println!("No friend with id {}", id);
                return Ok(());
            }
        };

        let submission = self.read_submission(Some(&current))?;
        validate_submission(&submission)?;
        self.widget().store.update(submission.into_record(id));
        println!("Updated friend [{}]", id);
        Ok(())
    }

    fn cmd_touch(&mut self, id: i64) {
        let today = Local::now().date_naive();
        self.widget().store.touch_contact_date(id, today);
        self.cmd_list();
    }

    fn cmd_remove(&mut self, id: i64) {
        let prompter = StdinPrompter;
        if self.widget().store.remove(id, &prompter) {
            println!("Friend removed.");
        }
    }

    fn cmd_export(&mut self, path_arg: &str) -> Result<()> {
        if self.widget().store.is_empty() {
            println!("No friends data to save!");
            return Ok(());
        }

        let now = Utc::now();
        let path = if path_arg.is_empty() {
            self.export_dir.join(export_filename(now.date_naive()))
        } else {
            PathBuf::from(path_arg)
        };

        let document = export_document(self.widget().store.list(), now)?;
        std::fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Friends data saved to {}", path.display());
        Ok(())
    }

    pub fn cmd_import(&mut self, path: &Path) -> Result<()> {
        if !is_importable(path, None) {
            tracing::warn!(path = %path.display(), "import rejected: not a JSON file");
            println!("Please select a valid JSON file");
            return Ok(());
        }

        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let current = self.widget().store.list().to_vec();
        let result = reconcile_import(&current, &payload, &self.prompter);
        match result {
            Ok(outcome) => {
                self.widget().store.replace_all(outcome.records);
                println!("{}", outcome.summary);
                println!("Friends data loaded successfully!");
            }
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    /// Reads the form fields from stdin. When editing, blank input keeps the
    /// record's current value.
    fn read_submission(&mut self, current: Option<&wyf_types::FriendRecord>) -> Result<FriendSubmission> {
        let name = self.read_field(
            "Friend name",
            current.map(|f| f.name.clone()),
        )?;

        let date_default = current
            .map(|f| f.last_contact_date)
            .unwrap_or_else(|| Local::now().date_naive());
        let date_input = self.read_field(
            "Last contact date (YYYY-MM-DD)",
            Some(date_default.format("%Y-%m-%d").to_string()),
        )?;
        let last_contact_date = NaiveDate::parse_from_str(date_input.trim(), "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Dates must look like 2026-08-24"))?;

        let channel_default = current.map(|f| f.contact_channel);
        let channel_input = self.read_field(
            "Contact type (phone/email/messenger/chat)",
            channel_default.map(|c| c.label().to_lowercase()),
        )?;
        let contact_channel = ContactChannel::parse(&channel_input)
            .or(channel_default)
            .ok_or_else(|| anyhow::anyhow!("Contact type must be phone, email, messenger, or chat"))?;

        let contact_value = self.read_field(
            "Contact info",
            current.map(|f| f.contact_value.clone()),
        )?;

        Ok(FriendSubmission {
            name: name.trim().to_string(),
            last_contact_date,
            contact_channel,
            contact_value: contact_value.trim().to_string(),
        })
    }

    fn read_field(&mut self, label: &str, default: Option<String>) -> Result<String> {
        match &default {
            Some(value) => print!("{} [{}]: ", label, value),
            None => print!("{}: ", label),
        }
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let line = line.trim();
        if line.is_empty() {
            if let Some(value) = default {
                return Ok(value);
            }
        }
        Ok(line.to_string())
    }
}

fn parse_id(input: &str) -> Result<i64> {
    input
        .parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Expected a numeric friend id, got \"{}\"", input))
}
