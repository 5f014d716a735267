//! Line-based interactive session over an address book.
//!
//! The session owns no data. It reads answers from any `BufRead`, writes
//! prompts and messages to any `Write`, and calls the pure
//! [`AddressBook`]/[`Record`] API in between. End of input reads as an
//! empty answer, which cancels or skips every prompt, so no loop can spin
//! forever on a closed stream.

use crate::book::AddressBook;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{AddressBookError, SessionError, SessionResult};
use crate::models::Record;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Reply to a declined creation or an explicit exit from the action menu.
pub const ASSISTANCE_MESSAGE: &str = "Okay. Let me know if you need further assistance.";

const HELP_MESSAGE: &str = "Commands:
  find <name>      look up a contact (offers to create it if missing)
  phone <number>   find the contact that has this phone number
  delete <name>    delete a contact
  all              show every contact
  help             show this message
  exit             leave the address book";

/// What happened after a lookup by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// The record existed. `record` is the record as it was found, `action`
    /// is what the action menu did with it.
    Found {
        record: Record,
        action: ActionOutcome,
    },

    /// The record did not exist and the user created it.
    Created(Record),

    /// The record did not exist and the user answered `n`.
    Declined,

    /// The record did not exist and the answer was neither `y` nor `n`.
    Ignored,
}

/// What the action menu did with a found record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// `a`: a phone was added; holds the updated record.
    PhoneAdded(Record),

    /// `a`: the user declined or gave an invalid phone.
    PhoneNotAdded,

    /// `d`: the record was removed from the book.
    Deleted(Record),

    /// `c`: the record as the change flow left it.
    PhoneChanged(Record),

    /// `c`: the old phone was rejected before anything was removed.
    PhoneNotChanged,

    /// `e`: the user left the menu.
    Exited,

    /// Any other answer. Nothing is printed and nothing changes.
    Ignored,
}

/// An interactive session bound to one address book and one pair of streams.
pub struct Session<'a, R, W> {
    book: &'a mut AddressBook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session reading from `input` and writing to `output`.
    pub fn new(book: &'a mut AddressBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Read-only view of the book being edited.
    pub fn book(&self) -> &AddressBook {
        self.book
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// Address book errors (such as an empty name) are printed and the loop
    /// continues. Only I/O failures end the session early.
    pub fn run(&mut self) -> SessionResult<()> {
        self.say("Welcome to the address book. Type 'help' for commands.")?;

        loop {
            self.write_prompt("> ")?;
            let Some(line) = self.read_answer()? else {
                break;
            };

            let line = line.trim();
            let (command, argument) = match line.split_once(char::is_whitespace) {
                Some((command, argument)) => (command, argument.trim()),
                None => (line, ""),
            };
            debug!(command = command, argument = argument, "Session command");

            let result = match command {
                "" => Ok(()),
                "find" if !argument.is_empty() => self.find_record(argument).map(drop),
                "phone" if !argument.is_empty() => self.find_record_by_phone(argument).map(drop),
                "delete" if !argument.is_empty() => self.delete_record(argument).map(drop),
                "find" | "phone" | "delete" => self.say(&format!("Usage: {} <value>", command)),
                "all" => {
                    let rendered = self.book.to_string();
                    self.say(&rendered)
                }
                "help" => self.say(HELP_MESSAGE),
                "exit" | "quit" => break,
                other => self.say(&format!("Unknown command: {}. Type 'help' for commands.", other)),
            };

            match result {
                Ok(()) => {}
                Err(SessionError::Book(e)) => self.say(&e.to_string())?,
                Err(e) => return Err(e),
            }
        }

        self.say("Goodbye!")?;
        Ok(())
    }

    /// Look up a record by name and drive the follow-up prompts.
    ///
    /// A found record is printed and handed to the action menu. A missing
    /// one leads to the offer to create it.
    pub fn find_record(&mut self, name: &str) -> SessionResult<FindOutcome> {
        let Some(record) = self.book.find_record(name).cloned() else {
            return self.prompt_add_new_record(name);
        };

        self.say(&format!("Found record: {}", record))?;
        let action = self.prompt_action(name)?;
        Ok(FindOutcome::Found { record, action })
    }

    /// Ask what to do with an existing record: `a`, `d`, `c` or `e`.
    pub fn prompt_action(&mut self, name: &str) -> SessionResult<ActionOutcome> {
        self.require_record(name)?;

        let action = self.prompt(&format!(
            "{} found. What do you want to do? \
             (add phone, delete record, exit,change phone) (a/d/e/c): ",
            name
        ))?;

        match action.as_str() {
            "a" => self.prompt_add_new_phone(name),
            "d" => Ok(match self.delete_record(name)? {
                Some(record) => ActionOutcome::Deleted(record),
                None => ActionOutcome::Ignored,
            }),
            "c" => {
                let answer = self.prompt("Enter old phone number: ")?;
                match PhoneNumber::new(answer) {
                    Ok(old_phone) => Ok(ActionOutcome::PhoneChanged(
                        self.change_phone(name, &old_phone)?,
                    )),
                    Err(e) => {
                        warn!(error = %e, "Rejected old phone number");
                        self.say(&e.to_string())?;
                        Ok(ActionOutcome::PhoneNotChanged)
                    }
                }
            }
            "e" => {
                self.say(ASSISTANCE_MESSAGE)?;
                Ok(ActionOutcome::Exited)
            }
            _ => Ok(ActionOutcome::Ignored),
        }
    }

    /// Offer to add one strictly validated phone to an existing record.
    pub fn prompt_add_new_phone(&mut self, name: &str) -> SessionResult<ActionOutcome> {
        self.require_record(name)?;

        let answer = self.prompt(&format!("Add new phone number to {}? (y/n): ", name))?;
        if !answer.eq_ignore_ascii_case("y") {
            return Ok(ActionOutcome::PhoneNotAdded);
        }

        let answer = self.prompt("Enter phone number: ")?;
        let phone = match PhoneNumber::new(answer) {
            Ok(phone) => phone,
            Err(e) => {
                warn!(error = %e, "Rejected new phone number");
                self.say(&e.to_string())?;
                return Ok(ActionOutcome::PhoneNotAdded);
            }
        };

        let record = self.require_record_mut(name)?;
        record.add_phone(phone);
        let record = record.clone();
        self.say(&format!("Updated record: {}", record))?;
        Ok(ActionOutcome::PhoneAdded(record))
    }

    /// Offer to create a record for a name that was not found.
    ///
    /// On `y` the user may give one loosely validated phone; an empty answer
    /// skips it and an invalid one asks again.
    /// A name that cannot be a contact name is rejected before any prompt.
    pub fn prompt_add_new_record(&mut self, name: &str) -> SessionResult<FindOutcome> {
        let contact_name = ContactName::new(name).map_err(AddressBookError::from)?;

        let answer = self.prompt(&format!(
            "Do you want to add a new record for {}? (y/n): ",
            name
        ))?;

        match answer.to_lowercase().as_str() {
            "y" => {}
            "n" => {
                self.say(ASSISTANCE_MESSAGE)?;
                return Ok(FindOutcome::Declined);
            }
            _ => return Ok(FindOutcome::Ignored),
        }

        let mut record = Record::with_name(contact_name);

        loop {
            let answer = self.prompt(&format!(
                "Provide a phone number for {} or press Enter to skip: ",
                name
            ))?;
            if answer.is_empty() {
                self.say("No phone number added, but you can add it later.\n")?;
                break;
            }

            match PhoneNumber::parse_loose(answer) {
                Ok(phone) => {
                    self.say(&format!("Phone number added: {}", phone))?;
                    record.add_phone(phone);
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Rejected phone for new record");
                    self.say("Invalid phone number. Please try again.")?;
                }
            }
        }

        self.book.add_record(record.clone())?;
        self.say(&format!("Record added: {}", record))?;
        Ok(FindOutcome::Created(record))
    }

    /// Replace `old_phone` on the named record with a new phone.
    ///
    /// The old phone is removed before the replacement is asked for, so
    /// cancelling with an empty answer leaves the record one phone shorter.
    /// If the record does not hold `old_phone` it is returned unchanged.
    pub fn change_phone(&mut self, name: &str, old_phone: &PhoneNumber) -> SessionResult<Record> {
        let record = self.require_record_mut(name)?;
        if let Err(e) = record.remove_phone(old_phone) {
            debug!(error = %e, "Change phone on missing number");
            let record = record.clone();
            self.say(&format!(
                "The phone number {} does not exist in the record.",
                old_phone
            ))?;
            return Ok(record);
        }

        loop {
            let answer = self.prompt("Enter new phone number: ")?;
            if answer.is_empty() {
                self.say("No new phone number provided. Operation cancelled.")?;
                return Ok(self.require_record(name)?.clone());
            }

            match PhoneNumber::parse_loose(answer) {
                Ok(new_phone) => {
                    let record = self.require_record_mut(name)?;
                    record.add_phone(new_phone);
                    let record = record.clone();
                    self.say(&format!("Updated record: {}", record))?;
                    return Ok(record);
                }
                Err(e) => {
                    warn!(error = %e, "Rejected replacement phone");
                    self.say("Invalid phone number. Please try again.")?;
                }
            }
        }
    }

    /// Delete a record by name and report the result.
    pub fn delete_record(&mut self, name: &str) -> SessionResult<Option<Record>> {
        let removed = self.book.delete_record(name);
        match removed {
            Some(_) => self.say(&format!("Record deleted for {}", name))?,
            None => self.say(&format!("No record found for {}", name))?,
        }
        Ok(removed)
    }

    /// Look up the record holding a phone, accepting any loosely valid input.
    pub fn find_record_by_phone(&mut self, phone: &str) -> SessionResult<Option<Record>> {
        let phone = PhoneNumber::parse_loose(phone).map_err(AddressBookError::from)?;
        let found = self.book.find_record_by_phone(&phone).cloned();
        match &found {
            Some(record) => self.say(&format!("Found record: {}", record))?,
            None => self.say(&format!("No record found with phone {}", phone))?,
        }
        Ok(found)
    }

    fn require_record(&self, name: &str) -> SessionResult<&Record> {
        self.book
            .find_record(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()).into())
    }

    fn require_record_mut(&mut self, name: &str) -> SessionResult<&mut Record> {
        self.book
            .find_record_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()).into())
    }

    /// Print a prompt and read the answer; end of input reads as "".
    fn prompt(&mut self, text: &str) -> SessionResult<String> {
        self.write_prompt(text)?;
        Ok(self.read_answer()?.unwrap_or_default())
    }

    fn write_prompt(&mut self, text: &str) -> SessionResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a bad
    /// line becomes an unrecognized answer instead of ending the session.
    fn read_answer(&mut self) -> SessionResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Input line is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> SessionResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}
