use cmdref::api::{CmdMessage, MessageLevel};
use colored::Colorize;
use std::path::Path;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_file_path(path: &Path) {
    println!("{} {}", "Commands file:".bold(), path.display());
}
