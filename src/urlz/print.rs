use colored::Colorize;
use urlz::api::{CmdMessage, MessageLevel};
use urlz::model::Mapping;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_mappings(mappings: &[Mapping]) {
    if mappings.is_empty() {
        return;
    }
    println!("Stored URLs:");
    for mapping in mappings {
        println!(
            "{}",
            format_mapping(&mapping.short.yellow().to_string(), &mapping.long)
        );
    }
}

fn format_mapping(short: &str, long: &str) -> String {
    format!("Short: {} → Long: {}", short, long)
}
