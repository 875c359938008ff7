use colored::Colorize;

use crate::{domain::ActiveTheme, LogSink};

pub(super) struct FormatService;

const ACTIVE_CHAR: &str = "*";

impl FormatService {
    pub fn active_item_table<F>(descriptors: Vec<String>, active: F)
    where
        F: Fn(usize) -> bool,
    {
        for (i, descriptor) in descriptors.iter().enumerate() {
            let active_char = if active(i) {
                ACTIVE_CHAR.to_owned()
            } else {
                ACTIVE_CHAR.chars().map(|_| " ").collect()
            };
            println!("{} {}", active_char.green().bold(), descriptor);
        }
    }

    pub fn success(msg: &str) {
        println!("{} {}", "[SUCCESS]".green(), msg)
    }

    pub fn theme(theme: &ActiveTheme) {
        println!("{}", theme)
    }
}

/// Prints every record on stdout, used by `--check` and `--dry`.
pub(crate) struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn record(&self, message: &str) {
        println!("{}", message.yellow())
    }
}
