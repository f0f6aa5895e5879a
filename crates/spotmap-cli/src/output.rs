//! Terminal output.
//!
//! Command results go to stdout; notes and progress go to stderr so that
//! `spots` and `databases --json` can be piped.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use spotmap_core::SidebarEntry;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// A note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// One JSON document per line, or pretty-printed.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

/// A sidebar row: the title, highlighted when off market, then whichever of
/// link, area and price the record has.
pub fn sidebar_entry(entry: &SidebarEntry) {
    let title = if entry.off_market {
        entry.title.yellow().to_string()
    } else {
        entry.title.bold().to_string()
    };

    let mut details = Vec::new();
    if let Some(link) = &entry.link {
        details.push(link.clone());
    }
    if let Some(area) = entry.area {
        details.push(format!("{} sqft", area));
    }
    if let Some(price) = entry.price {
        details.push(format!("${}", price));
    }

    if details.is_empty() {
        println!("{}", title);
    } else {
        println!("{}  {}", title, details.join(" | ").dimmed());
    }
}
