use std::path::Path;

use anyhow::{Context, Result};

use mia_console::config::ClientConfig;
use mia_console::console::{
    Console, EntryKind, Submission, Transcript, TranscriptCursor, TranscriptEntry,
};
use mia_console::model::{DirectoryEntry, Disk, format_bytes, format_capacity};
use mia_console::remote::{Gateway, RemoteClient};

use crate::Commands;

pub(crate) fn handle_command(config: &ClientConfig, command: Commands) -> Result<()> {
    let client = RemoteClient::new(&config.base_url)?;
    match command {
        Commands::Exec { command } => exec_line(Console::new(client, config), &command.join(" ")),
        Commands::Run { script } => run_script(Console::new(client, config), &script),
        Commands::Disks { json } => {
            let resp = client.disks()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&resp.disks).context("serialize disks json")?
                );
            } else {
                for disk in &resp.disks {
                    for line in disk_lines(disk) {
                        println!("{}", line);
                    }
                }
                if resp.disks.is_empty() && resp.error_message().is_none() {
                    println!("(no disks)");
                }
            }
            if let Some(err) = resp.error_message() {
                anyhow::bail!("list disks: {}", err);
            }
            Ok(())
        }
        Commands::Ls { id, path, json } => {
            let entries = client.list_directory(&id, &path)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).context("serialize listing json")?
                );
            } else if entries.is_empty() {
                println!("(empty folder)");
            } else {
                for entry in &entries {
                    println!("{}", listing_line(entry));
                }
            }
            Ok(())
        }
    }
}

fn exec_line<G: Gateway>(mut console: Console<G>, line: &str) -> Result<()> {
    let mut cursor = TranscriptCursor::default();
    match console.submit_interactive(line) {
        Submission::Handled => {}
        Submission::Batch(queue) => {
            console.run_batch(queue, |t, pace| {
                print_entries(cursor.take_new(t));
                std::thread::sleep(pace);
            });
        }
    }
    print_entries(cursor.take_new(console.transcript()));
    ensure_clean(console.transcript())
}

fn run_script<G: Gateway>(mut console: Console<G>, script: &Path) -> Result<()> {
    let mut cursor = TranscriptCursor::default();
    let summary = console.run_script(script, |t, pace| {
        print_entries(cursor.take_new(t));
        std::thread::sleep(pace);
    });
    print_entries(cursor.take_new(console.transcript()));

    match summary {
        None => anyhow::bail!("script {} was not executed", script.display()),
        Some(s) if s.errors > 0 => {
            anyhow::bail!("{} of {} commands failed", s.errors, s.executed)
        }
        Some(_) => Ok(()),
    }
}

fn ensure_clean(transcript: &Transcript) -> Result<()> {
    let errors = transcript.count(EntryKind::Error);
    if errors > 0 {
        anyhow::bail!("{} command(s) reported errors", errors);
    }
    Ok(())
}

fn print_entries(entries: &[TranscriptEntry]) {
    for entry in entries {
        if entry.kind == EntryKind::Error {
            eprintln!("{}", format_entry(entry));
        } else {
            println!("{}", format_entry(entry));
        }
    }
}

fn format_entry(entry: &TranscriptEntry) -> String {
    let prefix = match entry.kind {
        EntryKind::Error => "error: ",
        _ => "",
    };
    format!("[{}] {}{}", entry.clock(), prefix, entry.text)
}

fn disk_lines(disk: &Disk) -> Vec<String> {
    let mut out = vec![format!(
        "{}  {}  {}  fit {}  {}/{} mounted",
        disk.name,
        disk.path,
        format_capacity(disk.capacity_bytes),
        disk.fit_strategy,
        disk.mounted_partitions,
        disk.partitions.len()
    )];
    for p in &disk.partitions {
        let mount = match p.active_mount_id() {
            Some(id) => format!("mounted {}", id),
            None => "unmounted".to_string(),
        };
        out.push(format!(
            "  {}  type {}  {}  fit {}  {}",
            p.name,
            p.partition_type,
            format_capacity(p.size_bytes),
            p.fit_strategy,
            mount
        ));
    }
    out
}

fn listing_line(entry: &DirectoryEntry) -> String {
    let kind = if entry.is_folder() { 'd' } else { '-' };
    let owner = entry.owner.as_deref().unwrap_or("-");
    format!(
        "{} {:>4} {:<10} {:>12}  {}",
        kind,
        entry.permissions,
        owner,
        format_bytes(entry.size_bytes),
        entry.name
    )
}
