use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Submit one command line and print the transcript it produced
    Exec {
        /// Command words, joined with spaces (e.g. `mkdisk -size=5 -path=/tmp/a.mia`)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Execute a .txt/.mia script line by line with pacing
    Run {
        script: PathBuf,
    },

    /// List disks and their partitions
    Disks {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List one directory of a mounted partition
    Ls {
        /// Mount id of the partition (e.g. 681A)
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "/")]
        path: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
