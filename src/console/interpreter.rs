pub const PROMPT: &str = "MIA>";

pub const HELP_TEXT: &str = "\
Available commands:
  mkdisk -size=<n> -path=<file> [-unit=K|M] [-fit=BF|FF|WF]
  rmdisk -path=<file>
  fdisk -size=<n> -path=<file> -name=<name> [-type=P|E|L] [-fit=BF|FF|WF] [-unit=B|K|M]
  fdisk -path=<file> -name=<name> -delete=fast|full
  fdisk -path=<file> -name=<name> -add=<n> [-unit=B|K|M]
  mount -path=<file> -name=<name>
  unmount -id=<id>
  mounted
  mkfs -id=<id> [-type=full] [-fs=2fs|3fs]
  cat -file1=<path> [-file2=<path> ...]
  showdisk -path=<file>
  login -user=<user> -pass=<password> -id=<id>
  logout
  mkgrp -name=<group> | rmgrp -name=<group>
  mkusr -user=<user> -pass=<password> -grp=<group> | rmusr -user=<user>
  chgrp -user=<user> -grp=<group>
  mkdir [-p] -path=<dir>
  mkfile -path=<file> [-r] [-size=<n>] [-cont=<file>]
  remove | edit | rename | copy | move | find | chown | chmod
  recovery -id=<id> | loss -id=<id> | journaling -id=<id>
  rep -name=<report> -path=<file> -id=<id> [-path_file_ls=<path>]
Client commands:
  clear - clear the console
  help  - show this help";

/// Commands handled by the client itself; never sent to the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalCommand {
    Clear,
    Help,
}

impl LocalCommand {
    pub const ALL: [LocalCommand; 2] = [LocalCommand::Clear, LocalCommand::Help];

    pub fn name(self) -> &'static str {
        match self {
            LocalCommand::Clear => "clear",
            LocalCommand::Help => "help",
        }
    }

    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        Self::ALL
            .into_iter()
            .find(|c| line.eq_ignore_ascii_case(c.name()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition<'a> {
    Blank,
    Comment(&'a str),
    Local(LocalCommand),
    Remote(&'a str),
}

pub fn classify(line: &str) -> Disposition<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Disposition::Blank;
    }
    if line.starts_with('#') {
        return Disposition::Comment(line);
    }
    if let Some(local) = LocalCommand::parse(line) {
        return Disposition::Local(local);
    }
    Disposition::Remote(line)
}
