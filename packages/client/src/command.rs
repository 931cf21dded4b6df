use crate::session::HostName;

/// One line typed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterCommand<'a> {
    Quit,
    DbStatus,
    Switch(HostName),
    Send(&'a str),
}

impl<'a> MasterCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        if let Some(host) = HostName::parse(line) {
            return Self::Switch(host);
        }

        match line.to_lowercase().as_str() {
            "quit" => Self::Quit,
            "dbstatus" => Self::DbStatus,
            _ => Self::Send(line),
        }
    }
}
