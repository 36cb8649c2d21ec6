pub mod analytics;
pub mod dashboard;
pub mod search;
pub mod servers;
pub mod sort;

/// One line typed at the command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deploy,
    Configure,
    Terminate,
    Search,
    Analytics,
    Sort,
    SaveAndExit,
    Refresh,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => Self::Deploy,
            "2" => Self::Configure,
            "3" => Self::Terminate,
            "4" => Self::Search,
            "5" => Self::Analytics,
            "6" => Self::Sort,
            "7" => Self::SaveAndExit,
            "" => Self::Refresh,
            other => Self::Unknown(other.to_string()),
        }
    }
}
