use std::str::FromStr;

/// One entry of the main menu, selected by typing its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    ViewAll,
    Export,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::ViewAll,
        MenuChoice::Export,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Contact",
            Self::Search => "Search Contact",
            Self::Update => "Update Contact",
            Self::Delete => "Delete Contact",
            Self::ViewAll => "View All Contacts",
            Self::Export => "Export to CSV",
            Self::Statistics => "View Statistics",
            Self::Exit => "Exit",
        }
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map(|index| index + 1)
            .unwrap_or(0)
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Search),
            "3" => Ok(Self::Update),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::ViewAll),
            "6" => Ok(Self::Export),
            "7" => Ok(Self::Statistics),
            "8" => Ok(Self::Exit),
            other => Err(format!("Invalid menu choice: {}", other)),
        }
    }
}
