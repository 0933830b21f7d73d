use crate::services::search::MatchMode;

/// One thing the user can pick from the menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    List,
    ChangeDir,
    CreateFile,
    Delete,
    Copy,
    Move,
    Search,
    ViewPermissions,
    ChangePermissions,
    Exit,
}

impl Action {
    /// Prefix for the one-line error report of this action.
    pub fn error_prefix(&self) -> &'static str {
        match self {
            Action::List => "List",
            Action::ChangeDir => "cd",
            Action::CreateFile => "Create",
            Action::Delete => "Delete",
            Action::Copy => "Copy",
            Action::Move => "Move/Rename",
            Action::Search => "Search",
            Action::ViewPermissions => "Perms",
            Action::ChangePermissions => "chmod",
            Action::Exit => "Exit",
        }
    }
}

/// Which menu is shown and how its entries behave.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuProfile {
    /// All ten entries, substring search, pauses after read-only views.
    #[default]
    Full,
    /// Seven entries, exact-name search, no pauses.
    Basic,
}

const FULL: &[Action] = &[
    Action::List,
    Action::ChangeDir,
    Action::CreateFile,
    Action::Delete,
    Action::Copy,
    Action::Move,
    Action::Search,
    Action::ViewPermissions,
    Action::ChangePermissions,
    Action::Exit,
];

const BASIC: &[Action] = &[
    Action::List,
    Action::ChangeDir,
    Action::CreateFile,
    Action::Delete,
    Action::Move,
    Action::Search,
    Action::Exit,
];

impl MenuProfile {
    pub fn actions(&self) -> &'static [Action] {
        match self {
            MenuProfile::Full => FULL,
            MenuProfile::Basic => BASIC,
        }
    }

    pub fn label(&self, action: Action) -> &'static str {
        match (self, action) {
            (_, Action::List) => "List Files",
            (_, Action::ChangeDir) => "Change Directory",
            (_, Action::CreateFile) => "Create File",
            (MenuProfile::Full, Action::Delete) => "Delete File/Folder",
            (MenuProfile::Basic, Action::Delete) => "Delete File",
            (_, Action::Copy) => "Copy (file/folder)",
            (MenuProfile::Full, Action::Move) => "Move/Rename",
            (MenuProfile::Basic, Action::Move) => "Rename / Move File",
            (MenuProfile::Full, Action::Search) => "Search (case-insensitive)",
            (MenuProfile::Basic, Action::Search) => "Search File (Recursive)",
            (_, Action::ViewPermissions) => "View Permissions",
            (_, Action::ChangePermissions) => "Change Permissions (octal)",
            (_, Action::Exit) => "Exit",
        }
    }

    /// Argument prompts shown, in order, before `action` runs.
    pub fn prompts(&self, action: Action) -> &'static [&'static str] {
        match (self, action) {
            (_, Action::List | Action::Exit) => &[],
            (MenuProfile::Full, Action::ChangeDir) => &["Path to cd: "],
            (MenuProfile::Basic, Action::ChangeDir) => &["Enter folder name (.. to go back): "],
            (MenuProfile::Full, Action::CreateFile) => &["Filename: "],
            (MenuProfile::Basic, Action::CreateFile) => &["Enter new file name: "],
            (MenuProfile::Full, Action::Delete) => &["Path to delete: "],
            (MenuProfile::Basic, Action::Delete) => &["Enter file name to delete: "],
            (_, Action::Copy) => &["Source: ", "Destination: "],
            (MenuProfile::Full, Action::Move) => &["Source: ", "Destination (new name/path): "],
            (MenuProfile::Basic, Action::Move) => &["Enter current file name: ", "Enter new name: "],
            (MenuProfile::Full, Action::Search) => &["Search name contains: "],
            (MenuProfile::Basic, Action::Search) => &["Enter file name to search: "],
            (_, Action::ViewPermissions) => &["Path: "],
            (_, Action::ChangePermissions) => &["Path: ", "Octal (e.g., 755): "],
        }
    }

    pub fn farewell(&self) -> &'static str {
        match self {
            MenuProfile::Full => "Bye!",
            MenuProfile::Basic => "Exiting File Explorer... Goodbye!",
        }
    }

    /// Maps a typed menu number to an action. `None` means invalid choice.
    pub fn parse_choice(&self, input: &str) -> Option<Action> {
        let n: usize = input.trim().parse().ok()?;
        self.actions().get(n.checked_sub(1)?).copied()
    }

    pub fn search_mode(&self) -> MatchMode {
        match self {
            MenuProfile::Full => MatchMode::Contains,
            MenuProfile::Basic => MatchMode::ExactName,
        }
    }

    /// Whether List, Search and View Permissions wait for Enter afterwards.
    pub fn pauses(&self) -> bool {
        matches!(self, MenuProfile::Full)
    }
}
