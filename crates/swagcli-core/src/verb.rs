//! Canonical command verbs.

use std::fmt;

/// One of the approved verbs a generated command name may start with.
///
/// Serialized as its capitalized name (`"Get"`, `"New"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Verb {
    Add,
    Approve,
    Assert,
    Backup,
    Block,
    Build,
    Checkpoint,
    Clear,
    Close,
    Compare,
    Complete,
    Compress,
    Confirm,
    Connect,
    Convert,
    ConvertFrom,
    ConvertTo,
    Copy,
    Debug,
    Deny,
    Deploy,
    Disable,
    Disconnect,
    Dismount,
    Edit,
    Enable,
    Enter,
    Exit,
    Expand,
    Export,
    Find,
    Format,
    Get,
    Grant,
    Group,
    Hide,
    Import,
    Initialize,
    Install,
    Invoke,
    Join,
    Limit,
    Lock,
    Measure,
    Merge,
    Mount,
    Move,
    New,
    Open,
    Optimize,
    Out,
    Ping,
    Pop,
    Protect,
    Publish,
    Push,
    Read,
    Receive,
    Redo,
    Register,
    Remove,
    Rename,
    Repair,
    Request,
    Reset,
    Resize,
    Resolve,
    Restart,
    Restore,
    Resume,
    Revoke,
    Save,
    Search,
    Select,
    Send,
    Set,
    Show,
    Skip,
    Split,
    Start,
    Step,
    Stop,
    Submit,
    Suspend,
    Switch,
    Sync,
    Test,
    Trace,
    Unblock,
    Undo,
    Uninstall,
    Unlock,
    Unprotect,
    Unpublish,
    Unregister,
    Update,
    Use,
    Wait,
    Watch,
    Write,
}

impl Verb {
    /// Returns the verb as it appears in a command name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Approve => "Approve",
            Self::Assert => "Assert",
            Self::Backup => "Backup",
            Self::Block => "Block",
            Self::Build => "Build",
            Self::Checkpoint => "Checkpoint",
            Self::Clear => "Clear",
            Self::Close => "Close",
            Self::Compare => "Compare",
            Self::Complete => "Complete",
            Self::Compress => "Compress",
            Self::Confirm => "Confirm",
            Self::Connect => "Connect",
            Self::Convert => "Convert",
            Self::ConvertFrom => "ConvertFrom",
            Self::ConvertTo => "ConvertTo",
            Self::Copy => "Copy",
            Self::Debug => "Debug",
            Self::Deny => "Deny",
            Self::Deploy => "Deploy",
            Self::Disable => "Disable",
            Self::Disconnect => "Disconnect",
            Self::Dismount => "Dismount",
            Self::Edit => "Edit",
            Self::Enable => "Enable",
            Self::Enter => "Enter",
            Self::Exit => "Exit",
            Self::Expand => "Expand",
            Self::Export => "Export",
            Self::Find => "Find",
            Self::Format => "Format",
            Self::Get => "Get",
            Self::Grant => "Grant",
            Self::Group => "Group",
            Self::Hide => "Hide",
            Self::Import => "Import",
            Self::Initialize => "Initialize",
            Self::Install => "Install",
            Self::Invoke => "Invoke",
            Self::Join => "Join",
            Self::Limit => "Limit",
            Self::Lock => "Lock",
            Self::Measure => "Measure",
            Self::Merge => "Merge",
            Self::Mount => "Mount",
            Self::Move => "Move",
            Self::New => "New",
            Self::Open => "Open",
            Self::Optimize => "Optimize",
            Self::Out => "Out",
            Self::Ping => "Ping",
            Self::Pop => "Pop",
            Self::Protect => "Protect",
            Self::Publish => "Publish",
            Self::Push => "Push",
            Self::Read => "Read",
            Self::Receive => "Receive",
            Self::Redo => "Redo",
            Self::Register => "Register",
            Self::Remove => "Remove",
            Self::Rename => "Rename",
            Self::Repair => "Repair",
            Self::Request => "Request",
            Self::Reset => "Reset",
            Self::Resize => "Resize",
            Self::Resolve => "Resolve",
            Self::Restart => "Restart",
            Self::Restore => "Restore",
            Self::Resume => "Resume",
            Self::Revoke => "Revoke",
            Self::Save => "Save",
            Self::Search => "Search",
            Self::Select => "Select",
            Self::Send => "Send",
            Self::Set => "Set",
            Self::Show => "Show",
            Self::Skip => "Skip",
            Self::Split => "Split",
            Self::Start => "Start",
            Self::Step => "Step",
            Self::Stop => "Stop",
            Self::Submit => "Submit",
            Self::Suspend => "Suspend",
            Self::Switch => "Switch",
            Self::Sync => "Sync",
            Self::Test => "Test",
            Self::Trace => "Trace",
            Self::Unblock => "Unblock",
            Self::Undo => "Undo",
            Self::Uninstall => "Uninstall",
            Self::Unlock => "Unlock",
            Self::Unprotect => "Unprotect",
            Self::Unpublish => "Unpublish",
            Self::Unregister => "Unregister",
            Self::Update => "Update",
            Self::Use => "Use",
            Self::Wait => "Wait",
            Self::Watch => "Watch",
            Self::Write => "Write",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
