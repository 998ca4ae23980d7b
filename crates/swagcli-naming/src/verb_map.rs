//! Action word to canonical verb mapping.
//!
//! Operation names use a large, inconsistent vocabulary of actions ("List", "Retrieve",
//! "Regenerate", "PowerOff", ...). Each known action word maps to one canonical [`Verb`];
//! anything else becomes [`Verb::Invoke`].
//!
//! Lookups normalize the word by upper-casing its first letter and leaving the rest as is,
//! then match the table keys exactly. The table is sorted by key so the lookup is a binary
//! search.

use swagcli_core::Verb;

use crate::inflect::capitalize;

/// The verb unmapped actions fall back to.
pub const DEFAULT_VERB: Verb = Verb::Invoke;

/// Action words and the verb each maps to, sorted by word.
static VERB_MAPPING: &[(&str, Verb)] = &[
    ("Access", Verb::Get),
    ("Acquire", Verb::Get),
    ("Activate", Verb::Initialize),
    ("Add", Verb::Add),
    ("Allocate", Verb::New),
    ("Analyze", Verb::Test),
    ("Append", Verb::Add),
    ("Apply", Verb::Add),
    ("Approve", Verb::Approve),
    ("Assert", Verb::Assert),
    ("Assign", Verb::Set),
    ("Associate", Verb::Join),
    ("Attach", Verb::Add),
    ("Authorize", Verb::Grant),
    ("Backup", Verb::Backup),
    ("Block", Verb::Block),
    ("Build", Verb::Build),
    ("Bypass", Verb::Skip),
    ("Cancel", Verb::Stop),
    ("Capture", Verb::Export),
    ("Cat", Verb::Get),
    ("Change", Verb::Rename),
    ("Check", Verb::Test),
    ("Checkpoint", Verb::Checkpoint),
    ("Clear", Verb::Clear),
    ("Clone", Verb::Copy),
    ("Close", Verb::Close),
    ("Combine", Verb::Join),
    ("Compare", Verb::Compare),
    ("Compile", Verb::Build),
    ("Complete", Verb::Complete),
    ("Compress", Verb::Compress),
    ("Concatenate", Verb::Add),
    ("Configure", Verb::Set),
    ("Confirm", Verb::Confirm),
    ("Connect", Verb::Connect),
    ("Convert", Verb::Convert),
    ("ConvertFrom", Verb::ConvertFrom),
    ("ConvertTo", Verb::ConvertTo),
    ("Copy", Verb::Copy),
    ("Create", Verb::New),
    ("Cut", Verb::Remove),
    ("Debug", Verb::Debug),
    ("Delete", Verb::Remove),
    ("Deny", Verb::Deny),
    ("Deploy", Verb::Deploy),
    ("Dir", Verb::Get),
    ("Disable", Verb::Disable),
    ("Discard", Verb::Remove),
    ("Disconnect", Verb::Disconnect),
    ("Discover", Verb::Find),
    ("Dismount", Verb::Dismount),
    ("Display", Verb::Show),
    ("Dispose", Verb::Remove),
    ("Dump", Verb::Get),
    ("Duplicate", Verb::Copy),
    ("Edit", Verb::Edit),
    ("Enable", Verb::Enable),
    ("End", Verb::Stop),
    ("Enter", Verb::Enter),
    ("Erase", Verb::Clear),
    ("Evaluate", Verb::Test),
    ("Examine", Verb::Get),
    ("Execute", Verb::Invoke),
    ("Exit", Verb::Exit),
    ("Expand", Verb::Expand),
    ("Export", Verb::Export),
    ("Failover", Verb::Set),
    ("Find", Verb::Find),
    ("Finish", Verb::Complete),
    ("Flush", Verb::Clear),
    ("ForceReboot", Verb::Restart),
    ("Format", Verb::Format),
    ("Generalize", Verb::Reset),
    ("Generate", Verb::New),
    ("Get", Verb::Get),
    ("Grant", Verb::Grant),
    ("Group", Verb::Group),
    ("Hide", Verb::Hide),
    ("Import", Verb::Import),
    ("Initialize", Verb::Initialize),
    ("Insert", Verb::Add),
    ("Install", Verb::Install),
    ("Into", Verb::Enter),
    ("Invoke", Verb::Invoke),
    ("Is", Verb::Test),
    ("Join", Verb::Join),
    ("Jump", Verb::Skip),
    ("Limit", Verb::Limit),
    ("List", Verb::Get),
    ("Load", Verb::Import),
    ("Locate", Verb::Find),
    ("Lock", Verb::Lock),
    ("Make", Verb::New),
    ("Measure", Verb::Measure),
    ("Merge", Verb::Merge),
    ("Migrate", Verb::Move),
    ("Mount", Verb::Mount),
    ("Move", Verb::Move),
    ("Name", Verb::Move),
    ("New", Verb::New),
    ("Notify", Verb::Send),
    ("Nullify", Verb::Clear),
    ("Obtain", Verb::Get),
    ("Open", Verb::Open),
    ("Optimize", Verb::Optimize),
    ("Out", Verb::Out),
    ("Patch", Verb::Update),
    ("Pause", Verb::Suspend),
    ("Perform", Verb::Invoke),
    ("Ping", Verb::Ping),
    ("Pop", Verb::Pop),
    ("Post", Verb::Invoke),
    ("Power", Verb::Start),
    ("PowerOff", Verb::Stop),
    ("PowerOn", Verb::Start),
    ("Produce", Verb::Show),
    ("Protect", Verb::Protect),
    ("Provision", Verb::New),
    ("Publish", Verb::Publish),
    ("Purge", Verb::Clear),
    ("Push", Verb::Push),
    ("Put", Verb::Set),
    ("Read", Verb::Read),
    ("Reassociate", Verb::Move),
    ("Reboot", Verb::Restart),
    ("Receive", Verb::Receive),
    ("Recover", Verb::Restore),
    ("Redo", Verb::Redo),
    ("Refresh", Verb::Update),
    ("Regenerate", Verb::New),
    ("Register", Verb::Register),
    ("Reimage", Verb::Update),
    ("Release", Verb::Publish),
    ("Remove", Verb::Remove),
    ("Rename", Verb::Rename),
    ("Repair", Verb::Repair),
    ("Replace", Verb::Update),
    ("Replicate", Verb::Copy),
    ("Reprocess", Verb::Update),
    ("Request", Verb::Request),
    ("Reset", Verb::Reset),
    ("Resize", Verb::Resize),
    ("Resolve", Verb::Resolve),
    ("Restart", Verb::Restart),
    ("Restore", Verb::Restore),
    ("Restrict", Verb::Lock),
    ("Resubmit", Verb::Submit),
    ("Resume", Verb::Resume),
    ("Retarget", Verb::Update),
    ("Retrieve", Verb::Get),
    ("Revoke", Verb::Revoke),
    ("Run", Verb::Start),
    ("Save", Verb::Save),
    ("Search", Verb::Search),
    ("Secure", Verb::Lock),
    ("Select", Verb::Select),
    ("Send", Verb::Send),
    ("Separate", Verb::Split),
    ("Set", Verb::Set),
    ("Show", Verb::Show),
    ("Shutdown", Verb::Stop),
    ("Skip", Verb::Skip),
    ("Split", Verb::Split),
    ("Start", Verb::Start),
    ("Step", Verb::Step),
    ("Stop", Verb::Stop),
    ("Submit", Verb::Submit),
    ("Suggest", Verb::Get),
    ("Suspend", Verb::Suspend),
    ("Swap", Verb::Switch),
    ("Switch", Verb::Switch),
    ("Sync", Verb::Sync),
    ("Synch", Verb::Sync),
    ("Synchronize", Verb::Sync),
    ("Test", Verb::Test),
    ("Trace", Verb::Trace),
    ("Transfer", Verb::Move),
    ("Trigger", Verb::Start),
    ("Type", Verb::Get),
    ("Unblock", Verb::Unblock),
    ("Undelete", Verb::Restore),
    ("Undo", Verb::Undo),
    ("Uninstall", Verb::Uninstall),
    ("Unite", Verb::Join),
    ("Unlock", Verb::Unlock),
    ("Unmark", Verb::Clear),
    ("Unprotect", Verb::Unprotect),
    ("Unpublish", Verb::Unpublish),
    ("Unregister", Verb::Unregister),
    ("Unrestrict", Verb::Unlock),
    ("Unsecure", Verb::Unlock),
    ("Unset", Verb::Clear),
    ("Update", Verb::Update),
    ("Upgrade", Verb::Update),
    ("Use", Verb::Use),
    ("Validate", Verb::Test),
    ("Verify", Verb::Test),
    ("Wait", Verb::Wait),
    ("Watch", Verb::Watch),
    ("Wipe", Verb::Clear),
    ("Write", Verb::Write),
];

/// Returns the verb `word` maps to, if the word is a known action.
pub fn find(word: &str) -> Option<Verb> {
    let word = capitalize(word);
    VERB_MAPPING
        .binary_search_by(|(key, _)| (*key).cmp(word.as_ref()))
        .ok()
        .map(|idx| VERB_MAPPING[idx].1)
}

/// Returns true when `word` is a known action.
pub fn is_known(word: &str) -> bool {
    find(word).is_some()
}

/// Returns the verb `word` maps to, or [`DEFAULT_VERB`].
pub fn lookup(word: &str) -> Verb {
    find(word).unwrap_or(DEFAULT_VERB)
}
