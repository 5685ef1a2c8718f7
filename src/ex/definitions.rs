//! Command definitions
//! Declarative table of every ex command the core recognises

use crate::error::{ErrorType, VintageError};

/// How a `|` inside the argument text is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPolicy {
    /// `|` would separate commands; it must be written as `\|`
    Separator,
    /// `|` belongs to the argument (`:global`, `:help`, `:shell`)
    Literal,
    /// `|` belongs to the argument only when it is a filter (`:read !cmd`)
    LiteralAfterBang,
}

impl BarPolicy {
    /// Whether `|` in `args` is part of the argument
    pub fn is_literal(self, args: &str) -> bool {
        match self {
            BarPolicy::Separator => false,
            BarPolicy::Literal => true,
            BarPolicy::LiteralAfterBang => args.starts_with('!'),
        }
    }
}

/// What the command line completes after the command name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    None,
    /// File system paths
    Path,
    /// Option names
    Setting,
}

/// Descriptor for an ex command
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    /// Canonical name of the command
    pub name: &'static str,
    /// Accepted abbreviations
    pub aliases: &'static [&'static str],
    /// Host action the command runs
    pub target: &'static str,
    /// Description for help text
    pub description: &'static str,
    pub bar: BarPolicy,
    pub completion: Completion,
    /// Set for recursive mapping commands, which are recognised only to be rejected
    pub use_instead: Option<&'static str>,
}

impl CommandDescriptor {
    /// Whether the command can be run at all
    pub fn is_supported(&self) -> bool {
        self.use_instead.is_none()
    }

    /// Error for a recursive mapping command, naming its non-recursive alternative
    pub fn unsupported_error(&self) -> Option<VintageError> {
        self.use_instead.map(|alt| {
            VintageError::new(
                ErrorType::Parse,
                "RECURSIVE_MAPPING",
                format!(
                    "Recursive mapping commands are not allowed, use the \"{alt}\" command instead"
                ),
            )
        })
    }

    /// One help line: name, abbreviations, description
    pub fn summary(&self) -> String {
        let mut head = self.name.to_string();
        if !self.aliases.is_empty() {
            head = format!("{head} ({})", self.aliases.join(", "));
        }
        match self.use_instead {
            Some(alt) => format!("{head:<24} {} (use {alt})", self.description),
            None => format!("{head:<24} {}", self.description),
        }
    }
}

/// Look up a descriptor by canonical name
pub fn find(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|desc| desc.name == name)
}

/// Names offered by command-line completion, in alphabetical order
pub fn completion_names() -> impl Iterator<Item = &'static str> {
    COMMANDS
        .iter()
        .filter(|desc| desc.is_supported())
        .map(|desc| desc.name)
}

/// Static registry of all commands, sorted by name
pub const COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "abbreviate",
        aliases: &["ab"],
        target: "ex_abbreviate",
        description: "Define an insert-mode abbreviation",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "browse",
        aliases: &["bro"],
        target: "ex_browse",
        description: "Open a file browser",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "buffers",
        aliases: &[],
        target: "ex_buffers",
        description: "List buffers",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "cd",
        aliases: &[],
        target: "ex_cd",
        description: "Change the working directory",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "cdd",
        aliases: &[],
        target: "ex_cdd",
        description: "Change to the directory of the current file",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "close",
        aliases: &["clo"],
        target: "ex_close",
        description: "Close the current window",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "copy",
        aliases: &["co"],
        target: "ex_copy",
        description: "Copy lines",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "cquit",
        aliases: &["cq"],
        target: "ex_cquit",
        description: "Quit with an error code",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "delete",
        aliases: &["d"],
        target: "ex_delete",
        description: "Delete lines",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "edit",
        aliases: &["e"],
        target: "ex_edit",
        description: "Edit a file",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "exit",
        aliases: &["exi"],
        target: "ex_exit",
        description: "Write if modified and close the window",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "file",
        aliases: &["f"],
        target: "ex_file",
        description: "Show or set the file name",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "files",
        aliases: &[],
        target: "ex_files",
        description: "List buffers",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "global",
        aliases: &["g"],
        target: "ex_global",
        description: "Run a command on matching lines",
        bar: BarPolicy::Literal,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "help",
        aliases: &["h"],
        target: "ex_help",
        description: "Open help",
        bar: BarPolicy::Literal,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "let",
        aliases: &[],
        target: "ex_let",
        description: "Assign a variable",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "ls",
        aliases: &[],
        target: "ex_ls",
        description: "List buffers",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "map",
        aliases: &[],
        target: "ex_map",
        description: "Recursive mapping (not supported)",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: Some("nnoremap"),
    },
    CommandDescriptor {
        name: "move",
        aliases: &["m"],
        target: "ex_move",
        description: "Move lines",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "new",
        aliases: &[],
        target: "ex_new",
        description: "Open a new window with an empty buffer",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "nmap",
        aliases: &["nm"],
        target: "ex_nmap",
        description: "Recursive normal-mode mapping (not supported)",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: Some("nnoremap"),
    },
    CommandDescriptor {
        name: "nnoremap",
        aliases: &["nn"],
        target: "ex_nnoremap",
        description: "Non-recursive normal-mode mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "noremap",
        aliases: &["no"],
        target: "ex_noremap",
        description: "Non-recursive mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "nunmap",
        aliases: &["nun"],
        target: "ex_nunmap",
        description: "Remove a normal-mode mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "omap",
        aliases: &["om"],
        target: "ex_omap",
        description: "Recursive operator-pending mapping (not supported)",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: Some("onoremap"),
    },
    CommandDescriptor {
        name: "only",
        aliases: &["on"],
        target: "ex_only",
        description: "Close all other windows",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "onoremap",
        aliases: &["ono"],
        target: "ex_onoremap",
        description: "Non-recursive operator-pending mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "ounmap",
        aliases: &["ou"],
        target: "ex_ounmap",
        description: "Remove an operator-pending mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "print",
        aliases: &["p"],
        target: "ex_print",
        description: "Print lines",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "pwd",
        aliases: &["pw"],
        target: "ex_pwd",
        description: "Print the working directory",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "qall",
        aliases: &["qa"],
        target: "ex_qall",
        description: "Quit all windows",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "quit",
        aliases: &["q"],
        target: "ex_quit",
        description: "Close the current window",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "read",
        aliases: &["r"],
        target: "ex_read",
        description: "Insert a file below the cursor",
        bar: BarPolicy::LiteralAfterBang,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "registers",
        aliases: &["reg"],
        target: "ex_registers",
        description: "List registers",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "set",
        aliases: &["se"],
        target: "ex_set",
        description: "Set an option",
        bar: BarPolicy::Separator,
        completion: Completion::Setting,
        use_instead: None,
    },
    CommandDescriptor {
        name: "setlocal",
        aliases: &["setl"],
        target: "ex_setlocal",
        description: "Set a local option",
        bar: BarPolicy::Separator,
        completion: Completion::Setting,
        use_instead: None,
    },
    CommandDescriptor {
        name: "shell",
        aliases: &["sh"],
        target: "ex_shell",
        description: "Start a shell",
        bar: BarPolicy::Literal,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "smap",
        aliases: &[],
        target: "ex_smap",
        description: "Recursive select-mode mapping (not supported)",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: Some("snoremap"),
    },
    CommandDescriptor {
        name: "snoremap",
        aliases: &["snor"],
        target: "ex_snoremap",
        description: "Non-recursive select-mode mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "split",
        aliases: &["sp"],
        target: "ex_split",
        description: "Split the window horizontally",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "substitute",
        aliases: &["s"],
        target: "ex_substitute",
        description: "Substitute matches of a pattern",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tabfirst",
        aliases: &["tabfir"],
        target: "ex_tabfirst",
        description: "Go to the first tab",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tablast",
        aliases: &["tabl"],
        target: "ex_tablast",
        description: "Go to the last tab",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tabnext",
        aliases: &["tabn"],
        target: "ex_tabnext",
        description: "Go to the next tab",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tabonly",
        aliases: &["tabo"],
        target: "ex_tabonly",
        description: "Close all other tabs",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tabprevious",
        aliases: &["tabp"],
        target: "ex_tabprevious",
        description: "Go to the previous tab",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "tabrewind",
        aliases: &["tabr"],
        target: "ex_tabrewind",
        description: "Go to the first tab",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "unabbreviate",
        aliases: &["una"],
        target: "ex_unabbreviate",
        description: "Remove an abbreviation",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "unmap",
        aliases: &["unm"],
        target: "ex_unmap",
        description: "Remove a mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "unvsplit",
        aliases: &["unvs"],
        target: "ex_unvsplit",
        description: "Undo the last vertical split",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "vmap",
        aliases: &["vm"],
        target: "ex_vmap",
        description: "Recursive visual-mode mapping (not supported)",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: Some("vnoremap"),
    },
    CommandDescriptor {
        name: "vnoremap",
        aliases: &["vn"],
        target: "ex_vnoremap",
        description: "Non-recursive visual-mode mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "vsplit",
        aliases: &["vs"],
        target: "ex_vsplit",
        description: "Split the window vertically",
        bar: BarPolicy::Separator,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "vunmap",
        aliases: &["vu"],
        target: "ex_vunmap",
        description: "Remove a visual-mode mapping",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "wall",
        aliases: &["wa"],
        target: "ex_wall",
        description: "Write all changed buffers",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "wq",
        aliases: &[],
        target: "ex_wq",
        description: "Write the file and quit",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "wqall",
        aliases: &["wqa"],
        target: "ex_wqall",
        description: "Write all changed buffers and quit",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "write",
        aliases: &["w"],
        target: "ex_write",
        description: "Write the file",
        bar: BarPolicy::LiteralAfterBang,
        completion: Completion::Path,
        use_instead: None,
    },
    CommandDescriptor {
        name: "xall",
        aliases: &["xa"],
        target: "ex_xall",
        description: "Write changed buffers and quit",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "xit",
        aliases: &["x"],
        target: "ex_xit",
        description: "Write if modified and quit",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
    CommandDescriptor {
        name: "yank",
        aliases: &["y"],
        target: "ex_yank",
        description: "Yank lines into a register",
        bar: BarPolicy::Separator,
        completion: Completion::None,
        use_instead: None,
    },
];
