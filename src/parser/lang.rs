//! Source languages — comment prefix, file extension and highlighter class.

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Canonical name, also the Prism component name
    pub name: &'static str,
    /// Human-readable name used in default page titles
    pub display_name: &'static str,
    /// Extension of the example source file, without the dot
    pub extension: &'static str,
    pub comment_prefix: &'static str,
    /// Prism components that must load before this language's own
    pub requires: &'static [&'static str],
    aliases: &'static [&'static str],
}

impl Language {
    /// Class put on `<code>` elements for the syntax highlighter.
    pub fn highlight_class(&self) -> String {
        format!("language-{}", self.name)
    }
}

/// The companion script of every example is a shell session.
pub const SHELL: Language = Language {
    name: "bash",
    display_name: "Bash",
    extension: "sh",
    comment_prefix: "#",
    requires: &[],
    aliases: &["sh", "shell"],
};

pub const LANGUAGES: &[Language] = &[
    Language {
        name: "csharp",
        display_name: "C#",
        extension: "cs",
        comment_prefix: "//",
        requires: &[],
        aliases: &["c#", "cs"],
    },
    Language {
        name: "rust",
        display_name: "Rust",
        extension: "rs",
        comment_prefix: "//",
        requires: &[],
        aliases: &["rs"],
    },
    Language {
        name: "go",
        display_name: "Go",
        extension: "go",
        comment_prefix: "//",
        requires: &[],
        aliases: &["golang"],
    },
    Language {
        name: "javascript",
        display_name: "JavaScript",
        extension: "js",
        comment_prefix: "//",
        requires: &[],
        aliases: &["js"],
    },
    Language {
        name: "typescript",
        display_name: "TypeScript",
        extension: "ts",
        comment_prefix: "//",
        requires: &[],
        aliases: &["ts"],
    },
    Language {
        name: "java",
        display_name: "Java",
        extension: "java",
        comment_prefix: "//",
        requires: &[],
        aliases: &[],
    },
    Language {
        name: "c",
        display_name: "C",
        extension: "c",
        comment_prefix: "//",
        requires: &[],
        aliases: &[],
    },
    Language {
        name: "cpp",
        display_name: "C++",
        extension: "cpp",
        comment_prefix: "//",
        requires: &["c"],
        aliases: &["c++"],
    },
    Language {
        name: "kotlin",
        display_name: "Kotlin",
        extension: "kt",
        comment_prefix: "//",
        requires: &[],
        aliases: &["kt"],
    },
    Language {
        name: "swift",
        display_name: "Swift",
        extension: "swift",
        comment_prefix: "//",
        requires: &[],
        aliases: &[],
    },
    Language {
        name: "python",
        display_name: "Python",
        extension: "py",
        comment_prefix: "#",
        requires: &[],
        aliases: &["py"],
    },
    Language {
        name: "ruby",
        display_name: "Ruby",
        extension: "rb",
        comment_prefix: "#",
        requires: &[],
        aliases: &["rb"],
    },
    SHELL,
];

/// Look up a language by name or alias, case-insensitively.
pub fn by_name(name: &str) -> Result<Language> {
    let wanted = name.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|l| l.name == wanted || l.aliases.contains(&wanted.as_str()))
        .copied()
        .ok_or_else(|| {
            let names: Vec<&str> = LANGUAGES.iter().map(|l| l.name).collect();
            anyhow!("unknown language: {}. Use one of: {}", name, names.join(", "))
        })
}

/// Look up a language by source file extension (without the dot).
pub fn by_extension(ext: &str) -> Option<Language> {
    LANGUAGES.iter().find(|l| l.extension == ext).copied()
}
