//! Rendering records and the fixed sample report.
//!
//! [`write_sample_report`] exercises the tokenizer and the path type over a
//! fixed set of inputs and writes a plain-text log, suitable for diffing
//! across platforms. [`PathRendering`] and [`JoinRendering`] are the
//! per-item records behind the CLI's human and JSON output.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::path::{convert_to_msw, Platform, UniPath};
use crate::tokenizer::{Assignment, Tokenizer, LINE_DELIMITERS};

/// Single-line assignment inputs.
///
/// The table ends in a `None` entry, which still produces a line in the
/// report: an empty one.
pub const SAMPLE_ASSIGNMENTS: &[Option<&str>] = &[
    Some(""),
    Some("--lvalue=rvalue1"),
    Some("--lvalue=rvalue1,revalue2"),
    Some("--lvalue=rvalue1,revalue2,three"),
    Some("--lvalue = rvalue1, rvalue2"),
    Some("--lvalue\t=\trvalue1,\trevalue2"),
    Some("--lvalue="),
    Some("--lvalue"),
    Some(" --lvalue = はい。 , はい。, おはようございます"),
    Some(" --値 = はい。 , はい。, おはようございます"),
    None,
];

/// Multi-line assignment document mixing `\n`, `\r\n`, and a blank line.
pub const SAMPLE_DOCUMENT: &str = "LVALUE = RVALUE\n\
                                   LVALUE2 = RVALUE(DOS)\r\n\
                                   LINE3 = RVALUE(multiline)\n\n\
                                   LINE4 = FINISHED\n";

/// Absolute path inputs (plus a few near-misses such as `c`).
pub const ABSOLUTE_SAMPLES: &[&str] = &[
    "/c/",
    "/c/one",
    "/c/one",
    "/c/one\\two\\three",
    "/c/one\\..\\one\\two\\three",
    "/c/one\\../one/two\\three",
    "/c/one/two\\three",
    "/dev/null",
    "c",
    "c:",
    "c:\\",
    "c:/",
    "c:\\one",
    "c:\\one\\",
    "c:/one",
    "c:/one/",
    "c:\\one two",
    "c:\\one\\two\\three",
    "c:\\one two\\three",
    "c:\\one\\..\\one\\two\\three",
    "c:\\one\\../one/two\\three",
    "c:/one/two\\three",
];

/// Relative path inputs.
pub const RELATIVE_SAMPLES: &[&str] = &[
    "ex",
    "./ex",
    "./ex/",
    "../ex",
    "ex/why",
    "ex/why/",
    "./ex/!why/",
    "../ex/!why/zee",
    "ex !why/zee",
    "./ex !why/zee",
    "./ex why/zee",
];

const RULE: &str = "--------------------------------------";

/// How one input path renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRendering {
    /// The raw input text.
    pub input: String,
    /// Portable rendering.
    pub uni: String,
    /// Windows rendering.
    pub msw: String,
    /// Native rendering, for the forced platform if one was given.
    pub native: String,
}

impl PathRendering {
    /// Render `input`, using `platform` for the native column when given and
    /// the path's own platform otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::report::PathRendering;
    ///
    /// let rendering = PathRendering::new("/c/one", None);
    /// assert_eq!(rendering.uni, "/c/one");
    /// assert_eq!(rendering.msw, "c:\\one");
    /// assert_eq!(rendering.native, "c:\\one");
    /// ```
    #[must_use]
    pub fn new(input: &str, platform: Option<Platform>) -> Self {
        let path = UniPath::parse(input);
        Self {
            input: input.to_string(),
            uni: path.uni_string(),
            msw: convert_to_msw(input),
            native: native_for(&path, platform),
        }
    }

    /// Write the `input/uni/msw/native` block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "input  = {}", self.input)?;
        writeln!(out, "uni    = {}", self.uni)?;
        writeln!(out, "msw    = {}", self.msw)?;
        writeln!(out, "native = {}", self.native)
    }
}

/// How the concatenation of several inputs renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinRendering {
    /// The raw inputs, in join order.
    pub inputs: Vec<String>,
    /// Portable rendering of the result.
    pub uni: String,
    /// Native rendering of the result.
    pub native: String,
}

impl JoinRendering {
    /// Join `inputs` left to right and render the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use crosspath::report::JoinRendering;
    ///
    /// let rendering = JoinRendering::new(&["c:\\one", "../two/"], None);
    /// assert_eq!(rendering.uni, "/c/two/");
    /// assert_eq!(rendering.native, "c:\\two\\");
    /// ```
    #[must_use]
    pub fn new<S: AsRef<str>>(inputs: &[S], platform: Option<Platform>) -> Self {
        let joined = inputs
            .iter()
            .fold(UniPath::default(), |acc, input| acc / input.as_ref());
        Self {
            inputs: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
            uni: joined.uni_string(),
            native: native_for(&joined, platform),
        }
    }

    /// Write the `inputA/inputB/.../uni/native` block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (index, input) in self.inputs.iter().enumerate() {
            writeln!(out, "input{} = {input}", input_label(index))?;
        }
        writeln!(out, "uni    = {}", self.uni)?;
        writeln!(out, "native = {}", self.native)
    }
}

/// Serialize renderings as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize>(renderings: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(renderings)?)
}

/// Write the full sample report to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
///
/// # Examples
///
/// ```
/// let mut buffer = Vec::new();
/// crosspath::report::write_sample_report(&mut buffer).unwrap();
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("TEST:TOKENIZER:SINGLINE\n"));
/// assert!(text.ends_with("END OF TEST LOG\n"));
/// ```
pub fn write_sample_report<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "TEST:TOKENIZER:SINGLINE")?;
    for line in SAMPLE_ASSIGNMENTS {
        if let Some(assignment) = line.and_then(Assignment::parse) {
            write!(out, "{assignment}")?;
        }
        writeln!(out)?;
    }

    section(out, "TEST:TOKENIZER:MULTILINE")?;
    let mut lines = Tokenizer::new(SAMPLE_DOCUMENT);
    while let Some(line) = lines.next_token(LINE_DELIMITERS) {
        if let Some(assignment) = Assignment::parse(line) {
            writeln!(out, "{assignment}")?;
        }
    }

    section(out, "TEST:FILESYSTEM:ABSOLUTE")?;
    for input in ABSOLUTE_SAMPLES {
        PathRendering::new(input, None).write_human(out)?;
        writeln!(out)?;
    }

    let cross_products = [
        ("TEST:FILESYSTEM:ABSOLUTE_CONCAT_ABS", ABSOLUTE_SAMPLES, ABSOLUTE_SAMPLES),
        ("TEST:FILESYSTEM:ABSOLUTE_CONCAT_REL", ABSOLUTE_SAMPLES, RELATIVE_SAMPLES),
        ("TEST:FILESYSTEM:REL_CONCAT_ABS", RELATIVE_SAMPLES, ABSOLUTE_SAMPLES),
        ("TEST:FILESYSTEM:REL_CONCAT_REL", RELATIVE_SAMPLES, RELATIVE_SAMPLES),
    ];
    for (title, lhs, rhs) in cross_products {
        section(out, title)?;
        for a in lhs {
            for b in rhs {
                JoinRendering::new(&[*a, *b], None).write_human(out)?;
                writeln!(out)?;
            }
        }
    }

    writeln!(out, "{RULE}")?;
    writeln!(out, "END OF TEST LOG")?;
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")
}

fn native_for(path: &UniPath, platform: Option<Platform>) -> String {
    match platform {
        Some(platform) => path.render(platform),
        None => path.native_string(),
    }
}

fn input_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => format!("{index}"),
    }
}
