//! Section-scanning state machine.
//!
//! A sar file is a run of tabular sections, each opened by a header line
//! naming its columns and closed by a localized `Average:` line. The scanner
//! walks the lines after the file header, classifies each one against the
//! current state, and applies the transition table in [`transition`]:
//!
//! | state          | line class     | next state     | action          |
//! |----------------|----------------|----------------|-----------------|
//! | any            | `Restart`      | unchanged      | record restart  |
//! | any            | `Header(s)`    | `Capturing(s)` | open a new pass |
//! | `Capturing(_)` | `Sentinel`     | `Idle`         | close section   |
//! | `Capturing(s)` | `Data`         | unchanged      | capture row     |
//! | `Capturing(_)` | `Rejected`     | unchanged      | ignore          |
//! | `Idle`         | anything else  | `Idle`         | ignore          |
//!
//! End of input abandons any open section; no trailing sentinel is needed.

use sg_protocol::Category;

use crate::columns::ColumnIndex;
use crate::normalize;
use crate::types::KernelFamily;

/// Localized "average" sentinels that close a section.
pub const SENTINELS: &[&str] = &[
    "Average:",    // en
    "Среднее:",    // ru
    "Media:",      // it
    "Média:",      // pt
    "Moyenne:",    // fr
    "Durchschn.:", // de
];

// ── Sections ──────────────────────────────────────────────────

/// A capturable sar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cpu,
    /// Standalone `proc/s` section (RHEL 5).
    Processes,
    /// Standalone `cswch/s` section (RHEL 5).
    ContextSwitches,
    /// Shared `proc/s cswch/s` section.
    ProcessesAndContextSwitches,
    PageSwap,
    Load,
    Memory,
    /// Standalone swap section (RHEL 6/7).
    Swap,
    /// Standalone swap section on RHEL 5, where the memory section already
    /// carries the swap columns.
    LegacySwap,
    Filesystem,
    Sockets,
    BlockIo,
}

impl Section {
    /// Dataset categories this section's rows feed.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Self::Cpu => &[Category::Cpu],
            Self::Processes => &[Category::Process],
            Self::ContextSwitches => &[Category::ContextSwitch],
            Self::ProcessesAndContextSwitches => &[Category::Process, Category::ContextSwitch],
            Self::PageSwap => &[Category::PageSwap],
            Self::Load => &[Category::Load],
            Self::Memory => &[Category::Memory],
            Self::Swap | Self::LegacySwap => &[Category::Swap],
            Self::Filesystem => &[Category::Misc],
            Self::Sockets => &[Category::Sockets],
            Self::BlockIo => &[Category::BlockIo],
        }
    }

    /// Whether a data row belongs in this section's accumulator.
    ///
    /// The CPU section also lists one row per core; only the `all` row is kept.
    pub fn accepts<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        match self {
            Self::Cpu => tokens.iter().any(|t| t.as_ref() == "all"),
            _ => true,
        }
    }
}

/// One entry of the prioritized header table.
#[derive(Debug)]
pub struct SectionRule {
    pub section: Section,
    /// Families the rule applies to; empty means every family.
    pub families: &'static [KernelFamily],
    pub keywords: &'static [&'static str],
    /// Require every keyword instead of any one of them.
    pub require_all: bool,
}

impl SectionRule {
    fn matches<S: AsRef<str>>(&self, tokens: &[S], kernel: KernelFamily) -> bool {
        if !self.families.is_empty() && !self.families.contains(&kernel) {
            return false;
        }
        let has = |kw: &&str| tokens.iter().any(|t| t.as_ref() == *kw);
        if self.require_all {
            self.keywords.iter().all(has)
        } else {
            self.keywords.iter().any(has)
        }
    }
}

const fn rule(
    section: Section,
    families: &'static [KernelFamily],
    keywords: &'static [&'static str],
    require_all: bool,
) -> SectionRule {
    SectionRule {
        section,
        families,
        keywords,
        require_all,
    }
}

const ALL: &[KernelFamily] = &[];
const RHEL5: &[KernelFamily] = &[KernelFamily::Rhel5];
const RHEL6_7: &[KernelFamily] = &[KernelFamily::Rhel6, KernelFamily::Rhel7];

/// Header rules, evaluated top to bottom; the first match wins.
///
/// Order matters where predicates overlap: on RHEL 5 the standalone
/// context-switch and process rules shadow the shared one.
pub const SECTION_RULES: &[SectionRule] = &[
    rule(Section::Cpu, ALL, &["%usr", "%user"], false),
    rule(Section::ContextSwitches, RHEL5, &["cswch/s"], false),
    rule(Section::Processes, RHEL5, &["proc/s"], false),
    rule(Section::ProcessesAndContextSwitches, ALL, &["cswch/s", "proc/s"], true),
    rule(Section::PageSwap, ALL, &["pswpin/s"], false),
    rule(Section::Load, ALL, &["ldavg-15"], false),
    rule(Section::Memory, ALL, &["kbmemfree"], false),
    rule(Section::Swap, RHEL6_7, &["kbswpfree"], false),
    rule(Section::LegacySwap, RHEL5, &["kbswpfree"], false),
    rule(Section::Filesystem, ALL, &["dentunusd"], false),
    rule(Section::Sockets, ALL, &["tcpsck"], false),
    rule(Section::BlockIo, ALL, &["bread/s"], false),
];

/// Section whose header `tokens` form, if any.
pub fn match_header<S: AsRef<str>>(tokens: &[S], kernel: KernelFamily) -> Option<Section> {
    SECTION_RULES
        .iter()
        .find(|r| r.matches(tokens, kernel))
        .map(|r| r.section)
}

pub fn is_sentinel<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|t| SENTINELS.contains(&t.as_ref()))
}

pub fn is_restart<S: AsRef<str>>(tokens: &[S]) -> bool {
    let has = |kw: &str| tokens.iter().any(|t| t.as_ref() == kw);
    has("LINUX") && has("RESTART")
}

// ── State machine ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Outside any recognized section.
    #[default]
    Idle,
    Capturing(Section),
}

/// How a line reads, given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Header(Section),
    Restart,
    Sentinel,
    Data,
    /// A row inside a section that the section filters out.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ignore,
    RecordRestart,
    Open(Section),
    Close,
    Capture(Section),
}

/// Classify a tokenized, non-blank line.
pub fn classify<S: AsRef<str>>(state: ScanState, tokens: &[S], kernel: KernelFamily) -> LineClass {
    if is_restart(tokens) {
        return LineClass::Restart;
    }
    if let Some(section) = match_header(tokens, kernel) {
        return LineClass::Header(section);
    }
    match state {
        ScanState::Idle => LineClass::Data,
        ScanState::Capturing(_) if is_sentinel(tokens) => LineClass::Sentinel,
        ScanState::Capturing(section) if !section.accepts(tokens) => LineClass::Rejected,
        ScanState::Capturing(_) => LineClass::Data,
    }
}

/// The transition table.
pub fn transition(state: ScanState, class: LineClass) -> (ScanState, Action) {
    match (state, class) {
        (_, LineClass::Restart) => (state, Action::RecordRestart),
        (_, LineClass::Header(s)) => (ScanState::Capturing(s), Action::Open(s)),
        (ScanState::Capturing(_), LineClass::Sentinel) => (ScanState::Idle, Action::Close),
        (ScanState::Capturing(s), LineClass::Data) => (state, Action::Capture(s)),
        (ScanState::Capturing(_), LineClass::Rejected) => (state, Action::Ignore),
        (ScanState::Idle, _) => (ScanState::Idle, Action::Ignore),
    }
}

// ── Captured output ───────────────────────────────────────────

/// A normalized data row and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRow {
    pub line: usize,
    pub tokens: Vec<String>,
}

/// Rows captured between one header line and the end of its section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPass {
    pub section: Section,
    /// Built from this pass's own header only.
    pub columns: ColumnIndex,
    pub header_line: usize,
    pub rows: Vec<CapturedRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestartMarker {
    pub line: usize,
    pub time: String,
}

/// Everything the scanner collected from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capture {
    pub passes: Vec<SectionPass>,
    pub restarts: Vec<RestartMarker>,
}

impl Capture {
    /// Passes feeding `category`, in file order.
    pub fn passes_for(&self, category: Category) -> impl Iterator<Item = &SectionPass> {
        self.passes
            .iter()
            .filter(move |p| p.section.categories().contains(&category))
    }

    pub fn row_count(&self, category: Category) -> usize {
        self.passes_for(category).map(|p| p.rows.len()).sum()
    }
}

/// Line scanner for the body of one sar file.
#[derive(Debug)]
pub struct Scanner {
    kernel: KernelFamily,
    state: ScanState,
    capture: Capture,
}

impl Scanner {
    pub fn new(kernel: KernelFamily) -> Self {
        Self {
            kernel,
            state: ScanState::Idle,
            capture: Capture::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Feed one raw line; `line` is its 1-based position in the file.
    pub fn feed(&mut self, line: usize, raw: &str) {
        let tokens = normalize::tokenize(raw);
        if tokens.is_empty() {
            return;
        }

        let class = classify(self.state, &tokens, self.kernel);
        let (next, action) = transition(self.state, class);

        match action {
            Action::Ignore => {}
            Action::RecordRestart => {
                tracing::debug!(line, time = %tokens[0], "restart marker");
                self.capture.restarts.push(RestartMarker {
                    line,
                    time: tokens[0].clone(),
                });
            }
            Action::Open(section) => {
                tracing::debug!(line, ?section, "section opened");
                self.capture.passes.push(SectionPass {
                    section,
                    columns: ColumnIndex::from_header(&tokens),
                    header_line: line,
                    rows: Vec::new(),
                });
            }
            Action::Close => {
                tracing::debug!(line, state = ?self.state, "section closed");
            }
            Action::Capture(_) => {
                if let Some(pass) = self.capture.passes.last_mut() {
                    pass.rows.push(CapturedRow { line, tokens });
                }
            }
        }
        self.state = next;
    }

    pub fn finish(self) -> Capture {
        if let ScanState::Capturing(section) = self.state {
            tracing::debug!(?section, "section left open at end of file");
        }
        self.capture
    }
}

/// Scan body lines numbered from `first_line`.
pub fn scan<'a>(
    kernel: KernelFamily,
    first_line: usize,
    lines: impl IntoIterator<Item = &'a str>,
) -> Capture {
    let mut scanner = Scanner::new(kernel);
    for (offset, raw) in lines.into_iter().enumerate() {
        scanner.feed(first_line + offset, raw);
    }
    scanner.finish()
}
