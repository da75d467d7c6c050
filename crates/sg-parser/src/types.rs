//! Core sar parsing types: kernel families and the parsed file header.

use serde::{Deserialize, Serialize};

// ── Kernel Family ─────────────────────────────────────────────

/// Kernel/distribution generation a sar file was recorded on.
///
/// Each generation names some columns differently (`%user` vs `%usr`,
/// `file-sz` vs `file-nr`) and lays out the swap and process sections
/// differently, so the scanner and the assembler both branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelFamily {
    /// 2.6.18 kernels (RHEL 5).
    Rhel5,
    /// 2.6.32 kernels (RHEL 6).
    Rhel6,
    /// 3.10 kernels (RHEL 7).
    Rhel7,
}

/// Kernel version fingerprints, tested in order against the header line.
pub const KERNEL_FINGERPRINTS: &[(&str, KernelFamily)] = &[
    ("2.6.18", KernelFamily::Rhel5),
    ("2.6.32", KernelFamily::Rhel6),
    ("3.10", KernelFamily::Rhel7),
];

impl KernelFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rhel5 => "rhel5",
            Self::Rhel6 => "rhel6",
            Self::Rhel7 => "rhel7",
        }
    }

    /// Classify a header line by the first fingerprint it contains.
    pub fn detect(header: &str) -> Option<Self> {
        KERNEL_FINGERPRINTS
            .iter()
            .find(|(fingerprint, _)| header.contains(fingerprint))
            .map(|(_, family)| *family)
    }

    /// Whether the memory section carries the swap columns too.
    pub fn swap_in_memory_section(&self) -> bool {
        matches!(self, Self::Rhel5)
    }
}

impl std::fmt::Display for KernelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Log Header ────────────────────────────────────────────────

/// Fields extracted from the first line of a sar file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogHeader {
    pub hostname: String,
    /// `"N CPU"` label, empty when the header carries none.
    pub cpu_count: String,
    pub kernel: KernelFamily,
    /// Normalized `yy-mm-dd` date.
    pub date: String,
}
