use serde::{Deserialize, Serialize};

/// Metric category, one per chart group a renderer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cpu,
    Process,
    ContextSwitch,
    Load,
    Memory,
    Swap,
    PageSwap,
    Misc,
    Sockets,
    BlockIo,
}

impl Category {
    /// Chart groups in the order a renderer lays them out.
    pub const ALL: [Category; 10] = [
        Self::Cpu,
        Self::Process,
        Self::ContextSwitch,
        Self::Load,
        Self::Memory,
        Self::Swap,
        Self::PageSwap,
        Self::Misc,
        Self::Sockets,
        Self::BlockIo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Process => "process",
            Self::ContextSwitch => "context_switch",
            Self::Load => "load",
            Self::Memory => "memory",
            Self::Swap => "swap",
            Self::PageSwap => "page_swap",
            Self::Misc => "misc",
            Self::Sockets => "sockets",
            Self::BlockIo => "block_io",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single plotted series.
///
/// Declaration order is the order renderers list legends in, and the
/// order `DaySeries::series` iterates in (`#[derive(Ord)]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CpuUser,
    CpuNice,
    CpuSystem,
    CpuIowait,
    CpuIdle,
    ProcessesPerSec,
    ContextSwitchesPerSec,
    RunQueue,
    ProcessList,
    LoadAvg1,
    LoadAvg5,
    LoadAvg15,
    MemFree,
    MemUsed,
    MemCached,
    SwapFree,
    SwapUsed,
    PageSwapIn,
    PageSwapOut,
    DentryUnused,
    FileHandles,
    Inodes,
    TcpSockets,
    UdpSockets,
    BlocksRead,
    BlocksWritten,
}

impl Metric {
    pub const ALL: [Metric; 26] = [
        Self::CpuUser,
        Self::CpuNice,
        Self::CpuSystem,
        Self::CpuIowait,
        Self::CpuIdle,
        Self::ProcessesPerSec,
        Self::ContextSwitchesPerSec,
        Self::RunQueue,
        Self::ProcessList,
        Self::LoadAvg1,
        Self::LoadAvg5,
        Self::LoadAvg15,
        Self::MemFree,
        Self::MemUsed,
        Self::MemCached,
        Self::SwapFree,
        Self::SwapUsed,
        Self::PageSwapIn,
        Self::PageSwapOut,
        Self::DentryUnused,
        Self::FileHandles,
        Self::Inodes,
        Self::TcpSockets,
        Self::UdpSockets,
        Self::BlocksRead,
        Self::BlocksWritten,
    ];

    pub fn category(&self) -> Category {
        match self {
            Self::CpuUser | Self::CpuNice | Self::CpuSystem | Self::CpuIowait | Self::CpuIdle => {
                Category::Cpu
            }
            Self::ProcessesPerSec => Category::Process,
            Self::ContextSwitchesPerSec => Category::ContextSwitch,
            Self::RunQueue
            | Self::ProcessList
            | Self::LoadAvg1
            | Self::LoadAvg5
            | Self::LoadAvg15 => Category::Load,
            Self::MemFree | Self::MemUsed | Self::MemCached => Category::Memory,
            Self::SwapFree | Self::SwapUsed => Category::Swap,
            Self::PageSwapIn | Self::PageSwapOut => Category::PageSwap,
            Self::DentryUnused | Self::FileHandles | Self::Inodes => Category::Misc,
            Self::TcpSockets | Self::UdpSockets => Category::Sockets,
            Self::BlocksRead | Self::BlocksWritten => Category::BlockIo,
        }
    }

    /// Legend label, as sar itself names the column on current kernels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CpuUser => "%user",
            Self::CpuNice => "%nice",
            Self::CpuSystem => "%system",
            Self::CpuIowait => "%iowait",
            Self::CpuIdle => "%idle",
            Self::ProcessesPerSec => "proc/s",
            Self::ContextSwitchesPerSec => "cswch/s",
            Self::RunQueue => "runq-sz",
            Self::ProcessList => "plist-sz",
            Self::LoadAvg1 => "ldavg-1",
            Self::LoadAvg5 => "ldavg-5",
            Self::LoadAvg15 => "ldavg-15",
            Self::MemFree => "kbmemfree",
            Self::MemUsed => "kbmemused",
            Self::MemCached => "kbcached",
            Self::SwapFree => "kbswpfree",
            Self::SwapUsed => "kbswpused",
            Self::PageSwapIn => "pswpin/s",
            Self::PageSwapOut => "pswpout/s",
            Self::DentryUnused => "dentunusd",
            Self::FileHandles => "file-nr",
            Self::Inodes => "inode-nr",
            Self::TcpSockets => "tcpsck",
            Self::UdpSockets => "udpsck",
            Self::BlocksRead => "bread/s",
            Self::BlocksWritten => "bwrtn/s",
        }
    }

    /// All metrics belonging to `category`, in declaration order.
    pub fn in_category(category: Category) -> impl Iterator<Item = Metric> {
        Self::ALL
            .into_iter()
            .filter(move |m| m.category() == category)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
